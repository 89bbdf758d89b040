use std::sync::Arc;

use crate::{error::Error, region::Region};

/// A district's member blocks plus cached aggregates, kept consistent with
/// the plan's assignment vector by `assign`/`unassign`.
#[derive(Clone, Debug, Default)]
pub(super) struct District {
    pub(super) blocks: Vec<usize>, // node indices, in assignment order
    pub(super) population: f64,
    pub(super) democrats: f64,
}

/// A districting plan: the (partial) partition of a region's blocks into
/// districts `0..num_districts`.
///
/// Districts are created empty and mutated only through the atomic
/// assign/unassign operations, so block sets and aggregates never drift
/// apart. A block not assigned to any district is a valid, reportable state.
#[derive(Clone, Debug)]
pub struct Plan {
    pub(super) region: Arc<Region>,
    pub(super) num_districts: u32,
    pub(super) target_population: f64,
    pub(super) assignments: Vec<Option<u32>>,
    pub(super) districts: Vec<District>,
}

impl Plan {
    /// Create an empty plan over a region with a set number of districts.
    pub fn new(region: Arc<Region>, num_districts: u32) -> Result<Self, Error> {
        if num_districts == 0 {
            return Err(Error::InvalidDistrictCount(num_districts));
        }

        let target_population = region.blocks().total_population() / num_districts as f64;
        Ok(Self {
            assignments: vec![None; region.len()],
            districts: (0..num_districts).map(|_| District::default()).collect(),
            num_districts,
            target_population,
            region,
        })
    }

    /// Get the number of districts in this plan.
    #[inline]
    pub fn num_districts(&self) -> u32 {
        self.num_districts
    }

    /// Get the ideal district population (`total / num_districts`).
    #[inline]
    pub fn target_population(&self) -> f64 {
        self.target_population
    }

    /// Get the underlying region.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Get the district a node is assigned to, if any.
    #[inline]
    pub fn assignment(&self, node: usize) -> Option<u32> {
        self.assignments[node]
    }

    /// Get the aggregate population of a district.
    #[inline]
    pub fn district_population(&self, district: u32) -> f64 {
        self.districts[district as usize].population
    }

    /// Get the aggregate democrat count of a district.
    #[inline]
    pub fn district_democrats(&self, district: u32) -> f64 {
        self.districts[district as usize].democrats
    }

    /// Get the number of blocks in a district.
    #[inline]
    pub fn district_size(&self, district: u32) -> usize {
        self.districts[district as usize].blocks.len()
    }

    /// Get a district's block ids, in assignment order.
    pub fn district_blocks(&self, district: u32) -> Vec<i64> {
        self.districts[district as usize].blocks.iter()
            .map(|&node| self.region.blocks().id(node))
            .collect()
    }

    /// Get the ids of all blocks not assigned to any district, ascending.
    pub fn unassigned(&self) -> Vec<i64> {
        let mut ids = self.assignments.iter().enumerate()
            .filter(|(_, assignment)| assignment.is_none())
            .map(|(node, _)| self.region.blocks().id(node))
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    /// Check whether a node is adjacent to at least one block of a district.
    #[inline]
    pub(super) fn borders_district(&self, node: usize, district: u32) -> bool {
        self.region.graph().edges(node)
            .any(|v| self.assignments[v] == Some(district))
    }

    /// Assign an unassigned node to a district, updating the district's block
    /// set and aggregates as one atomic step.
    pub(super) fn assign(&mut self, node: usize, district: u32) {
        assert!(district < self.num_districts, "district {} out of range [0, {})", district, self.num_districts);
        assert!(self.assignments[node].is_none(), "node {} is already assigned", node);

        self.assignments[node] = Some(district);
        let d = &mut self.districts[district as usize];
        d.blocks.push(node);
        d.population += self.region.blocks().population(node);
        d.democrats += self.region.blocks().democrats(node);
    }

    /// Remove a node from its district, returning the district it was in.
    pub(super) fn unassign(&mut self, node: usize) -> u32 {
        assert!(self.assignments[node].is_some(), "node {} is not assigned", node);

        let district = self.assignments[node].take().unwrap();
        let d = &mut self.districts[district as usize];
        let i = d.blocks.iter().position(|&u| u == node).unwrap();
        d.blocks.remove(i);
        d.population -= self.region.blocks().population(node);
        d.democrats -= self.region.blocks().democrats(node);
        district
    }
}
