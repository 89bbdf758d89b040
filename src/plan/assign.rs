use std::sync::Arc;

use crate::{error::Error, party::Party, plan::Plan, region::Region};

impl Plan {
    /// Build an initial plan by greedy packing/cracking.
    ///
    /// Blocks are sorted descending by favorability to `party` (ties broken
    /// by ascending block id) and each is assigned to the first district, in
    /// ascending id order, that stays within the population target and is
    /// either empty or adjacent to the block. Filling districts with the most
    /// favorable blocks first concentrates the favored party's surplus in
    /// packed districts and spreads the remainder thin across the rest.
    ///
    /// Blocks that fit no district are left unassigned; see
    /// [`Plan::unassigned`]. That is an expected outcome of the heuristic,
    /// not an error.
    pub fn pack(region: Arc<Region>, num_districts: u32, party: Party) -> Result<Self, Error> {
        let mut plan = Self::new(region.clone(), num_districts)?;

        let blocks = region.blocks();
        let scores = (0..blocks.len())
            .map(|node| party.favorability(blocks.population(node), blocks.democrats(node)))
            .collect::<Vec<_>>();

        // Sort blocks descending by score, ascending by id on ties.
        let mut order = (0..blocks.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| {
            scores[b].total_cmp(&scores[a]).then(blocks.id(a).cmp(&blocks.id(b)))
        });

        for node in order {
            let population = plan.region.blocks().population(node);
            let candidate = (0..num_districts).find(|&district| {
                plan.district_population(district) + population <= plan.target_population
                    && (plan.district_is_empty(district) || plan.borders_district(node, district))
            });
            if let Some(district) = candidate {
                plan.assign(node, district);
            }
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{block::BlockRecord, party::Party, plan::Plan, region::Region};

    fn path_region(populations: &[f64], democrats: &[f64]) -> Arc<Region> {
        let records = populations.iter().zip(democrats.iter()).enumerate()
            .map(|(i, (&population, &democrats))| BlockRecord {
                id: i as i64 + 1,
                population,
                democrats,
            })
            .collect::<Vec<_>>();
        let edges = (1..populations.len() as i64)
            .map(|id| (id, id + 1))
            .collect::<Vec<_>>();
        Arc::new(Region::new(&records, &edges).unwrap())
    }

    #[test]
    fn packs_path_graph_as_hand_traced() {
        // Path 1 - 2 - 3 - 4, equal populations, partisan ends.
        let region = path_region(&[10.0, 10.0, 10.0, 10.0], &[8.0, 2.0, 2.0, 8.0]);
        let plan = Plan::pack(region, 2, Party::Democratic).unwrap();

        // Sorted order is [1 (0.8), 4 (0.8), 2 (0.2), 3 (0.2)], target = 20:
        // block 1 seeds district 0; block 4 is not adjacent to district 0 so
        // it seeds district 1; block 2 joins 1; block 3 joins 4.
        assert_eq!(plan.target_population(), 20.0);
        assert_eq!(plan.district_blocks(0), vec![1, 2]);
        assert_eq!(plan.district_blocks(1), vec![4, 3]);
        assert!(plan.unassigned().is_empty());
        assert!(plan.check_contiguity());
    }

    #[test]
    fn every_block_assigned_exactly_once_or_reported() {
        let region = path_region(&[10.0, 15.0, 5.0, 10.0, 20.0], &[9.0, 3.0, 5.0, 1.0, 10.0]);
        let plan = Plan::pack(region.clone(), 3, Party::Republican).unwrap();

        let mut seen = vec![0usize; region.len()];
        for district in 0..plan.num_districts() {
            for id in plan.district_blocks(district) {
                seen[region.blocks().node(id).unwrap()] += 1;
            }
        }
        for id in plan.unassigned() {
            seen[region.blocks().node(id).unwrap()] += 1;
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn population_is_conserved() {
        let region = path_region(&[10.0, 15.0, 5.0, 10.0, 20.0], &[9.0, 3.0, 5.0, 1.0, 10.0]);
        let plan = Plan::pack(region.clone(), 3, Party::Democratic).unwrap();

        let assigned = (0..plan.num_districts())
            .map(|district| plan.district_population(district))
            .sum::<f64>();
        let unassigned = plan.unassigned().iter()
            .map(|&id| region.blocks().population(region.blocks().node(id).unwrap()))
            .sum::<f64>();
        assert!((assigned + unassigned - region.blocks().total_population()).abs() < 1e-9);
    }

    #[test]
    fn disconnected_block_seeds_an_empty_district() {
        // Blocks 1 - 2 form a path; block 3 has no adjacencies at all but the
        // highest favorability, so it is placed first and seeds district 0.
        let region = Arc::new(Region::new(
            &[
                BlockRecord { id: 1, population: 10.0, democrats: 5.0 },
                BlockRecord { id: 2, population: 10.0, democrats: 5.0 },
                BlockRecord { id: 3, population: 10.0, democrats: 10.0 },
            ],
            &[(1, 2)],
        ).unwrap());
        let plan = Plan::pack(region, 2, Party::Democratic).unwrap();

        assert_eq!(plan.district_blocks(0), vec![3]);
        assert_eq!(plan.assignment(0), Some(1));
        assert!(!plan.unassigned().contains(&3));
    }

    #[test]
    fn oversized_block_is_reported_unassigned() {
        // Block 2 alone exceeds the per-district target of 15.
        let region = path_region(&[10.0, 20.0], &[10.0, 0.0]);
        let plan = Plan::pack(region, 2, Party::Democratic).unwrap();

        assert_eq!(plan.unassigned(), vec![2]);
        assert_eq!(plan.district_blocks(0), vec![1]);
    }
}
