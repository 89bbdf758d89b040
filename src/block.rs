use ahash::AHashMap;

use crate::error::Error;

/// A single leaf block as read from the demographic table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockRecord {
    pub id: i64,
    pub population: f64,
    pub democrats: f64,
}

/// Registry of leaf-block demographics, stored as parallel columns indexed
/// by dense node index. Immutable once constructed.
#[derive(Clone, Debug, Default)]
pub struct BlockTable {
    ids: Vec<i64>,
    population: Vec<f64>,
    democrats: Vec<f64>,
    index: AHashMap<i64, usize>,
}

impl BlockTable {
    /// Build the registry from block records, assigning dense node indices
    /// in input order.
    pub fn new(records: &[BlockRecord]) -> Result<Self, Error> {
        let mut table = Self {
            ids: Vec::with_capacity(records.len()),
            population: Vec::with_capacity(records.len()),
            democrats: Vec::with_capacity(records.len()),
            index: AHashMap::with_capacity(records.len()),
        };

        for record in records {
            if record.population < 0.0 || record.democrats < 0.0 {
                return Err(Error::MalformedInput(format!(
                    "block {} has negative demographics (population {}, democrats {})",
                    record.id, record.population, record.democrats
                )));
            }
            if record.democrats > record.population {
                return Err(Error::MalformedInput(format!(
                    "block {} has more democrats ({}) than population ({})",
                    record.id, record.democrats, record.population
                )));
            }
            if table.index.insert(record.id, table.ids.len()).is_some() {
                return Err(Error::MalformedInput(format!("duplicate block id {}", record.id)));
            }
            table.ids.push(record.id);
            table.population.push(record.population);
            table.democrats.push(record.democrats);
        }

        Ok(table)
    }

    /// Get the number of blocks in the registry.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether the registry holds no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Get the external id of a node.
    #[inline]
    pub fn id(&self, node: usize) -> i64 {
        self.ids[node]
    }

    /// Look up the dense node index for an external block id.
    #[inline]
    pub fn node(&self, id: i64) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Get the population of a node.
    #[inline]
    pub fn population(&self, node: usize) -> f64 {
        self.population[node]
    }

    /// Get the democrat count of a node.
    #[inline]
    pub fn democrats(&self, node: usize) -> f64 {
        self.democrats[node]
    }

    /// Total population across all blocks.
    #[inline]
    pub fn total_population(&self) -> f64 {
        self.population.iter().sum()
    }
}
