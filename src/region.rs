use crate::{block::{BlockRecord, BlockTable}, error::Error, graph::Graph};

/// A set of leaf blocks together with their contiguity graph.
///
/// Built once at load time and read-only afterwards; plans reference it by
/// `Arc` and only ever mutate their own assignment state.
#[derive(Clone, Debug)]
pub struct Region {
    blocks: BlockTable,
    graph: Graph,
}

impl Region {
    /// Construct a region from block records and an adjacency relation given
    /// as pairs of external block ids.
    ///
    /// Edges are symmetrized: each input pair produces both directions, no
    /// matter which orientation(s) the source tables carried. An edge naming
    /// an unknown block id, or both endpoints equal, is malformed input.
    pub fn new(records: &[BlockRecord], edges: &[(i64, i64)]) -> Result<Self, Error> {
        let blocks = BlockTable::new(records)?;

        let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); blocks.len()];
        for &(a, b) in edges {
            let u = blocks.node(a).ok_or_else(|| {
                Error::MalformedInput(format!("adjacency references unknown block id {a}"))
            })?;
            let v = blocks.node(b).ok_or_else(|| {
                Error::MalformedInput(format!("adjacency references unknown block id {b}"))
            })?;
            if u == v {
                return Err(Error::MalformedInput(format!("self-edge on block id {a}")));
            }
            adjacency[u].push(v as u32);
            adjacency[v].push(u as u32);
        }
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }

        let graph = Graph::new(blocks.len(), &adjacency);
        Ok(Self { blocks, graph })
    }

    /// Get the block registry.
    #[inline]
    pub fn blocks(&self) -> &BlockTable {
        &self.blocks
    }

    /// Get the contiguity graph.
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Get the number of blocks in the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check whether the region holds no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, population: f64, democrats: f64) -> BlockRecord {
        BlockRecord { id, population, democrats }
    }

    #[test]
    fn symmetrizes_directed_edges() {
        // Edges only given in one direction, with one duplicate.
        let region = Region::new(
            &[record(1, 10.0, 5.0), record(2, 10.0, 5.0), record(3, 10.0, 5.0)],
            &[(1, 2), (2, 3), (3, 2)],
        )
        .unwrap();

        let graph = region.graph();
        assert!(graph.contains_edge(0, 1) && graph.contains_edge(1, 0));
        assert!(graph.contains_edge(1, 2) && graph.contains_edge(2, 1));
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn rejects_dangling_edge() {
        let result = Region::new(&[record(1, 10.0, 5.0)], &[(1, 7)]);
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn rejects_self_edge() {
        let result = Region::new(&[record(1, 10.0, 5.0)], &[(1, 1)]);
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }
}
