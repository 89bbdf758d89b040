/// An unweighted, undirected graph in compressed sparse row format.
///
/// Neighbor lists are sorted ascending, so every traversal over the graph is
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    size: usize,
    offsets: Vec<u32>,
    edges: Vec<u32>,
}

impl Graph {
    /// Construct a graph from per-node adjacency lists.
    ///
    /// Lists are expected to already be symmetric (if `b` appears in `a`'s
    /// list, `a` appears in `b`'s), sorted, and free of duplicates; `Region`
    /// guarantees this on load.
    pub(crate) fn new(num_nodes: usize, edges: &[Vec<u32>]) -> Self {
        assert!(edges.len() == num_nodes, "edges.len() must equal num_nodes");
        edges.iter().enumerate().for_each(|(i, list)| {
            assert!(list.windows(2).all(|w| w[0] < w[1]), "edges[{i}] must be sorted and deduplicated");
            assert!(list.iter().all(|&v| (v as usize) < num_nodes), "edges[{i}] contains an out-of-range node");
        });

        Self {
            size: num_nodes,
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| { *acc += len; Some(*acc) })
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().copied().collect(),
        }
    }

    /// Get the number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.size
    }

    /// Get the number of directed edge entries (twice the undirected count).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the range of edge entries for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize..self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        self.range(node).len()
    }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |i| self.edges[i] as usize)
    }

    /// Check whether two nodes are adjacent.
    #[inline]
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        let i = self.range(a);
        self.edges[i].binary_search(&(b as u32)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        // Path 0 - 1 - 2 - 3 plus chord 0 - 2.
        Graph::new(
            4,
            &[
                vec![1, 2],    // 0
                vec![0, 2],    // 1
                vec![0, 1, 3], // 2
                vec![2],       // 3
            ],
        )
    }

    #[test]
    fn csr_graph_construction() {
        let graph = make_test_graph();

        // Basic counts
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 8);

        // Offsets are cumulative neighbor counts, len = nodes + 1
        assert_eq!(graph.offsets.len(), graph.node_count() + 1);
        assert_eq!(graph.offsets, vec![0, 2, 4, 7, 8]);

        // Flattened neighbor list is in insertion order
        assert_eq!(graph.edges, vec![1, 2, 0, 2, 0, 1, 3, 2]);

        // CSR invariant: last offset == total edge entries
        assert_eq!(*graph.offsets.last().unwrap() as usize, graph.edges.len());

        // Offsets must be non-decreasing
        for window in graph.offsets.windows(2) {
            assert!(window[0] <= window[1])
        }
    }

    #[test]
    fn degree_and_edges_match() {
        let graph = make_test_graph();

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(3), 1);
        assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(graph.edges(3).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn contains_edge_is_symmetric() {
        let graph = make_test_graph();

        assert!(graph.contains_edge(0, 2));
        assert!(graph.contains_edge(2, 0));
        assert!(!graph.contains_edge(0, 3));
        assert!(!graph.contains_edge(3, 0));
    }

    #[test]
    fn empty_graph_has_no_edges() {
        let graph = Graph::new(3, &[vec![], vec![], vec![]]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges(1).count(), 0);
    }
}
