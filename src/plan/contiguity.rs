use std::collections::VecDeque;

use crate::plan::Plan;

impl Plan {
    /// Check whether a district is empty (has no assigned blocks).
    #[inline]
    pub fn district_is_empty(&self, district: u32) -> bool {
        self.districts[district as usize].blocks.is_empty()
    }

    /// Check whether removing `node` leaves the rest of its district
    /// connected (a district is also allowed to empty out entirely).
    pub(super) fn removal_preserves_contiguity(&self, node: usize) -> bool {
        let Some(district) = self.assignments[node] else { return true };

        // Collect neighbors that are in the same district.
        let neighbors = self.region.graph().edges(node)
            .filter(|&v| self.assignments[v] == Some(district))
            .collect::<Vec<_>>();

        // If fewer than 2 same-district neighbors, removing `node` cannot
        // disconnect the remainder.
        if neighbors.len() <= 1 {
            return true;
        }

        // Track which same-district neighbors have been reached.
        let mut targets = vec![false; self.region.len()];
        neighbors.iter().for_each(|&v| targets[v] = true);

        // BFS from one neighbor within the district, forbidding `node`.
        let mut visited = vec![false; self.region.len()];
        visited[node] = true;
        visited[neighbors[0]] = true;

        let mut remaining = neighbors.len() - 1;
        let mut queue = VecDeque::from([neighbors[0]]);
        while let Some(u) = queue.pop_front() {
            for v in self.region.graph().edges(u) {
                if v != node && !visited[v] && self.assignments[v] == Some(district) {
                    visited[v] = true;
                    queue.push_back(v);

                    // Early exit once every same-district neighbor is reached.
                    if targets[v] {
                        remaining -= 1;
                        if remaining == 0 {
                            return true;
                        }
                    }
                }
            }
        }

        neighbors.iter().all(|&v| visited[v])
    }

    /// Find all connected components (as node lists) inside a district.
    pub fn find_components(&self, district: u32) -> Vec<Vec<usize>> {
        let mut components = Vec::new();

        let mut visited = vec![false; self.region.len()];
        for u in (0..self.region.len()).filter(|&u| self.assignments[u] == Some(district)) {
            if !visited[u] {
                visited[u] = true;
                let mut component = Vec::new();
                let mut queue = VecDeque::from([u]);
                while let Some(v) = queue.pop_front() {
                    component.push(v);
                    for w in self.region.graph().edges(v) {
                        if self.assignments[w] == Some(district) && !visited[w] {
                            visited[w] = true;
                            queue.push_back(w);
                        }
                    }
                }
                components.push(component);
            }
        }
        components
    }

    /// Check whether a district's blocks form a connected induced subgraph.
    /// An empty district counts as contiguous.
    pub fn is_contiguous(&self, district: u32) -> bool {
        self.find_components(district).len() <= 1
    }

    /// Check whether every district in the plan is contiguous.
    pub fn check_contiguity(&self) -> bool {
        (0..self.num_districts).all(|district| self.is_contiguous(district))
    }
}
