//! Simple-cycle search over one strongly connected component
//!
//! Operates on dense integer indices; callers relabel component members to
//! `0..n` before searching and translate edges back afterwards.

/// Adjacency-list DFS search for simple cycles.
pub(crate) struct CycleSearch {
    adjacency: Vec<Vec<usize>>,
}

impl CycleSearch {
    pub(crate) fn new(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(from, to) in edges {
            adjacency[from].push(to);
        }
        for targets in &mut adjacency {
            targets.sort_unstable();
            targets.dedup();
        }
        CycleSearch { adjacency }
    }

    /// Enumerate all simple cycles with at most `max_len` edges.
    ///
    /// Each cycle is discovered exactly once, rooted at its smallest member
    /// index. Candidates that would exceed the bound are abandoned entirely,
    /// so a component whose only cycles are longer than the bound reports
    /// none.
    pub(crate) fn all_cycles(&self, max_len: usize) -> Vec<Vec<(usize, usize)>> {
        let n = self.adjacency.len();
        let mut cycles = Vec::new();
        let mut path = Vec::new();
        let mut on_path = vec![false; n];
        for root in 0..n {
            self.collect_from(root, root, max_len, &mut path, &mut on_path, &mut cycles);
        }
        cycles
    }

    fn collect_from(
        &self,
        root: usize,
        current: usize,
        max_len: usize,
        path: &mut Vec<usize>,
        on_path: &mut [bool],
        cycles: &mut Vec<Vec<(usize, usize)>>,
    ) {
        path.push(current);
        on_path[current] = true;
        for &next in &self.adjacency[current] {
            if next < root {
                // Cycles through smaller indices were already enumerated
                // from their own root.
                continue;
            }
            if next == root {
                if path.len() <= max_len {
                    let mut edges: Vec<(usize, usize)> =
                        path.windows(2).map(|w| (w[0], w[1])).collect();
                    edges.push((current, root));
                    cycles.push(edges);
                }
            } else if !on_path[next] && path.len() < max_len {
                self.collect_from(root, next, max_len, path, on_path, cycles);
            }
        }
        path.pop();
        on_path[current] = false;
    }

    /// Find one simple cycle of any length, or `None` if the graph is
    /// acyclic. Iterative three-color DFS; depth is not bounded by any
    /// cycle-length limit, so no recursion here.
    pub(crate) fn single_cycle(&self) -> Option<Vec<(usize, usize)>> {
        const UNVISITED: u8 = 0;
        const ON_STACK: u8 = 1;
        const DONE: u8 = 2;

        let n = self.adjacency.len();
        let mut state = vec![UNVISITED; n];
        for start in 0..n {
            if state[start] != UNVISITED {
                continue;
            }
            // (node, next outgoing edge offset)
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            state[start] = ON_STACK;
            while let Some(&(node, offset)) = stack.last() {
                if let Some(&next) = self.adjacency[node].get(offset) {
                    if let Some(frame) = stack.last_mut() {
                        frame.1 += 1;
                    }
                    match state[next] {
                        UNVISITED => {
                            state[next] = ON_STACK;
                            stack.push((next, 0));
                        }
                        ON_STACK => {
                            let entry = stack
                                .iter()
                                .position(|&(v, _)| v == next)
                                .expect("ON_STACK node must be on the DFS stack");
                            let mut edges: Vec<(usize, usize)> = stack[entry..]
                                .windows(2)
                                .map(|w| (w[0].0, w[1].0))
                                .collect();
                            edges.push((node, next));
                            return Some(edges);
                        }
                        _ => {}
                    }
                } else {
                    state[node] = DONE;
                    stack.pop();
                }
            }
        }
        None
    }
}
