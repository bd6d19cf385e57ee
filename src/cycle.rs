//! Cycle assembly from unordered edge sets, and cycle rotation.

/// Two-slot adjacency record for a node on a Hamiltonian cycle.
#[derive(Debug, Clone, Copy, Default)]
struct CycleNeighbors {
    slots: [Option<usize>; 2],
}

impl CycleNeighbors {
    fn push(&mut self, node: usize, neighbor: usize) {
        match self.slots {
            [None, _] => self.slots[0] = Some(neighbor),
            [Some(_), None] => self.slots[1] = Some(neighbor),
            [Some(a), Some(b)] => panic!(
                "node {} already has neighbors {} and {}, cannot add {}",
                node, a, b, neighbor
            ),
        }
    }

    fn pair(&self, node: usize) -> (usize, usize) {
        match self.slots {
            [Some(a), Some(b)] => (a, b),
            _ => panic!(
                "node {} has {:?} as neighbors, a cycle needs exactly two",
                node, self.slots
            ),
        }
    }
}

/// Rebuild a closed cycle from the `n` edges of a Hamiltonian cycle.
///
/// The walk starts at node 0, steps to the neighbor it did not just come
/// from, and repeats until all `n` nodes are visited; node 0 is appended to
/// close the cycle.
///
/// # Panics
///
/// If the edges do not give every node exactly two neighbors, or the walk
/// returns to an already visited node before covering all `n` nodes.
pub fn reconstruct_cycle(edges: &[(usize, usize)], n: usize) -> Vec<usize> {
    assert_eq!(
        edges.len(),
        n,
        "a Hamiltonian cycle on {} nodes has {} edges, got {}",
        n,
        n,
        edges.len()
    );

    let mut adjacency = vec![CycleNeighbors::default(); n];
    for &(u, v) in edges {
        adjacency[u].push(u, v);
        adjacency[v].push(v, u);
    }

    let neighbors: Vec<(usize, usize)> = adjacency
        .iter()
        .enumerate()
        .map(|(node, record)| record.pair(node))
        .collect();

    let mut visited = vec![false; n];
    let mut cycle = Vec::with_capacity(n + 1);
    let mut current = 0;
    let mut previous = None;

    for _ in 0..n {
        assert!(
            !visited[current],
            "edges close a sub-cycle at node {} before visiting all {} nodes",
            current,
            n
        );
        visited[current] = true;
        cycle.push(current);

        let (a, b) = neighbors[current];
        let next = if Some(a) == previous { b } else { a };
        previous = Some(current);
        current = next;
    }

    cycle.push(cycle[0]);
    cycle
}

/// Rotate a closed cycle so that it starts (and ends) at `start`, keeping the
/// direction of traversal.
///
/// # Panics
///
/// If `cycle` is not closed or does not contain `start`.
pub fn rotate_cycle(cycle: &[usize], start: usize) -> Vec<usize> {
    assert!(
        cycle.len() >= 2 && cycle[0] == cycle[cycle.len() - 1],
        "cannot rotate an open sequence {:?}",
        cycle
    );

    let core = &cycle[..cycle.len() - 1];
    let offset = match core.iter().position(|&node| node == start) {
        Some(offset) => offset,
        None => panic!("node {} is not on the cycle {:?}", start, cycle),
    };

    let mut rotated = Vec::with_capacity(cycle.len());
    rotated.extend_from_slice(&core[offset..]);
    rotated.extend_from_slice(&core[..offset]);
    rotated.push(start);
    rotated
}
