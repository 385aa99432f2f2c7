use crate::{AtomGraph, AtomId};
use std::collections::HashSet;
use tracing::debug;

/// Ordered main-chain atoms; consecutive entries are bonded.
pub type Chain = Vec<AtomId>;

/// One atom of the path under exploration.
struct Frame {
    node: AtomId,
    neighbors: Vec<AtomId>,
    next: usize,
    /// Longest path found below `node`, stored leaf first.
    best: Chain,
}

impl Frame {
    fn new(graph: &AtomGraph, node: AtomId) -> Self {
        Frame {
            node,
            neighbors: graph.neighbors(node),
            next: 0,
            best: Chain::new(),
        }
    }
}

/// Longest simple path starting at `start`, built as `start ++ longest child path`.
///
/// `visited` only holds the atoms of the path currently being explored: each
/// atom is removed again when its frame is popped, so sibling branches may
/// reuse it. Among equally long child paths the first neighbour (bond
/// insertion order) wins. The search keeps its own stack of frames, so chain
/// length is not limited by the thread stack.
fn dfs_longest_path(
    graph: &AtomGraph,
    start: AtomId,
    visited: &mut HashSet<AtomId>,
    ignored: &HashSet<AtomId>,
) -> Chain {
    visited.insert(start);
    let mut stack = vec![Frame::new(graph, start)];

    loop {
        let Some(frame) = stack.last_mut() else {
            unreachable!("the start frame is only popped on return");
        };

        if let Some(&neighbor) = frame.neighbors.get(frame.next) {
            frame.next += 1;
            if !visited.contains(&neighbor) && !ignored.contains(&neighbor) {
                visited.insert(neighbor);
                stack.push(Frame::new(graph, neighbor));
            }
            continue;
        }

        let Some(mut finished) = stack.pop() else {
            unreachable!("stack checked non-empty above");
        };
        visited.remove(&finished.node);
        finished.best.push(finished.node);

        match stack.last_mut() {
            Some(parent) => {
                if finished.best.len() > parent.best.len() {
                    parent.best = finished.best;
                }
            }
            None => {
                let mut path = finished.best;
                path.reverse();
                return path;
            }
        }
    }
}

/// Longest chain through `start` using the two-pass tree-diameter search:
/// the far end of a first search seeds a second one.
pub fn find_longest_chain(graph: &AtomGraph, start: AtomId, ignored: &HashSet<AtomId>) -> Chain {
    let mut visited = HashSet::new();
    let first_pass = dfs_longest_path(graph, start, &mut visited, ignored);
    let farthest = *first_pass.last().unwrap_or(&start);

    let chain = dfs_longest_path(graph, farthest, &mut visited, ignored);
    debug!(
        "Longest chain from {} via {}: {} atoms",
        graph.atom(start),
        graph.atom(farthest),
        chain.len()
    );
    chain
}

/// Longest chain that begins at one of the functional-group `anchors`.
///
/// The returned chain starts with its anchor, so the group takes locant 1.
/// Ties between anchors keep the first anchor in the given order.
pub fn find_anchored_chain(
    graph: &AtomGraph,
    anchors: &[AtomId],
    ignored: &HashSet<AtomId>,
) -> Chain {
    let mut longest = Chain::new();
    for &anchor in anchors {
        let mut visited = HashSet::new();
        let path = dfs_longest_path(graph, anchor, &mut visited, ignored);
        if path.len() > longest.len() {
            longest = path;
        }
    }
    if let Some(&anchor) = longest.first() {
        debug!("Anchored chain at {}: {} atoms", graph.atom(anchor), longest.len());
    }
    longest
}

/// Sorted 1-based positions of the branched atoms along `chain`.
fn locants<'a>(chain: impl Iterator<Item = &'a AtomId>, branched: &HashSet<AtomId>) -> Vec<usize> {
    chain
        .enumerate()
        .filter(|(_, atom)| branched.contains(*atom))
        .map(|(i, _)| i + 1)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingOrder {
    Original,
    Reversed,
}

/// Picks the numbering direction that gives the lexicographically smaller
/// locant set. A tie keeps the original direction.
pub fn choose_numbering(chain: &[AtomId], branched: &HashSet<AtomId>) -> NumberingOrder {
    let forward = locants(chain.iter(), branched);
    let reverse = locants(chain.iter().rev(), branched);
    if reverse < forward {
        NumberingOrder::Reversed
    } else {
        NumberingOrder::Original
    }
}

/// Returns `chain` in the direction chosen by [`choose_numbering`].
pub fn orient_chain(chain: Chain, branched: &HashSet<AtomId>) -> Chain {
    match choose_numbering(&chain, branched) {
        NumberingOrder::Original => chain,
        NumberingOrder::Reversed => {
            let mut reversed = chain;
            reversed.reverse();
            reversed
        }
    }
}
