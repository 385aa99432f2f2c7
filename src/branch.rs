use crate::{AtomGraph, AtomId, AtomKind, Halogen};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

/// What hangs off a single main-chain atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub carbons: usize,
    pub halogen: Option<Halogen>,
}

impl Branch {
    /// Halogen code of the branch, 0 when it carries none.
    pub fn halogen_code(&self) -> u8 {
        self.halogen.map_or(0, |h| h.code())
    }
}

/// At most one branch per main-chain atom.
pub type BranchInfo = BTreeMap<AtomId, Branch>;

/// Walks the branch rooted at `start` without entering the main chain,
/// counting plain carbons and keeping the first halogen popped off the stack.
fn walk_branch(
    graph: &AtomGraph,
    start: AtomId,
    main_chain: &HashSet<AtomId>,
    visited: &mut HashSet<AtomId>,
) -> Branch {
    let mut branch = Branch {
        carbons: 0,
        halogen: None,
    };
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(node) = stack.pop() {
        match graph.atom(node).kind {
            AtomKind::Carbon => branch.carbons += 1,
            AtomKind::Halogen(halogen) if branch.halogen.is_none() => {
                branch.halogen = Some(halogen)
            }
            _ => {}
        }
        trace!("Branch atom {}: {:?}", graph.atom(node), branch);

        for neighbor in graph.neighbors(node) {
            if !main_chain.contains(&neighbor) && visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }
    branch
}

/// Records the branch hanging off each atom of `chain`.
///
/// Every off-chain neighbour starts a walk. When one chain atom has several
/// branches, the last one walked replaces the earlier ones.
pub fn analyze_branches(graph: &AtomGraph, chain: &[AtomId]) -> BranchInfo {
    let main_chain: HashSet<AtomId> = chain.iter().copied().collect();
    let mut info = BranchInfo::new();

    for &atom in chain {
        let mut visited = HashSet::new();
        for neighbor in graph.neighbors(atom) {
            if main_chain.contains(&neighbor) || visited.contains(&neighbor) {
                continue;
            }
            let branch = walk_branch(graph, neighbor, &main_chain, &mut visited);
            if let Some(previous) = info.insert(atom, branch) {
                debug!(
                    "Branch {:?} on {} replaced by {:?}",
                    previous,
                    graph.atom(atom),
                    branch
                );
            }
        }
    }
    info
}
