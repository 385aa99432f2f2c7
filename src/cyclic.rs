use crate::{AtomGraph, AtomId, Bond};
use tracing::warn;

/// Crude ring closure: if at least two atoms carry exactly three bonds,
/// bond the first two of them (in id order) and return the pair.
///
/// This does not check that the two atoms lie on a common cycle; any
/// returned pair means the molecule is treated as cyclic and left unnamed.
pub fn close_cyclic_edge(graph: &mut AtomGraph) -> Option<(AtomId, AtomId)> {
    let candidates: Vec<AtomId> = graph
        .atoms()
        .filter(|(_, atom)| atom.total_bonds() == 3)
        .map(|(id, _)| id)
        .take(2)
        .collect();

    let (first, second) = match candidates[..] {
        [first, second] => (first, second),
        _ => return None,
    };

    graph.add_bond(first, second, Bond::Ring);
    warn!(
        "Added cyclic edge between nodes {} and {}",
        graph.atom(first).id,
        graph.atom(second).id
    );
    Some((first, second))
}
