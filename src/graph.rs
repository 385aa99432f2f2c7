use crate::{Atom, Bond};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

pub type AtomId = NodeIndex;

/// Undirected multigraph of atoms keyed by discovery order.
///
/// Bonds are never deduplicated, so an accidental repeat shows up twice in
/// both [`AtomGraph::bonds`] and [`AtomGraph::neighbors`].
#[derive(Debug, Clone, Default)]
pub struct AtomGraph {
    graph: UnGraph<Atom, Bond>,
}

impl AtomGraph {
    pub fn new() -> Self {
        AtomGraph {
            graph: UnGraph::new_undirected(),
        }
    }

    pub fn add_atom(&mut self, label: &str) -> AtomId {
        let number = self.graph.node_count() + 1;
        self.graph.add_node(Atom::new(number, label))
    }

    /// Connect two atoms, incrementing both carbon-carbon counters.
    pub fn add_bond(&mut self, a: AtomId, b: AtomId, bond: Bond) {
        self.graph[a].carbon_bonds += 1;
        self.graph[b].carbon_bonds += 1;
        self.graph.add_edge(a, b, bond);
    }

    pub fn atom(&self, id: AtomId) -> &Atom {
        &self.graph[id]
    }

    pub fn atom_mut(&mut self, id: AtomId) -> &mut Atom {
        &mut self.graph[id]
    }

    pub fn atom_ids(&self) -> impl Iterator<Item = AtomId> + '_ {
        self.graph.node_indices()
    }

    pub fn atoms(&self) -> impl Iterator<Item = (AtomId, &Atom)> + '_ {
        self.graph
            .node_indices()
            .map(move |id| (id, &self.graph[id]))
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Bonds in insertion order.
    pub fn bonds(&self) -> impl Iterator<Item = (AtomId, AtomId, Bond)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), *edge.weight()))
    }

    /// Neighbours of `id` in the order their bonds were inserted.
    pub fn neighbors(&self, id: AtomId) -> Vec<AtomId> {
        let mut incident: Vec<_> = self
            .graph
            .edges(id)
            .map(|edge| {
                let other = if edge.source() == id {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id().index(), other)
            })
            .collect();
        incident.sort_by_key(|&(edge, _)| edge);
        incident.into_iter().map(|(_, other)| other).collect()
    }

    /// Carbon-like atoms (plain carbon and carboxyl) in id order.
    pub fn carbon_atoms(&self) -> Vec<AtomId> {
        self.atoms()
            .filter(|(_, atom)| atom.kind.is_carbon())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn contains_ring_bond(&self) -> bool {
        self.bonds().any(|(_, _, bond)| bond == Bond::Ring)
    }
}
