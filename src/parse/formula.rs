use crate::{AtomGraph, AtomId, Bond, NamingIssue};
use tracing::trace;

/// A parsed formula together with every malformation that was tolerated.
#[derive(Debug, Clone)]
pub struct ParsedFormula {
    pub graph: AtomGraph,
    pub issues: Vec<NamingIssue>,
}

/// Parses a condensed formula such as `CH3CH(CH3)CH2COOH` into an [`AtomGraph`].
///
/// Parsing never fails: unbalanced parentheses and stray characters are
/// skipped and the graph built so far is returned.
pub fn parse_formula(formula: &str) -> AtomGraph {
    parse_formula_checked(formula).graph
}

/// Like [`parse_formula`], but also reports what the permissive scan skipped over.
pub fn parse_formula_checked(formula: &str) -> ParsedFormula {
    let mut graph = AtomGraph::new();
    let mut issues = Vec::new();
    let mut previous: Option<AtomId> = None;
    let mut branch_stack: Vec<Option<AtomId>> = Vec::new();

    let chars: Vec<char> = formula.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            'C' => {
                let mut label = "C";
                match chars.get(i + 1) {
                    Some('l') => {
                        label = "Cl";
                        if let Some(prev) = previous {
                            graph.atom_mut(prev).hetero_bonds += 1;
                        }
                        i += 1;
                    }
                    Some('O') => {
                        // `COOH` is one atom; land on its final character.
                        label = "COOH";
                        i += 3;
                    }
                    _ => {}
                }

                let atom = graph.add_atom(label);

                if chars.get(i + 1) == Some(&'H') {
                    i += 1;
                    let mut hydrogens = 1;
                    if let Some(digit) = chars.get(i + 1).and_then(|d| d.to_digit(10)) {
                        hydrogens = digit;
                        i += 1;
                    }
                    graph.atom_mut(atom).hydrogen_bonds = hydrogens;
                }

                if let Some(prev) = previous {
                    graph.add_bond(prev, atom, Bond::Chain);
                }
                trace!("Placed {} after {:?}", graph.atom(atom), previous.map(|p| graph.atom(p).id));
                previous = Some(atom);
                i += 1;
            }
            '(' => {
                branch_stack.push(previous);
                i += 1;
            }
            ')' => {
                match branch_stack.pop() {
                    Some(branch_point) => previous = branch_point,
                    None => issues.push(NamingIssue::UnmatchedClose { position: i }),
                }
                i += 1;
            }
            _ if c.is_alphabetic() => {
                // Free-standing heteroatom: placed, but not bonded to the previous atom.
                let mut label = c.to_string();
                if let Some(&next) = chars.get(i + 1) {
                    if next.is_lowercase() {
                        label.push(next);
                        i += 1;
                    }
                }
                let atom = graph.add_atom(&label);
                trace!("Placed free-standing {}", graph.atom(atom));
                previous = Some(atom);
                i += 1;
            }
            _ => {
                issues.push(NamingIssue::UnrecognizedCharacter {
                    position: i,
                    character: c,
                });
                i += 1;
            }
        }
    }

    if !branch_stack.is_empty() {
        issues.push(NamingIssue::UnclosedBranch {
            open: branch_stack.len(),
        });
    }

    ParsedFormula { graph, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AtomKind, Halogen};
    use petgraph::graph::NodeIndex;

    fn labels(graph: &AtomGraph) -> Vec<String> {
        graph.atoms().map(|(_, atom)| atom.label.clone()).collect()
    }

    fn bond_pairs(graph: &AtomGraph) -> Vec<(usize, usize)> {
        graph
            .bonds()
            .map(|(a, b, _)| (graph.atom(a).id, graph.atom(b).id))
            .collect()
    }

    #[test]
    fn test_parse_straight_chain() {
        let graph = parse_formula("CCCC");
        assert_eq!(labels(&graph), vec!["C", "C", "C", "C"]);
        assert_eq!(bond_pairs(&graph), vec![(1, 2), (2, 3), (3, 4)]);
        assert_eq!(graph.atom(NodeIndex::new(1)).carbon_bonds, 2);
    }

    #[test]
    fn test_parse_hydrogen_counts_overwrite() {
        let graph = parse_formula("CH3CH2CH");
        let hydrogens: Vec<u32> = graph.atoms().map(|(_, a)| a.hydrogen_bonds).collect();
        assert_eq!(hydrogens, vec![3, 2, 1]);
        assert_eq!(graph.atom_count(), 3);
        assert_eq!(graph.bond_count(), 2);
    }

    #[test]
    fn test_parse_branch_resumes_at_branch_point() {
        // Isobutane written with an explicit branch.
        let graph = parse_formula("CH3CH(CH3)CH3");
        assert_eq!(bond_pairs(&graph), vec![(1, 2), (2, 3), (2, 4)]);
        assert_eq!(graph.atom(NodeIndex::new(1)).total_bonds(), 4);
    }

    #[test]
    fn test_parse_chlorine_is_bonded_and_counted() {
        let graph = parse_formula("CH3CH2Cl");
        assert_eq!(labels(&graph), vec!["C", "C", "Cl"]);
        assert_eq!(bond_pairs(&graph), vec![(1, 2), (2, 3)]);
        let ethyl = graph.atom(NodeIndex::new(1));
        assert_eq!(ethyl.hetero_bonds, 1);
        assert_eq!(ethyl.carbon_bonds, 2);
        assert_eq!(
            graph.atom(NodeIndex::new(2)).kind,
            AtomKind::Halogen(Halogen::Chlorine)
        );
    }

    #[test]
    fn test_parse_carboxylic_acid_token() {
        let graph = parse_formula("CH3COOH");
        assert_eq!(labels(&graph), vec!["C", "COOH"]);
        assert_eq!(bond_pairs(&graph), vec![(1, 2)]);
        assert_eq!(graph.atom(NodeIndex::new(1)).kind, AtomKind::Carboxyl);
    }

    #[test]
    fn test_parse_free_standing_heteroatom_is_not_bonded() {
        let graph = parse_formula("CCBrC");
        assert_eq!(labels(&graph), vec!["C", "C", "Br", "C"]);
        // Br is not bonded to the carbon before it, but the next carbon bonds to Br.
        assert_eq!(bond_pairs(&graph), vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_parse_is_permissive() {
        let parsed = parse_formula_checked("CC)C(C=C");
        assert_eq!(parsed.graph.atom_count(), 5);
        assert_eq!(
            parsed.issues,
            vec![
                NamingIssue::UnmatchedClose { position: 2 },
                NamingIssue::UnrecognizedCharacter {
                    position: 6,
                    character: '='
                },
                NamingIssue::UnclosedBranch { open: 1 },
            ]
        );
    }

    #[test]
    fn test_parse_empty_formula() {
        let parsed = parse_formula_checked("");
        assert_eq!(parsed.graph.atom_count(), 0);
        assert!(parsed.issues.is_empty());
    }
}
