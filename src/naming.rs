use crate::*;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::{debug, info, warn};

/// Capitalized chain roots indexed by chain length - 1.
static CHAIN_ROOTS: &[&str] = &[
    "Meth", "Eth", "Prop", "But", "Pent", "Hex", "Hept", "Oct", "Non", "Dec",
];

static BRANCH_NAMES: &[&str] = &["methyl", "ethyl", "propyl", "butyl"];

/// How the chain root is terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixMode {
    /// "ane": a complete alkane.
    Alkane,
    /// "an": a stem the caller extends, e.g. with "oic acid".
    Stem,
    /// "yl": a substituent, used for ether fragments.
    Substituent,
}

impl SuffixMode {
    pub fn suffix(&self) -> &'static str {
        match self {
            SuffixMode::Alkane => "ane",
            SuffixMode::Stem => "an",
            SuffixMode::Substituent => "yl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentRole {
    Molecule,
    EtherFragment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IupacName {
    pub text: String,
    pub issues: Vec<NamingIssue>,
}

impl IupacName {
    /// True when the name was produced but something had to be skipped or generalized.
    pub fn is_degraded(&self) -> bool {
        !self.issues.is_empty()
    }
}

impl Display for IupacName {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

/// Hooks for tracing the pipeline without mixing output into it.
pub trait NamingObserver {
    fn atoms(&mut self, _graph: &AtomGraph) {}
    fn cyclic_edge(&mut self, _graph: &AtomGraph, _first: AtomId, _second: AtomId) {}
    fn bonds(&mut self, _graph: &AtomGraph) {}
    fn main_chain(&mut self, _graph: &AtomGraph, _chain: &[AtomId]) {}
    fn no_carbon(&mut self) {}
}

impl NamingObserver for () {}

pub fn root_name(chain_length: usize) -> Option<&'static str> {
    chain_length
        .checked_sub(1)
        .and_then(|i| CHAIN_ROOTS.get(i))
        .copied()
}

fn halogen_prefix(halogen: Halogen) -> &'static str {
    match halogen {
        Halogen::Chlorine => "chloro",
        Halogen::Bromine => "bromo",
        _ => "halo",
    }
}

/// Substituent name for a branch, e.g. "methyl", "chloro-ethyl" or a bare "bromo".
fn branch_name(branch: &Branch, locant: usize, issues: &mut Vec<NamingIssue>) -> String {
    let alkyl = match branch.carbons {
        0 => None,
        n => match BRANCH_NAMES.get(n - 1) {
            Some(name) => Some(*name),
            None => {
                issues.push(NamingIssue::UnsupportedBranch { locant, carbons: n });
                None
            }
        },
    };

    let halo = branch.halogen.map(|halogen| {
        if !matches!(halogen, Halogen::Chlorine | Halogen::Bromine) {
            issues.push(NamingIssue::UnsupportedHalogen { locant, halogen });
        }
        halogen_prefix(halogen)
    });

    match (halo, alkyl) {
        (Some(halo), Some(alkyl)) => format!("{}-{}", halo, alkyl),
        (Some(halo), None) => halo.to_string(),
        (None, Some(alkyl)) => alkyl.to_string(),
        (None, None) => {
            if branch.carbons == 0 {
                issues.push(NamingIssue::UnsupportedBranch { locant, carbons: 0 });
            }
            String::new()
        }
    }
}

/// Merges runs of adjacent `"<locant>-<name>"` entries that share a name,
/// e.g. `["2-methyl", "4-methyl"]` becomes `["(2,4)-dimethyl"]`.
pub fn combine_branches(branches: &[String]) -> Vec<String> {
    let mut combined = Vec::new();
    let mut i = 0;

    while i < branches.len() {
        let (locant, name) = branches[i]
            .split_once('-')
            .unwrap_or((branches[i].as_str(), ""));
        let mut locants = vec![locant];

        while let Some((next_locant, next_name)) =
            branches.get(i + 1).and_then(|next| next.split_once('-'))
        {
            if next_name != name {
                break;
            }
            locants.push(next_locant);
            i += 1;
        }

        if locants.len() > 1 {
            let prefix = match locants.len() {
                2 => "di".to_string(),
                3 => "tri".to_string(),
                n => format!("{}-", n),
            };
            combined.push(format!("({})-{}{}", locants.join(","), prefix, name));
        } else {
            combined.push(format!("{}-{}", locant, name));
        }
        i += 1;
    }

    combined
}

/// Renders the name of an oriented chain and its branches.
///
/// Branch strings are sorted as plain text, so "10-methyl" sorts before
/// "2-methyl" on a ten carbon chain.
pub fn assemble_name(chain: &[AtomId], branches: &BranchInfo, mode: SuffixMode) -> IupacName {
    let mut issues = Vec::new();

    let root = match root_name(chain.len()) {
        Some(root) => root,
        None => {
            issues.push(NamingIssue::UnsupportedChainLength(chain.len()));
            ""
        }
    };

    let mut rendered: Vec<String> = chain
        .iter()
        .enumerate()
        .filter_map(|(i, atom)| {
            let branch = branches.get(atom)?;
            let locant = i + 1;
            Some(format!("{}-{}", locant, branch_name(branch, locant, &mut issues)))
        })
        .collect();
    rendered.sort();

    let mut text = String::new();
    for branch in combine_branches(&rendered) {
        text.push_str(&branch);
        text.push(' ');
    }
    text.push_str(root);
    text.push_str(mode.suffix());

    IupacName { text, issues }
}

/// Names a parsed fragment. The graph may gain a synthetic ring bond.
pub fn name_graph(
    graph: &mut AtomGraph,
    role: FragmentRole,
    observer: &mut dyn NamingObserver,
) -> Result<IupacName, NamingError> {
    observer.atoms(graph);

    if let Some((first, second)) = close_cyclic_edge(graph) {
        observer.cyclic_edge(graph, first, second);
        return Err(NamingError::CyclicMolecule {
            first: graph.atom(first).id,
            second: graph.atom(second).id,
        });
    }
    observer.bonds(graph);

    let start = match graph.carbon_atoms().first() {
        Some(&start) => start,
        None => {
            warn!("No carbon atoms found in the input");
            observer.no_carbon();
            return Err(NamingError::NoCarbonAtoms);
        }
    };

    let ignored: HashSet<AtomId> = graph
        .atoms()
        .filter(|(_, atom)| !atom.kind.is_carbon())
        .map(|(id, _)| id)
        .collect();
    let anchors: Vec<AtomId> = graph
        .atoms()
        .filter(|(_, atom)| atom.kind == AtomKind::Carboxyl)
        .map(|(id, _)| id)
        .collect();
    let acid = !anchors.is_empty();

    let chain = if acid {
        find_anchored_chain(graph, &anchors, &ignored)
    } else {
        find_longest_chain(graph, start, &ignored)
    };

    let branches = analyze_branches(graph, &chain);

    // The acid carbon keeps locant 1, so only plain chains are reoriented.
    let chain = if acid {
        chain
    } else {
        let branched: HashSet<AtomId> = branches.keys().copied().collect();
        orient_chain(chain, &branched)
    };
    observer.main_chain(graph, &chain);
    debug!(
        "Main chain: {:?}",
        chain.iter().map(|&id| graph.atom(id).to_string()).collect::<Vec<_>>()
    );

    let mode = match role {
        FragmentRole::EtherFragment => SuffixMode::Substituent,
        FragmentRole::Molecule if acid => SuffixMode::Stem,
        FragmentRole::Molecule => SuffixMode::Alkane,
    };

    let mut name = assemble_name(&chain, &branches, mode);
    if acid {
        name.text.push_str("oic acid");
    }
    for issue in &name.issues {
        warn!("{}", issue);
    }
    Ok(name)
}

/// Parses and names one fragment. Parser issues lead the returned issue list.
pub fn name_molecule(
    formula: &str,
    role: FragmentRole,
    observer: &mut dyn NamingObserver,
) -> Result<IupacName, NamingError> {
    let ParsedFormula { mut graph, issues } = parse_formula_checked(formula);
    for issue in &issues {
        warn!("{}: {}", formula, issue);
    }
    let mut name = name_graph(&mut graph, role, observer)?;
    let mut all = issues;
    all.append(&mut name.issues);
    name.issues = all;
    info!("{} => {}", formula, name.text);
    Ok(name)
}

/// Names both fragments as substituents and joins them, alphabetically, as an ether.
pub fn name_ether(
    first: &str,
    second: &str,
    observer: &mut dyn NamingObserver,
) -> Result<IupacName, NamingError> {
    let mut a = name_ether_fragment(1, first, observer)?;
    let mut b = name_ether_fragment(2, second, observer)?;

    if a.text > b.text {
        std::mem::swap(&mut a, &mut b);
    }
    let mut issues = a.issues;
    issues.extend(b.issues);

    Ok(IupacName {
        text: format!("{} {} ether", a.text, b.text),
        issues,
    })
}

fn name_ether_fragment(
    index: usize,
    formula: &str,
    observer: &mut dyn NamingObserver,
) -> Result<IupacName, NamingError> {
    name_molecule(formula, FragmentRole::EtherFragment, observer).map_err(|source| {
        NamingError::EtherFragment {
            index,
            source: Box::new(source),
        }
    })
}

/// Names a full input line, treating `<a>-O-<b>` as an ether.
pub fn iupac_name(line: &str) -> Result<IupacName, NamingError> {
    iupac_name_observed(line, &mut ())
}

pub fn iupac_name_observed(
    line: &str,
    observer: &mut dyn NamingObserver,
) -> Result<IupacName, NamingError> {
    match split_ether(line) {
        Some((first, second)) => name_ether(first, second, observer),
        None => name_molecule(line, FragmentRole::Molecule, observer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::NodeIndex;

    fn name(formula: &str) -> String {
        iupac_name(formula)
            .unwrap_or_else(|e| panic!("{} failed: {}", formula, e))
            .text
    }

    fn chain_of(len: usize) -> Vec<AtomId> {
        (0..len).map(NodeIndex::new).collect()
    }

    fn methyls(chain: &[AtomId], locants: &[usize]) -> BranchInfo {
        locants
            .iter()
            .map(|&locant| {
                (
                    chain[locant - 1],
                    Branch {
                        carbons: 1,
                        halogen: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_root_names() {
        assert_eq!(root_name(1), Some("Meth"));
        assert_eq!(root_name(10), Some("Dec"));
        assert_eq!(root_name(0), None);
        assert_eq!(root_name(11), None);
    }

    #[test]
    fn test_straight_chains() {
        assert_eq!(name("CH4"), "Methane");
        assert_eq!(name("CH3CH3"), "Ethane");
        assert_eq!(name("CCCC"), "Butane");
        assert_eq!(name("CH3CH2CH2CH2CH2CH3"), "Hexane");
        assert_eq!(name("CCCCCCCCCC"), "Decane");
    }

    #[test]
    fn test_branched_alkanes() {
        assert_eq!(name("CH3CH(CH3)CH2CH3"), "2-methyl Butane");
        assert_eq!(name("CH3CH(CH3)CH2CH(CH3)CH3"), "(2,4)-dimethyl Pentane");
        assert_eq!(name("CC(C)CC"), "2-methyl Butane");
    }

    #[test]
    fn test_halogen_substituents() {
        assert_eq!(name("CH3CH2Cl"), "1-chloro Ethane");

        let fluoro = iupac_name("FCH2CH3").unwrap();
        assert_eq!(fluoro.text, "1-halo Ethane");
        assert!(matches!(
            fluoro.issues[..],
            [NamingIssue::UnsupportedHalogen {
                locant: 1,
                halogen: Halogen::Fluorine
            }]
        ));
    }

    #[test]
    fn test_carboxylic_acids() {
        assert_eq!(name("CH3COOH"), "Ethanoic acid");
        assert_eq!(name("CH3CH2COOH"), "Propanoic acid");
        assert_eq!(name("CH3CH(CH3)COOH"), "2-methyl Propanoic acid");
    }

    #[test]
    fn test_acid_carbon_takes_locant_one() {
        struct Capture(Vec<String>);
        impl NamingObserver for Capture {
            fn main_chain(&mut self, graph: &AtomGraph, chain: &[AtomId]) {
                self.0 = chain.iter().map(|&id| graph.atom(id).label.clone()).collect();
            }
        }

        let mut capture = Capture(Vec::new());
        let name = name_molecule("CH3CH2CH(CH3)CH2COOH", FragmentRole::Molecule, &mut capture)
            .unwrap();
        assert_eq!(capture.0.first().map(String::as_str), Some("COOH"));
        assert_eq!(capture.0.len(), 5);
        assert_eq!(name.text, "3-methyl Pentanoic acid");
    }

    #[test]
    fn test_cyclic_heuristic_stops_naming() {
        assert_eq!(
            iupac_name("CC(C)C(C)C"),
            Err(NamingError::CyclicMolecule {
                first: 2,
                second: 4
            })
        );
    }

    #[test]
    fn test_no_carbon_atoms() {
        assert_eq!(iupac_name("Br"), Err(NamingError::NoCarbonAtoms));
        assert_eq!(iupac_name(""), Err(NamingError::NoCarbonAtoms));
    }

    #[test]
    fn test_unsupported_chain_length_degrades() {
        let name = iupac_name("CCCCCCCCCCC").unwrap();
        assert_eq!(name.text, "ane");
        assert_eq!(name.issues, vec![NamingIssue::UnsupportedChainLength(11)]);
        assert!(name.is_degraded());
    }

    #[test]
    fn test_ten_thousand_carbon_chain_degrades() {
        let name = iupac_name(&"C".repeat(10_000)).unwrap();
        assert_eq!(name.text, "ane");
        assert_eq!(name.issues, vec![NamingIssue::UnsupportedChainLength(10_000)]);
    }

    #[test]
    fn test_parser_issues_are_reported() {
        let name = iupac_name("CCC)").unwrap();
        assert_eq!(name.text, "Propane");
        assert_eq!(name.issues, vec![NamingIssue::UnmatchedClose { position: 3 }]);
    }

    #[test]
    fn test_ether_names_are_sorted() {
        assert_eq!(name("CCC-O-CC"), "Ethyl Propyl ether");
        assert_eq!(name("CC-O-CCC"), "Ethyl Propyl ether");
        assert_eq!(name("CH3-O-CH2CH3"), "Ethyl Methyl ether");
    }

    #[test]
    fn test_ether_fragment_failure_names_the_fragment() {
        match iupac_name("CC-O-CC(C)C(C)C") {
            Err(NamingError::EtherFragment { index, source }) => {
                assert_eq!(index, 2);
                assert!(matches!(*source, NamingError::CyclicMolecule { .. }));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_suffix_modes() {
        let chain = chain_of(3);
        let none = BranchInfo::new();
        assert_eq!(assemble_name(&chain, &none, SuffixMode::Alkane).text, "Propane");
        assert_eq!(assemble_name(&chain, &none, SuffixMode::Stem).text, "Propan");
        assert_eq!(assemble_name(&chain, &none, SuffixMode::Substituent).text, "Propyl");
    }

    #[test]
    fn test_duplicate_branches_merge() {
        let chain = chain_of(5);
        let name = assemble_name(&chain, &methyls(&chain, &[2, 4]), SuffixMode::Alkane);
        assert_eq!(name.text, "(2,4)-dimethyl Pentane");

        let chain = chain_of(6);
        let name = assemble_name(&chain, &methyls(&chain, &[2, 3, 4]), SuffixMode::Alkane);
        assert_eq!(name.text, "(2,3,4)-trimethyl Hexane");

        let name = assemble_name(&chain, &methyls(&chain, &[2, 3, 4, 5]), SuffixMode::Alkane);
        assert_eq!(name.text, "(2,3,4,5)-4-methyl Hexane");
    }

    #[test]
    fn test_locants_sort_as_text() {
        let chain = chain_of(10);
        let name = assemble_name(&chain, &methyls(&chain, &[2, 10]), SuffixMode::Alkane);
        assert_eq!(name.text, "(10,2)-dimethyl Decane");
    }

    #[test]
    fn test_only_adjacent_duplicates_merge() {
        let chain = chain_of(6);
        let mut branches = methyls(&chain, &[2, 4]);
        branches.insert(
            chain[2],
            Branch {
                carbons: 2,
                halogen: None,
            },
        );
        let name = assemble_name(&chain, &branches, SuffixMode::Alkane);
        assert_eq!(name.text, "2-methyl 3-ethyl 4-methyl Hexane");
    }

    #[test]
    fn test_combine_branches() {
        let merged = combine_branches(&[
            "2-chloro-methyl".to_string(),
            "3-chloro-methyl".to_string(),
            "5-ethyl".to_string(),
        ]);
        assert_eq!(merged, vec!["(2,3)-dichloro-methyl", "5-ethyl"]);
        assert!(combine_branches(&[]).is_empty());
    }

    #[test]
    fn test_unsupported_branch_degrades() {
        let chain = chain_of(9);
        let mut branches = BranchInfo::new();
        branches.insert(
            chain[4],
            Branch {
                carbons: 5,
                halogen: None,
            },
        );
        let name = assemble_name(&chain, &branches, SuffixMode::Alkane);
        assert_eq!(name.text, "5- Nonane");
        assert_eq!(
            name.issues,
            vec![NamingIssue::UnsupportedBranch {
                locant: 5,
                carbons: 5
            }]
        );
    }
}
