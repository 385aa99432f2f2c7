use std::fmt::{Display, Formatter, Result as FmtResult};

mod error;
pub use error::*;

mod graph;
pub use graph::*;

mod parse;
pub use parse::*;

mod cyclic;
pub use cyclic::*;

mod chain;
pub use chain::*;

mod branch;
pub use branch::*;

mod naming;
pub use naming::*;

mod visualize;
pub use visualize::*;

mod batch;
pub use batch::*;

/// The halogens the formula grammar can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Halogen {
    Chlorine,
    Bromine,
    Fluorine,
    Iodine,
}

impl Halogen {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "Cl" => Some(Halogen::Chlorine),
            "Br" => Some(Halogen::Bromine),
            "F" => Some(Halogen::Fluorine),
            "I" => Some(Halogen::Iodine),
            _ => None,
        }
    }

    /// Numeric halogen code: 1 chlorine, 2 bromine, 3 fluorine, 4 iodine.
    pub fn code(&self) -> u8 {
        match self {
            Halogen::Chlorine => 1,
            Halogen::Bromine => 2,
            Halogen::Fluorine => 3,
            Halogen::Iodine => 4,
        }
    }
}

impl Display for Halogen {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let name = match self {
            Halogen::Chlorine => "chlorine",
            Halogen::Bromine => "bromine",
            Halogen::Fluorine => "fluorine",
            Halogen::Iodine => "iodine",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Carbon,
    /// The carboxylic-acid token `COOH`, collapsed into a single atom.
    Carboxyl,
    Halogen(Halogen),
    Other,
}

impl AtomKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "C" => AtomKind::Carbon,
            "COOH" => AtomKind::Carboxyl,
            _ => match Halogen::from_symbol(label) {
                Some(halogen) => AtomKind::Halogen(halogen),
                None => AtomKind::Other,
            },
        }
    }

    /// Atoms that may sit on the main chain.
    ///
    /// Halogens never join it, including the `Cl` of a bonded `CH2Cl`: they
    /// stay off the chain and are named as single-atom branches ("chloro").
    pub fn is_carbon(&self) -> bool {
        matches!(self, AtomKind::Carbon | AtomKind::Carboxyl)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bond {
    /// Adjacency written in the formula.
    Chain,
    /// Edge added by the cyclic heuristic.
    Ring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// 1-based number in discovery order.
    pub id: usize,
    pub label: String,
    pub kind: AtomKind,
    pub carbon_bonds: u32,
    /// Aggregate hydrogen count, not one bond per hydrogen.
    pub hydrogen_bonds: u32,
    pub hetero_bonds: u32,
}

impl Atom {
    pub fn new(id: usize, label: &str) -> Self {
        Atom {
            id,
            label: label.to_string(),
            kind: AtomKind::from_label(label),
            carbon_bonds: 0,
            hydrogen_bonds: 0,
            hetero_bonds: 0,
        }
    }

    pub fn total_bonds(&self) -> u32 {
        self.carbon_bonds + self.hydrogen_bonds + self.hetero_bonds
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}{}", self.label, self.id)
    }
}

/// Install a stderr `tracing` subscriber at the given level ("trace", "debug", ...).
/// Unknown levels fall back to INFO; repeated calls are ignored.
pub fn init_logging(level: &str) {
    let level = level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
