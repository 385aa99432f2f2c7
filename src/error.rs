use crate::Halogen;
use thiserror::Error;

/// Failures that leave a fragment without any name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("No carbon atoms found in the input")]
    NoCarbonAtoms,
    #[error("Cyclic edge added between atoms {first} and {second}; ring naming is not supported")]
    CyclicMolecule { first: usize, second: usize },
    #[error("Ether fragment {index} could not be named")]
    EtherFragment {
        index: usize,
        #[source]
        source: Box<NamingError>,
    },
}

/// Problems that were tolerated while producing a best-effort name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingIssue {
    #[error("')' at position {position} has no matching '('")]
    UnmatchedClose { position: usize },
    #[error("{open} branch(es) left open at end of formula")]
    UnclosedBranch { open: usize },
    #[error("Unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter { position: usize, character: char },
    #[error("Main chain of {0} carbons has no root name")]
    UnsupportedChainLength(usize),
    #[error("Branch at locant {locant} with {carbons} carbon(s) has no substituent name")]
    UnsupportedBranch { locant: usize, carbons: usize },
    #[error("Halogen {halogen} at locant {locant} named generically as halo")]
    UnsupportedHalogen { locant: usize, halogen: Halogen },
}
