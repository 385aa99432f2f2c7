mod formula;
pub use formula::*;

mod ether;
pub use ether::*;
