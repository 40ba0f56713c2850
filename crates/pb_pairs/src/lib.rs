mod error;
mod nucleotides;
mod pair_spec;

pub use error::*;
pub use nucleotides::*;
pub use pair_spec::*;


/// Residue numbers in .gro files occupy five columns, u32 is plenty. The
/// residue identifier of a structure line is this number immediately
/// followed by the residue name (e.g. "16C").
pub type RESIDX = u32;

