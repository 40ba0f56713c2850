//! Hydrogen bond restraints for canonical base pairs, from structure file
//! lookup to PLUMED input.

/// The piecewise well/ramp potential and its MATHEVAL rendering.
mod hbond_potential;

/// Built-in atom names and potentials for GC, GU and AU pairs.
mod templates;

/// Single-pass (residue, atom name) lookup over a .gro file.
mod structure_index;

/// From canonical pairs to matched atom numbers.
mod resolve;

/// DISTANCE / MATHEVAL / BIASVALUE directives.
mod plumed;

/// JSON report of what got restrained.
pub mod summary;

mod error;

pub use error::*;
pub use hbond_potential::*;
pub use templates::*;
pub use structure_index::*;
pub use resolve::*;
pub use plumed::*;

