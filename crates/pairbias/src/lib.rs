//! # pairbias
//!
//! Hydrogen bond restraints for user-selected base pairs, written as
//! PLUMED input.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod bias_parsers;
pub mod fix;

pub mod pairs {
    pub use ::pb_pairs::*;
}

pub mod bias {
    pub use ::pb_bias::*;
}
