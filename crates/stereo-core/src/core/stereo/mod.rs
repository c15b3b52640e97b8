//! # Stereochemistry Module
//!
//! Symbolic representation of tetrahedral chirality.
//!
//! - [`parity`] - `ParityRecord`, its sign classification and the permutation-parity reordering
//! - [`resolver`] - Contracts for collaborators that resolve identifiers and supply coordinates

pub mod parity;
pub mod resolver;
