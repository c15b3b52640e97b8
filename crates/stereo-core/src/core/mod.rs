//! # Core Module
//!
//! The computational core of stereokit.
//!
//! - **Geometry** ([`geometry`]) - The immutable `Vector3` kernel, local frames and chiral volumes
//! - **Stereochemistry** ([`stereo`]) - `ParityRecord`, its sign classification and the resolver contracts
//! - **Molecular Representation** ([`models`]) - Atoms and the molecule collaborator that resolves them
//!
//! The two kernels are independent of each other: a parity record only ever sees the
//! scalar value that geometry produced, never the vectors it came from.

pub mod geometry;
pub mod models;
pub mod stereo;
