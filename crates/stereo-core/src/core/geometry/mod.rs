//! # Geometry Module
//!
//! Three-component vector algebra and the derived quantities chirality is built from.
//!
//! - [`vector`] - The `Vector3` value type with tolerance-gated degenerate cases
//! - [`frame`] - Orthonormal local frames built from a single direction
//! - [`chirality`] - Signed chiral volume of four points

pub mod chirality;
pub mod frame;
pub mod vector;
