//! # stereokit
//!
//! Stereochemical parity records and the 3-D vector algebra used to derive the
//! handedness of a four-substituent center from atomic coordinates.
//!
//! ## Architectural Philosophy
//!
//! The library follows a two-layer split so the pure value algebra stays free of
//! any orchestration concerns.
//!
//! - **[`core`]: The Foundation.** Stateless value types: the [`Vector3`](core::geometry::vector::Vector3)
//!   algebra kernel, the [`ParityRecord`](core::stereo::parity::ParityRecord) with its
//!   permutation-parity reordering, and an in-memory [`Molecule`](core::models::molecule::Molecule)
//!   collaborator that resolves substituent identifiers to atoms and positions.
//!
//! - **[`workflows`]: The Public API.** Higher-level procedures that compose the two
//!   core components through the scalar parity value: deriving parity records from
//!   geometry and verifying declared records against geometry.
//!
//! The library never reads or writes files; it operates on in-memory data only.

pub mod core;
pub mod workflows;
