//! # Workflows Module
//!
//! High-level procedures that compose the geometry kernel and parity records.
//!
//! The two core components never depend on each other directly; the workflows here
//! connect them through the scalar parity value. Geometry produces a chiral volume,
//! which becomes the value of a parity record expressed against the requested
//! substituent ordering.
//!
//! - **Configuration** ([`config`]) - Stereocenter requests and the builder that validates them
//! - **Assignment** ([`assign`]) - Deriving parity records from atomic coordinates
//! - **Verification** ([`verify`]) - Checking declared parity records against geometry
//! - **Errors** ([`error`]) - Failures reported per stereocenter

pub mod assign;
pub mod config;
pub mod error;
pub mod verify;
