//! # Core Models Module
//!
//! In-memory molecular data that stereochemistry operates on.
//!
//! - [`atom`] - An atom with a string identifier, element and optional position
//! - [`molecule`] - Slot-map storage of atoms, indexed by identifier
//! - [`ids`] - Stable keys for stored atoms
//!
//! ```ignore
//! use stereokit::core::models::{atom::Atom, molecule::Molecule};
//!
//! let mut molecule = Molecule::new();
//! molecule.add_atom(Atom::new("C1", "C").with_position(Point3::new(0.0, 0.0, 0.0)))?;
//! let c1 = molecule.atom_by_ref("C1");
//! ```

pub mod atom;
pub mod ids;
pub mod molecule;
