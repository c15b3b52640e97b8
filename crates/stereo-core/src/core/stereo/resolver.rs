//! Collaborator contracts for resolving substituent identifiers.
//!
//! A parity record only stores identifiers. Anything that can map an identifier back
//! to a substituent record, and optionally to a 3-D position, plugs in here.

use nalgebra::Point3;
use std::collections::HashMap;

/// Something that can appear as a substituent around a stereocenter.
pub trait Substituent {
    fn substituent_id(&self) -> &str;
}

/// A source of 3-D coordinates for a substituent.
pub trait HasPosition {
    /// The position in Angstroms, or `None` if the substituent has no coordinates.
    fn position(&self) -> Option<Point3<f64>>;
}

/// Maps identifiers to substituent records.
///
/// No ordering guarantee is required from implementors; callers impose their own.
pub trait SubstituentResolver {
    type Substituent;

    fn lookup(&self, id: &str) -> Option<&Self::Substituent>;
}

impl<T> SubstituentResolver for HashMap<String, T> {
    type Substituent = T;

    fn lookup(&self, id: &str) -> Option<&T> {
        self.get(id)
    }
}
