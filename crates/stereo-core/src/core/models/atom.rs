use crate::core::stereo::resolver::{HasPosition, Substituent};
use nalgebra::Point3;

/// An atom that may take part in a stereocenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The identifier parity records refer to (e.g., "a1", "C12").
    pub id: String,
    /// Element symbol (e.g., "C", "Cl").
    pub element: String,
    /// Cartesian coordinates in Angstroms, if known.
    pub position: Option<Point3<f64>>,
}

impl Atom {
    /// Creates an atom without coordinates.
    pub fn new(id: &str, element: &str) -> Self {
        Self {
            id: id.to_string(),
            element: element.to_string(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: Point3<f64>) -> Self {
        self.position = Some(position);
        self
    }

    /// Whether the atom has coordinates and all of them are finite.
    pub fn has_finite_position(&self) -> bool {
        self.position
            .is_some_and(|p| p.coords.iter().all(|c| c.is_finite()))
    }
}

impl Substituent for Atom {
    fn substituent_id(&self) -> &str {
        &self.id
    }
}

impl HasPosition for Atom {
    fn position(&self) -> Option<Point3<f64>> {
        self.position
    }
}
