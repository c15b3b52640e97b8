use super::config::{AssignmentConfig, CenterRequest};
use super::error::AssignmentError;
use crate::core::geometry::chirality::chiral_volume;
use crate::core::models::molecule::Molecule;
use crate::core::stereo::parity::{EPSILON, ParityError, ParityRecord, SignClass};
use crate::core::stereo::resolver::HasPosition;
use nalgebra::Point3;
use rayon::prelude::*;
use tracing::{debug, info, instrument, trace, warn};

/// A parity record derived from geometry for one requested stereocenter.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedParity {
    pub label: String,
    pub record: ParityRecord,
}

impl AssignedParity {
    pub fn sign_class(&self) -> SignClass {
        self.record.sign_class()
    }
}

/// Builds a parity record whose value is the chiral volume of `positions`, taken in
/// the ordering of `refs`.
///
/// Volumes smaller in magnitude than [`EPSILON`] are stored as exactly zero.
///
/// # Errors
///
/// [`ParityError::InvalidArity`] if either slice does not hold four entries,
/// [`ParityError::DuplicateReference`] for repeated identifiers.
pub fn parity_from_positions<S: AsRef<str>>(
    refs: &[S],
    positions: &[Point3<f64>],
) -> Result<ParityRecord, ParityError> {
    let [a, b, c, d] = positions else {
        return Err(ParityError::InvalidArity {
            found: positions.len(),
        });
    };
    let volume = chiral_volume(a, b, c, d);
    let value = if volume.abs() < EPSILON { 0.0 } else { volume };
    ParityRecord::new(refs, value)
}

/// Resolves one request's substituents in `molecule` and derives its parity record.
pub(crate) fn derive_center(
    molecule: &Molecule,
    request: &CenterRequest,
) -> Result<ParityRecord, AssignmentError> {
    let label = request.label.as_str();
    let skeleton =
        ParityRecord::new(&request.refs, 0.0).map_err(AssignmentError::parity(label))?;
    let atoms = skeleton
        .resolve_substituents(molecule)
        .map_err(AssignmentError::parity(label))?;

    let mut positions = [Point3::origin(); 4];
    for (slot, atom) in positions.iter_mut().zip(atoms) {
        let position = atom
            .position()
            .ok_or_else(|| AssignmentError::MissingCoordinates {
                label: label.to_string(),
                id: atom.id.clone(),
            })?;
        if !atom.has_finite_position() {
            return Err(AssignmentError::NonFiniteCoordinate {
                label: label.to_string(),
                id: atom.id.clone(),
            });
        }
        *slot = position;
    }

    let record =
        parity_from_positions(&request.refs, &positions).map_err(AssignmentError::parity(label))?;
    trace!(center = label, value = record.value(), "Derived chiral volume.");
    Ok(record)
}

/// Applies the `skip_incomplete` policy to one derivation result.
pub(crate) fn apply_skip_policy<T>(
    result: Result<T, AssignmentError>,
    skip_incomplete: bool,
) -> Result<Option<T>, AssignmentError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if skip_incomplete && e.is_incomplete_geometry() => {
            warn!("Skipping stereocenter: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Derives a parity record from geometry for every requested stereocenter.
///
/// Centers are independent and evaluated in parallel; the output keeps request order.
/// When several centers fail, the error of the first one in request order is returned.
///
/// # Errors
///
/// Any [`AssignmentError`] for a center, except geometry gaps when
/// `config.skip_incomplete` is set (those centers are left out of the output).
#[instrument(skip_all, name = "assign_parities", fields(centers = config.centers.len()))]
pub fn assign_parities(
    molecule: &Molecule,
    config: &AssignmentConfig,
) -> Result<Vec<AssignedParity>, AssignmentError> {
    info!("Assigning parities from geometry.");

    let results: Vec<Result<Option<AssignedParity>, AssignmentError>> = config
        .centers
        .par_iter()
        .map(|request| {
            let derived = derive_center(molecule, request).map(|record| AssignedParity {
                label: request.label.clone(),
                record,
            });
            apply_skip_policy(derived, config.skip_incomplete)
        })
        .collect();

    let assigned: Vec<AssignedParity> = results
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    for parity in assigned.iter().filter(|p| p.record.is_near_planar()) {
        debug!(
            center = parity.label.as_str(),
            value = parity.record.value(),
            "Stereocenter is close to planar."
        );
    }

    info!(
        assigned = assigned.len(),
        skipped = config.centers.len() - assigned.len(),
        "Parity assignment complete."
    );
    Ok(assigned)
}
