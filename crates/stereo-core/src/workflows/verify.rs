use super::assign::{apply_skip_policy, derive_center};
use super::config::{AssignmentConfig, CenterRequest};
use super::error::AssignmentError;
use crate::core::models::molecule::Molecule;
use crate::core::stereo::parity::{ParityRecord, SignClass};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument, warn};

/// Outcome of comparing a declared parity with the one derived from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Both sides are chiral and agree on handedness.
    Consistent,
    /// Both sides are chiral and disagree on handedness.
    Inverted,
    /// At least one side is below the chirality threshold.
    Indeterminate,
}

impl Verdict {
    pub fn from_classes(declared: SignClass, derived: SignClass) -> Self {
        match (declared, derived) {
            (SignClass::Zero, _) | (_, SignClass::Zero) => Verdict::Indeterminate,
            (a, b) if a == b => Verdict::Consistent,
            _ => Verdict::Inverted,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Consistent => "consistent",
                Self::Inverted => "inverted",
                Self::Indeterminate => "indeterminate",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub label: String,
    /// The declared record, rearranged into the request's substituent ordering.
    pub declared: ParityRecord,
    pub derived: ParityRecord,
    pub verdict: Verdict,
}

fn verify_center(
    molecule: &Molecule,
    request: &CenterRequest,
    declared: &ParityRecord,
) -> Result<Verification, AssignmentError> {
    let declared = declared
        .reordered(&request.refs)
        .map_err(AssignmentError::parity(&request.label))?;
    let derived = derive_center(molecule, request)?;
    let verdict = Verdict::from_classes(declared.sign_class(), derived.sign_class());
    Ok(Verification {
        label: request.label.clone(),
        declared,
        derived,
        verdict,
    })
}

/// Checks every request that carries a declared parity against its geometry.
///
/// The declared record may use any ordering of the center's four substituents; it is
/// rearranged into the request's ordering before the sign classes are compared.
/// Requests without a declared parity are ignored.
///
/// # Errors
///
/// [`AssignmentError::Parity`] if a declared record names substituents other than the
/// request's, plus every failure [`assign_parities`](super::assign::assign_parities)
/// can report.
#[instrument(skip_all, name = "verify_parities", fields(centers = config.centers.len()))]
pub fn verify_parities(
    molecule: &Molecule,
    config: &AssignmentConfig,
) -> Result<Vec<Verification>, AssignmentError> {
    info!("Verifying declared parities against geometry.");

    let results: Vec<Result<Option<Verification>, AssignmentError>> = config
        .centers
        .par_iter()
        .filter_map(|request| {
            let declared = request.declared.as_ref()?;
            let checked = verify_center(molecule, request, declared);
            Some(apply_skip_policy(checked, config.skip_incomplete))
        })
        .collect();

    let verifications: Vec<Verification> = results
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    for inverted in verifications.iter().filter(|v| v.verdict == Verdict::Inverted) {
        warn!(
            center = inverted.label.as_str(),
            declared = inverted.declared.value(),
            derived = inverted.derived.value(),
            "Declared parity is inverted relative to geometry."
        );
    }

    info!(verified = verifications.len(), "Parity verification complete.");
    Ok(verifications)
}
