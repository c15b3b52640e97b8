use crate::core::stereo::parity::ParityError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("Stereocenter '{label}': {source}")]
    Parity {
        label: String,
        #[source]
        source: ParityError,
    },

    #[error("Substituent '{id}' of stereocenter '{label}' has no 3-D coordinates")]
    MissingCoordinates { label: String, id: String },

    #[error("Substituent '{id}' of stereocenter '{label}' has non-finite coordinates")]
    NonFiniteCoordinate { label: String, id: String },
}

impl AssignmentError {
    pub(crate) fn parity(label: &str) -> impl FnOnce(ParityError) -> Self + '_ {
        move |source| AssignmentError::Parity {
            label: label.to_string(),
            source,
        }
    }

    /// Whether the failure comes from missing or unusable coordinates rather than from
    /// a malformed stereocenter description.
    pub fn is_incomplete_geometry(&self) -> bool {
        matches!(
            self,
            AssignmentError::MissingCoordinates { .. } | AssignmentError::NonFiniteCoordinate { .. }
        )
    }
}
