use crate::core::stereo::parity::{ParityError, ParityRecord, checked_refs};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// One stereocenter to assign: its four substituents in the ordering the derived
/// parity value will be expressed against.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterRequest {
    pub label: String,
    pub refs: [String; 4],
    /// A parity record declared by the caller, possibly against a different ordering
    /// of the same four substituents.
    pub declared: Option<ParityRecord>,
}

impl CenterRequest {
    /// # Errors
    ///
    /// Returns [`ParityError::InvalidArity`] or [`ParityError::DuplicateReference`]
    /// for a malformed substituent list.
    pub fn new<S: AsRef<str>>(label: &str, refs: &[S]) -> Result<Self, ParityError> {
        Ok(Self {
            label: label.to_string(),
            refs: checked_refs(refs)?,
            declared: None,
        })
    }

    pub fn with_declared(mut self, declared: ParityRecord) -> Self {
        self.declared = Some(declared);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentConfig {
    pub centers: Vec<CenterRequest>,
    /// Skip centers whose substituents lack usable coordinates instead of failing.
    pub skip_incomplete: bool,
}

#[derive(Default)]
pub struct AssignmentConfigBuilder {
    centers: Option<Vec<CenterRequest>>,
    skip_incomplete: Option<bool>,
}

impl AssignmentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn centers(mut self, centers: Vec<CenterRequest>) -> Self {
        self.centers = Some(centers);
        self
    }
    pub fn add_center(mut self, center: CenterRequest) -> Self {
        self.centers.get_or_insert_with(Vec::new).push(center);
        self
    }
    pub fn skip_incomplete(mut self, skip: bool) -> Self {
        self.skip_incomplete = Some(skip);
        self
    }

    pub fn build(self) -> Result<AssignmentConfig, ConfigError> {
        Ok(AssignmentConfig {
            centers: self
                .centers
                .ok_or(ConfigError::MissingParameter("centers"))?,
            skip_incomplete: self.skip_incomplete.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(label: &str) -> CenterRequest {
        CenterRequest::new(label, &["a", "b", "c", "d"]).unwrap()
    }

    #[test]
    fn builder_succeeds_with_centers() {
        let config = AssignmentConfigBuilder::new()
            .centers(vec![center("C1")])
            .skip_incomplete(true)
            .build()
            .unwrap();
        assert_eq!(config.centers.len(), 1);
        assert!(config.skip_incomplete);
    }

    #[test]
    fn builder_defaults_to_strict_geometry() {
        let config = AssignmentConfigBuilder::new()
            .add_center(center("C1"))
            .add_center(center("C2"))
            .build()
            .unwrap();
        assert_eq!(config.centers.len(), 2);
        assert!(!config.skip_incomplete);
    }

    #[test]
    fn builder_fails_without_centers() {
        let result = AssignmentConfigBuilder::new().skip_incomplete(true).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("centers")));
    }

    #[test]
    fn center_request_validates_refs() {
        assert_eq!(
            CenterRequest::new("C1", &["a", "b", "c"]),
            Err(ParityError::InvalidArity { found: 3 })
        );
        assert_eq!(
            CenterRequest::new("C1", &["a", "b", "b", "c"]),
            Err(ParityError::DuplicateReference { id: "b".into() })
        );
    }

    #[test]
    fn with_declared_attaches_record() {
        let declared = ParityRecord::new(&["b", "a", "c", "d"], -0.8).unwrap();
        let request = center("C1").with_declared(declared.clone());
        assert_eq!(request.declared, Some(declared));
    }
}
