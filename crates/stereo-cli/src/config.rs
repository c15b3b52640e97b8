use crate::error::{CliError, Result};
use nalgebra::Point3;
use serde::Deserialize;
use std::path::Path;
use stereokit::core::models::atom::Atom;
use stereokit::core::models::molecule::Molecule;
use stereokit::core::stereo::parity::ParityRecord;
use stereokit::workflows::config::{AssignmentConfig, AssignmentConfigBuilder, CenterRequest};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOptions {
    #[serde(rename = "skip-incomplete")]
    skip_incomplete: Option<bool>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct AtomEntry {
    id: String,
    element: String,
    position: Option<[f64; 3]>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct CenterEntry {
    label: Option<String>,
    refs: Vec<String>,
    declared: Option<ParityRecord>,
}

/// The TOML description of a molecule and the stereocenters to process.
///
/// ```toml
/// [options]
/// skip-incomplete = false
///
/// [[atom]]
/// id = "F"
/// element = "F"
/// position = [1.0, 1.0, 1.0]
///
/// [[center]]
/// label = "C1"
/// refs = ["F", "Cl", "Br", "H"]
/// declared = { refs = ["Cl", "F", "Br", "H"], value = -0.8 }
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    options: Option<PartialOptions>,
    #[serde(default, rename = "atom")]
    atoms: Vec<AtomEntry>,
    #[serde(default, rename = "center")]
    centers: Vec<CenterEntry>,
}

impl InputDocument {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading input description from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Builds the molecule and assignment configuration described by the document.
    ///
    /// `skip_incomplete_override` takes precedence over `options.skip-incomplete`.
    pub fn into_parts(
        self,
        skip_incomplete_override: Option<bool>,
    ) -> Result<(Molecule, AssignmentConfig)> {
        let mut molecule = Molecule::new();
        for entry in self.atoms {
            let mut atom = Atom::new(&entry.id, &entry.element);
            if let Some([x, y, z]) = entry.position {
                atom = atom.with_position(Point3::new(x, y, z));
            }
            molecule.add_atom(atom)?;
        }

        let mut builder = AssignmentConfigBuilder::new().centers(Vec::new());
        for (index, entry) in self.centers.into_iter().enumerate() {
            let label = entry
                .label
                .unwrap_or_else(|| format!("center-{}", index + 1));
            let mut request = CenterRequest::new(&label, &entry.refs)?;
            if let Some(declared) = entry.declared {
                request = request.with_declared(declared);
            }
            builder = builder.add_center(request);
        }

        let skip_incomplete = skip_incomplete_override
            .or(self.options.and_then(|o| o.skip_incomplete))
            .unwrap_or(false);
        let config = builder.skip_incomplete(skip_incomplete).build()?;

        debug!(
            atoms = molecule.len(),
            centers = config.centers.len(),
            skip_incomplete,
            "Input description resolved."
        );
        Ok((molecule, config))
    }
}
