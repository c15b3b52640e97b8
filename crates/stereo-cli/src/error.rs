use std::path::PathBuf;
use stereokit::core::models::molecule::MoleculeError;
use stereokit::core::stereo::parity::ParityError;
use stereokit::workflows::config::ConfigError;
use stereokit::workflows::error::AssignmentError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    #[error(transparent)]
    Parity(#[from] ParityError),

    #[error("Invalid molecule: {0}")]
    Molecule(#[from] MoleculeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("{count} declared parities are inverted relative to geometry")]
    InvertedParity { count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
