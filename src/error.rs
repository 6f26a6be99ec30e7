use crate::analysis::extractor::StructuralError;
use crate::analysis::fragment_parser::ParseError;
use crate::analysis::minifier::MinifyError;
use crate::build::output_manager::OutputError;
use crate::build::project_scanner::ScanError;
use crate::interface::config::ConfigError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File system error on {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Minification failed for {}: {source}", .path.display())]
    Minification {
        path: PathBuf,
        #[source]
        source: MinifyError,
    },

    #[error("Failed to parse markup in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid template {}: {source}", .path.display())]
    Structural {
        path: PathBuf,
        #[source]
        source: StructuralError,
    },

    #[error("File conflict on name: {file_name}")]
    Conflict { file_name: String },

    #[error("Code generation failed: {0}")]
    CodeGeneration(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::Io { path, source } => Error::FileSystem { path, source },
        }
    }
}

impl From<OutputError> for Error {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::Io { path, source } => Error::FileSystem { path, source },
        }
    }
}
