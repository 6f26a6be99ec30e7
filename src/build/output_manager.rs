use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes generated files next to the templates they come from
pub struct OutputManager {
    output_dir: PathBuf,
}

impl OutputManager {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Full path a generated file with this name is written to
    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// Write a file, fully replacing any previous content.
    ///
    /// The content goes to a temporary sibling first and is renamed into
    /// place, so an interrupted run never leaves a half-written Go file.
    pub fn write_file(&self, filename: &str, content: &str) -> Result<PathBuf, OutputError> {
        let file_path = self.file_path(filename);
        let temp_path = self.file_path(&format!(".{}.tmp", filename));

        fs::write(&temp_path, content).map_err(|source| OutputError::Io {
            path: temp_path.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&temp_path, &file_path) {
            fs::remove_file(&temp_path).ok();
            return Err(OutputError::Io {
                path: file_path,
                source,
            });
        }

        Ok(file_path)
    }
}
