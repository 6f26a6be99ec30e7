use crate::models::TemplateFile;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Finds the Vue templates of a single directory
pub struct TemplateScanner {
    current_dir: PathBuf,
}

impl TemplateScanner {
    pub fn with_current_dir<P: AsRef<Path>>(path: P) -> Self {
        Self {
            current_dir: path.as_ref().to_path_buf(),
        }
    }

    /// List the `.vue` files directly inside the directory, sorted by name.
    ///
    /// Subdirectories are not visited, matching how `go generate` runs one
    /// package directory at a time.
    pub fn discover_templates(&self) -> Result<Vec<TemplateFile>, ScanError> {
        let mut templates = Vec::new();

        let walker = WalkDir::new(&self.current_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.current_dir.clone());
                ScanError::Io {
                    path,
                    source: e.into(),
                }
            })?;

            // is_dir follows symlinks, so linked directories are skipped too
            if entry.file_type().is_dir() || entry.path().is_dir() {
                continue;
            }

            if let Some(template) = TemplateFile::from_path(entry.path()) {
                templates.push(template);
            }
        }

        Ok(templates)
    }
}
