use crate::generators::naming::is_valid_go_identifier;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid Go package name: {0:?}. Run vueg through go generate or pass --gopackage")]
    InvalidPackage(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Settings for one generation run, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Directory scanned for `.vue` files and receiving the generated `.go` files
    pub template_dir: PathBuf,

    /// Package clause written into every generated file
    pub go_package: String,

    /// Go file whose `//go:generate` directive started this run.
    /// Generated files must never overwrite it.
    pub go_file: Option<String>,

    /// Enable verbose output
    pub verbose: Option<bool>,

    /// Enable debug output
    pub debug: Option<bool>,
}

fn default_template_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            go_package: String::new(),
            go_file: None,
            verbose: Some(false),
            debug: Some(false),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration for the given package with defaults
    pub fn new(go_package: &str) -> Self {
        Self {
            go_package: go_package.to_string(),
            ..Self::default()
        }
    }

    pub fn with_template_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.template_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_go_file(mut self, go_file: &str) -> Self {
        self.go_file = Some(go_file.to_string());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_go_identifier(&self.go_package) {
            return Err(ConfigError::InvalidPackage(self.go_package.clone()));
        }

        if let Some(go_file) = &self.go_file {
            if go_file.is_empty() || Path::new(go_file).file_name().is_none() {
                return Err(ConfigError::InvalidConfig(format!(
                    "Invalid invoking file name: {:?}",
                    go_file
                )));
            }
        }

        if !self.template_dir.is_dir() {
            return Err(ConfigError::InvalidConfig(format!(
                "Template directory does not exist: {}",
                self.template_dir.display()
            )));
        }

        Ok(())
    }

    /// Name of the invoking file without any directory part
    pub fn invoking_file_name(&self) -> Option<&str> {
        self.go_file
            .as_deref()
            .and_then(|f| Path::new(f).file_name())
            .and_then(|f| f.to_str())
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    /// Get effective debug setting
    pub fn is_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }
}
