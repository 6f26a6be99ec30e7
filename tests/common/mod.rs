#![allow(dead_code)]
/// Common test utilities and helpers
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vueg::{BuildSystem, GenerateConfig, GeneratedFile};

/// A Go package directory holding Vue templates
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file into the package directory
    pub fn write_file(&self, name: &str, content: &str) -> &Self {
        fs::write(self.temp_dir.path().join(name), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Configuration as `go generate` would supply it from `main.go`
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig::new("main")
            .with_template_dir(self.path())
            .with_go_file("main.go")
    }

    /// Run the generator over the package directory
    pub fn generate(&self) -> vueg::Result<Vec<GeneratedFile>> {
        self.generate_with(&self.config())
    }

    pub fn generate_with(&self, config: &GenerateConfig) -> vueg::Result<Vec<GeneratedFile>> {
        BuildSystem::new(false, false).run_generation(config)
    }

    /// Read a generated file
    pub fn read_file(&self, filename: &str) -> String {
        fs::read_to_string(self.path().join(filename)).unwrap()
    }

    /// Check if a file exists
    pub fn file_exists(&self, filename: &str) -> bool {
        self.path().join(filename).exists()
    }
}

/// Assert that generated content contains expected string
#[macro_export]
macro_rules! assert_generated_contains {
    ($content:expr, $expected:expr) => {
        assert!(
            $content.contains($expected),
            "Expected generated content to contain:\n{}\n\nBut got:\n{}",
            $expected,
            $content
        );
    };
}
