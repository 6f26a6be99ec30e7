pub mod cli;
pub mod config;
pub mod output;

use crate::build::BuildSystem;
use crate::error::Result;
use crate::models::GeneratedFile;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Compile every template of the configured directory
pub fn generate_from_config(config: &config::GenerateConfig) -> Result<Vec<GeneratedFile>> {
    config.validate()?;

    let build_system = BuildSystem::new(config.is_verbose(), config.is_debug());
    build_system.run_generation(config)
}
