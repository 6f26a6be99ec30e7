pub mod output_manager;
pub mod project_scanner;

use crate::analysis::TemplateAnalyzer;
use crate::error::Result;
use crate::generators::{check_collision, GoSourceGenerator};
use crate::interface::config::GenerateConfig;
use crate::interface::output::{summarize, Logger, ProgressReporter};
use crate::models::{GeneratedFile, TemplateFile};

pub use output_manager::*;
pub use project_scanner::*;

/// Drives one `go generate` run over a template directory
pub struct BuildSystem {
    logger: Logger,
}

impl BuildSystem {
    pub fn new(verbose: bool, debug: bool) -> Self {
        Self {
            logger: Logger::new(verbose, debug),
        }
    }

    /// Run the complete generation process with the default backends
    pub fn run_generation(&self, config: &GenerateConfig) -> Result<Vec<GeneratedFile>> {
        let analyzer = TemplateAnalyzer::new(self.logger.clone());
        self.run_with_analyzer(config, &analyzer)
    }

    /// Run the complete generation process.
    ///
    /// Templates are compiled one after another in name order. The first
    /// failure stops the run; files written before it are left in place.
    pub fn run_with_analyzer(
        &self,
        config: &GenerateConfig,
        analyzer: &TemplateAnalyzer,
    ) -> Result<Vec<GeneratedFile>> {
        let mut reporter = ProgressReporter::new(self.logger.clone(), 3);

        reporter.start_step("Discovering templates");
        let scanner = TemplateScanner::with_current_dir(&config.template_dir);
        let templates = scanner
            .discover_templates()
            .inspect_err(|e| reporter.fail_step(&e.to_string()))?;
        reporter.complete_step(Some(&format!(
            "Found {} templates in {}",
            templates.len(),
            config.template_dir.display()
        )));

        reporter.start_step("Checking output names");
        self.check_output_names(&templates, config)
            .inspect_err(|e| reporter.fail_step(&e.to_string()))?;
        reporter.complete_step(None);

        reporter.start_step("Compiling templates");
        let generator = GoSourceGenerator::new(
            &config.go_package,
            config.invoking_file_name(),
            OutputManager::new(&config.template_dir),
            self.logger.clone(),
        )?;

        let mut generated = Vec::with_capacity(templates.len());
        for template in &templates {
            reporter.update_progress(&format!("Compiling {}", template.file_name));
            let file = analyzer
                .analyze(template)
                .and_then(|payload| generator.emit(template, &payload))
                .inspect_err(|e| reporter.fail_step(&e.to_string()))?;
            generated.push(file);
        }
        reporter.complete_step(Some(&format!("Wrote {} Go files", generated.len())));

        reporter.finish(&summarize(&generated));
        Ok(generated)
    }

    /// Reject the whole batch before anything is written when one of its
    /// outputs would replace the invoking Go file
    fn check_output_names(&self, templates: &[TemplateFile], config: &GenerateConfig) -> Result<()> {
        let invoking_file = config.invoking_file_name();
        if invoking_file.is_none() {
            self.logger
                .warning("No invoking Go file given (GOFILE); skipping the overwrite check");
        }

        for template in templates {
            check_collision(template, invoking_file)?;
            self.logger.verbose(&format!(
                "  {} → {}",
                template.file_name,
                template.output_file_name()
            ));
        }

        Ok(())
    }
}
