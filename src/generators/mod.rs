pub mod naming;
pub mod templates;

use crate::build::output_manager::OutputManager;
use crate::error::{Error, Result};
use crate::interface::output::Logger;
use crate::models::{GeneratedConstant, GeneratedFile, MarkupElement, TemplateFile};
use naming::{constant_name, is_valid_go_identifier};
use templates::{create_template_engine, render_constant, ConstantContext};
use tera::Tera;

/// Refuse to generate a file named like the Go file that invoked the run
pub fn check_collision(template: &TemplateFile, invoking_file: Option<&str>) -> Result<()> {
    let output_file = template.output_file_name();
    match invoking_file {
        Some(invoking) if invoking == output_file => Err(Error::Conflict {
            file_name: output_file,
        }),
        _ => Ok(()),
    }
}

/// Emits one Go source file per template
pub struct GoSourceGenerator {
    tera: Tera,
    go_package: String,
    invoking_file: Option<String>,
    output: OutputManager,
    logger: Logger,
}

impl GoSourceGenerator {
    pub fn new(
        go_package: &str,
        invoking_file: Option<&str>,
        output: OutputManager,
        logger: Logger,
    ) -> Result<Self> {
        Ok(Self {
            tera: create_template_engine().map_err(Error::CodeGeneration)?,
            go_package: go_package.to_string(),
            invoking_file: invoking_file.map(str::to_string),
            output,
            logger,
        })
    }

    /// Build the constant a template compiles to
    pub fn constant_for(template: &TemplateFile, payload: &MarkupElement) -> GeneratedConstant {
        GeneratedConstant {
            name: constant_name(&template.base_name),
            value: payload.outer_html.clone(),
        }
    }

    /// Render the full Go source for a constant
    pub fn render(&self, template: &TemplateFile, constant: &GeneratedConstant) -> Result<String> {
        render_constant(
            &self.tera,
            &ConstantContext {
                source_file: &template.file_name,
                package: &self.go_package,
                name: &constant.name,
                value: &constant.value,
            },
        )
        .map_err(Error::CodeGeneration)
    }

    /// Write the Go file for a template's payload element
    pub fn emit(&self, template: &TemplateFile, payload: &MarkupElement) -> Result<GeneratedFile> {
        let output_file = template.output_file_name();
        check_collision(template, self.invoking_file.as_deref())?;

        let constant = Self::constant_for(template, payload);
        if !is_valid_go_identifier(&constant.name) {
            self.logger.warning(&format!(
                "{}: constant name {:?} is not a valid Go identifier",
                template.file_name, constant.name
            ));
        }

        let source = self.render(template, &constant)?;
        let output_path = self.output.write_file(&output_file, &source)?;
        self.logger.debug(&format!(
            "Wrote {} ({} bytes)",
            output_path.display(),
            source.len()
        ));

        Ok(GeneratedFile {
            template: template.clone(),
            output_path,
            constant,
        })
    }
}
