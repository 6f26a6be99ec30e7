pub mod extractor;
pub mod fragment_parser;
pub mod minifier;

use crate::error::{Error, Result};
use crate::interface::output::Logger;
use crate::models::{MarkupElement, TemplateFile, HTML_CONTENT_TYPE};
use std::fs;

use extractor::extract_payload;
use fragment_parser::{FragmentParser, HtmlFragmentParser};
use minifier::{HtmlMinifier, Minifier};

/// Reads Vue templates and locates the element each one defines
pub struct TemplateAnalyzer {
    minifier: Box<dyn Minifier>,
    parser: Box<dyn FragmentParser>,
    logger: Logger,
}

impl TemplateAnalyzer {
    pub fn new(logger: Logger) -> Self {
        Self::with_capabilities(
            Box::new(HtmlMinifier::new()),
            Box::new(HtmlFragmentParser::new()),
            logger,
        )
    }

    /// Build an analyzer around custom minification and parsing backends
    pub fn with_capabilities(
        minifier: Box<dyn Minifier>,
        parser: Box<dyn FragmentParser>,
        logger: Logger,
    ) -> Self {
        Self {
            minifier,
            parser,
            logger,
        }
    }

    /// Read, minify and parse a template file, returning its payload element
    pub fn analyze(&self, template: &TemplateFile) -> Result<MarkupElement> {
        let raw = fs::read(&template.path).map_err(|e| Error::file_system(&template.path, e))?;
        self.analyze_source(template, &raw)
    }

    /// Same as [`analyze`](Self::analyze) for template text already in memory
    pub fn analyze_source(&self, template: &TemplateFile, raw: &[u8]) -> Result<MarkupElement> {
        let minified = self
            .minifier
            .minify(raw, HTML_CONTENT_TYPE)
            .map_err(|source| Error::Minification {
                path: template.path.clone(),
                source,
            })?;
        self.logger.debug(&format!(
            "Minified {} from {} to {} bytes",
            template.file_name,
            raw.len(),
            minified.len()
        ));

        let fragment = self
            .parser
            .parse_fragment(&minified)
            .map_err(|source| Error::Parse {
                path: template.path.clone(),
                source,
            })?;
        for warning in &fragment.warnings {
            self.logger
                .debug(&format!("{}: recovered from {}", template.file_name, warning));
        }

        let payload = extract_payload(&fragment.nodes).map_err(|source| Error::Structural {
            path: template.path.clone(),
            source,
        })?;

        Ok(payload.clone())
    }
}
