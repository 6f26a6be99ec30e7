use crate::models::HTML_CONTENT_TYPE;
use minify_html::Cfg;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinifyError {
    #[error("no minifier registered for content type {0}")]
    UnsupportedContentType(String),
    #[error("minified markup is not valid UTF-8")]
    InvalidEncoding,
}

/// Normalizes raw markup for a declared content type
pub trait Minifier {
    fn minify(&self, input: &[u8], content_type: &str) -> Result<String, MinifyError>;
}

/// HTML minifier backed by `minify-html`.
///
/// End tags are always kept so a later fragment parse can tell an empty
/// element apart from a void one.
pub struct HtmlMinifier {
    cfg: Cfg,
}

impl HtmlMinifier {
    pub fn new() -> Self {
        Self {
            cfg: Cfg {
                keep_closing_tags: true,
                ..Cfg::default()
            },
        }
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, input: &[u8], content_type: &str) -> Result<String, MinifyError> {
        if content_type != HTML_CONTENT_TYPE {
            return Err(MinifyError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }

        let minified = minify_html::minify(input, &self.cfg);
        String::from_utf8(minified).map_err(|_| MinifyError::InvalidEncoding)
    }
}
