use serde::Serialize;
use std::path::{Path, PathBuf};

/// Extension of the Vue template files picked up from the working directory
pub const TEMPLATE_EXTENSION: &str = "vue";

/// Extension of the generated Go source files
pub const GENERATED_EXTENSION: &str = "go";

/// Element wrapping the markup a Vue template defines
pub const TEMPLATE_WRAPPER_TAG: &str = "template";

/// Content type the minifier is registered for
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// A discovered `.vue` file and the names derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateFile {
    pub path: PathBuf,
    /// File name as it appears in the directory, e.g. `hello.vue`
    pub file_name: String,
    /// File name without the template extension, e.g. `hello`
    pub base_name: String,
}

impl TemplateFile {
    /// Build a template from a path, returning `None` when the path does not
    /// carry the template extension or has no usable base name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
            return None;
        }

        let file_name = path.file_name()?.to_str()?.to_string();
        let base_name = path.file_stem()?.to_str()?.to_string();
        if base_name.is_empty() {
            return None;
        }

        Some(Self {
            path: path.to_path_buf(),
            file_name,
            base_name,
        })
    }

    /// Name of the Go file generated for this template, e.g. `hello.go`
    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.base_name, GENERATED_EXTENSION)
    }
}

/// A node of a parsed markup fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(MarkupElement),
    Text(String),
    Comment(String),
}

impl MarkupNode {
    pub fn as_element(&self) -> Option<&MarkupElement> {
        match self {
            MarkupNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    /// Lower-cased local tag name
    pub name: String,
    /// Serialized markup of the element and all of its descendants
    pub outer_html: String,
    pub children: Vec<MarkupNode>,
}

impl MarkupElement {
    pub fn is(&self, tag: &str) -> bool {
        self.name == tag
    }

    /// Element children in document order, skipping text and comments
    pub fn child_elements(&self) -> impl Iterator<Item = &MarkupElement> {
        self.children.iter().filter_map(MarkupNode::as_element)
    }
}

/// The constant declared in a generated Go file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConstant {
    pub name: String,
    pub value: String,
}

/// Outcome of compiling one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub template: TemplateFile,
    pub output_path: PathBuf,
    pub constant: GeneratedConstant,
}
