use crate::models::{MarkupElement, MarkupNode};
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("fragment has no container element")]
    MissingContainer,
}

/// Result of parsing a markup fragment
#[derive(Debug, Clone, Default)]
pub struct ParsedFragment {
    /// Top-level nodes in document order
    pub nodes: Vec<MarkupNode>,
    /// Recoverable parse errors reported by the parser
    pub warnings: Vec<String>,
}

/// Parses markup that is not a full document into a forest of nodes
pub trait FragmentParser {
    fn parse_fragment(&self, text: &str) -> Result<ParsedFragment, ParseError>;
}

/// HTML5 fragment parser backed by `scraper`.
///
/// The text is parsed under the implicit body-level container that html5ever
/// uses for fragments. html5ever keeps the contents of a `<template>` in a
/// separate fragment node; those are flattened into the element's children.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFragmentParser;

impl HtmlFragmentParser {
    pub fn new() -> Self {
        Self
    }

    fn convert_children(element: ElementRef<'_>) -> Vec<MarkupNode> {
        let mut nodes = Vec::new();
        Self::collect_nodes(*element, &mut nodes);
        nodes
    }

    fn collect_nodes(parent: NodeRef<'_, Node>, nodes: &mut Vec<MarkupNode>) {
        for child in parent.children() {
            match child.value() {
                Node::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        nodes.push(MarkupNode::Element(Self::convert_element(element)));
                    }
                }
                Node::Text(text) => nodes.push(MarkupNode::Text(String::from(&**text))),
                Node::Comment(comment) => {
                    nodes.push(MarkupNode::Comment(String::from(&**comment)))
                }
                // <template> contents live in a fragment node under the element
                Node::Fragment => Self::collect_nodes(child, nodes),
                _ => {}
            }
        }
    }

    fn convert_element(element: ElementRef<'_>) -> MarkupElement {
        MarkupElement {
            name: element.value().name().to_string(),
            outer_html: element.html(),
            children: Self::convert_children(element),
        }
    }
}

impl FragmentParser for HtmlFragmentParser {
    fn parse_fragment(&self, text: &str) -> Result<ParsedFragment, ParseError> {
        let fragment = Html::parse_fragment(text);

        // html5ever roots every fragment in a synthetic <html> element
        let container = fragment
            .tree
            .root()
            .children()
            .find_map(ElementRef::wrap)
            .ok_or(ParseError::MissingContainer)?;

        Ok(ParsedFragment {
            nodes: Self::convert_children(container),
            warnings: fragment.errors.iter().map(|e| e.to_string()).collect(),
        })
    }
}
