use crate::models::{MarkupElement, MarkupNode, TEMPLATE_WRAPPER_TAG};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    #[error("missing template wrapper")]
    MissingTemplateWrapper,
    #[error("missing payload element")]
    MissingPayloadElement,
}

/// Find the first top-level `<template>` element of a fragment.
///
/// Only top-level nodes are considered; a `<template>` nested inside another
/// element is part of some payload, not a wrapper.
pub fn find_template_root(nodes: &[MarkupNode]) -> Result<&MarkupElement, StructuralError> {
    nodes
        .iter()
        .filter_map(MarkupNode::as_element)
        .find(|element| element.is(TEMPLATE_WRAPPER_TAG))
        .ok_or(StructuralError::MissingTemplateWrapper)
}

/// Return the element a Vue template defines.
///
/// For example:
///
/// ```text
/// <template>
///     <div>{{ Message }}</div>
/// </template>
/// ```
///
/// yields the `div`. Further wrappers and further children are ignored.
pub fn extract_payload(nodes: &[MarkupNode]) -> Result<&MarkupElement, StructuralError> {
    find_template_root(nodes)?
        .child_elements()
        .next()
        .ok_or(StructuralError::MissingPayloadElement)
}
