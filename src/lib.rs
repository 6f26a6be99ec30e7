//! # vueg
//!
//! Compile Vue template files into Go string constants.
//!
//! `vueg` is meant to be run by `go generate`. It scans the package
//! directory for `*.vue` files, minifies each one, takes the element inside
//! its `<template>` wrapper and writes a Go file declaring that markup as an
//! unexported constant, ready to hand to a Vue template option.
//!
//! ## Quick Start
//!
//! ```go
//! package main
//!
//! //go:generate vueg
//!
//! func main() {
//!     vue.New(vue.El("#app"), vue.Template(mainTmpl))
//! }
//! ```
//!
//! With a `mainTmpl.vue` next to it:
//!
//! ```html
//! <template>
//!     <div>{{ Message }}</div>
//! </template>
//! ```
//!
//! `go generate` produces `mainTmpl.go`:
//!
//! ```go
//! // The vueg command generated this source from file: mainTmpl.vue, do not edit.
//!
//! package main
//!
//! const mainTmpl = "<div>{{ Message }}</div>"
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,no_run
//! use vueg::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig::new("main").with_go_file("main.go");
//! let files = generate_from_config(&config)?;
//! # Ok::<(), vueg::Error>(())
//! ```

pub mod analysis;
pub mod build;
mod error;
pub mod generators;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

pub use interface::config::GenerateConfig;
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};

pub use analysis::TemplateAnalyzer;
pub use build::BuildSystem;
