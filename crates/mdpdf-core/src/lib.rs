// Rust guideline compliant 2026-10-19

//! mdpdf Core Library
//!
//! This crate provides the building blocks for turning Markdown files into PDFs
//! through an external conversion tool:
//! - Invocation requests and Markdown file selection
//! - External converter invocation and outcome reporting
//! - Sequential dispatch with a success/failure tally
//! - Configuration loading and error types

pub mod config;
pub mod converter;
pub mod dispatch;
pub mod error;
pub mod request;

pub use config::Config;
pub use converter::{pdf_destination, ConversionOutcome, Converter, ExternalConverter};
pub use dispatch::{process_markdown_files, DispatchSummary, NullReporter, Reporter};
pub use error::{Error, Result};
pub use request::{FileFilter, InvocationRequest, MARKDOWN_EXTENSION};
