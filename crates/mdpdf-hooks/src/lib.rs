// Rust guideline compliant 2026-10-19

//! mdpdf Git Hooks
//!
//! This crate provides the `generate-md-pdfs` pre-commit hook, which converts
//! the staged Markdown files handed over by the hook runner into PDFs.

pub mod cli;
pub mod logging;
pub mod pre_commit;
pub mod terminal;

pub use cli::Cli;
pub use pre_commit::generate_md_pdfs_hook;
pub use terminal::TerminalReporter;
