// Rust guideline compliant 2026-10-19

//! CLI entry point for the Markdown-to-PDF pre-commit hook.

use clap::Parser;
use mdpdf_hooks::terminal::should_use_color;
use mdpdf_hooks::{generate_md_pdfs_hook, logging, Cli, TerminalReporter};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing(cli.effective_log_level())?;

    let working_dir = std::env::current_dir()?;
    let mut reporter = TerminalReporter::stdout(should_use_color(cli.no_color));
    let code = generate_md_pdfs_hook(&cli, &working_dir, &mut reporter)?;
    Ok(ExitCode::from(u8::try_from(code)?))
}
