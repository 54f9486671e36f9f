//! Run summary and warning output.
//!
//! The document table goes to stdout via `tabled`; warnings go to stderr,
//! colored with `owo-colors` when enabled.

use std::io::{self, IsTerminal, Write};

use bytesize::ByteSize;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::ColorMode;

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

#[derive(Tabled)]
pub struct DocumentRow {
    #[tabled(rename = "Audience")]
    pub audience: String,
    #[tabled(rename = "Document")]
    pub document: String,
    #[tabled(rename = "Size")]
    pub size: String,
}

impl DocumentRow {
    pub fn new(audience: impl ToString, document: impl ToString, bytes: usize) -> Self {
        Self {
            audience: audience.to_string(),
            document: document.to_string(),
            size: format_size(bytes),
        }
    }
}

fn format_size(bytes: usize) -> String {
    ByteSize::b(u64::try_from(bytes).unwrap_or(u64::MAX)).to_string()
}

pub fn render_table(rows: &[DocumentRow]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print non-fatal warnings to stderr. Shown even in quiet mode.
pub fn print_warnings(warnings: &[String], color: bool) {
    let mut stderr = io::stderr().lock();
    for warning in warnings {
        if color {
            let _ = writeln!(stderr, "{} {warning}", "warning:".yellow().bold());
        } else {
            let _ = writeln!(stderr, "warning: {warning}");
        }
    }
}
