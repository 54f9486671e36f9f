//! Shared helpers for command handlers.

use netdocs_core::WrittenDocument;

use crate::error::CliError;
use crate::output::DocumentRow;

/// Prompt for confirmation unless `--yes` was given.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

pub fn written_rows(written: &[WrittenDocument]) -> Vec<DocumentRow> {
    written
        .iter()
        .map(|doc| DocumentRow::new(doc.audience, doc.path.display(), doc.bytes))
        .collect()
}
