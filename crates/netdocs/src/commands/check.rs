//! `netdocs check`: render and verify every selected document without
//! touching the output directories.

use netdocs_config::load_network;
use netdocs_core::Publisher;

use crate::cli::{CheckArgs, GlobalOpts};
use crate::config::{audiences, resolve_settings};
use crate::error::CliError;
use crate::output::{self, DocumentRow};

pub fn handle(args: &CheckArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let settings = resolve_settings(global, &args.source)?;
    let net = load_network(&settings.network)?;
    let publisher = Publisher::new(&net, chrono::Local::now().naive_local())?;

    tracing::debug!(rules = publisher.sanitizer().table().len(), "redaction table built");

    let mut rows = Vec::new();
    for audience in audiences(&args.audience) {
        for page in publisher.render(audience)? {
            rows.push(DocumentRow::new(audience, page.file_name(), page.content.len()));
        }
    }

    tracing::info!(documents = rows.len(), "all documents verified");
    output::print_output(&output::render_table(&rows), global.quiet);
    Ok(())
}
