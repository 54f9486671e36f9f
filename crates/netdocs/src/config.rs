//! CLI configuration: thin wrapper around `netdocs_config` that applies
//! flag overrides on top of the layered settings.

use netdocs_config::{Settings, load_settings};
use netdocs_core::Audience;

use crate::cli::{AudienceArgs, GlobalOpts, SourceArgs};
use crate::error::CliError;

/// Load settings, then let `--config` / `--public-dir` / `--private-dir`
/// take priority.
pub fn resolve_settings(global: &GlobalOpts, source: &SourceArgs) -> Result<Settings, CliError> {
    let mut settings = load_settings(global.settings.as_deref())?;

    if let Some(ref path) = source.config {
        settings.network.clone_from(path);
    }
    if let Some(ref dir) = source.public_dir {
        settings.public_dir.clone_from(dir);
    }
    if let Some(ref dir) = source.private_dir {
        settings.private_dir.clone_from(dir);
    }

    // Reject overlapping trees before anything runs.
    settings.output_layout()?;

    tracing::debug!(
        network = %settings.network.display(),
        public = %settings.public_dir.display(),
        private = %settings.private_dir.display(),
        "settings resolved"
    );
    Ok(settings)
}

/// Selected audiences, public first. Neither flag selects both.
pub fn audiences(args: &AudienceArgs) -> Vec<Audience> {
    match (args.public, args.private) {
        (true, false) => vec![Audience::Public],
        (false, true) => vec![Audience::Private],
        _ => vec![Audience::Public, Audience::Private],
    }
}
