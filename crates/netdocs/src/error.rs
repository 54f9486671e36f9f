//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use netdocs_config::ConfigError;
use netdocs_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const LEAK: i32 = 4;
    pub const FILESYSTEM: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Sanitization ─────────────────────────────────────────────────
    #[error("Sensitive value survived sanitization in {document} ({hint})")]
    #[diagnostic(
        code(netdocs::leak),
        help(
            "Nothing was written to the public tree ({count} leak(s) found).\n\
             Move the value into a private-only block or add it to redaction.entries."
        )
    )]
    Leak {
        document: String,
        hint: String,
        count: usize,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid network configuration: {reason}")]
    #[diagnostic(code(netdocs::invalid_network))]
    InvalidNetwork { reason: String },

    #[error("Could not load network document {}", path.display())]
    #[diagnostic(
        code(netdocs::network_document),
        help("{reason}\nPoint --config (or `network` in netdocs.toml) at the JSON document.")
    )]
    NetworkDocument { path: PathBuf, reason: String },

    #[error("Settings could not be loaded: {reason}")]
    #[diagnostic(
        code(netdocs::settings),
        help("Check the settings file and NETDOCS_* environment variables.")
    )]
    Settings { reason: String },

    // ── Filesystem ───────────────────────────────────────────────────
    #[error("Failed to write {}", path.display())]
    #[diagnostic(
        code(netdocs::write),
        help("Check that the output directory exists and is writable.")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(netdocs::validation))]
    Validation { field: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Leak { .. } => exit_code::LEAK,
            Self::InvalidNetwork { .. } | Self::NetworkDocument { .. } | Self::Settings { .. } => {
                exit_code::CONFIG
            }
            Self::Write { .. } => exit_code::FILESYSTEM,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Leak {
                document,
                hint,
                count,
            } => Self::Leak {
                document,
                hint,
                count,
            },
            CoreError::Write { path, source } => Self::Write { path, source },
            err @ CoreError::OverlappingOutput { .. } => Self::Validation {
                field: "private-dir".into(),
                reason: err.to_string(),
            },
            other => Self::InvalidNetwork {
                reason: other.to_string(),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(core) => core.into(),
            ConfigError::Read { path, source } => Self::NetworkDocument {
                path,
                reason: source.to_string(),
            },
            ConfigError::Parse { path, source } => Self::NetworkDocument {
                path,
                reason: source.to_string(),
            },
            other @ (ConfigError::SettingsNotFound { .. } | ConfigError::Figment(_)) => {
                Self::Settings {
                    reason: other.to_string(),
                }
            }
        }
    }
}
