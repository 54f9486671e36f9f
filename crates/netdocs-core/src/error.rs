// ── Core error types ──
//
// Everything that can stop a generation run. Screenshot, git and
// file-transfer failures have no variant here: they surface as warnings.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration errors ─────────────────────────────────────────
    #[error("SSID '{ssid}' references unknown VLAN '{vlan}'")]
    DanglingVlan { ssid: String, vlan: String },

    #[error("device '{device}' names unknown uplink '{uplink}'")]
    DanglingUplink { device: String, uplink: String },

    #[error("device '{device}' is part of an uplink cycle")]
    UplinkCycle { device: String },

    #[error("{referrer} references unknown device '{key}'")]
    UnknownDevice { key: String, referrer: String },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    // ── Redaction table errors ───────────────────────────────────────
    #[error("redaction literal from {origin} is too short ({len} chars, minimum {min})")]
    LiteralTooShort {
        origin: String,
        len: usize,
        min: usize,
    },

    #[error("literal {hint} is mapped to conflicting replacements")]
    ConflictingRule { hint: String },

    #[error("replacement for {hint} re-introduces redacted literal {reintroduced}")]
    ReintroducingRule { hint: String, reintroduced: String },

    // ── Sanitization ─────────────────────────────────────────────────
    /// A cataloged literal survived substitution. `hint` is obscured and
    /// never carries the raw value.
    #[error("{count} sensitive literal(s) survived sanitization, first in {document} ({hint})")]
    Leak {
        document: String,
        hint: String,
        count: usize,
    },

    // ── Filesystem ───────────────────────────────────────────────────
    #[error(
        "public ({}) and private ({}) output must be separate trees, neither inside the other",
        public.display(),
        private.display()
    )]
    OverlappingOutput { public: PathBuf, private: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    /// Whether this error stems from the network document rather than
    /// from rendering or output.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::DanglingVlan { .. }
                | Self::DanglingUplink { .. }
                | Self::UplinkCycle { .. }
                | Self::UnknownDevice { .. }
                | Self::InvalidField { .. }
                | Self::LiteralTooShort { .. }
                | Self::ConflictingRule { .. }
                | Self::ReintroducingRule { .. }
        )
    }
}
