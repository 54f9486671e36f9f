//! Generator settings and network document loading for `netdocs`.
//!
//! Settings layer serialized defaults, a TOML file and `NETDOCS_*`
//! environment variables. The binary applies its flag overrides on top.
//! The network document is JSON, parsed into the core model and validated
//! before anything renders.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use netdocs_core::{CoreError, NetworkConfig, OutputLayout};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file not found: {}", path.display())]
    SettingsNotFound { path: PathBuf },

    #[error("settings loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid network configuration: {0}")]
    Invalid(#[from] CoreError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Network document to render.
    #[serde(default = "default_network")]
    pub network: PathBuf,

    /// Public output tree.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Private output tree. Keep it out of version control.
    #[serde(default = "default_private_dir")]
    pub private_dir: PathBuf,

    #[serde(default)]
    pub screenshots: ScreenshotSettings,

    #[serde(default)]
    pub deploy: DeploySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            network: default_network(),
            public_dir: default_public_dir(),
            private_dir: default_private_dir(),
            screenshots: ScreenshotSettings::default(),
            deploy: DeploySettings::default(),
        }
    }
}

impl Settings {
    /// Fails when one output directory lies inside the other.
    pub fn output_layout(&self) -> Result<OutputLayout, CoreError> {
        OutputLayout::new(&self.public_dir, &self.private_dir)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScreenshotSettings {
    /// Command line run before generation when screenshots are requested,
    /// e.g. `python3 scripts/screenshots.py`. Split on whitespace.
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeploySettings {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_message")]
    pub message: String,

    /// Login used for the file transfer to the web host.
    #[serde(default = "default_user")]
    pub user: String,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
            message: default_message(),
            user: default_user(),
        }
    }
}

fn default_network() -> PathBuf {
    "network-config.json".into()
}
fn default_public_dir() -> PathBuf {
    "docs".into()
}
fn default_private_dir() -> PathBuf {
    "private".into()
}
fn default_remote() -> String {
    "origin".into()
}
fn default_branch() -> String {
    "main".into()
}
fn default_message() -> String {
    "Update network documentation".into()
}
fn default_user() -> String {
    "root".into()
}

// ── Settings file path ──────────────────────────────────────────────

/// Resolve the settings file path via XDG / platform conventions.
pub fn settings_path() -> PathBuf {
    ProjectDirs::from("org", "netdocs", "netdocs").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("netdocs");
            p.push("netdocs.toml");
            p
        },
        |dirs| dirs.config_dir().join("netdocs.toml"),
    )
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load settings from defaults, a TOML file and the environment.
///
/// An `explicit` file must exist; the platform default file is optional.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => settings_path(),
    };
    tracing::debug!(path = %path.display(), "loading settings");

    let settings: Settings = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("NETDOCS_").split("__"))
        .extract()?;
    Ok(settings)
}

/// Read, parse and validate the network document at `path`.
pub fn load_network(path: &Path) -> Result<NetworkConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: NetworkConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    tracing::debug!(
        path = %path.display(),
        devices = cfg.devices().count(),
        vlans = cfg.vlans().count(),
        "network configuration loaded"
    );
    Ok(cfg)
}
