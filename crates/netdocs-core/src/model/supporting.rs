// ── Supporting / auxiliary model types ──
//
// Services, backups, deploy targets, site metadata, and the static
// redaction catalog.

use ipnet::Ipv4Net;
use secrecy::SecretString;
use serde::Deserialize;
use strum::{Display, EnumIter};

use super::de;

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub title: String,
    /// Public repository URL linked from the footer.
    pub repository: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "de".into()
}

#[derive(Debug, Deserialize)]
pub struct Service {
    /// systemd unit name.
    pub name: String,
    pub description: String,
    /// Auto-restarting (true) versus invoked by hand (false).
    pub persistent: bool,
}

#[derive(Debug, Deserialize)]
pub struct BackupConfig {
    #[serde(alias = "ha_encryption_key", deserialize_with = "de::secret")]
    pub encryption_key: SecretString,
    #[serde(default)]
    pub jobs: Vec<BackupJob>,
}

#[derive(Debug, Deserialize)]
pub struct BackupJob {
    pub what: String,
    pub how: String,
    pub when: String,
    pub retention: String,
}

/// Where the public tree is published. Only the deploy step reads this.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalTargets {
    /// Public hostname of the web server.
    pub website: String,
    /// Address the transfer connects to.
    pub website_ip: String,
    /// Path below the web root, e.g. `/icewifi`.
    pub website_path: String,
    #[serde(default = "default_web_root")]
    pub web_root: String,
}

fn default_web_root() -> String {
    "/var/www/html".into()
}

impl ExternalTargets {
    /// Remote directory the public tree lands in.
    pub fn remote_dir(&self) -> String {
        format!("{}{}", self.web_root, self.website_path)
    }
}

/// Host running the controller database, for the database runbook.
#[derive(Debug, Deserialize)]
pub struct DatabaseHost {
    /// Device key.
    pub device: String,
    pub port: u16,
    pub name: String,
}

/// Free-form private value listed in the quick reference.
#[derive(Debug, Deserialize)]
pub struct PrivateNote {
    pub label: String,
    #[serde(deserialize_with = "de::secret")]
    pub value: SecretString,
    #[serde(default)]
    pub kind: SecretKind,
}

// ── Redaction catalog ───────────────────────────────────────────────

/// Classification of a sensitive literal; decides its public replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SecretKind {
    #[default]
    Secret,
    RecoveryCode,
    Login,
    Email,
    Mac,
    CloudId,
    Hostname,
}

#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(deserialize_with = "de::secret")]
    pub literal: SecretString,
    #[serde(default)]
    pub kind: SecretKind,
}

#[derive(Debug, Default, Deserialize)]
pub struct RedactionCatalog {
    /// Known-sensitive literals that are not otherwise part of the model.
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
    /// IPv4 networks whose device addresses are masked in public output.
    #[serde(default)]
    pub internal_networks: Vec<Ipv4Net>,
}
