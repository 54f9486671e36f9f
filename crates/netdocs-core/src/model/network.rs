// ── VLAN and SSID types ──

use secrecy::SecretString;
use serde::Deserialize;

use super::de;

#[derive(Debug, Deserialize)]
pub struct Vlan {
    /// CIDR, rendered verbatim.
    pub subnet: String,
    #[serde(alias = "name")]
    pub purpose: String,
    /// CSS color for the VLAN badge.
    #[serde(default = "default_color")]
    pub color: String,
    /// Gateway label, e.g. "10.10.10.1 (USG)".
    pub gateway: Option<String>,
    /// Who serves DHCP on this VLAN, if anyone.
    pub dhcp: Option<String>,
    /// Interface on the docs host that routes into this VLAN.
    pub interface: Option<String>,
}

fn default_color() -> String {
    "#607d8b".into()
}

#[derive(Debug, Deserialize)]
pub struct Ssid {
    /// Id of the VLAN the SSID bridges into.
    pub vlan: String,
    pub purpose: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::optional_secret")]
    pub secret: Option<SecretString>,
}
