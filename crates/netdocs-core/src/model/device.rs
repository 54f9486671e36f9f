// ── Device inventory types ──

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use secrecy::SecretString;
use serde::Deserialize;

use super::de;

/// One device from the inventory. Immutable for the duration of a run.
#[derive(Debug, Deserialize)]
pub struct Device {
    pub name: String,

    // Addresses, in primary-address precedence order.
    pub ip: Option<IpAddr>,
    pub ip_wan: Option<IpAddr>,
    pub ip_wifi: Option<IpAddr>,
    pub ip_internal: Option<IpAddr>,

    pub mac: Option<MacAddress>,

    pub role: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Web-admin URL, rendered verbatim.
    pub web: Option<String>,

    pub credential: Option<Credential>,

    /// Key of the device this one hangs off, for the topology tree.
    pub uplink: Option<String>,
    /// Port label on the uplink device.
    pub port: Option<String>,
}

impl Device {
    /// The first address present in LAN → WAN → WiFi → internal order.
    pub fn primary_address(&self) -> Option<IpAddr> {
        self.addresses().next()
    }

    /// All configured addresses in precedence order.
    pub fn addresses(&self) -> impl Iterator<Item = IpAddr> + '_ {
        [self.ip, self.ip_wan, self.ip_wifi, self.ip_internal]
            .into_iter()
            .flatten()
    }

    /// `role`, falling back to `type`, falling back to `-`.
    pub fn role_label(&self) -> &str {
        self.role
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("-")
    }
}

/// Login for a device. The secret is absent for key-based access.
#[derive(Debug, Deserialize)]
pub struct Credential {
    pub username: String,

    #[serde(default, deserialize_with = "de::optional_secret")]
    pub secret: Option<SecretString>,

    /// The login name itself identifies the device (auto-generated admin
    /// users and the like) and is masked in public output.
    #[serde(default)]
    pub sensitive_username: bool,

    /// Listed in the SSH runbook.
    #[serde(default)]
    pub ssh: bool,

    pub note: Option<String>,
}

// ── MacAddress ──────────────────────────────────────────────────────

/// MAC address, normalized to lowercase colon-separated format (aa:bb:cc:dd:ee:ff).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address from any common format.
    /// Accepts colon-separated or dash-separated hex.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().trim().to_lowercase().replace('-', ":");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ways this address is commonly written: lower and upper case,
    /// colon and dash separated.
    pub fn spellings(&self) -> [String; 4] {
        let upper = self.0.to_uppercase();
        [
            self.0.clone(),
            self.0.replace(':', "-"),
            upper.replace(':', "-"),
            upper,
        ]
    }

    /// Six colon-separated pairs of hex digits.
    pub fn is_well_formed(&self) -> bool {
        let groups: Vec<&str> = self.0.split(':').collect();
        groups.len() == 6
            && groups
                .iter()
                .all(|g| g.len() == 2 && g.chars().all(|c| c.is_ascii_hexdigit()))
    }
}

impl From<String> for MacAddress {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
