// ── Network configuration model ──
//
// The in-memory shape of the network document. Reading the file lives in
// `netdocs-config`; this module defines the schema, read-only accessors,
// and the cross-reference invariants checked before any rendering.

mod de;
mod device;
mod network;
mod supporting;

use indexmap::IndexMap;
use ipnet::Ipv4Net;
use serde::Deserialize;

pub use device::{Credential, Device, MacAddress};
pub use network::{Ssid, Vlan};
pub use supporting::{
    BackupConfig, BackupJob, CatalogEntry, DatabaseHost, ExternalTargets, PrivateNote,
    RedactionCatalog, SecretKind, Service, Site,
};

use crate::error::CoreError;

/// VLANs and SSIDs, nested under `network` in the document.
#[derive(Debug, Deserialize)]
struct Segments {
    #[serde(deserialize_with = "de::unique_map")]
    vlans: IndexMap<String, Vlan>,
    #[serde(default, deserialize_with = "de::unique_map")]
    ssids: IndexMap<String, Ssid>,
}

/// The whole network document. All maps keep insertion order, which is
/// the order every table is rendered in.
#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    site: Site,
    #[serde(deserialize_with = "de::unique_map")]
    devices: IndexMap<String, Device>,
    network: Segments,
    #[serde(default, deserialize_with = "de::unique_map")]
    services: IndexMap<String, Service>,
    backup: BackupConfig,
    external: ExternalTargets,
    #[serde(default)]
    redaction: RedactionCatalog,
    database: Option<DatabaseHost>,
    #[serde(default)]
    private_notes: Vec<PrivateNote>,
}

impl NetworkConfig {
    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn devices(&self) -> impl Iterator<Item = (&str, &Device)> {
        self.devices.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn device(&self, key: &str) -> Option<&Device> {
        self.devices.get(key)
    }

    pub fn vlans(&self) -> impl Iterator<Item = (&str, &Vlan)> {
        self.network.vlans.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn vlan(&self, id: &str) -> Option<&Vlan> {
        self.network.vlans.get(id)
    }

    pub fn ssids(&self) -> impl Iterator<Item = (&str, &Ssid)> {
        self.network.ssids.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn ssid(&self, name: &str) -> Option<&Ssid> {
        self.network.ssids.get(name)
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, &Service)> {
        self.services.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn service(&self, key: &str) -> Option<&Service> {
        self.services.get(key)
    }

    pub fn backup(&self) -> &BackupConfig {
        &self.backup
    }

    /// Deploy destination. Page builders never read this.
    pub fn external(&self) -> &ExternalTargets {
        &self.external
    }

    pub fn redaction_catalog(&self) -> &RedactionCatalog {
        &self.redaction
    }

    pub fn database(&self) -> Option<&DatabaseHost> {
        self.database.as_ref()
    }

    pub fn private_notes(&self) -> &[PrivateNote] {
        &self.private_notes
    }

    /// Devices whose uplink is `parent`, in insertion order.
    pub fn downstream_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = (&'a str, &'a Device)> {
        self.devices()
            .filter(move |(_, d)| d.uplink.as_deref() == Some(parent))
    }

    /// Check cross-references. Key uniqueness is already enforced while
    /// deserializing.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, ssid) in self.ssids() {
            if self.vlan(&ssid.vlan).is_none() {
                return Err(CoreError::DanglingVlan {
                    ssid: name.into(),
                    vlan: ssid.vlan.clone(),
                });
            }
        }

        for (id, vlan) in self.vlans() {
            vlan.subnet
                .parse::<Ipv4Net>()
                .map_err(|e| CoreError::InvalidField {
                    field: format!("network.vlans.{id}.subnet"),
                    reason: format!("'{}' is not an IPv4 CIDR network: {e}", vlan.subnet),
                })?;
        }

        for (key, device) in self.devices() {
            if device.name.trim().is_empty() {
                return Err(CoreError::InvalidField {
                    field: format!("devices.{key}.name"),
                    reason: "must not be empty".into(),
                });
            }
            if let Some(ref mac) = device.mac {
                if !mac.is_well_formed() {
                    return Err(CoreError::InvalidField {
                        field: format!("devices.{key}.mac"),
                        reason: format!("'{mac}' is not a MAC address"),
                    });
                }
            }
            if let Some(ref uplink) = device.uplink {
                if self.device(uplink).is_none() {
                    return Err(CoreError::DanglingUplink {
                        device: key.into(),
                        uplink: uplink.clone(),
                    });
                }
            }
        }
        self.check_uplink_cycles()?;

        if let Some(db) = self.database() {
            if self.device(&db.device).is_none() {
                return Err(CoreError::UnknownDevice {
                    key: db.device.clone(),
                    referrer: "database".into(),
                });
            }
        }

        Ok(())
    }

    /// Walk each device's uplink chain; a chain longer than the inventory
    /// can only be a cycle.
    fn check_uplink_cycles(&self) -> Result<(), CoreError> {
        for (key, _) in self.devices() {
            let mut current = key;
            let mut steps = 0usize;
            while let Some(next) = self.device(current).and_then(|d| d.uplink.as_deref()) {
                steps += 1;
                if steps > self.devices.len() {
                    return Err(CoreError::UplinkCycle { device: key.into() });
                }
                current = next;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> serde_json::Value {
        json!({
            "site": { "title": "IceWiFi" },
            "devices": {
                "fritzbox": { "name": "Fritz!Box", "ip": "192.168.178.1", "type": "router" },
                "usg": { "name": "USG 3P", "ip": "10.10.10.1", "uplink": "fritzbox" },
                "ckplus": { "name": "CK+", "ip": "10.10.10.10", "uplink": "usg", "port": "19" }
            },
            "network": {
                "vlans": {
                    "12": { "subnet": "10.10.10.0/24", "name": "IoT / UniFi", "color": "#2196f3" },
                    "13": { "subnet": "10.10.13.0/24", "name": "Tor", "color": "#9c27b0" }
                },
                "ssids": {
                    "Bad!Bad": { "vlan": "13", "purpose": "Tor" }
                }
            },
            "services": {
                "socat": { "name": "socat-unifi", "description": "Proxy", "persistent": true }
            },
            "backup": { "ha_encryption_key": "KFZ0-S89A-861I-ZK5H" },
            "external": { "website": "example.org", "website_ip": "203.0.113.7", "website_path": "/docs" }
        })
    }

    fn parse(value: serde_json::Value) -> NetworkConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let cfg = parse(base());
        let keys: Vec<_> = cfg.devices().map(|(k, _)| k).collect();
        assert_eq!(keys, ["fritzbox", "usg", "ckplus"]);
        let vlans: Vec<_> = cfg.vlans().map(|(k, _)| k).collect();
        assert_eq!(vlans, ["12", "13"]);
    }

    #[test]
    fn accessors_find_by_key() {
        let cfg = parse(base());
        assert_eq!(cfg.device("usg").unwrap().name, "USG 3P");
        assert_eq!(cfg.vlan("13").unwrap().purpose, "Tor");
        assert_eq!(cfg.ssid("Bad!Bad").unwrap().vlan, "13");
        assert!(cfg.service("socat").unwrap().persistent);
        assert_eq!(cfg.external().remote_dir(), "/var/www/html/docs");
        assert!(cfg.device("missing").is_none());
    }

    #[test]
    fn valid_config_passes() {
        parse(base()).validate().unwrap();
    }

    #[test]
    fn dangling_vlan_is_rejected() {
        let mut value = base();
        value["network"]["ssids"]["Bad!Bad"]["vlan"] = json!("99");
        let err = parse(value).validate().unwrap_err();
        assert!(matches!(err, CoreError::DanglingVlan { ref vlan, .. } if vlan == "99"));
        assert!(err.is_config());
    }

    #[test]
    fn dangling_uplink_is_rejected() {
        let mut value = base();
        value["devices"]["usg"]["uplink"] = json!("nowhere");
        let err = parse(value).validate().unwrap_err();
        assert!(matches!(err, CoreError::DanglingUplink { .. }));
    }

    #[test]
    fn uplink_cycle_is_rejected() {
        let mut value = base();
        value["devices"]["fritzbox"]["uplink"] = json!("ckplus");
        let err = parse(value).validate().unwrap_err();
        assert!(matches!(err, CoreError::UplinkCycle { .. }));
    }

    #[test]
    fn unknown_database_device_is_rejected() {
        let mut value = base();
        value["database"] = json!({ "device": "nas", "port": 27117, "name": "ace" });
        let err = parse(value).validate().unwrap_err();
        assert!(matches!(err, CoreError::UnknownDevice { ref key, .. } if key == "nas"));
    }

    #[test]
    fn malformed_subnet_is_rejected() {
        let mut value = base();
        value["network"]["vlans"]["12"]["subnet"] = json!("10.10.10.0");
        let err = parse(value).validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { ref field, .. } if field.ends_with("subnet")));
    }

    #[test]
    fn ipv6_subnet_is_rejected() {
        let mut value = base();
        value["network"]["vlans"]["13"]["subnet"] = json!("fe80::/64");
        let err = parse(value).validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { ref field, .. } if field == "network.vlans.13.subnet"));
    }

    #[test]
    fn internal_networks_parse_as_cidr() {
        let mut value = base();
        value["redaction"] = json!({ "internal_networks": ["192.168.178.0/24"] });
        let cfg = parse(value);
        let net = cfg.redaction_catalog().internal_networks[0];
        assert_eq!(net.prefix_len(), 24);
        assert!(net.contains(&"192.168.178.250".parse::<std::net::Ipv4Addr>().unwrap()));
        assert!(!net.contains(&"192.168.1.8".parse::<std::net::Ipv4Addr>().unwrap()));

        let mut bad = base();
        bad["redaction"] = json!({ "internal_networks": ["192.168.178.0"] });
        assert!(serde_json::from_value::<NetworkConfig>(bad).is_err());
    }

    #[test]
    fn duplicate_device_key_fails_to_parse() {
        let raw = r#"{
            "site": { "title": "IceWiFi" },
            "devices": {
                "usg": { "name": "USG" },
                "usg": { "name": "USG again" }
            },
            "network": { "vlans": {} },
            "backup": { "encryption_key": "abcd-efgh" },
            "external": { "website": "x", "website_ip": "y", "website_path": "/z" }
        }"#;
        let err = serde_json::from_str::<NetworkConfig>(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate key 'usg'"), "{err}");
    }

    #[test]
    fn downstream_of_lists_children() {
        let cfg = parse(base());
        let children: Vec<_> = cfg.downstream_of("usg").map(|(k, _)| k).collect();
        assert_eq!(children, ["ckplus"]);
    }
}
