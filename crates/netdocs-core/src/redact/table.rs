// ── Redaction table ──
//
// Literal → placeholder rules for the public audience. Built from the
// static catalog plus every secret, MAC, and internal address the model
// carries, so a config change can never silently bypass redaction.

use std::collections::HashMap;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use secrecy::ExposeSecret;

use crate::error::CoreError;
use crate::html;
use crate::model::{MacAddress, NetworkConfig, SecretKind};

/// Placeholder for passwords, keys, and other opaque secrets.
pub const SECRET_MASK: &str = "••••••••";
/// Placeholder for dash-grouped recovery codes.
pub const RECOVERY_CODE_MASK: &str = "••••-••••-••••-••••";
/// Canonical masked MAC address.
pub const MAC_MASK: &str = "xx:xx:xx:xx:xx:xx";
/// Generic login name standing in for identifying usernames.
pub const LOGIN_PLACEHOLDER: &str = "admin-user";
/// Generic address standing in for real emails.
pub const EMAIL_PLACEHOLDER: &str = "user@example.com";
/// Generic name standing in for internal hostnames.
pub const HOST_PLACEHOLDER: &str = "host.internal.example";

/// Literals shorter than this would shred ordinary page text.
pub const MIN_LITERAL_LEN: usize = 4;

/// Third-octet placeholders, one per declared internal network.
const NETWORK_PLACEHOLDERS: [char; 8] = ['x', 'y', 'z', 'w', 'v', 'u', 't', 's'];

impl SecretKind {
    /// The public replacement for a literal of this kind.
    pub fn replacement(self) -> &'static str {
        match self {
            Self::Secret | Self::CloudId => SECRET_MASK,
            Self::RecoveryCode => RECOVERY_CODE_MASK,
            Self::Login => LOGIN_PLACEHOLDER,
            Self::Email => EMAIL_PLACEHOLDER,
            Self::Mac => MAC_MASK,
            Self::Hostname => HOST_PLACEHOLDER,
        }
    }
}

/// Show at most a two-character prefix and the length of a sensitive value.
pub fn obscure(literal: &str) -> String {
    let len = literal.chars().count();
    let prefix: String = if len >= 10 {
        literal.chars().take(2).collect()
    } else {
        String::new()
    };
    format!("{prefix}…({len} chars)")
}

/// Mask the network-identifying third octet: `192.168.178.1` → `192.168.x.1`.
pub fn mask_ipv4(ip: Ipv4Addr, placeholder: char) -> String {
    let [a, b, _, d] = ip.octets();
    format!("{a}.{b}.{placeholder}.{d}")
}

// ── RedactionRule ───────────────────────────────────────────────────

/// One literal → replacement mapping. `Debug` never prints the literal.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactionRule {
    literal: String,
    replacement: String,
    origin: String,
    /// Only match where the literal is a whole dotted address.
    address: bool,
}

impl RedactionRule {
    /// `origin` names where the literal came from (e.g.
    /// `devices.ckplus.credential.secret`) and is safe to log.
    pub fn new(
        literal: impl Into<String>,
        replacement: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            literal: literal.into(),
            replacement: replacement.into(),
            origin: origin.into(),
            address: false,
        }
    }

    /// A rule for an IPv4 address. It never matches inside a longer dotted
    /// number, so `10.10.10.1` leaves `210.10.10.1` alone.
    pub fn address(
        literal: impl Into<String>,
        replacement: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            address: true,
            ..Self::new(literal, replacement, origin)
        }
    }

    /// Whether the literal still occurs in `text`.
    pub(crate) fn occurs_in(&self, text: &str) -> bool {
        if self.address {
            address_matches(text, &self.literal).next().is_some()
        } else {
            text.contains(self.literal.as_str())
        }
    }

    fn apply_to(&self, text: &str) -> String {
        if !self.address {
            return text.replace(self.literal.as_str(), &self.replacement);
        }
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for start in address_matches(text, &self.literal) {
            out.push_str(&text[last..start]);
            out.push_str(&self.replacement);
            last = start + self.literal.len();
        }
        out.push_str(&text[last..]);
        out
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Loggable description: origin plus obscured literal.
    pub fn hint(&self) -> String {
        format!("{}: {}", self.origin, obscure(&self.literal))
    }
}

/// Start offsets of `literal` in `text` that are not part of a longer
/// dotted number. A trailing full stop still counts as a boundary.
fn address_matches<'t>(text: &'t str, literal: &'t str) -> impl Iterator<Item = usize> + 't {
    let bytes = text.as_bytes();
    let digit = move |i: Option<usize>| i.and_then(|i| bytes.get(i)).is_some_and(u8::is_ascii_digit);
    text.match_indices(literal).filter_map(move |(start, _)| {
        let end = start + literal.len();
        let left = match start.checked_sub(1).and_then(|i| bytes.get(i)) {
            Some(b'.') => !digit(start.checked_sub(2)),
            Some(b) => !b.is_ascii_digit(),
            None => true,
        };
        let right = match bytes.get(end) {
            Some(b'.') => !digit(Some(end + 1)),
            Some(b) => !b.is_ascii_digit(),
            None => true,
        };
        (left && right).then_some(start)
    })
}

impl fmt::Debug for RedactionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactionRule")
            .field("literal", &obscure(&self.literal))
            .field("replacement", &self.replacement)
            .field("origin", &self.origin)
            .finish()
    }
}

// ── RedactionTable ──────────────────────────────────────────────────

/// Validated, deterministically ordered rule set.
///
/// Rules are applied longest literal first (ties broken by literal), so the
/// final text never depends on the order the catalog listed them in.
#[derive(Debug, Clone)]
pub struct RedactionTable {
    rules: Vec<RedactionRule>,
}

impl RedactionTable {
    /// Validate, de-duplicate, and order a rule set.
    ///
    /// Each literal also gets a rule for its HTML-escaped form, since that
    /// is how it appears in a rendered page.
    pub fn new(rules: impl IntoIterator<Item = RedactionRule>) -> Result<Self, CoreError> {
        let mut by_literal: HashMap<String, RedactionRule> = HashMap::new();

        for rule in rules {
            let len = rule.literal.chars().count();
            if len < MIN_LITERAL_LEN {
                return Err(CoreError::LiteralTooShort {
                    origin: rule.origin,
                    len,
                    min: MIN_LITERAL_LEN,
                });
            }

            let escaped = html::escape(&rule.literal).into_owned();
            let variant = (escaped != rule.literal).then(|| RedactionRule {
                literal: escaped,
                replacement: rule.replacement.clone(),
                origin: format!("{} (escaped)", rule.origin),
                address: rule.address,
            });

            for r in std::iter::once(rule).chain(variant) {
                match by_literal.get(&r.literal) {
                    Some(existing) if existing.replacement != r.replacement => {
                        return Err(CoreError::ConflictingRule { hint: r.hint() });
                    }
                    Some(_) => {}
                    None => {
                        by_literal.insert(r.literal.clone(), r);
                    }
                }
            }
        }

        let mut rules: Vec<RedactionRule> = by_literal.into_values().collect();
        rules.sort_by(|a, b| {
            b.literal
                .len()
                .cmp(&a.literal.len())
                .then_with(|| a.literal.cmp(&b.literal))
        });

        for rule in &rules {
            if let Some(other) = rules
                .iter()
                .find(|other| rule.replacement.contains(other.literal.as_str()))
            {
                return Err(CoreError::ReintroducingRule {
                    hint: rule.hint(),
                    reintroduced: other.hint(),
                });
            }
        }

        Ok(Self { rules })
    }

    /// Derive the full table for a network: catalog entries, device
    /// credentials and MACs, SSID secrets, backup key, private notes, and
    /// every device address inside a declared internal network.
    pub fn from_config(cfg: &NetworkConfig) -> Result<Self, CoreError> {
        let mut rules = Vec::new();
        let catalog = cfg.redaction_catalog();

        for (i, entry) in catalog.entries.iter().enumerate() {
            let raw = entry.literal.expose_secret();
            let origin = format!("redaction.entries[{i}] ({})", entry.kind);
            if entry.kind == SecretKind::Mac {
                push_mac(&mut rules, &MacAddress::new(raw), &origin);
            }
            rules.push(RedactionRule::new(raw, entry.kind.replacement(), origin));
        }

        if catalog.internal_networks.len() > NETWORK_PLACEHOLDERS.len() {
            return Err(CoreError::InvalidField {
                field: "redaction.internal_networks".into(),
                reason: format!("at most {} networks are supported", NETWORK_PLACEHOLDERS.len()),
            });
        }

        for (key, device) in cfg.devices() {
            for ip in device.addresses() {
                let IpAddr::V4(v4) = ip else { continue };
                let placeholder = catalog
                    .internal_networks
                    .iter()
                    .zip(NETWORK_PLACEHOLDERS)
                    .find_map(|(net, p)| net.contains(&v4).then_some(p));
                if let Some(p) = placeholder {
                    rules.push(RedactionRule::address(
                        v4.to_string(),
                        mask_ipv4(v4, p),
                        format!("devices.{key} address"),
                    ));
                }
            }
            if let Some(ref mac) = device.mac {
                push_mac(&mut rules, mac, &format!("devices.{key}.mac"));
            }
            if let Some(ref cred) = device.credential {
                if let Some(ref secret) = cred.secret {
                    rules.push(RedactionRule::new(
                        secret.expose_secret(),
                        SECRET_MASK,
                        format!("devices.{key}.credential.secret"),
                    ));
                }
                if cred.sensitive_username {
                    rules.push(RedactionRule::new(
                        cred.username.as_str(),
                        LOGIN_PLACEHOLDER,
                        format!("devices.{key}.credential.username"),
                    ));
                }
            }
        }

        for (name, ssid) in cfg.ssids() {
            if let Some(ref secret) = ssid.secret {
                rules.push(RedactionRule::new(
                    secret.expose_secret(),
                    SECRET_MASK,
                    format!("network.ssids.{name}.secret"),
                ));
            }
        }

        rules.push(RedactionRule::new(
            cfg.backup().encryption_key.expose_secret(),
            RECOVERY_CODE_MASK,
            "backup.encryption_key",
        ));

        for (i, note) in cfg.private_notes().iter().enumerate() {
            rules.push(RedactionRule::new(
                note.value.expose_secret(),
                note.kind.replacement(),
                format!("private_notes[{i}] ({})", note.label),
            ));
        }

        let table = Self::new(rules)?;
        tracing::debug!(rules = table.len(), "redaction table built");
        Ok(table)
    }

    /// Substitute every rule, in table order.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for rule in &self.rules {
            if rule.occurs_in(&out) {
                out = rule.apply_to(&out);
            }
        }
        out
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One rule per common spelling of a MAC address.
fn push_mac(rules: &mut Vec<RedactionRule>, mac: &MacAddress, origin: &str) {
    for spelling in mac.spellings() {
        rules.push(RedactionRule::new(spelling, MAC_MASK, origin));
    }
}
