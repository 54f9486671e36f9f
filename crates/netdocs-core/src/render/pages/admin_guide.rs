// ── Admin guide ──
//
// VLAN plan with gateways, device addresses, service management. The
// credential table is private-only.

use std::fmt::Write;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

use super::{code, credential_secret, or_dash, table_close, table_open, table_row};

pub(crate) fn build(cfg: &NetworkConfig, audience: Audience) -> String {
    let mut f = Fragment::new(audience);

    f.raw("<h2>Admin Guide</h2>\n");

    f.raw("<section>\n<h3>VLAN-Konfiguration</h3>\n");
    table_open(&mut f, &["VLAN", "Subnetz", "Gateway", "DHCP", "Zweck"]);
    for (id, vlan) in cfg.vlans() {
        table_row(
            &mut f,
            [
                escape(id).into_owned(),
                code(&vlan.subnet),
                or_dash(vlan.gateway.as_deref()),
                or_dash(vlan.dhcp.as_deref()),
                escape(&vlan.purpose).into_owned(),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.raw("<section>\n<h3>Geraete-Adressen</h3>\n");
    table_open(&mut f, &["Geraet", "Rolle", "Adressen"]);
    for (_, device) in cfg.devices() {
        let addresses: Vec<String> = device
            .addresses()
            .map(|ip| format!("<code>{ip}</code>"))
            .collect();
        table_row(
            &mut f,
            [
                escape(&device.name).into_owned(),
                escape(device.role_label()).into_owned(),
                if addresses.is_empty() {
                    "-".to_owned()
                } else {
                    addresses.join(" ")
                },
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.private_only(|f| {
        f.raw("<section class=\"private\">\n<h3>Zugangsdaten</h3>\n");
        table_open(f, &["Geraet", "Web-UI", "Benutzer", "Passwort", "Hinweis"]);
        for (_, device) in cfg.devices() {
            let Some(ref cred) = device.credential else {
                continue;
            };
            table_row(
                f,
                [
                    escape(&device.name).into_owned(),
                    device.web.as_deref().map_or_else(
                        || "-".to_owned(),
                        |url| format!("<a href=\"{0}\">{0}</a>", escape(url)),
                    ),
                    code(&cred.username),
                    credential_secret(cred),
                    or_dash(cred.note.as_deref()),
                ],
            );
        }
        table_close(f);
        f.raw("</section>\n");
    });

    f.raw("<section>\n<h3>Dienste verwalten</h3>\n");
    let units: Vec<&str> = cfg.services().map(|(_, s)| s.name.as_str()).collect();
    if units.is_empty() {
        f.raw("<p>Keine Dienste konfiguriert.</p>\n");
    } else {
        let _ = writeln!(
            f,
            "<pre><code>sudo systemctl status {}\n</code></pre>",
            escape(&units.join(" "))
        );
        for (_, service) in cfg.services() {
            let unit = escape(&service.name);
            let _ = writeln!(f, "<h4><code>{unit}</code></h4>");
            let _ = writeln!(f, "<p>{}</p>", escape(&service.description));
            if service.persistent {
                let _ = writeln!(
                    f,
                    "<pre><code>sudo systemctl restart {unit}\nsudo systemctl enable {unit}\n</code></pre>"
                );
            } else {
                let _ = writeln!(
                    f,
                    "<pre><code>sudo systemctl start {unit}\nsudo systemctl stop {unit}\n</code></pre>"
                );
            }
        }
    }
    f.raw("</section>\n");

    f.into_string()
}
