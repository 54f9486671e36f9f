// ── User guide ──

use std::fmt::Write;

use secrecy::ExposeSecret;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

pub(crate) fn build(cfg: &NetworkConfig, audience: Audience) -> String {
    let mut f = Fragment::new(audience);

    f.raw("<h2>User Guide</h2>\n<section>\n<h3>WLAN-Netze</h3>\n");

    for (name, ssid) in cfg.ssids() {
        let vlan_purpose = cfg.vlan(&ssid.vlan).map_or("", |v| v.purpose.as_str());
        let _ = writeln!(
            f,
            "<div class=\"card\">\n<h4><code>{}</code></h4>\n<p>{} (VLAN {}{})</p>",
            escape(name),
            escape(&ssid.purpose),
            escape(&ssid.vlan),
            if vlan_purpose.is_empty() {
                String::new()
            } else {
                format!(", {}", escape(vlan_purpose))
            },
        );
        if let Some(ref description) = ssid.description {
            let _ = writeln!(f, "<p>{}</p>", escape(description));
        }
        if let Some(ref secret) = ssid.secret {
            f.private_only(|f| {
                let _ = writeln!(
                    f,
                    "<p>Passwort: <code>{}</code></p>",
                    escape(secret.expose_secret())
                );
            });
        }
        f.raw("</div>\n");
    }
    f.raw("</section>\n");

    f.raw(
        "<section>\n<h3>Verbinden</h3>\n<ol>\n\
         <li>WLAN-Einstellungen des Geraets oeffnen.</li>\n\
         <li>Das passende Netz aus der Liste oben waehlen.</li>\n\
         <li>Passwort eingeben (beim Administrator erfragen).</li>\n\
         <li>Bei Problemen: WLAN vergessen und neu verbinden.</li>\n\
         </ol>\n</section>\n",
    );

    f.raw(
        "<section>\n<h3>Haeufige Fragen</h3>\n\
         <p><strong>Kein Internet trotz Verbindung?</strong> \
         Geraet neu verbinden; hilft das nicht, den Administrator informieren.</p>\n\
         <p><strong>Welches Netz fuer Smart-Home-Geraete?</strong> \
         Das IoT-Netz, nicht das Hauptnetz.</p>\n</section>\n",
    );

    f.into_string()
}
