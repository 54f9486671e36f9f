// ── Start page ──

use std::fmt::Write;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

use super::{address, code, table_close, table_open, table_row};

pub(crate) fn build(cfg: &NetworkConfig, audience: Audience) -> String {
    let mut f = Fragment::new(audience);

    let _ = writeln!(
        f,
        "<section class=\"hero\">\n<h2>{} Netzwerk-Dokumentation</h2>\n\
         <p>Uebersicht ueber VLANs, WLANs, Geraete und Dienste.</p>\n</section>",
        escape(&cfg.site().title)
    );

    f.private_only(|f| {
        f.raw("<section class=\"quick-links\">\n<h2>Schnellzugriff</h2>\n<ul>\n");
        for (_, device) in cfg.devices() {
            if let Some(ref web) = device.web {
                let _ = writeln!(
                    f,
                    "<li><a href=\"{url}\">{name}</a> <code>{url}</code></li>",
                    url = escape(web),
                    name = escape(&device.name),
                );
            }
        }
        f.raw("</ul>\n</section>\n");
    });

    f.raw("<section>\n<h2>VLANs</h2>\n");
    table_open(&mut f, &["VLAN", "Subnetz", "Zweck"]);
    for (id, vlan) in cfg.vlans() {
        table_row(
            &mut f,
            [
                format!(
                    "<span class=\"vlan-badge\" style=\"background:{}\">{}</span>",
                    escape(&vlan.color),
                    escape(id)
                ),
                code(&vlan.subnet),
                escape(&vlan.purpose).into_owned(),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.raw("<section>\n<h2>WLANs</h2>\n");
    table_open(&mut f, &["SSID", "VLAN", "Zweck"]);
    for (name, ssid) in cfg.ssids() {
        table_row(
            &mut f,
            [
                code(name),
                escape(&ssid.vlan).into_owned(),
                escape(&ssid.purpose).into_owned(),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.raw("<section>\n<h2>Geraete</h2>\n");
    table_open(&mut f, &["Geraet", "IP", "Rolle"]);
    for (_, device) in cfg.devices() {
        table_row(
            &mut f,
            [
                escape(&device.name).into_owned(),
                code(&address(device)),
                escape(device.role_label()).into_owned(),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.raw("<section>\n<h2>Dienste</h2>\n");
    table_open(&mut f, &["Dienst", "Beschreibung", "Typ"]);
    for (_, service) in cfg.services() {
        let kind = if service.persistent {
            "<span class=\"badge badge-persistent\">persistent</span>"
        } else {
            "<span class=\"badge badge-manual\">manuell</span>"
        };
        table_row(
            &mut f,
            [
                code(&service.name),
                escape(&service.description).into_owned(),
                kind.to_owned(),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.into_string()
}
