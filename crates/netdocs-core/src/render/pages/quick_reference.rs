// ── Quick reference ──
//
// Every credential in one place. Only ever built for the private
// audience.

use secrecy::ExposeSecret;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

use super::{address, code, credential_secret, or_dash, table_close, table_open, table_row};

pub(crate) fn build(cfg: &NetworkConfig) -> String {
    let mut f = Fragment::new(Audience::Private);

    f.raw(
        "<h2>Quick Reference</h2>\n\
         <p class=\"warning\">Diese Seite enthaelt alle Zugangsdaten.</p>\n",
    );

    f.raw("<section>\n<h3>SSH-Zugaenge</h3>\n");
    table_open(&mut f, &["Geraet", "IP", "Benutzer", "Passwort", "Hinweis"]);
    for (_, device) in cfg.devices() {
        let Some(cred) = device.credential.as_ref().filter(|c| c.ssh) else {
            continue;
        };
        table_row(
            &mut f,
            [
                escape(&device.name).into_owned(),
                code(&address(device)),
                code(&cred.username),
                credential_secret(cred),
                or_dash(cred.note.as_deref()),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.raw("<section>\n<h3>Web-Interfaces</h3>\n");
    table_open(&mut f, &["Geraet", "URL", "Benutzer", "Passwort"]);
    for (_, device) in cfg.devices() {
        let Some(ref url) = device.web else {
            continue;
        };
        let (user, secret) = device.credential.as_ref().map_or_else(
            || ("-".to_owned(), "-".to_owned()),
            |c| (code(&c.username), credential_secret(c)),
        );
        table_row(
            &mut f,
            [
                escape(&device.name).into_owned(),
                format!("<a href=\"{0}\">{0}</a>", escape(url)),
                user,
                secret,
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.raw("<section>\n<h3>WLAN-Passwoerter</h3>\n");
    table_open(&mut f, &["SSID", "Passwort", "VLAN"]);
    for (name, ssid) in cfg.ssids() {
        let Some(ref secret) = ssid.secret else {
            continue;
        };
        table_row(
            &mut f,
            [
                code(name),
                code(secret.expose_secret()),
                escape(&ssid.vlan).into_owned(),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    f.raw("<section>\n<h3>Sonstige Schluessel</h3>\n");
    table_open(&mut f, &["Was", "Wert", "Art"]);
    table_row(
        &mut f,
        [
            "Backup-Verschluesselung".to_owned(),
            code(cfg.backup().encryption_key.expose_secret()),
            "recovery_code".to_owned(),
        ],
    );
    for note in cfg.private_notes() {
        table_row(
            &mut f,
            [
                escape(&note.label).into_owned(),
                code(note.value.expose_secret()),
                note.kind.to_string(),
            ],
        );
    }
    table_close(&mut f);
    f.raw("</section>\n");

    let with_mac: Vec<_> = cfg
        .devices()
        .filter_map(|(_, d)| d.mac.as_ref().map(|mac| (d, mac)))
        .collect();
    if !with_mac.is_empty() {
        f.raw("<section>\n<h3>MAC-Adressen</h3>\n");
        table_open(&mut f, &["Geraet", "MAC"]);
        for (device, mac) in with_mac {
            table_row(&mut f, [escape(&device.name).into_owned(), code(mac.as_str())]);
        }
        table_close(&mut f);
        f.raw("</section>\n");
    }

    f.into_string()
}
