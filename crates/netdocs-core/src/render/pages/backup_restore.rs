// ── Backup & restore ──

use std::fmt::Write;

use secrecy::ExposeSecret;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

use super::{table_close, table_open, table_row};

pub(crate) fn build(cfg: &NetworkConfig, audience: Audience) -> String {
    let mut f = Fragment::new(audience);
    let backup = cfg.backup();

    f.raw("<h2>Backup &amp; Restore</h2>\n<section>\n<h3>Backup-Plan</h3>\n");
    if backup.jobs.is_empty() {
        f.raw("<p>Keine Backup-Jobs konfiguriert.</p>\n");
    } else {
        table_open(&mut f, &["Was", "Wie", "Wann", "Aufbewahrung"]);
        for job in &backup.jobs {
            table_row(
                &mut f,
                [
                    escape(&job.what),
                    escape(&job.how),
                    escape(&job.when),
                    escape(&job.retention),
                ],
            );
        }
        table_close(&mut f);
    }
    f.raw("</section>\n");

    f.raw("<section>\n<h3>Verschluesselung</h3>\n");
    f.raw("<p>Home-Assistant-Backups sind mit einem Schluessel verschluesselt. Ohne ihn ist kein Restore moeglich.</p>\n");
    f.private_only(|f| {
        let _ = writeln!(
            f,
            "<p class=\"private\">Backup-Schluessel: <code>{}</code></p>",
            escape(backup.encryption_key.expose_secret())
        );
    });
    f.raw("</section>\n");

    f.raw(
        "<section>\n<h3>Restore</h3>\n<ol>\n\
         <li>Neues System installieren und ins Netz bringen.</li>\n\
         <li>Letztes Backup auf das System kopieren.</li>\n\
         <li>Backup einspielen und Schluessel eingeben.</li>\n\
         <li>Dienste pruefen (siehe Troubleshooting).</li>\n\
         </ol>\n\
         <pre><code>ha backups list\nha backups restore &lt;slug&gt;\n</code></pre>\n</section>\n",
    );

    f.raw(
        "<section>\n<h3>Dokumentation wiederherstellen</h3>\n\
         <p>Diese Seiten werden aus der Netzwerk-Konfiguration generiert. \
         Repository klonen und <code>netdocs generate</code> ausfuehren.</p>\n</section>\n",
    );

    f.into_string()
}
