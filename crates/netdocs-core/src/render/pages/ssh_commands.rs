// ── SSH command runbook ──

use std::fmt::Write;

use secrecy::ExposeSecret;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

pub(crate) fn build(cfg: &NetworkConfig) -> String {
    let mut f = Fragment::new(Audience::Private);

    f.raw("<h2>SSH Befehle</h2>\n");

    let mut any = false;
    for (_, device) in cfg.devices() {
        let (Some(cred), Some(ip)) = (
            device.credential.as_ref().filter(|c| c.ssh),
            device.primary_address(),
        ) else {
            continue;
        };
        any = true;

        let user = escape(&cred.username);
        let _ = writeln!(f, "<section>\n<h3>{}</h3>", escape(&device.name));
        let _ = writeln!(f, "<pre><code>ssh {user}@{ip}\n</code></pre>");

        match cred.secret {
            Some(ref secret) => {
                let secret = escape(secret.expose_secret());
                let _ = writeln!(f, "<p>Passwort: <code>{secret}</code></p>");
                let _ = writeln!(
                    f,
                    "<p>Nicht-interaktiv:</p>\n<pre><code>sshpass -p '{secret}' ssh {user}@{ip}\n</code></pre>"
                );
            }
            None => {
                f.raw("<p>Login per SSH-Key.</p>\n");
            }
        }
        if let Some(ref note) = cred.note {
            let _ = writeln!(f, "<p>{}</p>", escape(note));
        }
        f.raw("</section>\n");
    }
    if !any {
        f.raw("<p>Keine SSH-Zugaenge konfiguriert.</p>\n");
    }

    let units: Vec<&str> = cfg.services().map(|(_, s)| s.name.as_str()).collect();
    if !units.is_empty() {
        f.raw("<section>\n<h3>Diagnose</h3>\n<pre><code>");
        let _ = writeln!(f, "systemctl status {}", escape(&units.join(" ")));
        for unit in &units {
            let _ = writeln!(f, "journalctl -u {} -f", escape(unit));
        }
        f.raw("</code></pre>\n</section>\n");
    }

    f.into_string()
}
