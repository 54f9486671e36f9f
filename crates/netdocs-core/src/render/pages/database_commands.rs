// ── Controller database runbook ──

use std::fmt::Write;

use secrecy::ExposeSecret;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

const COLLECTIONS: [(&str, &str); 5] = [
    ("device", "Adoptierte Geraete"),
    ("wlanconf", "WLAN-Konfiguration"),
    ("networkconf", "Netzwerke und VLANs"),
    ("firewallrule", "Firewall-Regeln"),
    ("admin", "Controller-Admins"),
];

pub(crate) fn build(cfg: &NetworkConfig) -> String {
    let mut f = Fragment::new(Audience::Private);

    f.raw("<h2>MongoDB Befehle</h2>\n");

    let Some((db, host)) = cfg
        .database()
        .and_then(|db| cfg.device(&db.device).map(|host| (db, host)))
    else {
        f.raw("<p>Keine Controller-Datenbank konfiguriert.</p>\n");
        return f.into_string();
    };

    let port = db.port;
    let name = escape(&db.name);
    let _ = writeln!(
        f,
        "<p>Die Controller-Datenbank <code>{name}</code> laeuft auf {} (Port {port}).</p>",
        escape(&host.name)
    );

    f.raw("<section>\n<h3>Verbinden</h3>\n<pre><code>");
    if let (Some(cred), Some(ip)) = (host.credential.as_ref(), host.primary_address()) {
        let _ = writeln!(f, "ssh {}@{ip}", escape(&cred.username));
    }
    let _ = writeln!(f, "mongo --port {port} {name}");
    f.raw("</code></pre>\n");

    if let Some(ip) = host.primary_address() {
        if let Some(secret) = host.credential.as_ref().and_then(|c| c.secret.as_ref()) {
            let user = host.credential.as_ref().map_or("", |c| c.username.as_str());
            let _ = writeln!(
                f,
                "<p>Automatisiert:</p>\n<pre><code>expect -c '\n\
                 spawn ssh {user}@{ip} \"mongo --port {port} {name} --quiet\"\n\
                 expect \"password:\"\n\
                 send \"{secret}\\r\"\n\
                 interact'\n</code></pre>",
                user = escape(user),
                secret = escape(secret.expose_secret()),
            );
        }
    }
    f.raw("</section>\n");

    f.raw("<section>\n<h3>Abfragen</h3>\n");
    for (collection, label) in COLLECTIONS {
        let _ = writeln!(
            f,
            "<h4>{label}</h4>\n<pre><code>db.{collection}.find().pretty()\n</code></pre>"
        );
    }
    f.raw(
        "<h4>Geraet nach MAC</h4>\n<pre><code>db.device.find({mac: \"&lt;mac&gt;\"}, {name: 1, ip: 1, model: 1})\n</code></pre>\n",
    );
    f.raw("</section>\n");

    f.raw("<section>\n<h3>Sicherung</h3>\n<pre><code>");
    let _ = writeln!(f, "mongodump --port {port} --db {name} --out /tmp/{name}-dump");
    f.raw("</code></pre>\n</section>\n");

    f.into_string()
}
