// ── Troubleshooting ──

use std::fmt::Write;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

pub(crate) fn build(cfg: &NetworkConfig, audience: Audience) -> String {
    let mut f = Fragment::new(audience);

    f.raw("<h2>Troubleshooting</h2>\n");

    f.raw("<section>\n<h3>Erreichbarkeit</h3>\n<pre><code>");
    for (_, device) in cfg.devices() {
        if let Some(ip) = device.primary_address() {
            let _ = writeln!(f, "ping -c 3 {ip}    # {}", escape(&device.name));
        }
    }
    f.raw("</code></pre>\n</section>\n");

    let interfaces: Vec<&str> = cfg
        .vlans()
        .filter_map(|(_, v)| v.interface.as_deref())
        .collect();
    if !interfaces.is_empty() {
        f.raw("<section>\n<h3>VLAN-Interfaces</h3>\n<pre><code>");
        for iface in interfaces {
            let _ = writeln!(f, "ip addr show {}", escape(iface));
        }
        f.raw("ip route\n</code></pre>\n</section>\n");
    }

    let services: Vec<_> = cfg.services().map(|(_, s)| s).collect();
    if !services.is_empty() {
        f.raw("<section>\n<h3>Dienste</h3>\n");
        for service in services {
            let unit = escape(&service.name);
            let _ = writeln!(
                f,
                "<h4><code>{unit}</code></h4>\n<p>{}</p>\n<pre><code>systemctl status {unit}\n\
                 journalctl -u {unit} -n 50 --no-pager\n{}</code></pre>",
                escape(&service.description),
                if service.persistent {
                    format!("sudo systemctl restart {unit}\n")
                } else {
                    String::new()
                },
            );
        }
        f.raw("</section>\n");
    }

    f.raw(
        "<section>\n<h3>Haeufige Probleme</h3>\n\
         <p><strong>Geraet bekommt keine IP:</strong> DHCP-Bereich des VLANs pruefen, \
         Port-Zuordnung am Switch kontrollieren.</p>\n\
         <p><strong>VLANs erreichen sich nicht:</strong> Firewall-Regeln und Routing \
         (siehe Netzwerk-Topologie) pruefen.</p>\n\
         <p><strong>Controller nicht erreichbar:</strong> Dienststatus pruefen und \
         die Logs der letzten Minuten lesen.</p>\n</section>\n",
    );

    f.into_string()
}
