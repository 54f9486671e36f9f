// ── Network topology ──
//
// Diagrams, a text rendering of the uplink tree, and the VLAN routing
// table. The tree is derived from each device's `uplink`/`port`; the
// model guarantees it is acyclic.

use std::fmt::Write;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::NetworkConfig;
use crate::render::Fragment;

use super::{address, code, or_dash, table_close, table_open, table_row};

pub(crate) fn build(cfg: &NetworkConfig, audience: Audience) -> String {
    let mut f = Fragment::new(audience);

    f.raw(
        "<h2>Netzwerk-Topologie</h2>\n<section>\n<h3>Diagramme</h3>\n\
         <img src=\"diagrams/network-topology.svg\" alt=\"Netzwerk-Topologie\">\n\
         <img src=\"diagrams/vlan-overview.svg\" alt=\"VLAN-Uebersicht\">\n</section>\n",
    );

    f.raw("<section>\n<h3>Verkabelung</h3>\n<pre class=\"tree\">Internet\n");
    let roots: Vec<_> = cfg.devices().filter(|(_, d)| d.uplink.is_none()).collect();
    for (i, (key, _)) in roots.iter().enumerate() {
        write_subtree(&mut f, cfg, key, "", i + 1 == roots.len());
    }
    f.raw("</pre>\n</section>\n");

    f.raw("<section>\n<h3>VLAN-Routing</h3>\n");
    table_open(&mut f, &["VLAN", "Subnetz", "Interface", "Gateway"]);
    for (id, vlan) in cfg.vlans() {
        table_row(
            &mut f,
            [
                escape(id).into_owned(),
                code(&vlan.subnet),
                vlan.interface.as_deref().map_or_else(|| "-".to_owned(), code),
                or_dash(vlan.gateway.as_deref()),
            ],
        );
    }
    table_close(&mut f);

    let routes: Vec<_> = cfg
        .vlans()
        .filter_map(|(_, v)| v.interface.as_deref().map(|dev| (v.subnet.as_str(), dev)))
        .collect();
    if !routes.is_empty() {
        f.raw("<pre><code>");
        for (subnet, dev) in routes {
            let _ = writeln!(f, "{} dev {}", escape(subnet), escape(dev));
        }
        f.raw("</code></pre>\n");
    }
    f.raw("</section>\n");

    f.into_string()
}

fn write_subtree(f: &mut Fragment, cfg: &NetworkConfig, key: &str, prefix: &str, last: bool) {
    let Some(device) = cfg.device(key) else {
        return;
    };
    let branch = if last { "└── " } else { "├── " };
    let port = device
        .port
        .as_deref()
        .map(|p| format!("[Port {}] ", escape(p)))
        .unwrap_or_default();
    let _ = writeln!(
        f,
        "{prefix}{branch}{port}{} ({})",
        escape(&device.name),
        address(device)
    );

    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    let children: Vec<_> = cfg.downstream_of(key).map(|(k, _)| k).collect();
    for (i, child) in children.iter().enumerate() {
        write_subtree(f, cfg, child, &child_prefix, i + 1 == children.len());
    }
}
