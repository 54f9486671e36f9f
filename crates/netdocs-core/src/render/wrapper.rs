// ── Page wrapper ──
//
// Document chrome shared by every page: head, header with the audience
// badge, navigation, and the footer with the generation timestamp.

use std::fmt::Write;

use crate::audience::Audience;
use crate::html::escape;
use crate::model::Site;

use super::{Fragment, Page};

/// Wrap a content fragment into a complete HTML document.
///
/// `generated_at` is captured once per run by the caller so that every
/// page of both trees carries the same timestamp.
pub fn wrap(
    site: &Site,
    page: Page,
    fragment: &str,
    audience: Audience,
    generated_at: &str,
) -> String {
    let site_title = escape(&site.title);
    let mut f = Fragment::new(audience);

    let _ = writeln!(
        f,
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {site_title}</title>
    <link rel="stylesheet" href="css/style.css">
</head>
<body>
    <header>
        <h1>{site_title} Netzwerk</h1>"#,
        lang = escape(&site.lang),
        title = escape(page.title()),
    );
    f.private_only(|f| {
        f.raw("        <span class=\"badge badge-private\">PRIVAT</span>\n");
    });
    f.raw("    </header>\n");

    write_nav(&mut f, page);

    f.raw("    <main>\n");
    f.raw(fragment);
    f.raw("    </main>\n");

    let _ = writeln!(f, "    <footer>");
    let _ = writeln!(
        f,
        "        <p>{site_title} Netzwerk-Dokumentation | Generiert: {}</p>",
        escape(generated_at)
    );
    if let Some(ref repo) = site.repository {
        let _ = writeln!(f, "        <p><a href=\"{}\">Repository</a></p>", escape(repo));
    }
    f.private_only(|f| {
        f.raw(
            "        <p class=\"warning\">PRIVATE VERSION - enthaelt Zugangsdaten. Nicht veroeffentlichen!</p>\n",
        );
    });
    f.raw("    </footer>\n</body>\n</html>\n");

    f.into_string()
}

fn write_nav(f: &mut Fragment, current: Page) {
    f.raw("    <nav>\n");
    for page in Page::for_audience(Audience::Public) {
        nav_link(f, page, current, "");
    }
    f.private_only(|f| {
        for page in Page::for_audience(Audience::Private).filter(|p| p.is_private_only()) {
            nav_link(f, page, current, " nav-private");
        }
    });
    f.raw("    </nav>\n");
}

fn nav_link(f: &mut Fragment, page: Page, current: Page, extra_class: &str) {
    let active = if page == current { " active" } else { "" };
    let _ = writeln!(
        f,
        "        <a class=\"nav-link{active}{extra_class}\" href=\"{}\">{}</a>",
        page.file_name(),
        escape(page.nav_label()),
    );
}
