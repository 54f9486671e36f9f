//! Page content builders. Shared table helpers live here.

pub(super) mod admin_guide;
pub(super) mod backup_restore;
pub(super) mod database_commands;
pub(super) mod index;
pub(super) mod quick_reference;
pub(super) mod ssh_commands;
pub(super) mod topology;
pub(super) mod troubleshooting;
pub(super) mod user_guide;

use std::fmt::Write;

use secrecy::ExposeSecret;

use crate::html::escape;
use crate::model::{Credential, Device};

use super::Fragment;

fn table_open(f: &mut Fragment, headers: &[&str]) {
    f.raw("<table>\n<thead><tr>");
    for h in headers {
        let _ = write!(f, "<th>{}</th>", escape(h));
    }
    f.raw("</tr></thead>\n<tbody>\n");
}

fn table_close(f: &mut Fragment) {
    f.raw("</tbody>\n</table>\n");
}

/// One `<tr>` of already-escaped cells.
fn table_row<I, S>(f: &mut Fragment, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    f.raw("<tr>");
    for cell in cells {
        let _ = write!(f, "<td>{}</td>", cell.as_ref());
    }
    f.raw("</tr>\n");
}

/// Primary address of a device, or `-`.
fn address(device: &Device) -> String {
    device
        .primary_address()
        .map_or_else(|| "-".to_owned(), |ip| ip.to_string())
}

/// Escaped secret of a credential, or a key-based-login note.
fn credential_secret(cred: &Credential) -> String {
    cred.secret.as_ref().map_or_else(
        || "(SSH-Key)".to_owned(),
        |s| format!("<code>{}</code>", escape(s.expose_secret())),
    )
}

fn code(value: &str) -> String {
    format!("<code>{}</code>", escape(value))
}

fn or_dash(value: Option<&str>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| escape(v).into_owned())
}
