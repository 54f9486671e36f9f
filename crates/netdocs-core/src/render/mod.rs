//! Page rendering: the document catalog, the fragment builder every page
//! writes into, and the dispatch from [`Page`] to its builder.
//!
//! Each builder is a pure function of the network model and an
//! [`Audience`]. Private-only blocks go through
//! [`Fragment::private_only`], whose closure never runs for the public
//! audience, so private values are never even formatted into public text.

mod pages;
pub mod wrapper;

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::audience::Audience;
use crate::model::NetworkConfig;

pub use wrapper::wrap;

/// Opening marker of a private-only block.
pub const PRIVATE_BEGIN: &str = "<!-- private:begin -->";
/// Closing marker of a private-only block.
pub const PRIVATE_END: &str = "<!-- private:end -->";

// ── Page catalog ────────────────────────────────────────────────────

/// Every document the generator knows about, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Page {
    Index,
    AdminGuide,
    UserGuide,
    Topology,
    BackupRestore,
    Troubleshooting,
    QuickReference,
    SshCommands,
    DatabaseCommands,
}

impl Page {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::AdminGuide => "admin-guide.html",
            Self::UserGuide => "user-guide.html",
            Self::Topology => "network-topology.html",
            Self::BackupRestore => "backup-restore.html",
            Self::Troubleshooting => "troubleshooting.html",
            Self::QuickReference => "quick-reference.html",
            Self::SshCommands => "ssh-commands.html",
            Self::DatabaseCommands => "mongodb-commands.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Index => "Start",
            Self::AdminGuide => "Admin Guide",
            Self::UserGuide => "User Guide",
            Self::Topology => "Netzwerk-Topologie",
            Self::BackupRestore => "Backup & Restore",
            Self::Troubleshooting => "Troubleshooting",
            Self::QuickReference => "Quick Reference",
            Self::SshCommands => "SSH Befehle",
            Self::DatabaseCommands => "MongoDB Befehle",
        }
    }

    /// Short label for the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Topology => "Topologie",
            Self::BackupRestore => "Backup",
            Self::QuickReference => "Quick Ref",
            Self::SshCommands => "SSH",
            Self::DatabaseCommands => "MongoDB",
            other => other.title(),
        }
    }

    /// Credential reference and the two command runbooks exist only for
    /// the private audience.
    pub fn is_private_only(self) -> bool {
        matches!(
            self,
            Self::QuickReference | Self::SshCommands | Self::DatabaseCommands
        )
    }

    /// The document set for an audience: six shared pages for public, all
    /// nine for private.
    pub fn for_audience(audience: Audience) -> impl Iterator<Item = Page> {
        Self::iter().filter(move |p| audience.is_private() || !p.is_private_only())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ── Fragment builder ────────────────────────────────────────────────

/// Content fragment under construction for one audience.
pub struct Fragment {
    buf: String,
    audience: Audience,
}

impl Fragment {
    pub fn new(audience: Audience) -> Self {
        Self {
            buf: String::with_capacity(4096),
            audience,
        }
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    /// Append static markup.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Include a delimited block for the private audience only. For the
    /// public audience `build` is not called at all.
    pub fn private_only(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        if self.audience.is_private() {
            self.buf.push_str(PRIVATE_BEGIN);
            self.buf.push('\n');
            build(self);
            self.buf.push_str(PRIVATE_END);
            self.buf.push('\n');
        }
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for Fragment {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

/// Remove every private-only block, markers included.
pub fn strip_private_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(PRIVATE_BEGIN) {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        match after.find(PRIVATE_END) {
            Some(end) => {
                let mut tail = &after[end + PRIVATE_END.len()..];
                // Blocks opened at a line start own their trailing newline.
                if out.is_empty() || out.ends_with('\n') {
                    tail = tail.strip_prefix('\n').unwrap_or(tail);
                }
                rest = tail;
            }
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

// ── Dispatch ────────────────────────────────────────────────────────

/// Build the content fragment for `page`, or `None` when the page is not
/// part of `audience`'s document set. Private-only pages are never built
/// for the public audience.
pub fn build_fragment(page: Page, cfg: &NetworkConfig, audience: Audience) -> Option<String> {
    let fragment = match page {
        Page::Index => pages::index::build(cfg, audience),
        Page::AdminGuide => pages::admin_guide::build(cfg, audience),
        Page::UserGuide => pages::user_guide::build(cfg, audience),
        Page::Topology => pages::topology::build(cfg, audience),
        Page::BackupRestore => pages::backup_restore::build(cfg, audience),
        Page::Troubleshooting => pages::troubleshooting::build(cfg, audience),
        Page::QuickReference | Page::SshCommands | Page::DatabaseCommands
            if !audience.is_private() =>
        {
            return None;
        }
        Page::QuickReference => pages::quick_reference::build(cfg),
        Page::SshCommands => pages::ssh_commands::build(cfg),
        Page::DatabaseCommands => pages::database_commands::build(cfg),
    };
    Some(fragment)
}
