//! Generation pipelines.
//!
//! [`Publisher`] renders the document set for an audience and writes it
//! into the matching directory of an [`OutputLayout`]. The public pipeline
//! renders and sanitizes every page before the first byte is written, so a
//! leak in any document aborts the whole public tree.

mod assets;
mod deploy;

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDateTime;

use crate::audience::Audience;
use crate::error::CoreError;
use crate::model::NetworkConfig;
use crate::redact::{RedactionTable, Sanitizer};
use crate::render::{self, Page};

pub use assets::{DEFAULT_STYLESHEET, MirrorOutcome, mirror_assets};
pub use deploy::{CollaboratorFailure, Deployer, PublicTree, deploy};

/// Timestamp format used in every page footer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Name of the directory in the private tree the screenshot collaborator
/// fills.
pub const SCREENSHOTS_DIR: &str = "screenshots";

// ── Output layout ───────────────────────────────────────────────────

/// Output root per audience. The two trees never contain each other, so
/// whatever is done to the public tree cannot reach a private document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    public_dir: PathBuf,
    private_dir: PathBuf,
}

impl OutputLayout {
    /// Fails with [`CoreError::OverlappingOutput`] when the directories are
    /// equal or one lies inside the other.
    pub fn new(
        public_dir: impl Into<PathBuf>,
        private_dir: impl Into<PathBuf>,
    ) -> Result<Self, CoreError> {
        let public_dir = public_dir.into();
        let private_dir = private_dir.into();

        let public = normalize(&public_dir);
        let private = normalize(&private_dir);
        if public.starts_with(&private) || private.starts_with(&public) {
            return Err(CoreError::OverlappingOutput {
                public: public_dir,
                private: private_dir,
            });
        }

        Ok(Self {
            public_dir,
            private_dir,
        })
    }

    pub fn dir(&self, audience: Audience) -> &Path {
        match audience {
            Audience::Public => &self.public_dir,
            Audience::Private => &self.private_dir,
        }
    }

    /// The only way to obtain a deploy source.
    pub fn public_tree(&self) -> PublicTree {
        PublicTree::new(self.public_dir.clone())
    }
}

/// Absolute form of `path` with `.` and `..` folded away, without touching
/// the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

// ── Rendered output ─────────────────────────────────────────────────

/// A complete document, wrapped and (for public) sanitized.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub page: Page,
    pub audience: Audience,
    pub content: String,
}

impl RenderedPage {
    pub fn file_name(&self) -> &'static str {
        self.page.file_name()
    }
}

/// A document on disk.
#[derive(Debug, Clone)]
pub struct WrittenDocument {
    pub audience: Audience,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of one pipeline run.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub written: Vec<WrittenDocument>,
    /// Static assets copied into the private tree.
    pub mirrored: usize,
    pub warnings: Vec<String>,
}

// ── Publisher ───────────────────────────────────────────────────────

pub struct Publisher<'a> {
    cfg: &'a NetworkConfig,
    sanitizer: Sanitizer,
    generated_at: String,
}

impl<'a> Publisher<'a> {
    /// Build the redaction table for `cfg`. `generated_at` is stamped on
    /// every page of this run.
    pub fn new(cfg: &'a NetworkConfig, generated_at: NaiveDateTime) -> Result<Self, CoreError> {
        Ok(Self {
            cfg,
            sanitizer: Sanitizer::new(RedactionTable::from_config(cfg)?),
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        })
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// Render the full document set for `audience` without touching the
    /// filesystem. Public pages are sanitized and verified; the first leak
    /// fails the whole set.
    pub fn render(&self, audience: Audience) -> Result<Vec<RenderedPage>, CoreError> {
        let mut pages = Vec::new();
        for page in Page::for_audience(audience) {
            let Some(fragment) = render::build_fragment(page, self.cfg, audience) else {
                continue;
            };
            let wrapped = render::wrap(
                self.cfg.site(),
                page,
                &fragment,
                audience,
                &self.generated_at,
            );
            let content = match audience {
                Audience::Public => self.sanitizer.sanitize(page.file_name(), &wrapped)?,
                Audience::Private => wrapped,
            };
            pages.push(RenderedPage {
                page,
                audience,
                content,
            });
        }
        Ok(pages)
    }

    /// Render and write the public tree, then make sure it has a
    /// stylesheet.
    pub fn publish_public(&self, layout: &OutputLayout) -> Result<PublishReport, CoreError> {
        let pages = self.render(Audience::Public)?;
        let dir = layout.dir(Audience::Public);
        let written = write_pages(&pages, dir)?;
        assets::ensure_stylesheet(dir)?;
        Ok(PublishReport {
            written,
            ..PublishReport::default()
        })
    }

    /// Render and write the private tree, mirror shared assets from the
    /// public tree and create the screenshots directory.
    pub fn publish_private(&self, layout: &OutputLayout) -> Result<PublishReport, CoreError> {
        let pages = self.render(Audience::Private)?;
        let dir = layout.dir(Audience::Private);
        let written = write_pages(&pages, dir)?;

        let mut report = PublishReport {
            written,
            ..PublishReport::default()
        };

        let outcome = mirror_assets(layout.dir(Audience::Public), dir)?;
        report.mirrored = outcome.copied;
        report.warnings.extend(outcome.warnings);

        let screenshots = dir.join(SCREENSHOTS_DIR);
        fs::create_dir_all(&screenshots).map_err(|source| CoreError::Write {
            path: screenshots,
            source,
        })?;

        Ok(report)
    }

    /// Run the selected pipelines, public first so the private tree mirrors
    /// fresh assets.
    pub fn publish(
        &self,
        audiences: &[Audience],
        layout: &OutputLayout,
    ) -> Result<PublishReport, CoreError> {
        let mut report = PublishReport::default();
        if audiences.contains(&Audience::Public) {
            let public = self.publish_public(layout)?;
            report.written.extend(public.written);
            report.warnings.extend(public.warnings);
        }
        if audiences.contains(&Audience::Private) {
            let private = self.publish_private(layout)?;
            report.written.extend(private.written);
            report.mirrored += private.mirrored;
            report.warnings.extend(private.warnings);
        }
        Ok(report)
    }
}

/// Write every page into `dir`, creating it if needed.
pub fn write_pages(pages: &[RenderedPage], dir: &Path) -> Result<Vec<WrittenDocument>, CoreError> {
    fs::create_dir_all(dir).map_err(|source| CoreError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        let path = dir.join(page.file_name());
        fs::write(&path, &page.content).map_err(|source| CoreError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(
            audience = %page.audience,
            document = %path.display(),
            "wrote document"
        );
        written.push(WrittenDocument {
            audience: page.audience,
            path,
            bytes: page.content.len(),
        });
    }
    Ok(written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sibling_trees_are_accepted() {
        let layout = OutputLayout::new("site/docs", "site/docs-private").unwrap();
        assert_eq!(layout.dir(Audience::Public), Path::new("site/docs"));
        assert_eq!(layout.public_tree().path(), Path::new("site/docs"));
    }

    #[test]
    fn private_inside_public_is_rejected() {
        let err = OutputLayout::new("docs", "docs/internal").unwrap_err();
        assert!(matches!(err, CoreError::OverlappingOutput { .. }));
    }

    #[test]
    fn public_inside_private_is_rejected() {
        let err = OutputLayout::new("/srv/private/www", "/srv/private").unwrap_err();
        assert!(matches!(err, CoreError::OverlappingOutput { .. }));
    }

    #[test]
    fn same_tree_spelled_differently_is_rejected() {
        let err = OutputLayout::new("docs", "./out/../docs/").unwrap_err();
        assert!(matches!(err, CoreError::OverlappingOutput { .. }));
    }
}
