// ── Static assets ──
//
// Stylesheets and diagrams live in the public tree. The private tree gets
// a copy of them after every private run.

use std::fs;
use std::path::Path;

use crate::error::CoreError;

/// Stylesheet written into the public tree when it has none.
pub const DEFAULT_STYLESHEET: &str = include_str!("../../assets/style.css");

/// Subdirectories mirrored into the private tree, with the file extension
/// copied from each.
const MIRRORED: [(&str, &str); 2] = [("css", "css"), ("diagrams", "svg")];

#[derive(Debug, Default)]
pub struct MirrorOutcome {
    pub copied: usize,
    pub warnings: Vec<String>,
}

/// Copy `css/*.css` and `diagrams/*.svg` from `public_dir` into
/// `private_dir`. A missing source directory is a warning; a failed copy
/// is fatal for the private tree.
pub fn mirror_assets(public_dir: &Path, private_dir: &Path) -> Result<MirrorOutcome, CoreError> {
    let mut outcome = MirrorOutcome::default();

    for (sub, ext) in MIRRORED {
        let src = public_dir.join(sub);
        let entries = match fs::read_dir(&src) {
            Ok(entries) => entries,
            Err(e) => {
                let msg = format!("no assets mirrored from {}: {e}", src.display());
                tracing::warn!("{msg}");
                outcome.warnings.push(msg);
                continue;
            }
        };

        let mut files: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == ext))
            .collect();
        files.sort();

        let dest = private_dir.join(sub);
        fs::create_dir_all(&dest).map_err(|source| CoreError::Write {
            path: dest.clone(),
            source,
        })?;

        for file in files {
            let Some(name) = file.file_name() else {
                continue;
            };
            let target = dest.join(name);
            fs::copy(&file, &target).map_err(|source| CoreError::Write {
                path: target.clone(),
                source,
            })?;
            tracing::debug!(asset = %target.display(), "mirrored");
            outcome.copied += 1;
        }
    }

    Ok(outcome)
}

/// Write [`DEFAULT_STYLESHEET`] to `css/style.css` unless one exists.
pub(super) fn ensure_stylesheet(public_dir: &Path) -> Result<(), CoreError> {
    let css_dir = public_dir.join("css");
    let path = css_dir.join("style.css");
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(&css_dir).map_err(|source| CoreError::Write {
        path: css_dir.clone(),
        source,
    })?;
    fs::write(&path, DEFAULT_STYLESHEET).map_err(|source| CoreError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(asset = %path.display(), "wrote default stylesheet");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_only_matching_extensions() {
        let public = tempfile::tempdir().unwrap();
        let private = tempfile::tempdir().unwrap();
        fs::create_dir_all(public.path().join("css")).unwrap();
        fs::create_dir_all(public.path().join("diagrams")).unwrap();
        fs::write(public.path().join("css/style.css"), "body{}").unwrap();
        fs::write(public.path().join("css/notes.txt"), "skip").unwrap();
        fs::write(public.path().join("diagrams/vlan.svg"), "<svg/>").unwrap();

        let outcome = mirror_assets(public.path(), private.path()).unwrap();

        assert_eq!(outcome.copied, 2);
        assert!(outcome.warnings.is_empty());
        assert!(private.path().join("css/style.css").is_file());
        assert!(private.path().join("diagrams/vlan.svg").is_file());
        assert!(!private.path().join("css/notes.txt").exists());
    }

    #[test]
    fn missing_source_dir_is_a_warning() {
        let public = tempfile::tempdir().unwrap();
        let private = tempfile::tempdir().unwrap();

        let outcome = mirror_assets(public.path(), private.path()).unwrap();

        assert_eq!(outcome.copied, 0);
        assert_eq!(outcome.warnings.len(), 2);
    }

    #[test]
    fn existing_stylesheet_is_kept() {
        let public = tempfile::tempdir().unwrap();
        fs::create_dir_all(public.path().join("css")).unwrap();
        fs::write(public.path().join("css/style.css"), "custom").unwrap();

        ensure_stylesheet(public.path()).unwrap();

        let css = fs::read_to_string(public.path().join("css/style.css")).unwrap();
        assert_eq!(css, "custom");
    }

    #[test]
    fn default_stylesheet_is_written() {
        let public = tempfile::tempdir().unwrap();
        ensure_stylesheet(public.path()).unwrap();
        let css = fs::read_to_string(public.path().join("css/style.css")).unwrap();
        assert_eq!(css, DEFAULT_STYLESHEET);
    }
}
