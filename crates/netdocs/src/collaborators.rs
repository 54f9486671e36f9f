//! External processes: git, scp and the screenshot command.
//!
//! Every call is best effort. Failures come back as
//! [`CollaboratorFailure`] and end up as run warnings.

use std::path::Path;
use std::process::Command;

use netdocs_config::{DeploySettings, ScreenshotSettings};
use netdocs_core::model::ExternalTargets;
use netdocs_core::{CollaboratorFailure, Deployer, PublicTree};

/// Run `program args...` in `dir`, mapping spawn errors and non-zero exits.
fn run(step: &'static str, program: &str, args: &[&str], dir: &Path) -> Result<(), CollaboratorFailure> {
    tracing::debug!(step, program, ?args, dir = %dir.display(), "running");
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| CollaboratorFailure::new(step, format!("could not run {program}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CollaboratorFailure::new(
            step,
            format!("{program} exited with {}: {}", output.status, stderr.trim()),
        ));
    }
    Ok(())
}

// ── Deploy ──────────────────────────────────────────────────────────

/// Deploys with the `git` and `scp` command-line tools.
pub struct CommandDeployer<'a> {
    settings: &'a DeploySettings,
}

impl<'a> CommandDeployer<'a> {
    pub fn new(settings: &'a DeploySettings) -> Self {
        Self { settings }
    }
}

impl Deployer for CommandDeployer<'_> {
    /// Stage only the public tree, commit (even when unchanged) and push.
    fn commit_and_push(&self, tree: &PublicTree) -> Result<(), CollaboratorFailure> {
        let dir = tree.path();
        run("git add", "git", &["add", "-A", "--", "."], dir)?;
        run(
            "git commit",
            "git",
            &["commit", "--allow-empty", "-m", &self.settings.message],
            dir,
        )?;
        run(
            "git push",
            "git",
            &["push", &self.settings.remote, &self.settings.branch],
            dir,
        )
    }

    /// Copy the tree's contents into the remote directory.
    fn transfer(&self, tree: &PublicTree, target: &ExternalTargets) -> Result<(), CollaboratorFailure> {
        let dest = format!(
            "{}@{}:{}",
            self.settings.user,
            target.website_ip,
            target.remote_dir()
        );
        run("scp", "scp", &["-r", ".", &dest], tree.path())
    }
}

// ── Screenshots ─────────────────────────────────────────────────────

/// Run the configured screenshot command with `NETDOCS_SCREENSHOT_DIR`
/// pointing at `dest`.
pub fn refresh_screenshots(
    settings: &ScreenshotSettings,
    dest: &Path,
) -> Result<(), CollaboratorFailure> {
    let Some(ref command) = settings.command else {
        return Err(CollaboratorFailure::new(
            "screenshots",
            "no screenshot command configured (screenshots.command)",
        ));
    };
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(CollaboratorFailure::new("screenshots", "screenshot command is empty"));
    };

    std::fs::create_dir_all(dest).map_err(|e| {
        CollaboratorFailure::new("screenshots", format!("{}: {e}", dest.display()))
    })?;

    tracing::info!(program, dest = %dest.display(), "refreshing screenshots");
    let output = Command::new(program)
        .args(parts)
        .env("NETDOCS_SCREENSHOT_DIR", dest)
        .output()
        .map_err(|e| CollaboratorFailure::new("screenshots", format!("could not run {program}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CollaboratorFailure::new(
            "screenshots",
            format!("{program} exited with {}: {}", output.status, stderr.trim()),
        ));
    }
    Ok(())
}
