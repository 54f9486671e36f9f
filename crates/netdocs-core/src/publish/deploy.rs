// ── Deploy ──
//
// Hands the public tree to the version-control and file-transfer
// collaborators. The source is a `PublicTree`, which only
// `OutputLayout::public_tree` can produce, so the private tree can never
// reach a deployer.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::ExternalTargets;

/// Directory of a rendered public tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicTree(PathBuf);

impl PublicTree {
    pub(super) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// A best-effort external step that did not succeed.
#[derive(Debug, Error)]
#[error("{step} failed: {detail}")]
pub struct CollaboratorFailure {
    pub step: &'static str,
    pub detail: String,
}

impl CollaboratorFailure {
    pub fn new(step: &'static str, detail: impl Into<String>) -> Self {
        Self {
            step,
            detail: detail.into(),
        }
    }
}

/// External deployment steps.
pub trait Deployer {
    /// Commit the tree's current state and push it to the remote.
    fn commit_and_push(&self, tree: &PublicTree) -> Result<(), CollaboratorFailure>;

    /// Copy the tree to the web host.
    fn transfer(&self, tree: &PublicTree, target: &ExternalTargets)
    -> Result<(), CollaboratorFailure>;
}

/// Run both deploy steps. Failures are logged and returned as warnings;
/// a failed push does not stop the transfer.
pub fn deploy(deployer: &dyn Deployer, tree: &PublicTree, target: &ExternalTargets) -> Vec<String> {
    let mut warnings = Vec::new();

    tracing::info!(source = %tree.path().display(), "pushing public tree");
    if let Err(e) = deployer.commit_and_push(tree) {
        tracing::warn!(error = %e, "push failed");
        warnings.push(e.to_string());
    }

    tracing::info!(
        source = %tree.path().display(),
        host = %target.website_ip,
        dest = %target.remote_dir(),
        "transferring public tree"
    );
    if let Err(e) = deployer.transfer(tree, target) {
        tracing::warn!(error = %e, "transfer failed");
        warnings.push(e.to_string());
    }

    warnings
}
