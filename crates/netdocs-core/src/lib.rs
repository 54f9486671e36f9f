//! Dual-audience network documentation: model, redaction, rendering and
//! publishing for the `netdocs` workspace.
//!
//! One network document renders into two trees:
//!
//! - **Public**: six shared pages. Private-only blocks are never built, and
//!   every page passes through the [`Sanitizer`], which substitutes each
//!   sensitive literal and then re-scans the output. A surviving literal
//!   fails the whole public tree with [`CoreError::Leak`].
//!
//! - **Private**: the same six pages with their private blocks, plus the
//!   credential quick reference and the SSH and database runbooks. Written
//!   verbatim, with stylesheets and diagrams mirrored from the public tree.
//!
//! - **[`NetworkConfig`]**: the validated, read-only network model.
//!   Deserialization lives here; reading the file lives in `netdocs-config`.
//!
//! - **[`RedactionTable`]**: literal to placeholder rules built from the
//!   static catalog and from values pulled out of the model.
//!
//! - **[`Publisher`]**: renders, sanitizes and writes. Deploy only ever
//!   receives a [`PublicTree`].

pub mod audience;
pub mod error;
pub mod html;
pub mod model;
pub mod publish;
pub mod redact;
pub mod render;

// ── Primary re-exports ──────────────────────────────────────────────
pub use audience::Audience;
pub use error::CoreError;
pub use model::NetworkConfig;
pub use publish::{
    CollaboratorFailure, Deployer, OutputLayout, PublicTree, PublishReport, Publisher,
    RenderedPage, WrittenDocument, deploy,
};
pub use redact::{RedactionRule, RedactionTable, Sanitizer};
pub use render::Page;
