// ── Audience ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Who a rendered document is for. Decides content inclusion and whether
/// the output goes through the sanitizer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Audience {
    Public,
    Private,
}

impl Audience {
    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}
