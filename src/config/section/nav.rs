//! `onPageNav` option.

use serde::{Deserialize, Serialize};

/// In-page navigation rendering for documentation pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnPageNav {
    /// No in-page navigation (renderer default).
    #[default]
    #[serde(alias = "off")]
    None,

    /// Table of contents in a separate column beside the page.
    Separate,
}

impl OnPageNav {
    /// Off values are omitted from the renderer output.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
