use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::ActiveIndex;

/// How a single timeline entry should be styled relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionHighlight {
    /// After the active section, or every section while none is active.
    Upcoming,
    Active,
    /// Before the active section.
    Completed,
}

impl SectionHighlight {
    pub fn token(self) -> ThemeToken {
        match self {
            Self::Upcoming => ThemeToken::DotUpcoming,
            Self::Active => ThemeToken::DotActive,
            Self::Completed => ThemeToken::DotCompleted,
        }
    }

    /// Text color for the entry's label.
    pub fn label_token(self) -> ThemeToken {
        match self {
            Self::Upcoming => ThemeToken::TextMuted,
            Self::Active => ThemeToken::TextPrimary,
            Self::Completed => ThemeToken::TextSecondary,
        }
    }
}

/// Per-section styling for `count` sections given the current active index.
///
/// At most one entry is ever `Active`.
pub fn highlights(active: ActiveIndex, count: usize) -> Vec<SectionHighlight> {
    (0..count)
        .map(|i| match active.get() {
            Some(a) if a == i => SectionHighlight::Active,
            Some(a) if a > i => SectionHighlight::Completed,
            _ => SectionHighlight::Upcoming,
        })
        .collect()
}
