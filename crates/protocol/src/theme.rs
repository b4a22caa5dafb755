use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by each host's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // Timeline dots
    DotActive,
    DotCompleted,
    DotUpcoming,

    // Track
    TrackLine,
    TrackFill,

    TextPrimary,
    TextSecondary,
    TextMuted,

    Background,
    HeaderBackground,
}
