use std::fmt;

use serde::{Deserialize, Serialize};

/// The single section currently in focus, or none.
///
/// On the wire this is a plain integer in `-1..=N-1`, where `-1` means no
/// section is active. Rust callers work with the `Option<usize>` inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ActiveIndex(Option<usize>);

impl ActiveIndex {
    /// No section is active.
    pub const NONE: Self = Self(None);

    pub fn section(index: usize) -> Self {
        Self(Some(index))
    }

    pub fn get(self) -> Option<usize> {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0.is_none()
    }

    /// Raw sentinel encoding used by UI layers: `-1` for none.
    pub fn to_raw(self) -> i64 {
        match self.0 {
            Some(index) => i64::try_from(index).unwrap_or(i64::MAX),
            None => -1,
        }
    }
}

impl From<Option<usize>> for ActiveIndex {
    fn from(value: Option<usize>) -> Self {
        Self(value)
    }
}

impl From<ActiveIndex> for i64 {
    fn from(value: ActiveIndex) -> Self {
        value.to_raw()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidActiveIndex(pub i64);

impl fmt::Display for InvalidActiveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid active index {} (expected -1 or greater)", self.0)
    }
}

impl std::error::Error for InvalidActiveIndex {}

impl TryFrom<i64> for ActiveIndex {
    type Error = InvalidActiveIndex;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Self::NONE),
            n => usize::try_from(n)
                .map(Self::section)
                .map_err(|_| InvalidActiveIndex(raw)),
        }
    }
}

impl fmt::Display for ActiveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{index}"),
            None => write!(f, "none"),
        }
    }
}

/// Emitted when a resolver's stored index moves.
///
/// `progress` is the clamped value that caused the move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveChange {
    pub previous: ActiveIndex,
    pub current: ActiveIndex,
    pub progress: f64,
}
