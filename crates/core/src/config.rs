use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("threshold must be a finite, non-negative number (got {0})")]
    Threshold(f64),
    #[error("screen counts must be at most 1024 (got lead {lead}, trail {trail})")]
    Screens { lead: usize, trail: usize },
}

/// Upper bound on intro/outro screens accepted from a configuration document.
pub const MAX_SCREENS: usize = 1024;

/// Tuning for an [`ActiveSectionResolver`](crate::ActiveSectionResolver).
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Half-width of the band around each section center that activates the
    /// section unconditionally.
    pub threshold: f64,
    /// Intro screens before the first content section.
    pub lead_screens: usize,
    /// Outro screens after the last content section.
    pub trail_screens: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.03,
            lead_screens: 1,
            trail_screens: 1,
        }
    }
}

impl ResolverConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.lead_screens > MAX_SCREENS || self.trail_screens > MAX_SCREENS {
            return Err(ConfigError::Screens {
                lead: self.lead_screens,
                trail: self.trail_screens,
            });
        }
        Ok(())
    }
}
