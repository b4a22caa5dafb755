use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("a section layout needs at least one section")]
    NoSections,
    #[error("section and screen counts overflow the layout")]
    TooLarge,
}

/// One section's share of the total scroll range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub start: f64,
    /// Exclusive.
    pub end: f64,
    pub center: f64,
}

impl SectionSpan {
    pub fn contains(&self, progress: f64) -> bool {
        progress >= self.start && progress < self.end
    }

    /// Whether `progress` lies within `threshold` of the center, inclusive.
    pub fn near_center(&self, progress: f64, threshold: f64) -> bool {
        progress >= self.center - threshold && progress <= self.center + threshold
    }
}

/// Divides the scroll range into `lead` intro screens, `N` equal content
/// sections, and `trail` outro screens.
///
/// All boundaries share the denominator `N + lead + trail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    section_count: NonZeroUsize,
    lead_screens: usize,
    trail_screens: usize,
}

impl SectionLayout {
    /// One intro and one outro screen around the content sections.
    pub fn new(section_count: NonZeroUsize) -> Self {
        Self::with_screens(section_count, 1, 1)
    }

    pub fn with_screens(
        section_count: NonZeroUsize,
        lead_screens: usize,
        trail_screens: usize,
    ) -> Self {
        Self {
            section_count,
            lead_screens,
            trail_screens,
        }
    }

    /// Layout from an unchecked count, as received from a foreign caller.
    pub fn from_count(
        section_count: usize,
        lead_screens: usize,
        trail_screens: usize,
    ) -> Result<Self, LayoutError> {
        let count = NonZeroUsize::new(section_count).ok_or(LayoutError::NoSections)?;
        section_count
            .checked_add(lead_screens)
            .and_then(|n| n.checked_add(trail_screens))
            .ok_or(LayoutError::TooLarge)?;
        Ok(Self::with_screens(count, lead_screens, trail_screens))
    }

    pub fn section_count(&self) -> usize {
        self.section_count.get()
    }

    pub fn lead_screens(&self) -> usize {
        self.lead_screens
    }

    pub fn trail_screens(&self) -> usize {
        self.trail_screens
    }

    fn denominator(&self) -> f64 {
        self.section_count
            .get()
            .saturating_add(self.lead_screens)
            .saturating_add(self.trail_screens) as f64
    }

    /// Span of section `index`. Indices past the last section extrapolate.
    pub fn span(&self, index: usize) -> SectionSpan {
        let d = self.denominator();
        let slot = index.saturating_add(self.lead_screens) as f64;
        let start = slot / d;
        let end = (slot + 1.0) / d;
        SectionSpan {
            start,
            end,
            center: (start + end) / 2.0,
        }
    }

    pub fn spans(&self) -> impl Iterator<Item = SectionSpan> + '_ {
        (0..self.section_count()).map(|i| self.span(i))
    }

    /// Progress below this is still inside the intro screens.
    pub fn head_boundary(&self) -> f64 {
        self.lead_screens as f64 / self.denominator()
    }

    /// Progress at or above this has passed every content section.
    pub fn tail_boundary(&self) -> f64 {
        self.section_count().saturating_add(self.lead_screens) as f64 / self.denominator()
    }

    /// Entrance curve for the card of section `index`: 0 when the card is
    /// half a section away from its slot, 1 when it is half a section past.
    pub fn reveal_progress(&self, progress: f64, index: usize) -> f64 {
        let d = self.denominator();
        let slot = index.saturating_add(self.lead_screens) as f64;
        let from = (slot - 0.5) / d;
        let to = (slot + 0.5) / d;
        ((progress - from) / (to - from)).clamp(0.0, 1.0)
    }

    /// Pixel translation of a horizontally scrolled track. Zero when the
    /// content already fits the viewport.
    pub fn horizontal_offset(progress: f64, content_width: f64, viewport_width: f64) -> f64 {
        let overflow = (content_width - viewport_width).max(0.0);
        progress.clamp(0.0, 1.0) * overflow
    }
}
