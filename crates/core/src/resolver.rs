use std::num::NonZeroUsize;

use scrollspy_protocol::{ActiveChange, ActiveIndex, SectionHighlight, highlights};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{ConfigError, ResolverConfig};
use crate::layout::SectionLayout;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("layout: {0}")]
    Layout(#[from] crate::layout::LayoutError),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// Turns a stream of scroll-progress values into a single active section.
///
/// The stored index is the only mutable state. Rules, in priority order on
/// every call:
///
/// 1. A section whose center lies within `threshold` of the progress wins,
///    lowest index first.
/// 2. Otherwise the section whose span contains the progress wins, but only
///    once the progress has reached its center or while nothing is active.
/// 3. Past the last section the last section stays active.
/// 4. Inside the intro screens nothing is active.
///
/// When no rule picks a section the previous index is kept. Rule 2 only
/// guards forward movement; scrolling back past a center switches at once.
#[derive(Debug, Clone)]
pub struct ActiveSectionResolver {
    layout: SectionLayout,
    threshold: f64,
    active: ActiveIndex,
    generation: u64,
}

impl ActiveSectionResolver {
    /// Resolver with the default configuration.
    pub fn new(section_count: NonZeroUsize) -> Self {
        Self::from_layout(SectionLayout::new(section_count), ResolverConfig::default().threshold)
    }

    /// Resolver for an unchecked section count. A count of zero is a caller
    /// bug and is reported rather than mapped to the none sentinel.
    pub fn with_config(section_count: usize, config: ResolverConfig) -> Result<Self, ResolverError> {
        config.validate()?;
        let layout =
            SectionLayout::from_count(section_count, config.lead_screens, config.trail_screens)?;
        Ok(Self::from_layout(layout, config.threshold))
    }

    fn from_layout(layout: SectionLayout, threshold: f64) -> Self {
        Self {
            layout,
            threshold,
            active: ActiveIndex::NONE,
            generation: 0,
        }
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn active(&self) -> ActiveIndex {
        self.active
    }

    /// Number of index changes emitted so far. Calls that leave the index
    /// where it was do not advance it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Feed one progress value and return the resulting active index.
    pub fn resolve(&mut self, progress: f64) -> ActiveIndex {
        self.update(progress);
        self.active
    }

    /// Feed one progress value. Returns the change if the index moved.
    ///
    /// Values outside `[0, 1]` are clamped; NaN is ignored.
    pub fn update(&mut self, progress: f64) -> Option<ActiveChange> {
        if progress.is_nan() {
            trace!("ignoring NaN progress");
            return None;
        }
        let clamped = progress.clamp(0.0, 1.0);
        if clamped != progress {
            trace!(progress, clamped, "clamped out-of-range progress");
        }

        let next = self.evaluate(clamped);
        if next == self.active {
            return None;
        }

        let change = ActiveChange {
            previous: self.active,
            current: next,
            progress: clamped,
        };
        self.active = next;
        self.generation += 1;
        debug!(
            previous = %change.previous,
            current = %change.current,
            progress = clamped,
            "active section changed"
        );
        Some(change)
    }

    /// Forget the stored index, as when the tracked component unmounts.
    pub fn reset(&mut self) {
        self.active = ActiveIndex::NONE;
    }

    /// Styling for every section under the current index.
    pub fn highlights(&self) -> Vec<SectionHighlight> {
        highlights(self.active, self.layout.section_count())
    }

    fn evaluate(&self, progress: f64) -> ActiveIndex {
        let last = self.layout.section_count() - 1;
        if progress < self.layout.head_boundary() {
            return ActiveIndex::NONE;
        }
        if progress >= self.layout.tail_boundary() {
            return ActiveIndex::section(last);
        }

        let by_center = self
            .layout
            .spans()
            .position(|span| span.near_center(progress, self.threshold));
        let picked = by_center.or_else(|| {
            self.layout.spans().position(|span| {
                span.contains(progress) && (progress >= span.center || self.active.is_none())
            })
        });

        picked.map_or(self.active, ActiveIndex::section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(n: usize) -> ActiveSectionResolver {
        ActiveSectionResolver::with_config(n, ResolverConfig::default()).unwrap()
    }

    #[test]
    fn starts_with_nothing_active() {
        let r = resolver(3);
        assert_eq!(r.active(), ActiveIndex::NONE);
        assert_eq!(r.generation(), 0);
    }

    #[test]
    fn default_constructor_uses_default_tuning() {
        let r = ActiveSectionResolver::new(NonZeroUsize::new(4).unwrap());
        assert_eq!(r.threshold(), 0.03);
        assert_eq!(r.layout().section_count(), 4);
        assert_eq!(r.layout().lead_screens(), 1);
        assert_eq!(r.layout().trail_screens(), 1);
    }

    #[test]
    fn zero_sections_is_an_error() {
        let err = ActiveSectionResolver::with_config(0, ResolverConfig::default()).unwrap_err();
        assert!(matches!(err, ResolverError::Layout(_)));
    }

    #[test]
    fn invalid_threshold_is_an_error() {
        let config = ResolverConfig::default().with_threshold(-1.0);
        let err = ActiveSectionResolver::with_config(3, config).unwrap_err();
        assert!(matches!(err, ResolverError::Config(_)));
    }

    #[test]
    fn huge_screen_counts_rejected_before_resolving() {
        let config = ResolverConfig {
            lead_screens: usize::MAX,
            ..ResolverConfig::default()
        };
        let err = ActiveSectionResolver::with_config(3, config).unwrap_err();
        assert!(matches!(err, ResolverError::Config(ConfigError::Screens { .. })));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let mut r = resolver(3);
        assert_eq!(r.resolve(1.7), ActiveIndex::section(2));
        assert_eq!(r.resolve(-0.4), ActiveIndex::NONE);
    }

    #[test]
    fn clamped_progress_reported_in_change() {
        let mut r = resolver(3);
        let change = r.update(3.0).unwrap();
        assert_eq!(change.progress, 1.0);
        assert_eq!(change.previous, ActiveIndex::NONE);
        assert_eq!(change.current, ActiveIndex::section(2));
    }

    #[test]
    fn nan_progress_leaves_state_alone() {
        let mut r = resolver(3);
        r.resolve(0.5);
        let generation = r.generation();
        assert!(r.update(f64::NAN).is_none());
        assert_eq!(r.active(), ActiveIndex::section(1));
        assert_eq!(r.generation(), generation);
    }

    #[test]
    fn jump_from_nothing_lands_in_containing_section() {
        let mut r = resolver(3);
        // Before section 1's center band, but nothing was active yet.
        assert_eq!(r.resolve(0.42), ActiveIndex::section(1));
    }

    #[test]
    fn backward_scroll_switches_at_previous_center() {
        let mut r = resolver(3);
        r.resolve(0.5);
        // Back into section 0's second half.
        assert_eq!(r.resolve(0.38), ActiveIndex::section(0));
    }

    #[test]
    fn backward_scroll_into_first_half_keeps_index() {
        let mut r = resolver(3);
        r.resolve(0.7);
        // Section 1's first half, outside its center band.
        assert_eq!(r.resolve(0.42), ActiveIndex::section(2));
    }

    #[test]
    fn single_section() {
        let mut r = resolver(1);
        assert_eq!(r.resolve(0.1), ActiveIndex::NONE);
        assert_eq!(r.resolve(0.34), ActiveIndex::section(0));
        assert_eq!(r.resolve(0.9), ActiveIndex::section(0));
    }

    #[test]
    fn reset_returns_to_none() {
        let mut r = resolver(3);
        r.resolve(0.5);
        r.reset();
        assert_eq!(r.active(), ActiveIndex::NONE);
    }

    #[test]
    fn highlights_follow_active_index() {
        let mut r = resolver(3);
        r.resolve(0.5);
        assert_eq!(
            r.highlights(),
            vec![
                SectionHighlight::Completed,
                SectionHighlight::Active,
                SectionHighlight::Upcoming,
            ]
        );
    }

    #[test]
    fn no_intro_screen_activates_from_zero() {
        let config = ResolverConfig {
            lead_screens: 0,
            ..ResolverConfig::default()
        };
        let mut r = ActiveSectionResolver::with_config(2, config).unwrap();
        assert_eq!(r.resolve(0.0), ActiveIndex::section(0));
    }
}
