//! End-to-end scroll scenarios for a three-entry timeline: one intro screen,
//! three content sections, one outro screen, so every boundary is a fifth.

use scrollspy_core::{ActiveIndex, ActiveSectionResolver, ResolverConfig};

fn three_sections() -> ActiveSectionResolver {
    ActiveSectionResolver::with_config(3, ResolverConfig::default()).expect("valid resolver")
}

fn raw(index: ActiveIndex) -> i64 {
    index.to_raw()
}

#[test]
fn boundary_walkthrough() {
    let mut r = three_sections();
    assert_eq!(raw(r.resolve(0.0)), -1);
    // Section 0's first pixel, nothing active yet.
    assert_eq!(raw(r.resolve(0.2)), 0);
    // Section 0's center.
    assert_eq!(raw(r.resolve(0.3)), 0);
    // Section 2's center.
    assert_eq!(raw(r.resolve(0.7)), 2);
    // Trailing screen keeps the last section lit.
    assert_eq!(raw(r.resolve(1.0)), 2);
}

#[test]
fn forward_hysteresis_waits_for_next_center() {
    let mut r = three_sections();
    assert_eq!(raw(r.resolve(0.3)), 0);
    for progress in [0.41, 0.43, 0.45, 0.46] {
        assert_eq!(raw(r.resolve(progress)), 0, "switched early at {progress}");
    }
    assert_eq!(raw(r.resolve(0.5)), 1);
}

#[test]
fn oscillating_near_boundary_does_not_flicker() {
    let mut r = three_sections();
    r.resolve(0.3);
    let before = r.generation();
    for i in 0..50 {
        let progress = if i % 2 == 0 { 0.395 } else { 0.405 };
        assert_eq!(raw(r.resolve(progress)), 0);
    }
    assert_eq!(r.generation(), before);
}

#[test]
fn repeated_progress_is_a_noop() {
    let mut r = three_sections();
    let first = r.resolve(0.5);
    let generation = r.generation();
    assert!(r.update(0.5).is_none());
    assert_eq!(r.active(), first);
    assert_eq!(r.generation(), generation);
}

#[test]
fn tail_then_back_to_intro_resets() {
    let mut r = three_sections();
    assert_eq!(raw(r.resolve(0.95)), 2);
    assert_eq!(raw(r.resolve(0.1)), -1);
    // And the machine is live again afterwards.
    assert_eq!(raw(r.resolve(0.3)), 0);
}

#[test]
fn upward_sweep_visits_each_section_once() {
    let mut r = three_sections();
    let mut seen: Vec<i64> = Vec::new();
    for step in 0..=1000 {
        let index = raw(r.resolve(f64::from(step) * 0.001));
        if seen.last() != Some(&index) {
            seen.push(index);
        }
    }
    assert_eq!(seen, vec![-1, 0, 1, 2]);
}

#[test]
fn every_change_is_reported_exactly_once() {
    let mut r = three_sections();
    let changes: Vec<_> = (0..=1000)
        .filter_map(|step| r.update(f64::from(step) * 0.001))
        .collect();
    assert_eq!(changes.len(), 3);
    assert_eq!(r.generation(), 3);
    for pair in changes.windows(2) {
        assert_eq!(pair[0].current, pair[1].previous);
    }
    assert_eq!(changes[0].previous, ActiveIndex::NONE);
}

#[test]
fn independent_resolvers_do_not_share_state() {
    let mut journey = three_sections();
    let mut timeline = ActiveSectionResolver::with_config(5, ResolverConfig::default())
        .expect("valid resolver");
    journey.resolve(0.7);
    assert_eq!(timeline.active(), ActiveIndex::NONE);
    timeline.resolve(0.2);
    assert_eq!(raw(journey.active()), 2);
}
