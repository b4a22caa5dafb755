//! Browser-facing adapter. A page section creates one tracker on mount,
//! feeds it from its scroll listener, and disposes it on unmount.

mod registry;

use std::sync::{Mutex, MutexGuard};

use registry::Registry;
use scrollspy_core::{
    ActiveSectionResolver, FrameBatcher, ResolverConfig, SectionLayout, SectionSpan,
};
use scrollspy_protocol::ActiveIndex;
use wasm_bindgen::prelude::*;

static TRACKERS: Mutex<Registry<FrameBatcher>> = Mutex::new(Registry::new());

fn trackers() -> Result<MutexGuard<'static, Registry<FrameBatcher>>, JsError> {
    TRACKERS
        .lock()
        .map_err(|_| JsError::new("tracker registry poisoned"))
}

fn with_tracker<T>(
    handle: usize,
    f: impl FnOnce(&mut FrameBatcher) -> Result<T, JsError>,
) -> Result<T, JsError> {
    let mut trackers = trackers()?;
    let tracker = trackers
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid tracker handle"))?;
    f(tracker)
}

fn to_js_index(index: ActiveIndex) -> i32 {
    i32::try_from(index.to_raw()).unwrap_or(i32::MAX)
}

/// Create a tracker for `section_count` sections. `config_json` may be
/// omitted to use the defaults. Returns a handle for later calls.
#[wasm_bindgen]
pub fn create_tracker(section_count: usize, config_json: Option<String>) -> Result<usize, JsError> {
    let config = match config_json.as_deref() {
        Some(json) => ResolverConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?,
        None => ResolverConfig::default(),
    };
    let resolver = ActiveSectionResolver::with_config(section_count, config)
        .map_err(|e| JsError::new(&e.to_string()))?;

    Ok(trackers()?.insert(FrameBatcher::new(resolver)))
}

/// Queue a progress sample for the next animation frame.
#[wasm_bindgen]
pub fn push_progress(handle: usize, progress: f64) -> Result<(), JsError> {
    with_tracker(handle, |t| {
        t.push(progress);
        Ok(())
    })
}

/// Resolve the newest queued sample. Call from `requestAnimationFrame`.
/// Returns the active index, `-1` for none.
#[wasm_bindgen]
pub fn flush_frame(handle: usize) -> Result<i32, JsError> {
    with_tracker(handle, |t| {
        t.flush();
        Ok(to_js_index(t.active()))
    })
}

/// Resolve a sample immediately, bypassing frame batching.
#[wasm_bindgen]
pub fn resolve_progress(handle: usize, progress: f64) -> Result<i32, JsError> {
    with_tracker(handle, |t| {
        t.cancel();
        Ok(to_js_index(t.resolver_mut().resolve(progress)))
    })
}

/// Current active index without feeding a sample.
#[wasm_bindgen]
pub fn active_index(handle: usize) -> Result<i32, JsError> {
    with_tracker(handle, |t| Ok(to_js_index(t.active())))
}

/// Per-section styling as a JSON array of `"upcoming" | "active" | "completed"`.
#[wasm_bindgen]
pub fn highlights_json(handle: usize) -> Result<String, JsError> {
    with_tracker(handle, |t| {
        serde_json::to_string(&t.resolver().highlights()).map_err(|e| JsError::new(&e.to_string()))
    })
}

/// Section spans as JSON, for hosts that position dots or cards from them.
#[wasm_bindgen]
pub fn spans_json(handle: usize) -> Result<String, JsError> {
    with_tracker(handle, |t| {
        let spans: Vec<SectionSpan> = t.resolver().layout().spans().collect();
        serde_json::to_string(&spans).map_err(|e| JsError::new(&e.to_string()))
    })
}

/// Entrance animation progress (0..1) for the card of section `index`.
#[wasm_bindgen]
pub fn reveal_progress(handle: usize, progress: f64, index: usize) -> Result<f64, JsError> {
    with_tracker(handle, |t| Ok(t.resolver().layout().reveal_progress(progress, index)))
}

/// Horizontal translation in pixels for a scroll-hijacked track: the share
/// of the overflow (`content_width - viewport_width`) covered at `progress`.
#[wasm_bindgen]
pub fn horizontal_offset(progress: f64, content_width: f64, viewport_width: f64) -> f64 {
    SectionLayout::horizontal_offset(progress, content_width, viewport_width)
}

/// Release a tracker. Its handle may be reused by a later `create_tracker`.
#[wasm_bindgen]
pub fn dispose_tracker(handle: usize) -> Result<(), JsError> {
    trackers()?
        .remove(handle)
        .map(drop)
        .ok_or_else(|| JsError::new("invalid tracker handle"))
}
