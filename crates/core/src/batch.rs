use scrollspy_protocol::{ActiveChange, ActiveIndex};
use tracing::trace;

use crate::resolver::ActiveSectionResolver;

/// Coalesces progress samples that arrive within one animation frame.
///
/// Scroll listeners can fire many times per frame. Only the newest sample
/// matters, so `push` overwrites and `flush` resolves once per frame.
#[derive(Debug, Clone)]
pub struct FrameBatcher {
    resolver: ActiveSectionResolver,
    pending: Option<f64>,
    coalesced: u32,
}

impl FrameBatcher {
    pub fn new(resolver: ActiveSectionResolver) -> Self {
        Self {
            resolver,
            pending: None,
            coalesced: 0,
        }
    }

    /// Record a sample, replacing any sample not yet flushed.
    pub fn push(&mut self, progress: f64) {
        self.pending = Some(progress);
        self.coalesced = self.coalesced.saturating_add(1);
    }

    /// Whether a sample is waiting for the next frame.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve the newest pending sample, if any.
    pub fn flush(&mut self) -> Option<ActiveChange> {
        let progress = self.pending.take()?;
        trace!(samples = self.coalesced, progress, "flushing frame");
        self.coalesced = 0;
        self.resolver.update(progress)
    }

    /// Drop any pending sample without resolving it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.coalesced = 0;
    }

    pub fn active(&self) -> ActiveIndex {
        self.resolver.active()
    }

    pub fn resolver(&self) -> &ActiveSectionResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut ActiveSectionResolver {
        &mut self.resolver
    }
}
