//! Rate-limited active-section tracking.

use super::{Section, SectionBounds, section_at};
use std::time::{Duration, Instant};
use tracing::debug;

/// Leading-edge rate limiter: the first call in each interval passes.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Allow at most one call per `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Whether a call at `now` may run. Records the call when it may.
    pub fn ready(&mut self, now: Instant) -> bool {
        let ready = self
            .last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if ready {
            self.last = Some(now);
        }
        ready
    }
}

/// Maps the scroll offset to the section currently in view.
///
/// The probe row is `offset + header_offset`. Sections are scanned in the
/// order given and the first one containing the probe wins; when none does,
/// the previous active section is kept.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy {
    header_offset: usize,
    active: Section,
    throttle: Throttle,
    pending: bool,
}

impl ScrollSpy {
    /// Track with a fixed header offset, evaluating at most once per `interval`.
    #[must_use]
    pub const fn new(header_offset: usize, interval: Duration) -> Self {
        Self {
            header_offset,
            active: Section::Hero,
            throttle: Throttle::new(interval),
            pending: false,
        }
    }

    /// Currently active section.
    #[must_use]
    pub const fn active(&self) -> Section {
        self.active
    }

    /// Whether a throttled scroll is still waiting to be evaluated.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Pure evaluation without throttling.
    #[must_use]
    pub fn active_section(
        &self,
        offset: usize,
        bounds: &[SectionBounds],
    ) -> Option<Section> {
        section_at(bounds, offset.saturating_add(self.header_offset))
    }

    /// React to a scroll. Returns the new section when it changed.
    ///
    /// Throttled scrolls are remembered and evaluated by [`Self::on_tick`].
    pub fn on_scroll(
        &mut self,
        offset: usize,
        bounds: &[SectionBounds],
        now: Instant,
    ) -> Option<Section> {
        if !self.throttle.ready(now) {
            self.pending = true;
            return None;
        }
        self.pending = false;
        self.evaluate(offset, bounds)
    }

    /// Evaluate a scroll that was throttled earlier, once the interval allows.
    pub fn on_tick(
        &mut self,
        offset: usize,
        bounds: &[SectionBounds],
        now: Instant,
    ) -> Option<Section> {
        if !self.pending || !self.throttle.ready(now) {
            return None;
        }
        self.pending = false;
        self.evaluate(offset, bounds)
    }

    /// Evaluate immediately, bypassing the throttle.
    pub fn force(&mut self, offset: usize, bounds: &[SectionBounds]) -> Option<Section> {
        self.pending = false;
        self.evaluate(offset, bounds)
    }

    fn evaluate(&mut self, offset: usize, bounds: &[SectionBounds]) -> Option<Section> {
        let found = self.active_section(offset, bounds)?;
        if found == self.active {
            return None;
        }
        debug!(from = %self.active, to = %found, "Active section changed");
        self.active = found;
        Some(found)
    }
}
