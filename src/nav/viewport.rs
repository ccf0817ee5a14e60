//! The scrolling window onto the page.

/// Scroll position and geometry of the page viewport.
///
/// Offsets are page rows. While frozen (a modal holds the scroll lock) every
/// scroll request is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
    content_height: usize,
    target: Option<usize>,
    frozen: bool,
}

impl Viewport {
    /// An empty viewport at the top of the page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            height: 0,
            content_height: 0,
            target: None,
            frozen: false,
        }
    }

    /// Current top row.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Visible rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total page rows.
    #[must_use]
    pub const fn content_height(&self) -> usize {
        self.content_height
    }

    /// Row a smooth scroll is heading to, if one is running.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        self.target
    }

    /// Whether scrolling is suspended.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Largest valid offset for the current geometry.
    #[must_use]
    pub const fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    /// Update geometry after a layout pass.
    ///
    /// The offset is clamped to the new bounds unless the viewport is frozen;
    /// a frozen viewport keeps its offset untouched so it can be restored exactly.
    pub fn set_geometry(&mut self, height: usize, content_height: usize) {
        self.height = height;
        self.content_height = content_height;
        if !self.frozen {
            self.offset = self.offset.min(self.max_offset());
            self.target = self.target.map(|t| t.min(self.max_offset()));
        }
    }

    /// Scroll by `delta` rows. Returns true if the offset moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = self.offset.saturating_add_signed(delta);
        self.jump_to(target)
    }

    /// Move straight to `row` (clamped). Returns true if the offset moved.
    pub fn jump_to(&mut self, row: usize) -> bool {
        if self.frozen {
            return false;
        }
        self.target = None;
        let clamped = row.min(self.max_offset());
        let moved = clamped != self.offset;
        self.offset = clamped;
        moved
    }

    /// Start scrolling toward `row`.
    ///
    /// With `instant` set (reduced motion) this is a jump.
    pub fn scroll_to(&mut self, row: usize, instant: bool) -> bool {
        if self.frozen {
            return false;
        }
        if instant {
            return self.jump_to(row);
        }
        let clamped = row.min(self.max_offset());
        self.target = (clamped != self.offset).then_some(clamped);
        self.target.is_some()
    }

    /// Advance a smooth scroll by one frame. Returns true if the offset moved.
    ///
    /// Each frame covers a third of the remaining distance (at least one row).
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if self.frozen {
            return false;
        }
        let distance = target.abs_diff(self.offset);
        let stride = distance.div_ceil(3).max(1);
        if target > self.offset {
            self.offset += stride.min(distance);
        } else {
            self.offset -= stride.min(distance);
        }
        if self.offset == target {
            self.target = None;
        }
        true
    }

    /// Scroll the minimum needed so rows `[top, top + height)` are visible.
    pub fn ensure_visible(&mut self, top: usize, height: usize) -> bool {
        if self.frozen || self.height == 0 {
            return false;
        }
        let bottom = top + height;
        if top < self.offset {
            self.jump_to(top)
        } else if bottom > self.offset + self.height {
            self.jump_to(bottom.saturating_sub(self.height).min(top))
        } else {
            false
        }
    }

    /// Whether rows `[top, top + height)` come within `margin` rows of the window.
    #[must_use]
    pub const fn is_near(&self, top: usize, height: usize, margin: usize) -> bool {
        let window_top = self.offset.saturating_sub(margin);
        let window_bottom = self.offset + self.height + margin;
        top < window_bottom && top + height > window_top
    }

    /// Suspend scrolling; returns the offset at the moment of freezing.
    pub(crate) const fn freeze(&mut self) -> usize {
        self.frozen = true;
        self.target = None;
        self.offset
    }

    /// Resume scrolling at exactly `offset`.
    ///
    /// The offset is then clamped only if the page became too short to hold it.
    pub(crate) fn thaw(&mut self, offset: usize) {
        self.frozen = false;
        self.target = None;
        self.offset = offset.min(self.max_offset());
    }
}
