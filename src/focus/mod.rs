//! Keyboard focus containment and scroll locking for modal overlays.
//!
//! A [`ModalSession`] bundles the two things an open modal holds: a
//! [`FocusTrap`] over its controls and a [`ScrollLock`] on the page
//! viewport. Closing the session is the only way to release the lock, and
//! it restores the page offset captured when the modal opened.

use crate::content::Project;
use crate::nav::Viewport;
use tracing::debug;

/// Cycles focus among a fixed, ordered set of members.
///
/// Tab moves forward and Shift+Tab backward; both wrap at the ends, so focus
/// can never land on anything outside the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap<T> {
    members: Vec<T>,
    index: usize,
}

impl<T: Copy + PartialEq> FocusTrap<T> {
    /// Trap over `members` with focus on the first one. `None` when empty.
    #[must_use]
    pub fn new(members: Vec<T>) -> Option<Self> {
        if members.is_empty() {
            return None;
        }
        Some(Self { members, index: 0 })
    }

    /// Focused member.
    #[must_use]
    pub fn current(&self) -> T {
        self.members[self.index]
    }

    /// Position of the focused member.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Members in focus order.
    #[must_use]
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Whether `member` belongs to the trap.
    #[must_use]
    pub fn contains(&self, member: T) -> bool {
        self.members.contains(&member)
    }

    /// Move forward, wrapping to the first member.
    pub fn next(&mut self) -> T {
        self.index = (self.index + 1) % self.members.len();
        self.current()
    }

    /// Move backward, wrapping to the last member.
    pub fn prev(&mut self) -> T {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.members.len() - 1);
        self.current()
    }

    /// Focus `member` directly. Returns false (and leaves focus alone) if it
    /// is not part of the trap.
    pub fn focus(&mut self, member: T) -> bool {
        match self.members.iter().position(|m| *m == member) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}

/// Page scrolling suspended at a saved offset.
///
/// Obtained from [`ScrollLock::engage`] and handed back through
/// [`ScrollLock::release`], which restores the saved offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a scroll lock must be released to restore scrolling"]
pub struct ScrollLock {
    saved_offset: usize,
}

impl ScrollLock {
    /// Freeze `viewport` at its current offset.
    pub fn engage(viewport: &mut Viewport) -> Self {
        let saved_offset = viewport.freeze();
        debug!(saved_offset, "Scroll locked");
        Self { saved_offset }
    }

    /// Offset that will be restored on release.
    #[must_use]
    pub const fn saved_offset(&self) -> usize {
        self.saved_offset
    }

    /// Unfreeze `viewport` and put it back at the saved offset.
    pub fn release(self, viewport: &mut Viewport) {
        viewport.thaw(self.saved_offset);
        debug!(offset = viewport.offset(), "Scroll unlocked");
    }
}

/// A control inside the project detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalControl {
    /// Dismiss the modal.
    Close,
    /// Open the live demo link.
    LiveDemo,
    /// Open the repository link.
    GitHub,
}

impl ModalControl {
    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::LiveDemo => "Live Demo",
            Self::GitHub => "GitHub",
        }
    }

    /// Focusable controls for `project`: Close, then each link it has.
    #[must_use]
    pub fn for_project(project: &Project) -> Vec<Self> {
        let mut controls = vec![Self::Close];
        if project.live_url().is_some() {
            controls.push(Self::LiveDemo);
        }
        if project.github_url().is_some() {
            controls.push(Self::GitHub);
        }
        controls
    }
}

/// State held while a project modal is open.
#[derive(Debug)]
pub struct ModalSession {
    project: usize,
    trap: FocusTrap<ModalControl>,
    lock: ScrollLock,
}

impl ModalSession {
    /// Open a modal for the project at display index `project`.
    ///
    /// Locks page scrolling and puts focus on the first control.
    pub fn open(project: usize, details: &Project, viewport: &mut Viewport) -> Self {
        let controls = ModalControl::for_project(details);
        let trap = FocusTrap::new(controls).unwrap_or(FocusTrap {
            members: vec![ModalControl::Close],
            index: 0,
        });
        let lock = ScrollLock::engage(viewport);
        debug!(project = %details.id, "Opened project modal");
        Self {
            project,
            trap,
            lock,
        }
    }

    /// Display index of the project being shown.
    #[must_use]
    pub const fn project(&self) -> usize {
        self.project
    }

    /// Focused control.
    #[must_use]
    pub fn focused(&self) -> ModalControl {
        self.trap.current()
    }

    /// The focus trap.
    #[must_use]
    pub const fn trap(&self) -> &FocusTrap<ModalControl> {
        &self.trap
    }

    /// Tab.
    pub fn focus_next(&mut self) -> ModalControl {
        self.trap.next()
    }

    /// Shift+Tab.
    pub fn focus_prev(&mut self) -> ModalControl {
        self.trap.prev()
    }

    /// Focus a specific control (e.g. after a click). False if absent.
    pub fn focus(&mut self, control: ModalControl) -> bool {
        self.trap.focus(control)
    }

    /// Offset the page returns to on close.
    #[must_use]
    pub const fn saved_offset(&self) -> usize {
        self.lock.saved_offset()
    }

    /// Tear down: release the scroll lock. Returns the project index.
    pub fn close(self, viewport: &mut Viewport) -> usize {
        self.lock.release(viewport);
        debug!(project = self.project, "Closed project modal");
        self.project
    }
}
