//! Transient UI feedback: status announcements, press pulses and lazily
//! resolved project previews.

use crate::content::{ContentSource, Project};
use crate::focus::ModalControl;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

use super::PageFocus;

/// How long an announcement stays on the status line.
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_secs(2);

/// Ticks a pressed control stays highlighted.
pub const PULSE_TICKS: u8 = 3;

/// A short status-line message that expires on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Text to show.
    pub message: String,
    expires_at: Instant,
}

impl Announcement {
    /// Announce `message` from `now` for [`ANNOUNCEMENT_TTL`].
    #[must_use]
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + ANNOUNCEMENT_TTL,
        }
    }

    /// Whether the message should be gone at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Something that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// A control on the page.
    Page(PageFocus),
    /// A control in the project modal.
    Modal(ModalControl),
}

/// Highlight left on a control after it was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// Pressed control.
    pub target: PressTarget,
    remaining: u8,
}

impl Pulse {
    /// Start a pulse on `target`.
    #[must_use]
    pub const fn new(target: PressTarget) -> Self {
        Self {
            target,
            remaining: PULSE_TICKS,
        }
    }

    /// Advance one tick. Returns false once the pulse is over.
    pub const fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }
}

/// What a project card shows in place of its image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// The image file exists.
    Image(PathBuf),
    /// No usable image; show the placeholder.
    Placeholder,
}

impl Preview {
    /// Check the filesystem for `project`'s preview image.
    #[must_use]
    pub fn resolve(project: &Project, source: &ContentSource) -> Self {
        source
            .resolve_asset(&project.preview_image)
            .filter(|path| path.is_file())
            .map_or(Self::Placeholder, Self::Image)
    }
}

/// Previews resolved so far, keyed by project id.
#[derive(Debug, Clone, Default)]
pub struct PreviewCache {
    resolved: HashMap<String, Preview>,
}

impl PreviewCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preview for `project_id`, or `None` while it has not been loaded.
    #[must_use]
    pub fn get(&self, project_id: &str) -> Option<&Preview> {
        self.resolved.get(project_id)
    }

    /// Resolve `project`'s preview unless it already was.
    pub fn load(&mut self, project: &Project, source: &ContentSource) -> &Preview {
        self.resolved.entry(project.id.clone()).or_insert_with(|| {
            let preview = Preview::resolve(project, source);
            debug!(project = %project.id, ?preview, "Resolved project preview");
            preview
        })
    }

    /// Forget everything (on reload).
    pub fn clear(&mut self) {
        self.resolved.clear();
    }

    /// Number of previews resolved.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// True when nothing has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
