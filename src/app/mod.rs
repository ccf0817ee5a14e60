//! Application state and logic

mod actions;
mod boundary;
mod event;
mod feedback;
mod form;
mod input;
mod modal;
mod page;
mod state;

pub use boundary::{SectionBoundaries, SectionFault, guard, is_containing};
pub use event::{Event, Handler};
pub use feedback::{
    ANNOUNCEMENT_TTL, Announcement, PULSE_TICKS, PressTarget, Preview, PreviewCache, Pulse,
};
pub use form::SUBMIT_THREAD;
pub use input::{Drafts, TextInput};
pub use page::{PageFocus, PageLayout, TargetRegion};
pub use state::{App, LinkOpener, Mode, PREVIEW_MARGIN, open_link};
