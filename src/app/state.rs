//! Application state

use super::boundary::{SectionBoundaries, SectionFault};
use super::feedback::{Announcement, PressTarget, PreviewCache, Pulse};
use super::input::Drafts;
use super::page::{PageFocus, PageLayout};
use crate::config::Config;
use crate::contact::{ContactForm, SubmitError, Submitter};
use crate::content::{ContentSource, Portfolio};
use crate::focus::ModalSession;
use crate::nav::{ScrollSpy, Section, Viewport, section_top};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Opens an external link (live demo, repository).
pub type LinkOpener = fn(&str) -> io::Result<()>;

/// Rows around the viewport within which card previews are resolved.
pub const PREVIEW_MARGIN: usize = 2;

/// What currently owns the keyboard.
#[derive(Debug, Default)]
pub enum Mode {
    /// Scrolling the page; page controls take focus.
    #[default]
    Page,
    /// A project modal is open and traps focus.
    ProjectModal(ModalSession),
    /// The keybinding overlay.
    Help,
    /// Portfolio content could not be loaded.
    LoadFailed(String),
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Whether the application should quit
    pub should_quit: bool,

    pub(super) mode: Mode,
    pub(super) source: ContentSource,
    pub(super) portfolio: Option<Portfolio>,
    pub(super) viewport: Viewport,
    pub(super) spy: ScrollSpy,
    pub(super) layout: PageLayout,
    pub(super) focus: Option<PageFocus>,
    pub(super) contact: ContactForm,
    pub(super) drafts: Drafts,
    pub(super) submitter: Arc<dyn Submitter>,
    pub(super) pending: Option<mpsc::Receiver<Result<(), SubmitError>>>,
    pub(super) boundaries: SectionBoundaries,
    pub(super) previews: PreviewCache,
    pub(super) announcement: Option<Announcement>,
    pub(super) pulse: Option<Pulse>,
    pub(super) opener: LinkOpener,
}

impl App {
    /// Create the application and load portfolio content from `source`.
    ///
    /// A load failure is not fatal: the app starts in [`Mode::LoadFailed`]
    /// and offers a reload.
    #[must_use]
    pub fn new(config: Config, source: ContentSource, submitter: Arc<dyn Submitter>) -> Self {
        let spy = ScrollSpy::new(config.scroll_spy_rows(), config.scroll_spy_throttle());
        let mut app = Self {
            config,
            should_quit: false,
            mode: Mode::Page,
            source,
            portfolio: None,
            viewport: Viewport::new(),
            spy,
            layout: PageLayout::default(),
            focus: None,
            contact: ContactForm::new(),
            drafts: Drafts::default(),
            submitter,
            pending: None,
            boundaries: SectionBoundaries::new(),
            previews: PreviewCache::new(),
            announcement: None,
            pulse: None,
            opener: open_link,
        };
        app.load_content();
        app
    }

    /// Replace the function used to open external links.
    #[must_use]
    pub fn with_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    fn load_content(&mut self) {
        match Portfolio::load(&self.source) {
            Ok(portfolio) => {
                self.portfolio = Some(portfolio);
                self.mode = Mode::Page;
            }
            Err(err) => {
                error!("Failed to load portfolio content: {err}");
                self.portfolio = None;
                self.mode = Mode::LoadFailed(err.to_string());
            }
        }
    }

    /// Start over: reload content and reset every piece of page state,
    /// including the contact form.
    pub fn reload(&mut self) {
        info!("Reloading page");
        self.viewport = Viewport::new();
        self.spy = ScrollSpy::new(
            self.config.scroll_spy_rows(),
            self.config.scroll_spy_throttle(),
        );
        self.layout = PageLayout::default();
        self.focus = None;
        self.contact = ContactForm::new();
        self.drafts = Drafts::default();
        self.pending = None;
        self.boundaries = SectionBoundaries::new();
        self.previews.clear();
        self.announcement = None;
        self.pulse = None;
        self.load_content();
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Loaded content, unless loading failed
    #[must_use]
    pub const fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_ref()
    }

    /// Where content is loaded from
    #[must_use]
    pub const fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Page viewport
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Section highlighted in the navigation header
    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.spy.active()
    }

    /// Latest measured page layout
    #[must_use]
    pub const fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Focused page control
    #[must_use]
    pub const fn focus(&self) -> Option<PageFocus> {
        self.focus
    }

    /// Contact form state
    #[must_use]
    pub const fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// What the visitor has typed into each field
    #[must_use]
    pub const fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    /// Sections currently showing their fallback
    #[must_use]
    pub const fn boundaries(&self) -> &SectionBoundaries {
        &self.boundaries
    }

    /// Resolved card previews
    #[must_use]
    pub const fn previews(&self) -> &PreviewCache {
        &self.previews
    }

    /// Status-line announcement, if one is showing
    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_ref().map(|a| a.message.as_str())
    }

    /// Whether `target` was pressed in the last few ticks
    #[must_use]
    pub fn is_pulsing(&self, target: PressTarget) -> bool {
        self.pulse.is_some_and(|pulse| pulse.target == target)
    }

    /// Whether a contact submission is in flight
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Show `message` on the status line for a couple of seconds.
    pub fn announce(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "Announcement");
        self.announcement = Some(Announcement::new(message, Instant::now()));
    }

    pub(super) const fn press(&mut self, target: PressTarget) {
        self.pulse = Some(Pulse::new(target));
    }

    /// Store the layout measured by the last render.
    ///
    /// `page_height` is the number of rows the page is drawn into.
    pub fn set_layout(&mut self, layout: PageLayout, page_height: usize) {
        self.viewport
            .set_geometry(page_height, layout.content_height);
        if layout != self.layout {
            self.layout = layout;
            self.spy.force(self.viewport.offset(), &self.layout.sections);
        }
        self.load_visible_previews();
    }

    /// Remember sections that failed to build so they stay on their fallback.
    pub fn record_faults(&mut self, faults: Vec<SectionFault>) {
        for fault in faults {
            self.boundaries.record(fault);
        }
    }

    /// Let faulted sections try to render again.
    pub fn retry_sections(&mut self) {
        let cleared = self.boundaries.retry_all();
        if cleared > 0 {
            info!(cleared, "Retrying faulted sections");
            self.announce("Retrying");
        }
    }

    /// Periodic work: finish submissions, animate scrolling, expire feedback.
    pub fn on_tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// [`Self::on_tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: Instant) {
        self.poll_submission();

        if self.viewport.step() {
            self.after_scroll(now);
        }
        let offset = self.viewport.offset();
        self.spy.on_tick(offset, &self.layout.sections, now);

        if self
            .announcement
            .as_ref()
            .is_some_and(|a| a.is_expired(now))
        {
            self.announcement = None;
        }
        if let Some(pulse) = &mut self.pulse
            && !pulse.tick()
        {
            self.pulse = None;
        }
    }

    /// Scroll the page by `delta` rows.
    pub fn scroll_by(&mut self, delta: isize) {
        if self.viewport.scroll_by(delta) {
            self.after_scroll(Instant::now());
        }
    }

    /// Scroll by one screen in the given direction.
    pub fn scroll_page(&mut self, down: bool) {
        let rows = isize::try_from(self.viewport.height().max(1)).unwrap_or(isize::MAX);
        self.scroll_by(if down { rows } else { -rows });
    }

    /// Jump to the top or bottom of the page.
    pub fn scroll_to_edge(&mut self, bottom: bool) {
        let row = if bottom {
            self.viewport.max_offset()
        } else {
            0
        };
        if self.viewport.jump_to(row) {
            self.after_scroll(Instant::now());
        }
    }

    /// Scroll to `section` and announce it.
    ///
    /// Animates unless reduced motion is on. A section missing from the
    /// layout scrolls to the top.
    pub fn go_to_section(&mut self, section: Section) {
        let top = section_top(&self.layout.sections, section).unwrap_or(0);
        let instant = self.config.reduced_motion;
        if self.viewport.scroll_to(top, instant) && instant {
            self.after_scroll(Instant::now());
        }
        self.announce(format!("Navigated to {} section", section.label()));
    }

    /// Move to the section after (or before) the active one.
    pub fn step_section(&mut self, forward: bool) {
        let active = self.spy.active();
        let next = if forward { active.next() } else { active.prev() };
        if next != active {
            self.go_to_section(next);
        }
    }

    pub(super) fn after_scroll(&mut self, now: Instant) {
        let offset = self.viewport.offset();
        self.spy.on_scroll(offset, &self.layout.sections, now);
        self.load_visible_previews();
    }

    /// Resolve previews for cards at or near the viewport.
    fn load_visible_previews(&mut self) {
        let Some(portfolio) = &self.portfolio else {
            return;
        };
        for region in &self.layout.targets {
            let PageFocus::Project(index) = region.target else {
                continue;
            };
            if !self
                .viewport
                .is_near(region.top, region.height, PREVIEW_MARGIN)
            {
                continue;
            }
            if let Some(project) = portfolio.project(index) {
                self.previews.load(project, &self.source);
            }
        }
    }

    /// Open or close the keybinding overlay.
    pub fn toggle_help(&mut self) {
        self.mode = match std::mem::take(&mut self.mode) {
            Mode::Page => Mode::Help,
            Mode::Help => Mode::Page,
            other => other,
        };
    }

    /// Request shutdown.
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Hand a URL to the desktop's opener.
///
/// # Errors
///
/// Returns an error when the opener cannot be started.
pub fn open_link(url: &str) -> io::Result<()> {
    let program = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    let mut command = Command::new(program);
    command.arg(url);
    spawn_reaped(command).map(drop)
}

/// Start `command` with no stdio and wait for it on a short-lived thread so
/// the finished child does not linger as a zombie.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    thread::Builder::new()
        .name("link-opener".to_string())
        .spawn(move || {
            let status = child.wait();
            if let Err(e) = &status {
                warn!("Failed to wait for link opener: {e}");
            }
            status
        })
}
