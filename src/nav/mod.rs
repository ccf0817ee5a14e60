//! Page sections, the scroll viewport and scroll-spy tracking.

mod spy;
mod viewport;

pub use spy::{ScrollSpy, Throttle};
pub use viewport::Viewport;

use std::fmt;

/// A top-level page section, in page order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Banner with name, title and introduction.
    #[default]
    Hero,
    /// Biography and social links.
    About,
    /// Skills grouped by category.
    Skills,
    /// Project cards.
    Projects,
    /// Contact form.
    Contact,
}

impl Section {
    /// Every section in page order.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Anchor identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Name shown in the navigation header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Position in page order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Section at `index` in page order.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following section, or `self` at the end of the page.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Preceding section, or `self` at the top of the page.
    #[must_use]
    pub fn prev(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vertical extent of a laid-out section, in page rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Which section.
    pub section: Section,
    /// First row.
    pub top: usize,
    /// Number of rows.
    pub height: usize,
}

impl SectionBounds {
    /// Whether `row` falls inside `[top, top + height)`.
    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// First section, in the order given, whose bounds contain `probe`.
#[must_use]
pub fn section_at(bounds: &[SectionBounds], probe: usize) -> Option<Section> {
    bounds
        .iter()
        .find(|b| b.contains(probe))
        .map(|b| b.section)
}

/// Top row of `section`, if it has been laid out.
#[must_use]
pub fn section_top(bounds: &[SectionBounds], section: Section) -> Option<usize> {
    bounds.iter().find(|b| b.section == section).map(|b| b.top)
}
