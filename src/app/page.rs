//! Page geometry shared between rendering and input.
//!
//! The renderer measures every section and every focusable control as it
//! lays out the page; the app keeps the latest [`PageLayout`] so keyboard
//! focus, scrolling and mouse hits all agree on where things are.

use crate::contact::Field;
use crate::nav::SectionBounds;

/// A focusable control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageFocus {
    /// A project card, by display index.
    Project(usize),
    /// A contact form input.
    Field(Field),
    /// The contact form's send button.
    Send,
}

impl PageFocus {
    /// Tab order: project cards, then the form inputs, then the send button.
    #[must_use]
    pub fn order(project_count: usize) -> Vec<Self> {
        (0..project_count)
            .map(Self::Project)
            .chain(Field::ALL.into_iter().map(Self::Field))
            .chain(std::iter::once(Self::Send))
            .collect()
    }

    /// The form field, when this is one.
    #[must_use]
    pub const fn field(self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::Project(_) | Self::Send => None,
        }
    }
}

/// Rows occupied by one focusable control, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRegion {
    /// The control.
    pub target: PageFocus,
    /// First row.
    pub top: usize,
    /// Number of rows.
    pub height: usize,
}

impl TargetRegion {
    /// Whether `row` falls inside the region.
    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// Measured layout of the whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Section extents in document order.
    pub sections: Vec<SectionBounds>,
    /// Focusable controls.
    pub targets: Vec<TargetRegion>,
    /// Total number of rows.
    pub content_height: usize,
}

impl PageLayout {
    /// Control under page row `row`.
    #[must_use]
    pub fn target_at(&self, row: usize) -> Option<PageFocus> {
        self.targets
            .iter()
            .find(|region| region.contains(row))
            .map(|region| region.target)
    }

    /// Where `target` was laid out.
    #[must_use]
    pub fn region(&self, target: PageFocus) -> Option<TargetRegion> {
        self.targets
            .iter()
            .find(|region| region.target == target)
            .copied()
    }
}
