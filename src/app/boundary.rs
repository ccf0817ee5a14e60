//! Per-section containment of rendering faults.
//!
//! Each page section is built inside [`guard`]. A panic while building one
//! section is caught and recorded; that section then shows a fallback with
//! retry and reload hints while the rest of the page keeps rendering.
//! Faulted sections are not rebuilt until they are explicitly retried.

use crate::nav::Section;
use std::any::Any;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::error;

/// A section that failed to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFault {
    /// Which section.
    pub section: Section,
    /// Panic message.
    pub message: String,
}

thread_local! {
    static CONTAINING: Cell<bool> = const { Cell::new(false) };
}

/// Whether the current thread is inside [`guard`], so a panic raised now
/// will be caught and shown as a section fallback.
#[must_use]
pub fn is_containing() -> bool {
    CONTAINING.with(Cell::get)
}

/// Build a section's content, containing any panic.
///
/// # Errors
///
/// Returns a [`SectionFault`] when `build` panics.
pub fn guard<T>(section: Section, build: impl FnOnce() -> T) -> Result<T, SectionFault> {
    let outer = CONTAINING.with(|flag| flag.replace(true));
    let result = catch_unwind(AssertUnwindSafe(build));
    CONTAINING.with(|flag| flag.set(outer));
    result.map_err(|payload| {
        let message = panic_message(payload.as_ref());
        error!(%section, %message, "Section failed to render");
        SectionFault { section, message }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Which sections are currently showing their fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBoundaries {
    faults: BTreeMap<Section, String>,
}

impl SectionBoundaries {
    /// No faulted sections.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            faults: BTreeMap::new(),
        }
    }

    /// Remember a fault so the section stays on its fallback.
    pub fn record(&mut self, fault: SectionFault) {
        self.faults.insert(fault.section, fault.message);
    }

    /// Fault message for `section`, if it is faulted.
    #[must_use]
    pub fn fault(&self, section: Section) -> Option<&str> {
        self.faults.get(&section).map(String::as_str)
    }

    /// Whether any section is faulted.
    #[must_use]
    pub fn any(&self) -> bool {
        !self.faults.is_empty()
    }

    /// Let every faulted section try again. Returns how many were cleared.
    pub fn retry_all(&mut self) -> usize {
        let cleared = self.faults.len();
        self.faults.clear();
        cleared
    }
}
