//! folio - a developer portfolio for the terminal
//!
//! folio renders a single scrolling page (hero, about, skills, projects and
//! contact) from three JSON documents, with a scroll-spy navigation header,
//! project detail dialogs and a contact form that posts to a configured
//! endpoint.

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod focus;
pub mod nav;
pub mod paths;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use contact::{ContactForm, HttpSubmitter, Submitter};
pub use content::{ContentSource, Portfolio};
pub use nav::Section;
