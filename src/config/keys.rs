//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Keys with fixed meaning (focus movement, activation, dismissal).
///
/// These are handled before bindings are consulted and cannot be rebound.
pub const STRUCTURAL_KEYS: &[&str] = &["Tab", "BackTab", "Shift+BackTab", "Enter", "Esc"];

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Scroll the page up one row
    ScrollUp,
    /// Scroll the page down one row
    ScrollDown,
    /// Scroll up one screen
    PageUp,
    /// Scroll down one screen
    PageDown,
    /// Jump to the top of the page
    ScrollTop,
    /// Jump to the bottom of the page
    ScrollBottom,
    /// Go to the following section
    NextSection,
    /// Go to the preceding section
    PrevSection,
    /// Go to the hero banner
    GoHome,
    /// Go to the about section
    GoAbout,
    /// Go to the skills section
    GoSkills,
    /// Go to the projects section
    GoProjects,
    /// Go to the contact form
    GoContact,
    /// Retry sections that failed to render
    Retry,
    /// Reload content and reset the page
    Reload,
    /// Show help
    Help,
    /// Quit application
    Quit,
}

/// Categories for grouping actions in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Scrolling within the page
    Scrolling,
    /// Jumping between sections
    Sections,
    /// Miscellaneous actions
    Other,
}

impl ActionGroup {
    /// Get the display title for this group
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Scrolling => "Scrolling",
            Self::Sections => "Sections",
            Self::Other => "Other",
        }
    }
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::PageUp => "Page up",
            Self::PageDown => "Page down",
            Self::ScrollTop => "Top of page",
            Self::ScrollBottom => "Bottom of page",
            Self::NextSection => "Next section",
            Self::PrevSection => "Previous section",
            Self::GoHome => "Home",
            Self::GoAbout => "About",
            Self::GoSkills => "Skills",
            Self::GoProjects => "Projects",
            Self::GoContact => "Contact",
            Self::Retry => "Retry failed sections",
            Self::Reload => "Reload page",
            Self::Help => "Show this help",
            Self::Quit => "Quit",
        }
    }

    /// Get the group this action belongs to
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::ScrollUp
            | Self::ScrollDown
            | Self::PageUp
            | Self::PageDown
            | Self::ScrollTop
            | Self::ScrollBottom => ActionGroup::Scrolling,
            Self::NextSection
            | Self::PrevSection
            | Self::GoHome
            | Self::GoAbout
            | Self::GoSkills
            | Self::GoProjects
            | Self::GoContact => ActionGroup::Sections,
            Self::Retry | Self::Reload | Self::Help | Self::Quit => ActionGroup::Other,
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        // Scrolling
        Self::ScrollDown,
        Self::ScrollUp,
        Self::PageDown,
        Self::PageUp,
        Self::ScrollTop,
        Self::ScrollBottom,
        // Sections
        Self::NextSection,
        Self::PrevSection,
        Self::GoHome,
        Self::GoAbout,
        Self::GoSkills,
        Self::GoProjects,
        Self::GoContact,
        // Other
        Self::Retry,
        Self::Reload,
        Self::Help,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("j".to_string(), Action::ScrollDown);
        bindings.insert("Down".to_string(), Action::ScrollDown);
        bindings.insert("k".to_string(), Action::ScrollUp);
        bindings.insert("Up".to_string(), Action::ScrollUp);
        bindings.insert("PageDown".to_string(), Action::PageDown);
        bindings.insert("Ctrl+d".to_string(), Action::PageDown);
        bindings.insert(" ".to_string(), Action::PageDown);
        bindings.insert("PageUp".to_string(), Action::PageUp);
        bindings.insert("Ctrl+u".to_string(), Action::PageUp);
        bindings.insert("g".to_string(), Action::ScrollTop);
        bindings.insert("Home".to_string(), Action::ScrollTop);
        bindings.insert("G".to_string(), Action::ScrollBottom);
        bindings.insert("End".to_string(), Action::ScrollBottom);
        // Sections
        bindings.insert("]".to_string(), Action::NextSection);
        bindings.insert("[".to_string(), Action::PrevSection);
        bindings.insert("1".to_string(), Action::GoHome);
        bindings.insert("2".to_string(), Action::GoAbout);
        bindings.insert("3".to_string(), Action::GoSkills);
        bindings.insert("4".to_string(), Action::GoProjects);
        bindings.insert("5".to_string(), Action::GoContact);
        // Other
        bindings.insert("r".to_string(), Action::Retry);
        bindings.insert("R".to_string(), Action::Reload);
        bindings.insert("?".to_string(), Action::Help);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Drop bindings on structural keys, which would never fire.
    pub fn strip_structural(&mut self) {
        self.bindings.retain(|key, action| {
            let structural = is_structural(key);
            if structural {
                warn!(key = %key, ?action, "Ignoring binding on a structural key");
            }
            !structural
        });
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding. Returns false for structural keys, which are left alone.
    pub fn set(&mut self, key: &str, action: Action) -> bool {
        if is_structural(key) {
            return false;
        }
        self.bindings.insert(key.to_string(), action);
        true
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Single characters first, then named keys alphabetically
        keys.sort_by(|a, b| {
            let a_simple = a.len() == 1 || a == "Space";
            let b_simple = b.len() == 1 || b == "Space";
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.iter()
            .map(|k| {
                if k == " " {
                    "Space".to_string()
                } else {
                    k.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Generate a formatted help line for an action: "  keys    description"
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        let keys = self.format_keys(action);
        format!("  {keys:<16} {}", action.description())
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::NextSection, "next"),
            (Action::PrevSection, "prev"),
            (Action::Help, "help"),
            (Action::Quit, "quit"),
        ];

        let mut parts: Vec<String> = hints
            .iter()
            .map(|(action, label)| {
                let keys = self.format_keys(*action);
                let key = keys.split('/').next().unwrap_or_default();
                format!("[{key}]{label}")
            })
            .collect();
        parts.insert(0, "[Tab]focus".to_string());
        parts.join(" ")
    }
}

fn is_structural(key: &str) -> bool {
    STRUCTURAL_KEYS.contains(&key)
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
