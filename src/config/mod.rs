//! Configuration management for folio

mod keys;

pub use keys::{Action, ActionGroup, KeyBindings, STRUCTURAL_KEYS, key_to_string};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Environment variable that forces reduced motion when set to `1`.
pub const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";

/// Fastest allowed event poll interval; zero would spin the event loop.
pub const MIN_TICK_RATE_MS: u64 = 10;

/// Shortest allowed submission timeout; zero would fail every request.
pub const MIN_SUBMIT_TIMEOUT_SECS: u64 = 1;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// URL the contact form is POSTed to; unset means submissions fail
    #[serde(default)]
    pub contact_endpoint: Option<String>,

    /// Global timeout for one contact submission, in seconds
    #[serde(default = "default_submit_timeout")]
    pub submit_timeout_secs: u64,

    /// Event poll interval in milliseconds (one animation frame)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Rows below the viewport top used as the scroll-spy probe
    #[serde(default = "default_scroll_spy_offset")]
    pub scroll_spy_offset: u16,

    /// Minimum interval between scroll-spy evaluations in milliseconds
    #[serde(default = "default_scroll_spy_throttle")]
    pub scroll_spy_throttle_ms: u64,

    /// Jump instead of animating section navigation
    #[serde(default)]
    pub reduced_motion: bool,

    /// Directory holding the portfolio documents; unset uses the built-in sample
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_submit_timeout() -> u64 {
    10
}

const fn default_tick_rate() -> u64 {
    100
}

const fn default_scroll_spy_offset() -> u16 {
    3
}

const fn default_scroll_spy_throttle() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            submit_timeout_secs: default_submit_timeout(),
            tick_rate_ms: default_tick_rate(),
            scroll_spy_offset: default_scroll_spy_offset(),
            scroll_spy_throttle_ms: default_scroll_spy_throttle(),
            reduced_motion: false,
            content_dir: None,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.clamp_ranges();
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        config.keys.strip_structural();
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        crate::paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.json")
    }

    /// Raise intervals a hand-edited file set below their minimums.
    pub fn clamp_ranges(&mut self) {
        if self.tick_rate_ms < MIN_TICK_RATE_MS {
            warn!(
                tick_rate_ms = self.tick_rate_ms,
                "tick_rate_ms below minimum, using {MIN_TICK_RATE_MS}"
            );
            self.tick_rate_ms = MIN_TICK_RATE_MS;
        }
        if self.submit_timeout_secs < MIN_SUBMIT_TIMEOUT_SECS {
            warn!(
                submit_timeout_secs = self.submit_timeout_secs,
                "submit_timeout_secs below minimum, using {MIN_SUBMIT_TIMEOUT_SECS}"
            );
            self.submit_timeout_secs = MIN_SUBMIT_TIMEOUT_SECS;
        }
    }

    /// Contact submission timeout
    #[must_use]
    pub const fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    /// Event poll interval
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Scroll-spy probe depth in rows
    #[must_use]
    pub fn scroll_spy_rows(&self) -> usize {
        usize::from(self.scroll_spy_offset)
    }

    /// Scroll-spy throttle interval
    #[must_use]
    pub const fn scroll_spy_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_spy_throttle_ms)
    }

    /// Turn on reduced motion if the environment asks for it
    pub fn apply_env(&mut self) {
        if std::env::var(REDUCED_MOTION_ENV).is_ok_and(|v| v.trim() == "1") {
            self.reduced_motion = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.contact_endpoint, None);
        assert_eq!(config.submit_timeout_secs, 10);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.scroll_spy_offset, 3);
        assert_eq!(config.scroll_spy_throttle(), Duration::from_millis(100));
        assert!(!config.reduced_motion);
        assert!(config.content_dir.is_none());
    }

    #[test]
    fn test_save_and_load() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");

        let config = Config {
            contact_endpoint: Some("https://example.com/contact".to_string()),
            submit_timeout_secs: 4,
            tick_rate_ms: 50,
            scroll_spy_offset: 5,
            scroll_spy_throttle_ms: 250,
            reduced_motion: true,
            content_dir: Some(temp_dir.path().join("content")),
            keys: KeyBindings::default(),
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        assert_eq!(loaded.submit_timeout(), Duration::from_secs(4));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_malformed_names_path() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json")?;

        let err = Config::load_from(&config_path)
            .err()
            .ok_or("expected a parse error")?;
        assert!(format!("{err:#}").contains("config.json"));
        Ok(())
    }

    #[test]
    fn test_serde_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"contact_endpoint": "http://localhost:8080/contact"}"#;
        let config: Config = serde_json::from_str(json)?;

        assert_eq!(
            config.contact_endpoint.as_deref(),
            Some("http://localhost:8080/contact")
        );
        assert_eq!(config.submit_timeout_secs, 10);
        assert!(!config.reduced_motion);
        Ok(())
    }

    #[test]
    fn test_save_creates_parent_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let nested_path = temp_dir.path().join("deep/nested/dir/config.json");

        let config = Config::default();
        config.save_to(&nested_path)?;

        assert!(nested_path.exists());
        Ok(())
    }

    #[test]
    fn test_default_path() {
        let config_path = Config::default_path();
        assert!(config_path.ends_with("folio/config.json"));
    }

    #[rstest]
    #[case::zero_tick(r#"{"tick_rate_ms": 0}"#, MIN_TICK_RATE_MS, 10, 3)]
    #[case::zero_timeout(r#"{"submit_timeout_secs": 0}"#, 100, MIN_SUBMIT_TIMEOUT_SECS, 3)]
    #[case::largest_spy_offset(r#"{"scroll_spy_offset": 65535}"#, 100, 10, 65535)]
    #[case::zero_spy_offset(r#"{"scroll_spy_offset": 0}"#, 100, 10, 0)]
    fn test_load_edge_values(
        #[case] json: &str,
        #[case] tick_rate_ms: u64,
        #[case] submit_timeout_secs: u64,
        #[case] scroll_spy_offset: u16,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, json)?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.tick_rate_ms, tick_rate_ms);
        assert_eq!(config.submit_timeout_secs, submit_timeout_secs);
        assert_eq!(config.scroll_spy_offset, scroll_spy_offset);
        assert_eq!(config.scroll_spy_rows(), usize::from(scroll_spy_offset));
        Ok(())
    }

    #[rstest]
    #[case::overflowing(r#"{"scroll_spy_offset": 18446744073709551615}"#)]
    #[case::negative(r#"{"scroll_spy_offset": -1}"#)]
    #[case::past_u16(r#"{"scroll_spy_offset": 65536}"#)]
    fn test_load_rejects_out_of_range_spy_offset(
        #[case] json: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, json)?;

        let err = Config::load_from(&config_path)
            .err()
            .ok_or("expected a range error")?;
        assert!(format!("{err:#}").contains("config.json"));
        Ok(())
    }
}
