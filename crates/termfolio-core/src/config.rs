//! Shell configuration.
//!
//! Centralizes the constants used throughout the shell. Text assets are
//! loaded at compile time using `include_str!`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner shown when the shell starts.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Profile card for the `whoami` command.
pub const ASCII_PROFILE: &str = include_str!("../assets/text/profile.txt");

/// Art for the `coffee` command.
pub const ASCII_COFFEE: &str = include_str!("../assets/text/coffee.txt");

/// Content of `/about.txt` in the virtual filesystem.
pub const ABOUT_TEXT: &str = include_str!("../assets/text/about.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "termfolio";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

/// Host name shown in the prompt.
pub const HOST_NAME: &str = "portfolio";

/// User name shown in the prompt and by `whoami`.
pub const USER_NAME: &str = "guest";

/// Owner of the portfolio.
pub const OWNER_NAME: &str = "Alex Morgan";

/// Tagline shown under the banner.
pub const APP_TAGLINE: &str = "Software Engineer | Systems | Data Platforms | Tooling";

// =============================================================================
// Timing
// =============================================================================

/// Bounds (inclusive, milliseconds) of the artificial delay before a
/// command's output is produced.
pub const PROCESSING_DELAY_MS: (u64, u64) = (150, 450);

/// Simulated load time of the editor overlay, in milliseconds.
pub const EDITOR_LOAD_DELAY_MS: u64 = 300;

/// Interval between section changes during `launch_portfolio`, in milliseconds.
pub const TOUR_INTERVAL_MS: u32 = 3000;

// =============================================================================
// History
// =============================================================================

/// Number of trailing entries shown by the compact history view.
pub const COMPACT_VIEW_LEN: usize = 3;

// =============================================================================
// Theme
// =============================================================================

/// Theme identifier a fresh session starts with.
pub const DEFAULT_THEME: &str = "dark";

/// The alternative theme offered by the toolbar toggle.
pub const LIGHT_THEME: &str = "light";

// =============================================================================
// Static Content
// =============================================================================

/// Links printed by `social`.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/alexmorgan"),
    ("LinkedIn", "https://linkedin.com/in/alexmorgan"),
    ("X", "https://x.com/alexmorgan"),
    ("Email", "mailto:hello@alexmorgan.dev"),
];

/// Pool `joke` draws from.
pub const JOKES: &[&str] = &[
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, walks up to two tables and asks: 'Can I join you?'",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "It works on my machine. Then we'll ship your machine.",
    "Real programmers count from 0.",
];

/// Target of `3d_portfolio`.
pub const PORTFOLIO_3D_URL: &str = "/3d";

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Overridable runtime settings for a [`Shell`](crate::Shell).
///
/// Every field falls back to the matching constant above, so an embedder
/// only has to name what it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Lower bound of the processing delay, in milliseconds.
    pub min_delay_ms: u64,
    /// Upper bound of the processing delay, in milliseconds.
    pub max_delay_ms: u64,
    /// Editor overlay load delay, in milliseconds.
    pub editor_load_delay_ms: u64,
    /// Tour interval, in milliseconds.
    pub tour_interval_ms: u32,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Initial theme identifier.
    pub theme: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: PROCESSING_DELAY_MS.0,
            max_delay_ms: PROCESSING_DELAY_MS.1,
            editor_load_delay_ms: EDITOR_LOAD_DELAY_MS,
            tour_interval_ms: TOUR_INTERVAL_MS,
            seed: None,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Delay bounds with the lower bound never above the upper one.
    pub fn delay_bounds(&self) -> (u64, u64) {
        if self.min_delay_ms <= self.max_delay_ms {
            (self.min_delay_ms, self.max_delay_ms)
        } else {
            (self.max_delay_ms, self.min_delay_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ShellConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.theme, DEFAULT_THEME);
        assert_eq!(config.tour_interval_ms, TOUR_INTERVAL_MS);
    }

    #[test]
    fn test_delay_bounds_are_ordered() {
        let config = ShellConfig {
            min_delay_ms: 500,
            max_delay_ms: 100,
            ..Default::default()
        };
        assert_eq!(config.delay_bounds(), (100, 500));
    }
}
