//! Flashquiz: a flashcard quiz plugin for Zellij.
//!
//! Flashquiz presents a deck of question/answer cards one at a time inside a
//! Zellij pane:
//! - Keyboard, click, and click-drag swipe navigation between cards
//! - Reveal the answer, or turn two-sided cards over
//! - Animated card changes driven by Zellij timers
//! - Decks loaded from a JSON file (in a worker) or over HTTP

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Quiz session                                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!      │              │                │              │
//! ┌──────────┐ ┌─────────────┐ ┌──────────────┐ ┌──────────────┐
//! │ UI       │ │ Animation   │ │ Storage      │ │ Worker       │
//! │ (ui/)    │ │ (animation/)│ │ (storage/)   │ │ (worker/)    │
//! │ - Render │ │ - Phases    │ │ - JSON decks │ │ - File loads │
//! │ - Themes │ │ - Animator  │ │ - Sources    │ │ - IPC bridge │
//! └──────────┘ └─────────────┘ └──────────────┘ └──────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Input & Infrastructure                     │
//! │  - Card and deck model (domain/)                    │
//! │  - Intents and swipe recognition (input/)           │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/flashquiz.wasm" {
//!         deck_file "~/decks/capitals.json"
//!         style "flip"
//!         on_complete "notify"
//!         shuffle "false"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! A deck may also come from `deck_url`, or from `server_url` plus `deck_id`,
//! which requests `{server_url}/deck/{deck_id}/quiz_data/`.
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    build the `AppState`, request file and web permissions
//! 2. **Permissions granted**: post `LoadDeck` to the worker, or fetch the URL
//! 3. **Deck arrives**: validate, shuffle once, start the quiz session
//! 4. **Input**: keys, clicks, and swipes become intents; card changes arm
//!    timers whose expiry advances the transition phases
//!
//! # Example
//!
//! ```rust
//! use flashquiz::{handle_event, initialize, Config, Event};
//! use flashquiz::input::Intent;
//! use flashquiz::worker::WorkerResponse;
//! use flashquiz::domain::Card;
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::DeckLoaded {
//!     name: None,
//!     cards: vec![Card::text("2+2?", "4")],
//! }))?;
//!
//! let (should_render, _) = handle_event(&mut state, &Event::Intent(Intent::Reveal))?;
//! assert!(should_render);
//! # Ok::<(), flashquiz::FlashquizError>(())
//! ```

pub mod animation;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod input;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, CompletionPolicy, DeckLocation, Event, PresentationStyle,
    QuizSettings,
};
pub use domain::{Card, Deck, FlashquizError, Result};
pub use ui::Theme;

use infrastructure::expand_tilde;
use input::DEFAULT_MIN_DISTANCE;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/flashquiz.wasm" {
///     server_url "http://localhost:8000"
///     deck_id "12"
///     style "fade"
///     swipe_threshold "100"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to a JSON deck file. `~` refers to the `/host` mount.
    pub deck_file: Option<String>,

    /// URL of a JSON deck document.
    pub deck_url: Option<String>,

    /// Base URL of a deck server, used together with `deck_id`.
    pub server_url: Option<String>,

    pub deck_id: Option<String>,

    /// Shuffle the deck once at load. Default: `true`
    pub shuffle: bool,

    pub style: PresentationStyle,

    /// Behaviour of next on the last card. Default: disable
    pub on_complete: CompletionPolicy,

    /// Minimum swipe travel in gesture units (8 per column). Default: 75
    pub swipe_threshold: f64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck_file: None,
            deck_url: None,
            server_url: None,
            deck_id: None,
            shuffle: true,
            style: PresentationStyle::default(),
            on_complete: CompletionPolicy::default(),
            swipe_threshold: DEFAULT_MIN_DISTANCE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Never fails: unknown or malformed values fall back to their defaults
    /// and are logged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use flashquiz::{CompletionPolicy, Config, PresentationStyle};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("style".to_string(), "flip".to_string());
    /// map.insert("on_complete".to_string(), "notify".to_string());
    /// map.insert("shuffle".to_string(), "no".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.style, PresentationStyle::Flip);
    /// assert_eq!(config.on_complete, CompletionPolicy::Notify);
    /// assert!(!config.shuffle);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let shuffle = text("shuffle").map_or(defaults.shuffle, |value| {
            parse_bool(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "invalid shuffle value, using default");
                defaults.shuffle
            })
        });

        let style = text("style").map_or(defaults.style, |value| {
            PresentationStyle::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "unknown style, using fade");
                defaults.style
            })
        });

        let on_complete = text("on_complete").map_or(defaults.on_complete, |value| {
            CompletionPolicy::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "unknown on_complete policy, using disable");
                defaults.on_complete
            })
        });

        let swipe_threshold = text("swipe_threshold")
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|threshold| threshold.is_finite() && *threshold > 0.0)
            .unwrap_or(defaults.swipe_threshold);

        Self {
            deck_file: text("deck_file"),
            deck_url: text("deck_url"),
            server_url: text("server_url"),
            deck_id: text("deck_id"),
            shuffle,
            style,
            on_complete,
            swipe_threshold,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Resolves where the deck comes from.
    ///
    /// `deck_file` wins over `deck_url`, which wins over `server_url` +
    /// `deck_id`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flashquiz::{Config, DeckLocation};
    ///
    /// let config = Config {
    ///     server_url: Some("http://localhost:8000/".to_string()),
    ///     deck_id: Some("4".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     config.deck_location(),
    ///     Some(DeckLocation::Url("http://localhost:8000/deck/4/quiz_data/".to_string()))
    /// );
    /// ```
    #[must_use]
    pub fn deck_location(&self) -> Option<DeckLocation> {
        if let Some(path) = &self.deck_file {
            return Some(DeckLocation::File(expand_tilde(path)));
        }

        if let Some(url) = &self.deck_url {
            return Some(DeckLocation::Url(url.clone()));
        }

        match (&self.server_url, &self.deck_id) {
            (Some(server), Some(id)) => Some(DeckLocation::Url(format!(
                "{}/deck/{}/quiz_data/",
                server.trim_end_matches('/'),
                id
            ))),
            _ => None,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> QuizSettings {
        QuizSettings {
            style: self.style,
            completion: self.on_complete,
            shuffle: self.shuffle,
            swipe_threshold: self.swipe_threshold,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Initializes the plugin state from configuration.
///
/// Loads the theme (from file, name, or default) and resolves the deck
/// source. The returned state is waiting for its deck.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing flashquiz plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let source = config.deck_location();
    tracing::debug!(source = ?source, "deck source resolved");

    AppState::new(source, config.settings(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_for_empty_map() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("style", "spin"),
            ("on_complete", "explode"),
            ("shuffle", "maybe"),
            ("swipe_threshold", "-3"),
        ]));

        assert_eq!(config.style, PresentationStyle::Fade);
        assert_eq!(config.on_complete, CompletionPolicy::Disable);
        assert!(config.shuffle);
        assert!((config.swipe_threshold - DEFAULT_MIN_DISTANCE).abs() < f64::EPSILON);
    }

    #[test]
    fn deck_file_takes_precedence() {
        let config = Config::from_zellij(&map(&[
            ("deck_file", "~/decks/a.json"),
            ("deck_url", "http://example.com/a.json"),
        ]));

        assert_eq!(
            config.deck_location(),
            Some(DeckLocation::File("/host/decks/a.json".to_string()))
        );
    }

    #[test]
    fn deck_url_over_server() {
        let config = Config::from_zellij(&map(&[
            ("deck_url", "http://example.com/a.json"),
            ("server_url", "http://localhost:8000"),
            ("deck_id", "2"),
        ]));

        assert_eq!(
            config.deck_location(),
            Some(DeckLocation::Url("http://example.com/a.json".to_string()))
        );
    }

    #[test]
    fn server_url_requires_deck_id() {
        let config = Config::from_zellij(&map(&[("server_url", "http://localhost:8000")]));
        assert_eq!(config.deck_location(), None);
    }

    #[test]
    fn blank_values_are_absent() {
        let config = Config::from_zellij(&map(&[("deck_file", "  ")]));
        assert_eq!(config.deck_file, None);
    }

    #[test]
    fn initialize_uses_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert!(state.is_loading());
    }

    #[test]
    fn initialize_falls_back_on_missing_theme_file() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, Theme::default().name);
    }
}
