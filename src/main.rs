//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Flashquiz library and
//! the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits, translates Zellij events into library events, and
//! executes the library's actions through the Zellij API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, timers, HTTP
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ FlashquizWorker  │   │  ← Deck file reads
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, Mouse, Timer, `CustomMessage`, `WebRequestResult`
//! 3. **Permissions**: once answered, the deck is requested from the worker
//!    or fetched over HTTP
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → `Event::Intent` or `Event::CloseFocus`
//! - `Mouse(LeftClick)` → `Event::PointerDown` (with the control under it)
//! - `Mouse(Release)` → `Event::PointerUp`
//! - `Timer` → `Event::PhaseElapsed`
//! - `WebRequestResult` → `Event::DeckFetched`
//! - `CustomMessage` → `Event::WorkerResponse`
//!
//! # Keybindings
//!
//! - `l`/`Right`/`n`: Next card
//! - `h`/`Left`/`p`: Previous card
//! - `Space`/`Enter`/`r`: Reveal answer
//! - `f`: Flip card (flip style)
//! - `q`/`Esc`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use flashquiz::input::Intent;
use flashquiz::ui::hit_test;
use flashquiz::worker::{DeckWorker, WorkerMessage, WorkerResponse};
use flashquiz::{handle_event, Action, Config, Event};

/// Worker name used for IPC routing in both directions.
const WORKER_NAME: &str = "flashquiz";

/// Zellij worker wrapper around the library's [`DeckWorker`].
#[derive(Default, Serialize, Deserialize)]
struct FlashquizWorker(DeckWorker);

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(FlashquizWorker, flashquiz_worker, FLASHQUIZ_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication and the last rendered pane size (for mouse hit testing).
struct State {
    /// Core application state from library layer.
    app: flashquiz::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    rows: usize,
    cols: usize,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: flashquiz::initialize(&default_config),
            worker_name: WORKER_NAME.to_string(),
            rows: 0,
            cols: 0,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `FullHdAccess`: Read deck files under `/host`
    /// - `WebAccess`: Fetch decks over HTTP
    ///
    /// # Subscriptions
    ///
    /// - `Key`, `Mouse`: User input
    /// - `Timer`: Transition phases
    /// - `CustomMessage`: Worker responses
    /// - `WebRequestResult`: HTTP deck responses
    /// - `PermissionRequestResult`: Starts deck loading
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        flashquiz::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            deck_file = ?config.deck_file,
            deck_url = ?config.deck_url,
            style = ?config.style,
            on_complete = ?config.on_complete,
            "parsed configuration"
        );
        self.app = flashquiz::initialize(&config);

        request_permission(&[PermissionType::FullHdAccess, PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::PhaseElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                Event::DeckFetched { status, body }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                if !granted {
                    tracing::warn!("permissions denied - deck cannot be loaded");
                }
                Event::PermissionsResult { granted }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI and remembers the pane size for hit testing.
    fn render(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        flashquiz::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Right | BareKey::Char('l' | 'n') => Event::Intent(Intent::Next),
            BareKey::Left | BareKey::Char('h' | 'p') => Event::Intent(Intent::Previous),
            BareKey::Enter | BareKey::Char(' ' | 'r') => Event::Intent(Intent::Reveal),
            BareKey::Char('f') => Event::Intent(Intent::ToggleFlip),
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps mouse events to pointer events.
    ///
    /// Zellij reports 0-indexed pane coordinates. Presses and releases carry
    /// the control drawn under them, computed with the size of the last render.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let control = hit_test(line, col, self.rows, self.cols);
                tracing::debug!(line, col, control = ?control, "pointer down");
                Some(Event::PointerDown { col, control })
            }
            Mouse::Release(line, col) => {
                let control = hit_test(line, col, self.rows, self.cols);
                tracing::debug!(line, col, control = ?control, "pointer up");
                Some(Event::PointerUp { col, control })
            }
            _ => None,
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Logs serialization errors but does not propagate them.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
            Action::ScheduleTimer(delay) => {
                set_timeout(delay.as_secs_f64());
            }
            Action::FetchDeck { ref url } => {
                tracing::debug!(url = %url, "requesting deck over http");
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());
                web_request(url, HttpVerb::Get, headers, vec![], BTreeMap::new());
            }
        }
    }
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for FlashquizWorker {
    /// Receives a JSON `WorkerMessage`, loads the deck, and posts the
    /// `WorkerResponse` back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            flashquiz::observability::init_tracing(&Config::default());
        }

        if let Some(payload) = self.0.handle_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            });
        }
    }
}
