//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! library never calls into Zellij itself: the plugin shim in `main.rs`
//! executes these actions in order.
//!
//! # Example
//!
//! ```rust
//! use flashquiz::app::Action;
//! use flashquiz::worker::WorkerMessage;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_deck("/host/decks/capitals.json".to_string())),
//!     Action::ScheduleTimer(Duration::from_millis(200)),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker.
    PostToWorker(WorkerMessage),

    /// Arms a one-shot timer; its expiry arrives as `Event::PhaseElapsed`.
    ScheduleTimer(Duration),

    /// Issues an HTTP GET; the result arrives as `Event::DeckFetched`.
    FetchDeck {
        url: String,
    },
}
