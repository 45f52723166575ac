//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/animation/storage/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Session Operations → Actions → Side Effects
//!                           ↑                                            ↓
//!                           └──── Timers, HTTP results, Worker Responses ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Session phase and presentation policy types
//! - [`session`]: The quiz session state machine
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{CompletionPolicy, PresentationStyle, SessionPhase};
pub use session::{ButtonEnablement, QuizSession, SessionOutcome};
pub use state::{AppState, DeckLocation, DeckStatus, QuizSettings};
