//! Deck loading.
//!
//! # Modules
//!
//! - `backend`: the [`DeckSource`] trait
//! - `json`: JSON deck files and payload parsing
//! - `models`: wire format of a deck document

pub mod backend;
pub mod json;
pub mod models;

pub use backend::DeckSource;
pub use json::{parse_payload, JsonDeckFile};
pub use models::DeckPayload;
