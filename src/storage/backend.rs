//! Deck source abstraction.
//!
//! A [`DeckSource`] yields the raw contents of a deck. Validation into a
//! [`Deck`](crate::domain::Deck) happens afterwards, so every source shares the
//! same empty-deck and blank-card rules.

use crate::domain::error::Result;
use crate::storage::models::DeckPayload;

/// Anything that can produce a deck payload.
///
/// # Implementations
///
/// - [`JsonDeckFile`](crate::storage::JsonDeckFile): a JSON document on disk
///
/// HTTP decks are fetched by the plugin host and parsed with
/// [`parse_payload`](crate::storage::parse_payload) instead, because the
/// request is asynchronous and its result arrives as a separate event.
///
/// # Examples
///
/// ```no_run
/// use flashquiz::storage::{DeckSource, JsonDeckFile};
///
/// let source = JsonDeckFile::new("/host/decks/capitals.json");
/// let (name, cards) = source.load()?.into_parts();
/// # Ok::<(), flashquiz::FlashquizError>(())
/// ```
pub trait DeckSource: Send {
    /// Human-readable location for logs and error messages.
    fn describe(&self) -> String;

    /// Reads and parses the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or does not contain a
    /// deck document.
    fn load(&self) -> Result<DeckPayload>;
}
