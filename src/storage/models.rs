//! Wire models for deck payloads.
//!
//! These types describe the JSON document a deck arrives in, whether read from
//! a file or returned by the quiz-data endpoint. They are kept apart from the
//! domain [`Deck`](crate::domain::Deck) so validation happens in one place.

use crate::domain::Card;
use serde::{Deserialize, Serialize};

/// A deck document as stored or served.
///
/// # Format
///
/// ```json
/// {
///   "name": "Capitals",
///   "cards": [
///     { "question": "Capital of France?", "answer": "Paris" },
///     { "question_image": "https://example.com/flag.png", "answer": "Japan" }
///   ]
/// }
/// ```
///
/// A bare array of cards is accepted as well and yields an unnamed deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeckPayload {
    Document {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        cards: Vec<Card>,
    },
    Cards(Vec<Card>),
}

impl DeckPayload {
    /// Splits the payload into its optional name and raw cards.
    ///
    /// Blank names are dropped.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Vec<Card>) {
        match self {
            Self::Document { name, cards } => {
                let name = name
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty());
                (name, cards)
            }
            Self::Cards(cards) => (None, cards),
        }
    }
}
