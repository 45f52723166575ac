//! JSON deck files.
//!
//! Decks are plain JSON documents (see [`DeckPayload`]) read in one go. Files
//! are never written back: a quiz session does not persist anything.

use crate::domain::error::{FlashquizError, Result};
use crate::storage::backend::DeckSource;
use crate::storage::models::DeckPayload;
use std::path::PathBuf;

/// Parses a deck document from raw bytes.
///
/// Used for both file contents and HTTP response bodies.
///
/// # Errors
///
/// Returns [`FlashquizError::DeckSource`] if the bytes are not a deck document.
///
/// # Examples
///
/// ```
/// use flashquiz::storage::parse_payload;
///
/// let payload = parse_payload(br#"{"cards":[{"question":"1+1?","answer":"2"}]}"#).unwrap();
/// let (name, cards) = payload.into_parts();
/// assert!(name.is_none());
/// assert_eq!(cards.len(), 1);
/// ```
pub fn parse_payload(bytes: &[u8]) -> Result<DeckPayload> {
    let payload: DeckPayload = serde_json::from_slice(bytes)
        .map_err(|e| FlashquizError::DeckSource(format!("failed to parse deck JSON: {e}")))?;

    tracing::debug!(
        bytes = bytes.len(),
        named = matches!(&payload, DeckPayload::Document { name: Some(_), .. }),
        "parsed deck payload"
    );

    Ok(payload)
}

/// A deck stored as a JSON file.
pub struct JsonDeckFile {
    file_path: PathBuf,
}

impl JsonDeckFile {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl DeckSource for JsonDeckFile {
    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }

    fn load(&self) -> Result<DeckPayload> {
        let _span = tracing::debug_span!("json_deck_load", path = ?self.file_path).entered();

        let contents = std::fs::read(&self.file_path)?;
        tracing::debug!(bytes = contents.len(), "read deck file");

        parse_payload(&contents)
    }
}
