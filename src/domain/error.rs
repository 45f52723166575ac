//! Error types for the Flashquiz plugin.
//!
//! This module defines the centralized error type [`FlashquizError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only deck construction failures are fatal. Navigation past either end of the
//! deck and intents that arrive mid-transition are policy decisions handled inside
//! the session and never surface as errors.

use thiserror::Error;

/// The main error type for Flashquiz plugin operations.
///
/// # Examples
///
/// ```
/// use flashquiz::domain::FlashquizError;
///
/// fn validate() -> Result<(), FlashquizError> {
///     Err(FlashquizError::InvalidDeck("deck has no cards".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FlashquizError {
    /// The supplied cards cannot form a deck.
    ///
    /// Raised for an empty card list or for a card whose question, question
    /// image, answer and answer image are all absent. Prevents the quiz
    /// session from being created.
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// The deck payload could not be retrieved or parsed.
    ///
    /// Covers malformed JSON files and failed HTTP responses. The string
    /// describes what went wrong.
    #[error("Deck source error: {0}")]
    DeckSource(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A transition was requested while another one is still running.
    ///
    /// Returned by the animator; the session swallows it and drops the
    /// intent that caused it.
    #[error("a transition is already in progress")]
    TransitionInProgress,
}

/// A specialized `Result` type for Flashquiz operations.
pub type Result<T> = std::result::Result<T, FlashquizError>;
