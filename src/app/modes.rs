//! Session mode and presentation policy types.
//!
//! This module defines the small enums that parameterize the quiz session:
//! whether it is currently animating, which presentation variant it uses, and
//! what happens when the user tries to advance past the last card.
//!
//! # Example
//!
//! ```rust
//! use flashquiz::app::modes::{CompletionPolicy, PresentationStyle};
//!
//! assert_eq!(PresentationStyle::parse("flip"), Some(PresentationStyle::Flip));
//! assert_eq!(CompletionPolicy::parse("notify"), Some(CompletionPolicy::Notify));
//! ```

/// Whether the session accepts intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for input. All intents are accepted.
    Idle,
    /// A card transition is running. All intents are dropped.
    Transitioning,
}

/// Presentation variant of the card surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationStyle {
    /// Question and answer stacked on one face; cards fade between each other.
    #[default]
    Fade,

    /// Two-sided card with the answer on the back; cards flip between each
    /// other and the `f` key turns the current card over.
    Flip,
}

impl PresentationStyle {
    /// Parses a configuration value (`fade` or `flip`, case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fade" | "slide" => Some(Self::Fade),
            "flip" => Some(Self::Flip),
            _ => None,
        }
    }
}

/// Behaviour of "next" on the last card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionPolicy {
    /// Next is disabled on the last card and does nothing.
    #[default]
    Disable,

    /// Next on the last card marks the quiz as completed and shows a notice.
    Notify,
}

impl CompletionPolicy {
    /// Parses a configuration value (`disable` or `notify`, case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "disable" => Some(Self::Disable),
            "notify" => Some(Self::Notify),
            _ => None,
        }
    }
}
