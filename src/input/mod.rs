//! User input normalization.
//!
//! Every input surface of the plugin (keys, control clicks, swipes) is reduced
//! to a single [`Intent`] vocabulary before it reaches the quiz session, so a
//! swipe and a button press travel exactly the same path.
//!
//! - [`gesture`]: press/release swipe recognition

pub mod gesture;

pub use gesture::{column_to_units, GestureRecognizer, Swipe, DEFAULT_MIN_DISTANCE, UNITS_PER_COLUMN};

/// A user request addressed to the quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Advance to the next card.
    Next,
    /// Return to the previous card.
    Previous,
    /// Show the answer of the current card.
    Reveal,
    /// Turn a two-sided card over.
    ToggleFlip,
}

impl Swipe {
    /// Converts a resolved swipe into the equivalent navigation intent.
    #[must_use]
    pub const fn intent(self) -> Option<Intent> {
        match self {
            Self::None => None,
            Self::Next => Some(Intent::Next),
            Self::Previous => Some(Intent::Previous),
        }
    }
}
