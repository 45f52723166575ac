//! Domain layer for the Flashquiz plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`card`]: Card value object and the session deck
//!
//! # Examples
//!
//! ```
//! use flashquiz::domain::{Card, Deck, Result};
//!
//! fn build() -> Result<Deck> {
//!     Deck::load(vec![Card::text("2+2?", "4"), Card::text("3+3?", "6")])
//! }
//! assert_eq!(build().unwrap().len(), 2);
//! ```

pub mod card;
pub mod error;

pub use card::{Card, Deck};
pub use error::{FlashquizError, Result};
