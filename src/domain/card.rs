//! Card and deck domain model.
//!
//! A [`Card`] is an immutable question/answer value object. A [`Deck`] is the
//! ordered, non-empty sequence of cards for one quiz session. Decks are built
//! once through [`Deck::load`], optionally shuffled once before the first
//! render, and never mutated afterwards.

use crate::domain::error::{FlashquizError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single flashcard.
///
/// Every field is optional. The render layer hides the region of any absent
/// field, but a card with all four fields absent is rejected by
/// [`Deck::load`].
///
/// # Examples
///
/// ```
/// use flashquiz::domain::Card;
///
/// let card = Card::text("2+2?", "4");
/// assert_eq!(card.question.as_deref(), Some("2+2?"));
/// assert!(card.answer_image.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Question text shown on the front.
    #[serde(default)]
    pub question: Option<String>,

    /// URI of an image shown with the question.
    #[serde(default)]
    pub question_image: Option<String>,

    /// Answer text, hidden until revealed or flipped.
    #[serde(default)]
    pub answer: Option<String>,

    /// URI of an image shown with the answer.
    #[serde(default)]
    pub answer_image: Option<String>,
}

impl Card {
    /// Creates a text-only card.
    #[must_use]
    pub fn text(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            ..Self::default()
        }
    }

    /// Returns a copy with blank strings turned into `None`.
    ///
    /// The web forms that author decks store an untouched field as an empty
    /// string, which must display exactly like a missing one.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|s| !s.trim().is_empty())
        }

        Self {
            question: present(self.question),
            question_image: present(self.question_image),
            answer: present(self.answer),
            answer_image: present(self.answer_image),
        }
    }

    /// Returns `true` if no field carries displayable content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.question,
            &self.question_image,
            &self.answer,
            &self.answer_image,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// Ordered, non-empty collection of cards for one quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck from externally supplied cards.
    ///
    /// Cards are normalized (blank strings become absent fields) and kept in
    /// the order given.
    ///
    /// # Errors
    ///
    /// Returns [`FlashquizError::InvalidDeck`] if `raw` is empty or if any card
    /// has no question, question image, answer or answer image.
    ///
    /// # Examples
    ///
    /// ```
    /// use flashquiz::domain::{Card, Deck};
    ///
    /// let deck = Deck::load(vec![Card::text("2+2?", "4")]).unwrap();
    /// assert_eq!(deck.len(), 1);
    ///
    /// assert!(Deck::load(vec![]).is_err());
    /// assert!(Deck::load(vec![Card::default()]).is_err());
    /// ```
    pub fn load(raw: Vec<Card>) -> Result<Self> {
        if raw.is_empty() {
            return Err(FlashquizError::InvalidDeck("deck has no cards".to_string()));
        }

        if let Some(position) = raw.iter().position(Card::is_blank) {
            return Err(FlashquizError::InvalidDeck(format!(
                "card {} has no question, answer or image",
                position + 1
            )));
        }

        let cards: Vec<Card> = raw.into_iter().map(Card::normalized).collect();
        tracing::debug!(card_count = cards.len(), "deck loaded");
        Ok(Self { cards })
    }

    /// Returns the deck in a uniformly random order.
    ///
    /// Uses a Fisher-Yates permutation, so every ordering is equally likely
    /// and every card appears exactly once.
    #[must_use]
    pub fn shuffle<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cards.shuffle(rng);
        tracing::debug!(card_count = self.cards.len(), "deck shuffled");
        self
    }

    /// Number of cards. Always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; a deck is never empty. Present for API symmetry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns all cards in presentation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn numbered(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::text(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    #[test]
    fn empty_input_is_invalid() {
        let err = Deck::load(vec![]).unwrap_err();
        assert!(matches!(err, FlashquizError::InvalidDeck(_)));
    }

    #[test]
    fn fully_blank_card_is_invalid() {
        let mut cards = numbered(3);
        cards.push(Card {
            question: Some("   ".to_string()),
            ..Card::default()
        });

        let err = Deck::load(cards).unwrap_err();
        assert!(err.to_string().contains("card 4"));
    }

    #[test]
    fn image_only_card_is_valid() {
        let card = Card {
            answer_image: Some("https://example.com/a.png".to_string()),
            ..Card::default()
        };
        let deck = Deck::load(vec![card]).unwrap();
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn load_blanks_out_empty_fields() {
        let card = Card {
            question: Some("What?".to_string()),
            answer: Some(String::new()),
            ..Card::default()
        };
        let deck = Deck::load(vec![card]).unwrap();
        assert_eq!(deck.get(0).unwrap().answer, None);
    }

    #[test]
    fn payload_uses_answer_image_field() {
        let json = r#"{"question":"q","answer_image":"a.png","answerimage":"wrong.png"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.answer_image.as_deref(), Some("a.png"));
    }

    #[test]
    fn shuffle_keeps_every_card_once() {
        let cards = numbered(20);
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::load(cards.clone()).unwrap().shuffle(&mut rng);

        let mut before = cards;
        let mut after = deck.cards().to_vec();
        before.sort_by(|a, b| a.question.cmp(&b.question));
        after.sort_by(|a, b| a.question.cmp(&b.question));
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        const CARDS: usize = 4;
        const TRIALS: usize = 8_000;

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<(usize, String), usize> = HashMap::new();

        for _ in 0..TRIALS {
            let deck = Deck::load(numbered(CARDS)).unwrap().shuffle(&mut rng);
            for (position, card) in deck.cards().iter().enumerate() {
                let key = (position, card.question.clone().unwrap_or_default());
                *counts.entry(key).or_default() += 1;
            }
        }

        let expected = TRIALS / CARDS;
        for position in 0..CARDS {
            for i in 0..CARDS {
                let seen = counts
                    .get(&(position, format!("q{i}")))
                    .copied()
                    .unwrap_or(0);
                let deviation = seen.abs_diff(expected);
                assert!(
                    deviation < expected / 10,
                    "card q{i} at position {position}: {seen} vs expected {expected}"
                );
            }
        }
    }
}
