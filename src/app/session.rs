//! The quiz session state machine.
//!
//! [`QuizSession`] is the single owner of the current index, the reveal and
//! flip flags, and the transition state. Every other component reads it or asks
//! it for a change through [`QuizSession::apply`]; nothing else mutates it.
//!
//! # State Machine
//!
//! ```text
//!            next/previous (in bounds)
//!   Idle ───────────────────────────────► Transitioning
//!    ▲                                          │
//!    │         last phase elapsed               │ swap phase elapsed:
//!    └──────────────────────────────────────────┘   index moves, reveal/flip reset
//! ```
//!
//! Intents received while transitioning are dropped, never queued.

use super::modes::{CompletionPolicy, PresentationStyle, SessionPhase};
use crate::animation::{Animator, Direction, Phase, PhaseStep, TransitionPlan};
use crate::domain::error::FlashquizError;
use crate::domain::{Card, Deck};
use crate::input::Intent;
use std::time::Duration;

/// Which navigation controls are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEnablement {
    pub previous: bool,
    pub next: bool,
}

impl ButtonEnablement {
    /// Derives enablement from position alone.
    ///
    /// Previous is disabled on the first card, next on the last.
    #[must_use]
    pub const fn for_position(index: usize, len: usize) -> Self {
        Self {
            previous: index > 0,
            next: index + 1 < len,
        }
    }
}

/// What an intent did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Nothing changed: out of bounds, not applicable, or mid-transition.
    Ignored,
    /// Presentation state changed immediately.
    Changed,
    /// A card transition started; arm a timer for the first phase.
    TransitionStarted { first_phase: Duration },
    /// The user advanced past the last card under the notify policy.
    Completed,
}

/// One quiz session over one deck.
///
/// # Example
///
/// ```rust
/// use flashquiz::app::session::{QuizSession, SessionOutcome};
/// use flashquiz::app::modes::{CompletionPolicy, PresentationStyle};
/// use flashquiz::domain::{Card, Deck};
/// use flashquiz::input::Intent;
///
/// let deck = Deck::load(vec![Card::text("2+2?", "4"), Card::text("3+3?", "6")]).unwrap();
/// let mut session = QuizSession::new(deck, PresentationStyle::Fade, CompletionPolicy::Disable);
///
/// assert_eq!(session.apply(Intent::Reveal), SessionOutcome::Changed);
/// assert!(matches!(session.apply(Intent::Next), SessionOutcome::TransitionStarted { .. }));
/// while session.on_phase_elapsed().is_some_and(|step| !step.is_complete()) {}
/// assert_eq!(session.current_index(), 1);
/// assert!(!session.revealed());
/// ```
#[derive(Debug, Clone)]
pub struct QuizSession {
    deck: Deck,
    current_index: usize,
    revealed: bool,
    flipped: bool,
    completed: bool,
    style: PresentationStyle,
    completion: CompletionPolicy,
    animator: Animator,
    pending_index: Option<usize>,
}

impl QuizSession {
    /// Starts a session on the first card, answer hidden, front face up.
    #[must_use]
    pub fn new(deck: Deck, style: PresentationStyle, completion: CompletionPolicy) -> Self {
        tracing::debug!(
            card_count = deck.len(),
            style = ?style,
            completion = ?completion,
            "quiz session started"
        );

        Self {
            deck,
            current_index: 0,
            revealed: false,
            flipped: false,
            completed: false,
            style,
            completion,
            animator: Animator::default(),
            pending_index: None,
        }
    }

    /// Dispatches an intent to the matching operation.
    pub fn apply(&mut self, intent: Intent) -> SessionOutcome {
        let _span = tracing::debug_span!("session_apply", intent = ?intent, index = self.current_index).entered();

        if self.phase() == SessionPhase::Transitioning {
            tracing::debug!("transition in progress, intent dropped");
            return SessionOutcome::Ignored;
        }

        match intent {
            Intent::Next => self.next(),
            Intent::Previous => self.previous(),
            Intent::Reveal => self.reveal(),
            Intent::ToggleFlip => self.toggle_flip(),
        }
    }

    /// Advances to the next card.
    ///
    /// On the last card this is a no-op under [`CompletionPolicy::Disable`] and
    /// marks the quiz completed under [`CompletionPolicy::Notify`].
    pub fn next(&mut self) -> SessionOutcome {
        if self.current_index + 1 >= self.deck.len() {
            return match self.completion {
                CompletionPolicy::Disable => {
                    tracing::debug!("already on last card");
                    SessionOutcome::Ignored
                }
                CompletionPolicy::Notify if self.completed => SessionOutcome::Ignored,
                CompletionPolicy::Notify => {
                    tracing::info!(card_count = self.deck.len(), "quiz completed");
                    self.completed = true;
                    SessionOutcome::Completed
                }
            };
        }

        self.start_card_change(self.current_index + 1, Direction::Forward)
    }

    /// Returns to the previous card. No-op on the first card.
    pub fn previous(&mut self) -> SessionOutcome {
        if self.current_index == 0 {
            tracing::debug!("already on first card");
            return SessionOutcome::Ignored;
        }

        self.start_card_change(self.current_index - 1, Direction::Backward)
    }

    /// Shows the answer of the current card. Idempotent.
    pub fn reveal(&mut self) -> SessionOutcome {
        if self.phase() == SessionPhase::Transitioning || self.revealed {
            return SessionOutcome::Ignored;
        }
        self.revealed = true;
        tracing::debug!(index = self.current_index, "answer revealed");
        SessionOutcome::Changed
    }

    /// Turns the current card over. Only available in the flip style.
    pub fn toggle_flip(&mut self) -> SessionOutcome {
        if self.phase() == SessionPhase::Transitioning || self.style != PresentationStyle::Flip {
            return SessionOutcome::Ignored;
        }
        self.flipped = !self.flipped;
        tracing::debug!(index = self.current_index, flipped = self.flipped, "card flipped");
        SessionOutcome::Changed
    }

    /// Reports that the timer for the current phase fired.
    ///
    /// Commits the pending card change when the swap phase ends and returns the
    /// step so the caller can arm the next timer. Returns `None` if no
    /// transition is running.
    pub fn on_phase_elapsed(&mut self) -> Option<PhaseStep> {
        let step = self.animator.on_timer_elapsed()?;

        if step.swapped {
            self.commit_pending();
        }

        if step.is_complete() {
            tracing::debug!(index = self.current_index, "transition complete");
        }

        Some(step)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.animator.is_animating() {
            SessionPhase::Transitioning
        } else {
            SessionPhase::Idle
        }
    }

    #[must_use]
    pub const fn button_enablement(&self) -> ButtonEnablement {
        ButtonEnablement::for_position(self.current_index, self.deck.len())
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The card currently on screen.
    #[must_use]
    pub fn current_card(&self) -> &Card {
        // current_index is only ever set from in-bounds targets
        &self.deck.cards()[self.current_index]
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub const fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub const fn style(&self) -> PresentationStyle {
        self.style
    }

    /// The transition phase on screen, if animating.
    #[must_use]
    pub fn current_transition(&self) -> Option<(Direction, Phase)> {
        let plan = self.animator.current_plan()?;
        let phase = self.animator.current_phase()?;
        Some((plan.direction(), phase))
    }

    fn start_card_change(&mut self, target: usize, direction: Direction) -> SessionOutcome {
        let plan = match self.style {
            PresentationStyle::Fade => TransitionPlan::slide(direction),
            PresentationStyle::Flip => TransitionPlan::flip(direction, self.flipped),
        };

        match self.animator.begin(plan) {
            Ok(first_phase) => {
                tracing::debug!(
                    from = self.current_index,
                    to = target,
                    direction = ?direction,
                    "card change requested"
                );
                self.pending_index = Some(target);
                SessionOutcome::TransitionStarted { first_phase }
            }
            Err(FlashquizError::TransitionInProgress) => {
                tracing::debug!("transition in progress, card change dropped");
                SessionOutcome::Ignored
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not start transition");
                SessionOutcome::Ignored
            }
        }
    }

    fn commit_pending(&mut self) {
        let Some(target) = self.pending_index.take() else {
            return;
        };
        self.current_index = target.min(self.deck.len() - 1);
        self.revealed = false;
        self.flipped = false;
        self.completed = false;
        tracing::debug!(index = self.current_index, "card content swapped");
    }
}
