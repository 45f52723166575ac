//! Declarative transition plans.
//!
//! A plan is an ordered list of timed phases. Exactly one phase is marked as
//! the swap point: the card content changes when that phase ends, at the
//! moment the outgoing card is fully faded out or turned edge-on.

use std::time::Duration;

/// Fade-out time for the outgoing card.
pub const FADE_OUT: Duration = Duration::from_millis(200);

/// Fade-in time for the incoming card.
pub const FADE_IN: Duration = Duration::from_millis(500);

/// Time to turn a card from its back face to edge-on.
pub const UNFLIP: Duration = Duration::from_millis(200);

/// Time for one half of a front-face flip.
pub const HALF_FLIP: Duration = Duration::from_millis(300);

/// Navigation direction of a card change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Visual treatment of a phase, consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Outgoing card fading away.
    FadeOut,
    /// Incoming card fading in.
    FadeIn,
    /// Back face turning to edge-on.
    Unflip,
    /// Front face turning to edge-on.
    HalfFlipOut,
    /// New front face turning from edge-on to face-up.
    HalfFlipIn,
}

/// One timed step of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub duration: Duration,
    /// Whether the card content is swapped when this phase ends.
    pub swap_after: bool,
}

impl Phase {
    const fn new(kind: PhaseKind, duration: Duration, swap_after: bool) -> Self {
        Self {
            kind,
            duration,
            swap_after,
        }
    }
}

/// Ordered phase list for one card change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    direction: Direction,
    phases: Vec<Phase>,
}

impl TransitionPlan {
    /// Fade/slide transition: hide the outgoing card, swap, show the new one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flashquiz::animation::{Direction, TransitionPlan};
    /// use std::time::Duration;
    ///
    /// let plan = TransitionPlan::slide(Direction::Forward);
    /// assert_eq!(plan.total_duration(), Duration::from_millis(700));
    /// ```
    #[must_use]
    pub fn slide(direction: Direction) -> Self {
        Self {
            direction,
            phases: vec![
                Phase::new(PhaseKind::FadeOut, FADE_OUT, true),
                Phase::new(PhaseKind::FadeIn, FADE_IN, false),
            ],
        }
    }

    /// Flip transition for two-sided cards.
    ///
    /// A card showing its back is turned edge-on and swapped. A card showing
    /// its front is half-flipped, swapped at the edge-on midpoint, and
    /// half-flipped back.
    #[must_use]
    pub fn flip(direction: Direction, showing_back: bool) -> Self {
        let phases = if showing_back {
            vec![Phase::new(PhaseKind::Unflip, UNFLIP, true)]
        } else {
            vec![
                Phase::new(PhaseKind::HalfFlipOut, HALF_FLIP, true),
                Phase::new(PhaseKind::HalfFlipIn, HALF_FLIP, false),
            ]
        };
        Self { direction, phases }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Sum of all phase durations.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.phases.iter().map(|p| p.duration).sum()
    }
}
