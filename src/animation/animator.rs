//! Single-flight phase sequencer.
//!
//! The animator never reads a clock. Starting a transition returns the delay of
//! the first phase; the caller arms a timer for it and reports back with
//! [`Animator::on_timer_elapsed`] when it fires. Each report advances exactly
//! one phase, so phases can never overlap or run out of order.

use super::plan::{Phase, TransitionPlan};
use crate::domain::error::{FlashquizError, Result};
use std::time::Duration;

/// Outcome of one elapsed phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep {
    /// The phase that just ended was the swap point.
    pub swapped: bool,
    /// Delay of the phase that just started, or `None` when the transition is
    /// complete.
    pub next_timer: Option<Duration>,
}

impl PhaseStep {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.next_timer.is_none()
    }
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    plan: TransitionPlan,
    cursor: usize,
}

/// Runs at most one [`TransitionPlan`] at a time.
///
/// # Example
///
/// ```rust
/// use flashquiz::animation::{Animator, Direction, TransitionPlan};
///
/// let mut animator = Animator::default();
/// let first = animator.begin(TransitionPlan::slide(Direction::Forward)).unwrap();
/// assert_eq!(first.as_millis(), 200);
///
/// let step = animator.on_timer_elapsed().unwrap();
/// assert!(step.swapped);
/// let step = animator.on_timer_elapsed().unwrap();
/// assert!(step.is_complete());
/// assert!(!animator.is_animating());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Animator {
    active: Option<ActiveTransition>,
}

impl Animator {
    /// Starts `plan` and returns the delay of its first phase.
    ///
    /// # Errors
    ///
    /// Returns [`FlashquizError::TransitionInProgress`] if a transition is
    /// already running, and [`FlashquizError::Config`] for a plan with no
    /// phases.
    pub fn begin(&mut self, plan: TransitionPlan) -> Result<Duration> {
        if self.active.is_some() {
            return Err(FlashquizError::TransitionInProgress);
        }

        let first = plan
            .phases()
            .first()
            .map(|phase| phase.duration)
            .ok_or_else(|| FlashquizError::Config("transition plan has no phases".to_string()))?;

        tracing::debug!(
            phases = plan.phases().len(),
            total_ms = u64::try_from(plan.total_duration().as_millis()).unwrap_or(u64::MAX),
            "transition started"
        );

        self.active = Some(ActiveTransition { plan, cursor: 0 });
        Ok(first)
    }

    /// Ends the current phase and starts the next one.
    ///
    /// Returns `None` when no transition is running, which makes stray timer
    /// events harmless.
    pub fn on_timer_elapsed(&mut self) -> Option<PhaseStep> {
        let active = self.active.as_mut()?;
        let finished = *active.plan.phases().get(active.cursor)?;
        active.cursor += 1;

        let next_timer = active
            .plan
            .phases()
            .get(active.cursor)
            .map(|phase| phase.duration);

        tracing::trace!(
            phase = ?finished.kind,
            swapped = finished.swap_after,
            complete = next_timer.is_none(),
            "transition phase elapsed"
        );

        if next_timer.is_none() {
            self.active = None;
        }

        Some(PhaseStep {
            swapped: finished.swap_after,
            next_timer,
        })
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The phase currently on screen, if any.
    #[must_use]
    pub fn current_phase(&self) -> Option<Phase> {
        self.active
            .as_ref()
            .and_then(|active| active.plan.phases().get(active.cursor).copied())
    }

    /// The plan currently running, if any.
    #[must_use]
    pub fn current_plan(&self) -> Option<&TransitionPlan> {
        self.active.as_ref().map(|active| &active.plan)
    }
}
