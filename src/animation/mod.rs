//! Timed card transitions.
//!
//! Transitions are described as data ([`TransitionPlan`]) and executed by a
//! single [`Animator`] per card surface. The animator is driven entirely by
//! timer callbacks, which in the plugin are Zellij `Timer` events armed with
//! `set_timeout`:
//!
//! ```text
//! begin(plan) ──► arm timer(phase 0) ──► Timer ──► on_timer_elapsed ──► arm timer(phase 1) ──► ...
//!                                                      │
//!                                                      └─ swapped = true  ► session commits new card
//! ```
//!
//! # Modules
//!
//! - [`plan`]: phase lists for the slide/fade and flip families
//! - [`animator`]: the single-flight sequencer

pub mod animator;
pub mod plan;

pub use animator::{Animator, PhaseStep};
pub use plan::{Direction, Phase, PhaseKind, TransitionPlan, FADE_IN, FADE_OUT, HALF_FLIP, UNFLIP};
