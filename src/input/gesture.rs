//! Horizontal swipe recognition.
//!
//! A gesture is one pointer press followed by one release. The horizontal
//! displacement between the two decides the swipe: dragging right goes back to
//! the previous card, dragging left advances, and anything shorter than the
//! threshold is not a swipe at all.

/// Default minimum swipe distance in gesture units.
pub const DEFAULT_MIN_DISTANCE: f64 = 75.0;

/// Gesture units per terminal column.
pub const UNITS_PER_COLUMN: f64 = 8.0;

/// Converts a terminal column to a gesture coordinate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn column_to_units(col: usize) -> f64 {
    col as f64 * UNITS_PER_COLUMN
}

/// Result of resolving one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Movement too short to count as a swipe.
    None,
    /// Leftward swipe; advance to the next card.
    Next,
    /// Rightward swipe; return to the previous card.
    Previous,
}

/// Tracks the pointer between press and release and resolves swipes.
///
/// # Example
///
/// ```rust
/// use flashquiz::input::{GestureRecognizer, Swipe};
///
/// let mut gestures = GestureRecognizer::default();
/// gestures.start(400.0);
/// assert_eq!(gestures.end(300.0), Swipe::Next);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecognizer {
    min_distance: f64,
    start: Option<f64>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DISTANCE)
    }
}

impl GestureRecognizer {
    /// Creates a recognizer with the given threshold.
    ///
    /// Non-finite or negative thresholds fall back to [`DEFAULT_MIN_DISTANCE`].
    #[must_use]
    pub fn new(min_distance: f64) -> Self {
        let min_distance = if min_distance.is_finite() && min_distance >= 0.0 {
            min_distance
        } else {
            DEFAULT_MIN_DISTANCE
        };
        Self {
            min_distance,
            start: None,
        }
    }

    #[must_use]
    pub const fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Records the pointer-down coordinate, replacing any unfinished gesture.
    pub fn start(&mut self, x: f64) {
        self.start = Some(x);
    }

    /// Returns `true` while a press has been recorded without a release.
    #[must_use]
    pub const fn in_progress(&self) -> bool {
        self.start.is_some()
    }

    /// Finishes the gesture at `x` and resolves it.
    ///
    /// A release without a recorded press resolves to [`Swipe::None`].
    pub fn end(&mut self, x: f64) -> Swipe {
        self.start
            .take()
            .map_or(Swipe::None, |start| self.resolve(start, x))
    }

    /// Resolves a press/release pair without touching the tracked gesture.
    #[must_use]
    pub fn resolve(&self, start: f64, end: f64) -> Swipe {
        let distance = end - start;

        let swipe = if distance.abs() < self.min_distance {
            Swipe::None
        } else if distance > 0.0 {
            Swipe::Previous
        } else {
            Swipe::Next
        };

        tracing::trace!(start, end, distance, swipe = ?swipe, "gesture resolved");
        swipe
    }
}
