//! Control row: previous, reveal, flip and next buttons.
//!
//! The same layout function drives drawing and mouse hit testing, so a click
//! always lands on the button that is drawn under it.
//!
//! ```text
//! [ ◀ Prev ]   [ Reveal ]   [ Flip ]   [ Next ▶ ]
//! ```

use crate::input::Intent;
use crate::ui::helpers::{center_offset, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlStates;

const GAP: usize = 3;

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Reveal,
    Flip,
    Next,
}

impl Control {
    pub const ALL: [Self; 4] = [Self::Previous, Self::Reveal, Self::Flip, Self::Next];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Previous => "◀ Prev",
            Self::Reveal => "Reveal",
            Self::Flip => "Flip",
            Self::Next => "Next ▶",
        }
    }

    #[must_use]
    pub const fn intent(self) -> Intent {
        match self {
            Self::Previous => Intent::Previous,
            Self::Reveal => Intent::Reveal,
            Self::Flip => Intent::ToggleFlip,
            Self::Next => Intent::Next,
        }
    }

    const fn enabled(self, states: &ControlStates) -> bool {
        match self {
            Self::Previous => states.previous,
            Self::Reveal => states.reveal,
            Self::Flip => states.flip,
            Self::Next => states.next,
        }
    }

    fn button_width(self) -> usize {
        width(self.label()) + 4
    }
}

/// 1-indexed screen row of the control row.
#[must_use]
pub const fn control_row(rows: usize) -> usize {
    rows.saturating_sub(3)
}

/// Each control with its 1-indexed start column and width.
#[must_use]
pub fn layout(cols: usize) -> Vec<(Control, usize, usize)> {
    let total: usize = Control::ALL.iter().map(|c| c.button_width()).sum::<usize>()
        + GAP * (Control::ALL.len() - 1);

    let mut col = center_offset(cols, total) + 1;
    Control::ALL
        .iter()
        .map(|&control| {
            let w = control.button_width();
            let span = (control, col, w);
            col += w + GAP;
            span
        })
        .collect()
}

/// Maps a mouse position to the control under it.
///
/// `line` and `col` are 0-indexed pane coordinates as delivered in mouse
/// events; `rows` and `cols` are the size of the last render.
///
/// # Example
///
/// ```rust
/// use flashquiz::ui::components::controls::{hit_test, layout, Control};
///
/// let (rows, cols) = (24, 80);
/// let (_, start, _) = layout(cols)[3];
/// assert_eq!(hit_test(20, start - 1, rows, cols), Some(Control::Next));
/// assert_eq!(hit_test(5, start - 1, rows, cols), None);
/// ```
#[must_use]
pub fn hit_test(line: isize, col: usize, rows: usize, cols: usize) -> Option<Control> {
    let row = usize::try_from(line).ok()? + 1;
    if row != control_row(rows) {
        return None;
    }
    let col = col + 1;

    layout(cols)
        .into_iter()
        .find(|&(_, start, w)| (start..start + w).contains(&col))
        .map(|(control, _, _)| control)
}

/// Draws the control row. Disabled controls are dimmed.
pub fn render_controls(rows: usize, states: &ControlStates, theme: &Theme, cols: usize) {
    let row = control_row(rows);

    for (control, start, _) in layout(cols) {
        position_cursor(row, start);
        if control.enabled(states) {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.control_fg));
            print!("{}", Theme::bg(&theme.colors.control_bg));
        } else {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.control_disabled_fg));
        }
        print!("[ {} ]", control.label());
        print!("{}", Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_do_not_overlap() {
        let spans = layout(80);
        for pair in spans.windows(2) {
            let (_, a_start, a_width) = pair[0];
            let (_, b_start, _) = pair[1];
            assert!(a_start + a_width < b_start);
        }
    }

    #[test]
    fn every_button_is_hittable() {
        let (rows, cols) = (30, 100);
        for (control, start, w) in layout(cols) {
            let line = isize::try_from(control_row(rows) - 1).unwrap();
            assert_eq!(hit_test(line, start - 1, rows, cols), Some(control));
            assert_eq!(hit_test(line, start + w - 2, rows, cols), Some(control));
        }
    }

    #[test]
    fn gaps_and_other_rows_miss() {
        let (rows, cols) = (24, 80);
        let (_, start, w) = layout(cols)[0];
        let line = isize::try_from(control_row(rows) - 1).unwrap();

        assert_eq!(hit_test(line, start + w, rows, cols), None);
        assert_eq!(hit_test(line - 1, start, rows, cols), None);
        assert_eq!(hit_test(-1, start, rows, cols), None);
    }

    #[test]
    fn controls_map_to_intents() {
        assert_eq!(Control::Flip.intent(), Intent::ToggleFlip);
        assert_eq!(Control::Previous.intent(), Intent::Previous);
    }
}
