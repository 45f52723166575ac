//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with deck name and progress
//! - [`card`]: The card surface
//! - [`controls`]: Navigation buttons and their hit testing
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Loading and error messages
//!
//! # Layout
//!
//! ```text
//! row 1          [blank]
//! row 2          Header
//! row 3          Border
//! row 4          [completion notice]
//! rows 5..       Card
//! rows - 3       Controls
//! rows - 2       Border
//! rows - 1       Footer
//! ```

pub mod card;
pub mod controls;
pub mod empty;
pub mod footer;
pub mod header;

use crate::ui::helpers::{center_offset, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardView, EmptyState, QuizViewModel};

use controls::{control_row, render_controls};
use footer::render_footer;
use header::render_header;

const HEADER_ROW: usize = 2;
const NOTICE_ROW: usize = 4;

/// First and last 1-indexed rows available to the card or empty state.
#[must_use]
pub const fn body_rows(rows: usize) -> (usize, usize) {
    (NOTICE_ROW + 1, control_row(rows).saturating_sub(2))
}

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_notice(notice: &str, theme: &Theme, cols: usize) {
    let text = truncate(&format!(" {notice} "), cols);
    position_cursor(NOTICE_ROW, center_offset(cols, width(&text)) + 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.notice_fg));
    print!("{}", Theme::bg(&theme.colors.notice_bg));
    print!("{text}");
    print!("{}", Theme::reset());
}

fn render_chrome(vm: &QuizViewModel, theme: &Theme, cols: usize, rows: usize) {
    let next = render_header(HEADER_ROW, &vm.header, theme, cols);
    render_border(next, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    render_border(footer_start.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders a running quiz: chrome, notice, card and controls.
pub fn render_quiz_mode(vm: &QuizViewModel, view: &CardView, theme: &Theme, cols: usize, rows: usize) {
    render_chrome(vm, theme, cols, rows);

    if let Some(notice) = &view.notice {
        render_notice(notice, theme, cols);
    }

    let (top, bottom) = body_rows(rows);
    card::render_card(view, theme, top, bottom, cols);
    render_controls(rows, &view.controls, theme, cols);
}

/// Renders the loading or error screen.
pub fn render_empty_mode(vm: &QuizViewModel, empty: &EmptyState, theme: &Theme, cols: usize, rows: usize) {
    render_chrome(vm, theme, cols, rows);

    let (top, bottom) = body_rows(rows);
    empty::render_empty_state(empty, theme, top, bottom.max(top + 1), cols);
}
