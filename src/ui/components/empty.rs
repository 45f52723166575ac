//! Empty state component renderer.
//!
//! Shown in place of a card while the deck is loading or after it failed to
//! load.

use crate::ui::helpers::{center_offset, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message vertically centered in the body area.
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Errors use the theme's `error_fg` color; everything else `empty_state_fg`.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, top: usize, bottom: usize, cols: usize) {
    let row = top + center_offset(bottom.saturating_sub(top) + 1, 2);

    let message = truncate(&empty.message, cols);
    let msg_len = width(&message);
    let msg_padding = center_offset(cols, msg_len);
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = width(&subtitle);
    let sub_padding = center_offset(cols, sub_len);

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
