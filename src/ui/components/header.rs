//! Header component renderer.

use crate::ui::helpers::{center_offset, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns the next free row.
///
/// The deck title is centered; progress, when present, follows it after a
/// separator:
///
/// ```text
///                     Capitals · Card 2 / 5
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let text = header.progress.as_ref().map_or_else(
        || header.title.clone(),
        |progress| format!("{} · {progress}", header.title),
    );
    let text = truncate(&text, cols);
    let text_len = width(&text);
    let padding = center_offset(cols, text_len);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));

    print!("{}", Theme::reset());
    row + 1
}
