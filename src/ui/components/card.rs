//! Card surface renderer.
//!
//! Draws the current card as a bordered box centered in the body area. The
//! visible regions come straight from the view model; this module only lays
//! them out and applies the styling of the current transition phase.

use crate::ui::helpers::{center_offset, position_cursor, truncate, width, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Appearance, CardView, Face};

/// Widest the card box grows, border included.
const MAX_CARD_WIDTH: usize = 64;

/// Semantic role of a rendered line, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    FaceLabel,
    Question,
    Image,
    Separator,
    Answer,
    Hint,
}

/// One line of card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub role: LineRole,
    pub text: String,
}

impl CardLine {
    fn new(role: LineRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

fn push_wrapped(lines: &mut Vec<CardLine>, role: LineRole, text: &str, inner: usize) {
    lines.extend(wrap(text, inner).into_iter().map(|l| CardLine::new(role, l)));
}

fn push_image(lines: &mut Vec<CardLine>, uri: &str, inner: usize) {
    lines.push(CardLine::new(
        LineRole::Image,
        truncate(&format!("[image] {uri}"), inner),
    ));
}

/// Lays out the visible regions of `view` for a box with `inner` columns of
/// content width.
#[must_use]
pub fn card_lines(view: &CardView, inner: usize) -> Vec<CardLine> {
    let mut lines = Vec::new();

    match view.face {
        Some(Face::Front) => lines.push(CardLine::new(LineRole::FaceLabel, "FRONT")),
        Some(Face::Back) => lines.push(CardLine::new(LineRole::FaceLabel, "BACK")),
        None => {}
    }

    if let Some(question) = &view.question {
        push_wrapped(&mut lines, LineRole::Question, question, inner);
    }
    if let Some(uri) = &view.question_image {
        push_image(&mut lines, uri, inner);
    }

    let has_answer = view.answer.is_some() || view.answer_image.is_some();
    let has_question = view.question.is_some() || view.question_image.is_some();
    if has_question && (has_answer || view.answer_hidden) {
        lines.push(CardLine::new(LineRole::Separator, "─".repeat(inner.min(24))));
    }

    if let Some(answer) = &view.answer {
        push_wrapped(&mut lines, LineRole::Answer, answer, inner);
    }
    if let Some(uri) = &view.answer_image {
        push_image(&mut lines, uri, inner);
    }

    if view.answer_hidden {
        let hint = if view.face.is_some() {
            "space to reveal · f to flip"
        } else {
            "press space to reveal"
        };
        lines.push(CardLine::new(LineRole::Hint, truncate(hint, inner)));
    }

    lines
}

fn role_color(role: LineRole, theme: &Theme) -> &str {
    match role {
        LineRole::FaceLabel | LineRole::Separator | LineRole::Hint => &theme.colors.text_dim,
        LineRole::Question => &theme.colors.question_fg,
        LineRole::Image => &theme.colors.image_fg,
        LineRole::Answer => &theme.colors.answer_fg,
    }
}

/// Draws the card between rows `top` and `bottom` (inclusive, 1-indexed).
pub fn render_card(view: &CardView, theme: &Theme, top: usize, bottom: usize, cols: usize) {
    if bottom < top + 2 || cols < 8 {
        return;
    }

    let box_width = cols.saturating_sub(4).min(MAX_CARD_WIDTH);
    let inner = box_width.saturating_sub(4);
    let left = shifted(center_offset(cols, box_width) + 1, view.shift, cols, box_width);

    if view.appearance == Appearance::EdgeOn {
        render_edge(theme, top, bottom, left + box_width / 2);
        return;
    }

    let faded = view.appearance == Appearance::Faded;
    let style = |color: &str| {
        if faded {
            format!("{}{}", Theme::dim(), Theme::fg(color))
        } else {
            Theme::fg(color)
        }
    };

    let border = style(&theme.colors.card_border);
    let horizontal = "─".repeat(box_width.saturating_sub(2));
    position_cursor(top, left);
    print!("{border}╭{horizontal}╮{}", Theme::reset());
    position_cursor(bottom, left);
    print!("{border}╰{horizontal}╯{}", Theme::reset());

    let content_rows = bottom - top - 1;
    let mut lines = card_lines(view, inner);
    lines.truncate(content_rows);
    let first = top + 1 + center_offset(content_rows, lines.len());

    for row in top + 1..bottom {
        position_cursor(row, left);
        print!("{border}│{}", Theme::reset());
        position_cursor(row, left + box_width - 1);
        print!("{border}│{}", Theme::reset());
    }

    for (i, line) in lines.iter().enumerate() {
        let pad = center_offset(inner, width(&line.text));
        position_cursor(first + i, left + 2 + pad);
        if line.role == LineRole::Question {
            print!("{}", Theme::bold());
        }
        if line.role == LineRole::Hint {
            print!("{}", Theme::italic());
        }
        print!("{}{}{}", style(role_color(line.role, theme)), line.text, Theme::reset());
    }
}

/// A card seen edge-on is a single vertical bar.
fn render_edge(theme: &Theme, top: usize, bottom: usize, col: usize) {
    for row in top..=bottom {
        position_cursor(row, col);
        print!("{}┃{}", Theme::fg(&theme.colors.card_border), Theme::reset());
    }
}

/// Applies the slide offset while keeping the box on screen.
fn shifted(left: usize, shift: isize, cols: usize, box_width: usize) -> usize {
    let max_left = cols.saturating_sub(box_width).max(1);
    left.saturating_add_signed(shift).clamp(1, max_left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::ControlStates;

    fn view() -> CardView {
        CardView {
            question: Some("Capital of France?".to_string()),
            question_image: None,
            answer: None,
            answer_image: None,
            answer_hidden: true,
            face: None,
            appearance: Appearance::Solid,
            shift: 0,
            controls: ControlStates {
                previous: false,
                reveal: true,
                flip: false,
                next: true,
            },
            notice: None,
        }
    }

    fn roles(lines: &[CardLine]) -> Vec<LineRole> {
        lines.iter().map(|l| l.role).collect()
    }

    #[test]
    fn hidden_answer_shows_hint() {
        let lines = card_lines(&view(), 40);
        assert_eq!(
            roles(&lines),
            vec![LineRole::Question, LineRole::Separator, LineRole::Hint]
        );
    }

    #[test]
    fn revealed_answer_replaces_hint() {
        let mut v = view();
        v.answer = Some("Paris".to_string());
        v.answer_hidden = false;

        let lines = card_lines(&v, 40);
        assert_eq!(
            roles(&lines),
            vec![LineRole::Question, LineRole::Separator, LineRole::Answer]
        );
        assert_eq!(lines[2].text, "Paris");
    }

    #[test]
    fn images_render_as_placeholders() {
        let mut v = view();
        v.question = None;
        v.question_image = Some("https://example.com/flag.png".to_string());
        v.answer_hidden = false;

        let lines = card_lines(&v, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].role, LineRole::Image);
        assert_eq!(lines[0].text, "[image] https://example.com/flag.png");
    }

    #[test]
    fn back_face_is_labelled() {
        let mut v = view();
        v.face = Some(Face::Back);
        v.question = None;
        v.answer = Some("Paris".to_string());
        v.answer_hidden = false;

        let lines = card_lines(&v, 40);
        assert_eq!(lines[0], CardLine::new(LineRole::FaceLabel, "BACK"));
        assert_eq!(roles(&lines), vec![LineRole::FaceLabel, LineRole::Answer]);
    }

    #[test]
    fn shift_stays_on_screen() {
        assert_eq!(shifted(10, -4, 80, 64), 6);
        assert_eq!(shifted(2, -4, 80, 64), 1);
        assert_eq!(shifted(10, 40, 80, 64), 16);
    }
}
