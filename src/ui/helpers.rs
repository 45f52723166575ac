//! Shared rendering utilities.
//!
//! Cursor positioning plus the text fitting used by the card and chrome
//! components. All widths are counted in `char`s.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Width of `text` in columns.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `max` columns, ending with `…` if anything was dropped.
///
/// # Example
///
/// ```rust
/// use flashquiz::ui::helpers::truncate;
///
/// assert_eq!(truncate("flashcards", 6), "flash…");
/// assert_eq!(truncate("quiz", 6), "quiz");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Word-wraps `text` to lines of at most `max` columns.
///
/// Explicit newlines are kept. Words longer than a line are split.
#[must_use]
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    if max == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            if !line.is_empty() && width(&line) + 1 + word.len() > max {
                lines.push(std::mem::take(&mut line));
            }

            while word.len() > max {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(max);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        lines.push(line);
    }
    lines
}

/// Left padding that centers `content` columns within `total`.
#[must_use]
pub const fn center_offset(total: usize, content: usize) -> usize {
    total.saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("What is the capital of France?", 12),
            vec!["What is the", "capital of", "France?"]
        );
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn keeps_paragraphs() {
        assert_eq!(wrap("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(wrap("été été", 3), vec!["été", "été"]);
        assert_eq!(truncate("日本語です", 3), "日本…");
    }

    #[test]
    fn centering() {
        assert_eq!(center_offset(10, 4), 3);
        assert_eq!(center_offset(3, 10), 0);
    }
}
