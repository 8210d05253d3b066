use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` down to `max_cells`, ending with `…` when something was dropped
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w + 1 > max_cells {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Start of the grapheme after the one at `offset`, `None` at the end
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let rest = s.get(offset..)?;
    let g = rest.graphemes(true).next()?;
    Some(offset + g.len())
}

/// Start of the grapheme before `offset`, `None` at the start
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let head = s.get(..offset)?;
    let g = head.graphemes(true).next_back()?;
    Some(offset - g.len())
}

/// Cell column of a byte offset
pub fn byte_offset_to_display_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Start of the word left of `offset` (whitespace-delimited), skipping any
/// whitespace directly before the cursor first
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let head = &s[..offset.min(s.len())];
    let mut start = head.len();
    let mut seen_word = false;
    for (i, g) in head.grapheme_indices(true).rev() {
        let blank = g.chars().all(char::is_whitespace);
        if blank && seen_word {
            break;
        }
        if !blank {
            seen_word = true;
        }
        start = i;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("牛乳"), 4);
        assert_eq!(display_width("🥛"), 2);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_leaves_short_text() {
        assert_eq!(truncate_to_width("milk", 10), "milk");
        assert_eq!(truncate_to_width("milk", 4), "milk");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Buy oat milk", 6), "Buy o\u{2026}");
        assert_eq!(truncate_to_width("牛乳を買う", 5), "牛乳\u{2026}");
        assert_eq!(truncate_to_width("milk", 1), "\u{2026}");
        assert_eq!(truncate_to_width("milk", 0), "");
    }

    #[test]
    fn grapheme_steps() {
        let s = "a🥛e\u{0301}";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(5));
        assert_eq!(next_grapheme_boundary(s, 5), Some(s.len()));
        assert_eq!(next_grapheme_boundary(s, s.len()), None);

        assert_eq!(prev_grapheme_boundary(s, s.len()), Some(5));
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn display_col_of_offset() {
        assert_eq!(byte_offset_to_display_col("milk", 2), 2);
        assert_eq!(byte_offset_to_display_col("牛乳", 3), 2);
        assert_eq!(byte_offset_to_display_col("milk", 99), 4);
    }

    #[test]
    fn word_left() {
        let s = "buy oat milk";
        assert_eq!(word_boundary_left(s, s.len()), 8);
        assert_eq!(word_boundary_left(s, 8), 4);
        assert_eq!(word_boundary_left(s, 7), 4);
        assert_eq!(word_boundary_left(s, 3), 0);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_left("milk   ", 7), 0);
    }
}
