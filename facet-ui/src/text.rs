//! Text utilities for truncation and padding.
//!
//! Widths are measured in terminal display cells via `unicode-width`, not in
//! bytes or chars, so wide glyphs pad and truncate correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::node::Alignment;

/// Display width of a string in terminal cells.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate `text` to at most `max_width` display cells, ending in `…` when
/// anything was cut. Returns the input unchanged when it already fits.
pub fn ellipsify(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one cell for the ellipsis.
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad (or truncate) `text` to exactly `width` display cells.
pub fn pad_to_width(text: &str, width: usize, align: Alignment) -> String {
    let text = ellipsify(text, width);
    let slack = width.saturating_sub(display_width(&text));
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(slack)),
        Alignment::Right => format!("{}{}", " ".repeat(slack), text),
        Alignment::Center => {
            let left = slack / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
        }
    }
}
