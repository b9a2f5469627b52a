//! Visual ordering for left-to-right-only renderers
//!
//! PDF and canvas back-ends that cannot shape Arabic usually cannot reorder
//! right-to-left runs either; they draw code points left to right as given.
//! This module shapes text and then applies the Unicode Bidirectional
//! Algorithm (UAX #9) per paragraph so the drawn string reads correctly.
//!
//! # Example
//!
//! ```rust
//! use arabic_shaper::shape_visual;
//!
//! // BEH TEH in a left-to-right line: the Arabic run comes out reversed
//! assert_eq!(shape_visual("abc \u{0628}\u{062A}"), "abc \u{FE96}\u{FE91}");
//! ```

use crate::ArabicShaper;
use serde::{Deserialize, Serialize};
use unicode_bidi::BidiInfo;

/// Bidi paragraph separators (class B)
const PARAGRAPH_SEPARATORS: &[char] = &['\n', '\r', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2029}'];

/// Paragraph direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right
    Ltr,
    /// Right-to-left
    Rtl,
}

/// Detect the paragraph direction from the first strong character.
///
/// Text without any strong character is treated as left-to-right.
pub fn base_direction(text: &str) -> Direction {
    match unicode_bidi::get_base_direction(text) {
        unicode_bidi::Direction::Rtl => Direction::Rtl,
        unicode_bidi::Direction::Ltr | unicode_bidi::Direction::Mixed => Direction::Ltr,
    }
}

/// Reorder logical text into visual order, paragraph by paragraph.
///
/// Paragraph separators stay at the end of their paragraph.
pub fn reorder_visual(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let info = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());

    for para in &info.paragraphs {
        let content = &text[para.range.clone()];
        let body_len = content.trim_end_matches(PARAGRAPH_SEPARATORS).len();
        let line = para.range.start..para.range.start + body_len;

        if !line.is_empty() {
            out.push_str(&info.reorder_line(para, line.clone()));
        }
        out.push_str(&text[line.end..para.range.end]);
    }

    out
}

impl ArabicShaper {
    /// Shape text and reorder it for a left-to-right renderer
    pub fn shape_visual(&self, text: &str) -> String {
        reorder_visual(&self.shape(text))
    }
}

/// Shape and reorder text with the default configuration
pub fn shape_visual(text: &str) -> String {
    ArabicShaper::new().shape_visual(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_direction() {
        assert_eq!(base_direction("Hello"), Direction::Ltr);
        assert_eq!(base_direction("\u{0628}\u{062A} abc"), Direction::Rtl);
        assert_eq!(base_direction("\u{FE91}"), Direction::Rtl);
        assert_eq!(base_direction("123"), Direction::Ltr);
        assert_eq!(base_direction(""), Direction::Ltr);
    }

    #[test]
    fn test_ltr_unchanged() {
        assert_eq!(reorder_visual("Weekly report"), "Weekly report");
        assert_eq!(shape_visual(""), "");
    }

    #[test]
    fn test_rtl_run_reversed() {
        assert_eq!(shape_visual("\u{0628}\u{062A}"), "\u{FE96}\u{FE91}");
    }

    #[test]
    fn test_ligature_then_reorder() {
        // BEH LAM ALEF -> initial BEH, final lam-alef, reversed for display
        assert_eq!(shape_visual("\u{0628}\u{0644}\u{0627}"), "\u{FEFC}\u{FE91}");
    }

    #[test]
    fn test_separator_stays_at_paragraph_end() {
        assert_eq!(
            shape_visual("\u{0628}\u{062A}\nab"),
            "\u{FE96}\u{FE91}\nab"
        );
        assert_eq!(reorder_visual("ab\n\n"), "ab\n\n");
    }
}
