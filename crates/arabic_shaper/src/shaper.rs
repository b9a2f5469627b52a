//! Contextual shaping pass
//!
//! A single left-to-right scan over the logical text. Each letter of the
//! shaping table is replaced by the presentation form that matches its
//! neighbours; lam followed by an alef variant collapses into one ligature
//! glyph. Everything else is copied through unchanged, so the pass is total
//! and never fails.

use crate::tables::{tables, LAM};
use crate::{accepts_join, is_arabic, is_transparent_mark, joins_forward, PositionalForm, ShaperConfig};
use serde::Serialize;
use std::borrow::Cow;

/// Counters describing one shaping call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShapeReport {
    /// Scalar values read
    pub input_chars: usize,
    /// Scalar values written
    pub output_chars: usize,
    /// Letters replaced by a positional form
    pub shaped_letters: usize,
    /// Lam-alef pairs collapsed into a ligature
    pub ligatures: usize,
}

/// Arabic contextual shaper
///
/// Holds only its configuration; the lookup tables are shared process-wide,
/// so a shaper is cheap to copy and safe to use from several threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArabicShaper {
    config: ShaperConfig,
}

impl ArabicShaper {
    /// Create a shaper with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shaper with a specific configuration
    pub fn with_config(config: ShaperConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ShaperConfig {
        &self.config
    }

    /// Shape a string
    pub fn shape(&self, text: &str) -> String {
        self.shape_with_report(text).0
    }

    /// Shape a string, borrowing it when there is nothing to shape
    pub fn shape_cow<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if crate::contains_shapeable(text) {
            Cow::Owned(self.shape(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Shape a string and report what was done
    pub fn shape_with_report(&self, text: &str) -> (String, ShapeReport) {
        let chars: Vec<char> = text.chars().collect();
        let (shaped, report) = self.run(&chars);
        (shaped.into_iter().collect(), report)
    }

    /// Shape a sequence of scalar values
    pub fn shape_chars(&self, chars: &[char]) -> Vec<char> {
        self.run(chars).0
    }

    fn run(&self, chars: &[char]) -> (Vec<char>, ShapeReport) {
        let tables = tables();
        let mut out = Vec::with_capacity(chars.len());
        let mut report = ShapeReport {
            input_chars: chars.len(),
            ..ShapeReport::default()
        };

        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let forms = match tables.forms(c) {
                Some(forms) if is_arabic(c) => forms,
                _ => {
                    out.push(c);
                    i += 1;
                    continue;
                }
            };

            let prev_joins = joins_forward(self.previous(chars, i), self.config.joining_scope);

            if self.config.ligatures && c == LAM {
                if let Some(ligature) = chars.get(i + 1).and_then(|&alef| tables.lam_alef(alef)) {
                    out.push(ligature.select(prev_joins));
                    report.ligatures += 1;
                    i += 2;
                    continue;
                }
            }

            let next_joins = accepts_join(c, self.next(chars, i));
            out.push(forms.get(PositionalForm::from_joins(prev_joins, next_joins)));
            report.shaped_letters += 1;
            i += 1;
        }

        report.output_chars = out.len();
        tracing::trace!(
            target: "arabic_shaper::shape",
            input_chars = report.input_chars,
            output_chars = report.output_chars,
            shaped_letters = report.shaped_letters,
            ligatures = report.ligatures,
            "text shaped"
        );

        (out, report)
    }

    fn previous(&self, chars: &[char], i: usize) -> Option<char> {
        let mut before = chars[..i].iter().rev().copied();
        if self.config.transparent_marks {
            before.find(|&c| !is_transparent_mark(c))
        } else {
            before.next()
        }
    }

    fn next(&self, chars: &[char], i: usize) -> Option<char> {
        let mut after = chars[i + 1..].iter().copied();
        if self.config.transparent_marks {
            after.find(|&c| !is_transparent_mark(c))
        } else {
            after.next()
        }
    }
}

/// Shape a string with the default configuration
pub fn shape(text: &str) -> String {
    ArabicShaper::new().shape(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JoiningScope;

    #[test]
    fn test_empty() {
        assert_eq!(shape(""), "");
    }

    #[test]
    fn test_non_arabic_passthrough() {
        let text = "Hafiz 123, page 4-7!\n\tdone";
        assert_eq!(shape(text), text);
    }

    #[test]
    fn test_isolated_letter() {
        assert_eq!(shape("\u{0628}"), "\u{FE8F}");
    }

    #[test]
    fn test_three_joining_letters() {
        // BEH TEH THEH
        assert_eq!(shape("\u{0628}\u{062A}\u{062B}"), "\u{FE91}\u{FE98}\u{FE9A}");
    }

    #[test]
    fn test_muhammad() {
        // MEEM HAH MEEM DAL
        assert_eq!(
            shape("\u{0645}\u{062D}\u{0645}\u{062F}"),
            "\u{FEE3}\u{FEA4}\u{FEE4}\u{FEAA}"
        );
    }

    #[test]
    fn test_dal_blocks_forward_join() {
        // DAL BEH: neither joins
        assert_eq!(shape("\u{062F}\u{0628}"), "\u{FEA9}\u{FE8F}");
        // BEH DAL: BEH initial, DAL final
        assert_eq!(shape("\u{0628}\u{062F}"), "\u{FE91}\u{FEAA}");
        // BEH DAL BEH: the second BEH starts a new run
        assert_eq!(shape("\u{0628}\u{062F}\u{0628}"), "\u{FE91}\u{FEAA}\u{FE8F}");
    }

    #[test]
    fn test_hamza_has_single_form() {
        // BEH HAMZA: hamza never receives a join
        assert_eq!(shape("\u{0628}\u{0621}"), "\u{FE8F}\u{FE80}");
    }

    #[test]
    fn test_lam_alef_isolated() {
        let (shaped, report) = ArabicShaper::new().shape_with_report("\u{0644}\u{0627}");
        assert_eq!(shaped, "\u{FEFB}");
        assert_eq!(report.input_chars, 2);
        assert_eq!(report.output_chars, 1);
        assert_eq!(report.ligatures, 1);
        assert_eq!(report.shaped_letters, 0);
    }

    #[test]
    fn test_lam_alef_after_joining_letter() {
        // BEH LAM ALEF
        assert_eq!(shape("\u{0628}\u{0644}\u{0627}"), "\u{FE91}\u{FEFC}");
    }

    #[test]
    fn test_lam_alef_variants() {
        assert_eq!(shape("\u{0644}\u{0622}"), "\u{FEF5}");
        assert_eq!(shape("\u{0644}\u{0623}"), "\u{FEF7}");
        assert_eq!(shape("\u{0644}\u{0625}"), "\u{FEF9}");
        assert_eq!(shape("\u{0628}\u{0644}\u{0622}"), "\u{FE91}\u{FEF6}");
        assert_eq!(shape("\u{0628}\u{0644}\u{0623}"), "\u{FE91}\u{FEF8}");
        assert_eq!(shape("\u{0628}\u{0644}\u{0625}"), "\u{FE91}\u{FEFA}");
    }

    #[test]
    fn test_salam() {
        // SEEN LAM ALEF MEEM: meem follows the non-connecting alef
        assert_eq!(
            shape("\u{0633}\u{0644}\u{0627}\u{0645}"),
            "\u{FEB3}\u{FEFC}\u{FEE1}"
        );
    }

    #[test]
    fn test_allah() {
        // ALEF LAM LAM HEH
        assert_eq!(
            shape("\u{0627}\u{0644}\u{0644}\u{0647}"),
            "\u{FE8D}\u{FEDF}\u{FEE0}\u{FEEA}"
        );
    }

    #[test]
    fn test_ligatures_disabled() {
        let shaper = ArabicShaper::with_config(ShaperConfig::default().with_ligatures(false));
        assert_eq!(shaper.shape("\u{0644}\u{0627}"), "\u{FEDF}\u{FE8E}");
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(shape("a \u{0628}\u{062A} b"), "a \u{FE91}\u{FE96} b");
    }

    #[test]
    fn test_already_shaped_text_is_untouched() {
        let shaped = "\u{FE91}\u{FE98}\u{FE9A}";
        assert_eq!(shape(shaped), shaped);
    }

    #[test]
    fn test_marks_break_joins_by_default() {
        // BEH FATHA TEH
        assert_eq!(shape("\u{0628}\u{064E}\u{062A}"), "\u{FE8F}\u{064E}\u{FE95}");
    }

    #[test]
    fn test_transparent_marks() {
        let shaper =
            ArabicShaper::with_config(ShaperConfig::default().with_transparent_marks(true));
        assert_eq!(
            shaper.shape("\u{0628}\u{064E}\u{062A}"),
            "\u{FE91}\u{064E}\u{FE96}"
        );
    }

    #[test]
    fn test_arabic_block_scope() {
        let shaper = ArabicShaper::with_config(
            ShaperConfig::default().with_joining_scope(JoiningScope::ArabicBlock),
        );
        // The mark counts as a joining predecessor for TEH only
        assert_eq!(
            shaper.shape("\u{0628}\u{064E}\u{062A}"),
            "\u{FE8F}\u{064E}\u{FE96}"
        );
    }

    #[test]
    fn test_shape_chars() {
        let input = ['\u{0644}', '\u{0627}', ' ', '\u{0628}'];
        assert_eq!(
            ArabicShaper::new().shape_chars(&input),
            vec!['\u{FEFB}', ' ', '\u{FE8F}']
        );
    }

    #[test]
    fn test_shape_cow_borrows_plain_text() {
        let shaper = ArabicShaper::new();
        assert!(matches!(shaper.shape_cow("report"), Cow::Borrowed("report")));
        assert!(matches!(shaper.shape_cow("\u{0628}"), Cow::Owned(_)));
    }

    #[test]
    fn test_second_pass_is_stable() {
        let first = shape("\u{0627}\u{0644}\u{062D}\u{0645}\u{062F} \u{0644}\u{0644}\u{0647}");
        assert_eq!(shape(&first), first);
    }
}
