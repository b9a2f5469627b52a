//! Arabic script classification
//!
//! Closed code-point ranges used to decide which characters the shaper looks
//! at and which it passes through untouched.

use crate::tables;
use std::ops::RangeInclusive;

/// Arabic, Arabic Presentation Forms-A and Arabic Presentation Forms-B
pub const ARABIC_RANGES: [RangeInclusive<char>; 3] = [
    '\u{0600}'..='\u{06FF}',
    '\u{FB50}'..='\u{FDFF}',
    '\u{FE70}'..='\u{FEFF}',
];

/// Check if a character lies in one of the Arabic ranges
#[inline]
pub fn is_arabic(c: char) -> bool {
    ARABIC_RANGES.iter().any(|range| range.contains(&c))
}

/// Check if a character is an already-shaped presentation form
#[inline]
pub fn is_presentation_form(c: char) -> bool {
    ARABIC_RANGES[1..].iter().any(|range| range.contains(&c))
}

/// Check if a character is an Arabic combining mark.
///
/// Marks sit on top of a letter and do not take part in joining.
pub fn is_transparent_mark(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}' | // Honorific and Quranic signs
        '\u{064B}'..='\u{065F}' | // Harakat, shadda, sukun
        '\u{0670}' |              // Superscript alef
        '\u{06D6}'..='\u{06DC}' | // Small high ligatures
        '\u{06DF}'..='\u{06E4}' |
        '\u{06E7}'..='\u{06E8}' |
        '\u{06EA}'..='\u{06ED}'
    )
}

/// Check if text contains any character from the Arabic ranges
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic)
}

/// Check if text contains a letter the shaper would replace
pub fn contains_shapeable(text: &str) -> bool {
    let tables = tables::tables();
    text.chars().any(|c| tables.is_letter(c))
}
