//! Static shaping tables
//!
//! Three read-only tables drive the shaper:
//!
//! - the letter-form table, mapping each base letter to its presentation forms
//!   ordered `[isolated, final, initial, medial]` (right-joining letters carry
//!   only the first two, hamza only the first);
//! - the non-connecting set, letters that never join to the letter after them;
//! - the lam-alef ligature table, keyed by the alef variant that follows lam.
//!
//! The tables are built once on first use and shared by every shaper.

use crate::PositionalForm;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Arabic letter lam
pub const LAM: char = '\u{0644}';
/// Arabic letter alef
pub const ALEF: char = '\u{0627}';
/// Alef with madda above
pub const ALEF_MADDA: char = '\u{0622}';
/// Alef with hamza above
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
/// Alef with hamza below
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';

// Presentation Forms-B, ordered isolated, final, initial, medial
static LETTER_FORMS: [(char, &[char]); 36] = [
    ('\u{0621}', &['\u{FE80}']),                                     // Hamza
    ('\u{0622}', &['\u{FE81}', '\u{FE82}']),                         // Alef with madda
    ('\u{0623}', &['\u{FE83}', '\u{FE84}']),                         // Alef with hamza above
    ('\u{0624}', &['\u{FE85}', '\u{FE86}']),                         // Waw with hamza
    ('\u{0625}', &['\u{FE87}', '\u{FE88}']),                         // Alef with hamza below
    ('\u{0626}', &['\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}']), // Yeh with hamza
    ('\u{0627}', &['\u{FE8D}', '\u{FE8E}']),                         // Alef
    ('\u{0628}', &['\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}']), // Beh
    ('\u{0629}', &['\u{FE93}', '\u{FE94}']),                         // Teh marbuta
    ('\u{062A}', &['\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}']), // Teh
    ('\u{062B}', &['\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}']), // Theh
    ('\u{062C}', &['\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}']), // Jeem
    ('\u{062D}', &['\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}']), // Hah
    ('\u{062E}', &['\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}']), // Khah
    ('\u{062F}', &['\u{FEA9}', '\u{FEAA}']),                         // Dal
    ('\u{0630}', &['\u{FEAB}', '\u{FEAC}']),                         // Thal
    ('\u{0631}', &['\u{FEAD}', '\u{FEAE}']),                         // Reh
    ('\u{0632}', &['\u{FEAF}', '\u{FEB0}']),                         // Zain
    ('\u{0633}', &['\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}']), // Seen
    ('\u{0634}', &['\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}']), // Sheen
    ('\u{0635}', &['\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}']), // Sad
    ('\u{0636}', &['\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}']), // Dad
    ('\u{0637}', &['\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}']), // Tah
    ('\u{0638}', &['\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}']), // Zah
    ('\u{0639}', &['\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}']), // Ain
    ('\u{063A}', &['\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}']), // Ghain
    ('\u{0641}', &['\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}']), // Feh
    ('\u{0642}', &['\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}']), // Qaf
    ('\u{0643}', &['\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}']), // Kaf
    ('\u{0644}', &['\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}']), // Lam
    ('\u{0645}', &['\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}']), // Meem
    ('\u{0646}', &['\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}']), // Noon
    ('\u{0647}', &['\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}']), // Heh
    ('\u{0648}', &['\u{FEED}', '\u{FEEE}']),                         // Waw
    ('\u{0649}', &['\u{FEEF}', '\u{FEF0}']),                         // Alef maksura
    ('\u{064A}', &['\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}']), // Yeh
];

static NON_CONNECTING: [char; 13] = [
    '\u{0621}', // Hamza
    '\u{0622}', // Alef with madda
    '\u{0623}', // Alef with hamza above
    '\u{0624}', // Waw with hamza
    '\u{0625}', // Alef with hamza below
    '\u{0627}', // Alef
    '\u{0629}', // Teh marbuta
    '\u{062F}', // Dal
    '\u{0630}', // Thal
    '\u{0631}', // Reh
    '\u{0632}', // Zain
    '\u{0648}', // Waw
    '\u{0649}', // Alef maksura
];

// Lam followed by the keyed alef variant: (isolated, final)
static LAM_ALEF: [(char, LamAlef); 4] = [
    (ALEF_MADDA, LamAlef::new('\u{FEF5}', '\u{FEF6}')),
    (ALEF_HAMZA_ABOVE, LamAlef::new('\u{FEF7}', '\u{FEF8}')),
    (ALEF_HAMZA_BELOW, LamAlef::new('\u{FEF9}', '\u{FEFA}')),
    (ALEF, LamAlef::new('\u{FEFB}', '\u{FEFC}')),
];

/// Presentation forms of one base letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterForms(&'static [char]);

impl LetterForms {
    /// Number of stored forms (1, 2 or 4)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; every table entry has at least its isolated form
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The isolated form
    pub fn isolated(&self) -> char {
        self.0[0]
    }

    /// Whether the letter has a glyph that connects to a letter before it
    pub fn accepts_join_from_previous(&self) -> bool {
        self.0.len() > 1
    }

    /// All stored forms in table order
    pub fn as_slice(&self) -> &'static [char] {
        self.0
    }

    /// Resolve a positional form to a presentation code point.
    ///
    /// Forms beyond the stored list fall back to the last stored entry.
    /// Right-joining letters (two entries) show their isolated glyph in
    /// initial position, matching the Unicode presentation-form inventory.
    pub fn get(&self, form: PositionalForm) -> char {
        let index = match (self.0.len(), form) {
            (2, PositionalForm::Initial) => 0,
            (len, form) => form.index().min(len - 1),
        };
        self.0[index]
    }
}

/// The two glyphs of one lam-alef ligature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LamAlef {
    /// Used when nothing joins into the lam
    pub isolated: char,
    /// Used when the letter before the lam joins into it
    pub final_form: char,
}

impl LamAlef {
    const fn new(isolated: char, final_form: char) -> Self {
        Self { isolated, final_form }
    }

    /// Pick the sub-form for the given previous-join state
    pub fn select(&self, prev_joins: bool) -> char {
        if prev_joins {
            self.final_form
        } else {
            self.isolated
        }
    }
}

/// Lookup structures built from the static tables
#[derive(Debug)]
pub struct ShapingTables {
    letters: HashMap<char, LetterForms>,
    non_connecting: HashSet<char>,
    lam_alef: HashMap<char, LamAlef>,
}

impl ShapingTables {
    fn build() -> Self {
        Self {
            letters: LETTER_FORMS
                .iter()
                .map(|&(base, forms)| (base, LetterForms(forms)))
                .collect(),
            non_connecting: NON_CONNECTING.iter().copied().collect(),
            lam_alef: LAM_ALEF.iter().copied().collect(),
        }
    }

    /// Presentation forms for a base letter
    pub fn forms(&self, c: char) -> Option<LetterForms> {
        self.letters.get(&c).copied()
    }

    /// Whether the character is one of the shapeable base letters
    pub fn is_letter(&self, c: char) -> bool {
        self.letters.contains_key(&c)
    }

    /// Whether the letter never joins to the letter after it
    pub fn is_non_connecting(&self, c: char) -> bool {
        self.non_connecting.contains(&c)
    }

    /// Ligature formed by lam followed by `alef`
    pub fn lam_alef(&self, alef: char) -> Option<LamAlef> {
        self.lam_alef.get(&alef).copied()
    }

    /// Number of shapeable base letters
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// Iterate over the shapeable base letters in no particular order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.keys().copied()
    }
}

/// Shared shaping tables, built on first use
pub fn tables() -> &'static ShapingTables {
    static TABLES: OnceLock<ShapingTables> = OnceLock::new();
    TABLES.get_or_init(ShapingTables::build)
}
