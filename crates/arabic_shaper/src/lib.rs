//! Arabic Shaper - Contextual letter shaping for renderers without OpenType support
//!
//! This crate converts logical Arabic text into Unicode presentation forms so
//! that canvas and PDF back-ends which draw one code point per glyph still show
//! connected script.
//!
//! # Modules
//!
//! - `tables`: Letter-form, non-connecting and lam-alef ligature tables
//! - `script`: Arabic range and mark classification
//! - `form`: Positional forms and joining predicates
//! - `shaper`: The shaping pass itself
//! - `visual`: Bidi reordering of shaped text for left-to-right renderers
//! - `config`: Shaper configuration and persistence
//!
//! # Example
//!
//! ```rust
//! use arabic_shaper::shape;
//!
//! // BEH TEH THEH -> initial, medial, final
//! assert_eq!(shape("\u{0628}\u{062A}\u{062B}"), "\u{FE91}\u{FE98}\u{FE9A}");
//! ```

mod config;
mod error;
mod form;
mod script;
mod shaper;
pub mod tables;
pub mod visual;

pub use config::*;
pub use error::*;
pub use form::*;
pub use script::*;
pub use shaper::*;
pub use tables::{tables, LamAlef, LetterForms, ShapingTables};
pub use visual::{base_direction, reorder_visual, shape_visual, Direction};
