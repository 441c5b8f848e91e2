//! Lao word segmentation and word-structure validation.
//!
//! Segmentation follows Lao syllable structure instead of a dictionary: a
//! single pass decides where each word ends from the characters around it.
//! Every segmented span can then be checked against a fixed rule table.
//!
//! ```
//! let spans = laoword_lo::segment("ປະເທດລາວ");
//! let words: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
//! assert_eq!(words, ["ປະ", "ເທດ", "ລາວ"]);
//!
//! let results = laoword_lo::check("ກກ");
//! assert!(!results[0].grammar_correct);
//! ```
//!
//! - [`segmenter`] -- splits text into contiguous word spans
//! - [`grammar`] -- validates single words and checks whole texts
//! - [`handle`] -- configurable facade used by the CLI and WASM crates

pub mod grammar;
pub mod handle;
pub mod segmenter;

pub use grammar::checker::{check, check_with};
pub use grammar::rules::{ValidatorOptions, diagnose, diagnose_with, validate};
pub use handle::{LaoError, LaoHandle};
pub use segmenter::segment;

pub use laoword_core::grammar_error::{GrammarError, Violation};
pub use laoword_core::span::{GrammarCheckResult, WordSpan};
