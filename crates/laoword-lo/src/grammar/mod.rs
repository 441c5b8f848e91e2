// Word validation and text checking

pub mod checker;
pub mod rules;

use laoword_core::grammar_error::GrammarError;

/// Trait for grammar checkers.
pub trait GrammarChecker {
    /// Check a paragraph of text.
    ///
    /// Returns one error per incorrect span, positioned in characters of the
    /// text with zero width spaces removed.
    fn check(&self, text: &str) -> Vec<GrammarError>;
}
