// Segmentation output types

use crate::enums::SpanKind;

// ---------------------------------------------------------------------------
// WordSpan
// ---------------------------------------------------------------------------

/// A contiguous piece of segmented text.
///
/// Indices count Unicode scalar values in the preprocessed input (zero width
/// spaces removed) and are inclusive on both ends, so a one-character span
/// has `start_index == end_index`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordSpan {
    /// The span's characters.
    pub text: String,

    /// Position of the first character.
    pub start_index: usize,

    /// Position of the last character.
    pub end_index: usize,
}

impl WordSpan {
    /// Create a span from its text and start position.
    ///
    /// `text` must not be empty.
    pub fn new(text: impl Into<String>, start_index: usize) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "spans are never empty");
        let len = text.chars().count();
        Self {
            text,
            start_index,
            end_index: start_index + len.saturating_sub(1),
        }
    }

    /// Create a span from a character slice.
    pub fn from_chars(chars: &[char], start_index: usize) -> Self {
        Self::new(chars.iter().collect::<String>(), start_index)
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end_index + 1 - self.start_index
    }

    /// Spans always cover at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Kind of this span, decided by its first character.
    pub fn kind(&self) -> SpanKind {
        self.text
            .chars()
            .next()
            .map(SpanKind::of_first_char)
            .unwrap_or(SpanKind::NonLao)
    }
}

// ---------------------------------------------------------------------------
// GrammarCheckResult
// ---------------------------------------------------------------------------

/// A span annotated with the validator's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GrammarCheckResult {
    pub span: WordSpan,

    /// Whether the span's text is a structurally correct word.
    pub grammar_correct: bool,
}

impl GrammarCheckResult {
    pub fn new(span: WordSpan, grammar_correct: bool) -> Self {
        Self {
            span,
            grammar_correct,
        }
    }

    pub fn word(&self) -> &str {
        &self.span.text
    }

    pub fn start_index(&self) -> usize {
        self.span.start_index
    }

    pub fn end_index(&self) -> usize {
        self.span.end_index
    }
}
