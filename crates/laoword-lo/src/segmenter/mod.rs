// Lao word segmentation
//
// A single left-to-right pass over the preprocessed text. The scanner keeps
// the word being built in `buffer` and decides, one character at a time,
// whether the character extends it or starts a new span. Looking back at most
// two buffered characters and ahead one raw character is enough for every
// decision, so segmentation is linear in the input length.

use laoword_core::character::{
    HO_SUNG, LETTER_O, LO_LING, MAI_KAN, MAI_YAMOK, SPACE, VOWEL_E, WO, ZERO_WIDTH_SPACE,
    is_consonant, is_digraph_follower, is_lao, is_middle_char, is_word_opening_vowel,
};
use laoword_core::span::WordSpan;

// ============================================================================
// Public API
// ============================================================================

/// Segment text into ordered, contiguous word spans.
///
/// Zero width spaces are removed first; span indices refer to the remaining
/// characters. The spans' texts concatenated in order give back that
/// stripped text exactly. Empty input yields no spans.
pub fn segment(text: &str) -> Vec<WordSpan> {
    let chars = preprocess(text);
    segment_chars(&chars)
}

/// Remove every zero width space, returning the characters that span
/// indices are measured against.
pub fn preprocess(text: &str) -> Vec<char> {
    text.chars().filter(|&c| c != ZERO_WIDTH_SPACE).collect()
}

/// Segment already preprocessed characters.
pub fn segment_chars(chars: &[char]) -> Vec<WordSpan> {
    let mut scanner = Scanner::new(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        scanner.step(i, c, chars.get(i + 1).copied());
    }
    scanner.finish()
}

// ============================================================================
// Consonant clusters
// ============================================================================

/// Two-letter onsets that stay together when a vowel follows them:
/// ກວ ຂວ ຄວ, ທຣ ປຣ ກຣ ບຣ ຟຣ, and ຫ + (ງ ຍ ລ ວ ຣ).
fn is_onset_cluster(first: char, second: char) -> bool {
    match second {
        WO if matches!(first, 'ກ' | 'ຂ' | 'ຄ') => true,
        LO_LING if matches!(first, 'ທ' | 'ປ' | 'ກ' | 'ບ' | 'ຟ') => true,
        _ => first == HO_SUNG && is_digraph_follower(second),
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Mutable state threaded through one segmentation pass.
struct Scanner {
    /// Characters of the span being built.
    buffer: Vec<char>,
    /// Index of `buffer[0]` in the input.
    buffer_start: usize,
    /// Finalized spans.
    spans: Vec<WordSpan>,
}

impl Scanner {
    fn new(text_len: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(16),
            buffer_start: 0,
            // Lao words average a little over three characters
            spans: Vec::with_capacity(text_len / 3 + 1),
        }
    }

    fn last(&self) -> Option<char> {
        self.buffer.last().copied()
    }

    fn second_to_last(&self) -> Option<char> {
        self.buffer
            .len()
            .checked_sub(2)
            .map(|j| self.buffer[j])
    }

    /// Append `c` (at input index `i`) to the buffer.
    fn push(&mut self, c: char, i: usize) {
        if self.buffer.is_empty() {
            self.buffer_start = i;
        }
        self.buffer.push(c);
    }

    fn emit(&mut self, text: String, start: usize) {
        if text.is_empty() {
            return;
        }
        let span = WordSpan::new(text, start);
        log::trace!(
            "span {:?} [{}..={}]",
            span.text,
            span.start_index,
            span.end_index
        );
        self.spans.push(span);
    }

    /// Finalize the whole buffer as a span.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text: String = self.buffer.drain(..).collect();
        let start = self.buffer_start;
        self.emit(text, start);
    }

    /// Finalize everything but the last `keep` buffered characters, which
    /// stay in the buffer as the start of the next span.
    fn flush_keeping(&mut self, keep: usize) {
        let cut = self.buffer.len().saturating_sub(keep);
        if cut == 0 {
            return;
        }
        let head: String = self.buffer.drain(..cut).collect();
        let start = self.buffer_start;
        self.emit(head, start);
        self.buffer_start = start + cut;
    }

    /// Flush the buffer and emit `c` as a one-character span.
    fn isolate(&mut self, c: char, i: usize) {
        self.flush();
        self.emit(c.to_string(), i);
    }

    fn step(&mut self, i: usize, c: char, next: Option<char>) {
        if c == SPACE {
            self.isolate(c, i);
            return;
        }

        if !is_lao(c) {
            // Non-Lao runs are never split internally
            if self.last().is_some_and(is_lao) {
                self.flush();
            }
            self.push(c, i);
            return;
        }

        if c == MAI_YAMOK {
            self.isolate(c, i);
            return;
        }

        if is_word_opening_vowel(c) {
            if !(c == VOWEL_E && self.last() == Some(VOWEL_E)) {
                self.flush();
            }
            self.push(c, i);
            return;
        }

        if self.last().is_some_and(|l| !is_lao(l)) {
            self.flush();
            self.push(c, i);
            return;
        }

        if is_middle_char(c) {
            self.middle_char(i, c);
            return;
        }

        if (c == WO || c == LETTER_O)
            && self.last().is_some_and(is_consonant)
            && next.is_some_and(|n| is_lao(n) && is_consonant(n))
        {
            // Consonant + ວ/ອ + consonant: ວ/ອ is the vowel of a new syllable
            self.flush_keeping(1);
            self.push(c, i);
            return;
        }

        self.push(c, i);
    }

    /// A vowel, tone mark or diacritic. It binds to the consonant (or
    /// onset cluster) right before it, which may pull that consonant off
    /// the previous span.
    fn middle_char(&mut self, i: usize, c: char) {
        let Some(last) = self.last() else {
            self.push(c, i);
            return;
        };
        let before_last = self.second_to_last();

        if is_middle_char(last)
            || (c == MAI_KAN && before_last.is_some_and(is_word_opening_vowel))
        {
            self.push(c, i);
            return;
        }

        if before_last.is_some_and(|first| is_onset_cluster(first, last)) {
            self.flush_keeping(2);
            self.push(c, i);
            return;
        }

        if is_consonant(last) && !before_last.is_some_and(is_word_opening_vowel) {
            self.flush_keeping(1);
        }
        self.push(c, i);
    }

    fn finish(mut self) -> Vec<WordSpan> {
        self.flush();
        self.spans.retain(|s| !s.text.is_empty());
        self.spans
    }
}

// ============================================================================
// Tests
// ============================================================================
