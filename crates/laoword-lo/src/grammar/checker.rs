// LaoGrammarChecker: segments text and validates every span.

use laoword_core::grammar_error::GrammarError;
use laoword_core::span::GrammarCheckResult;

use super::GrammarChecker;
use super::rules::{ValidatorOptions, diagnose_with};
use crate::segmenter;

/// Segment `text` and annotate every span with its verdict.
pub fn check(text: &str) -> Vec<GrammarCheckResult> {
    check_with(text, &ValidatorOptions::default())
}

/// [`check`] with explicit validator options.
pub fn check_with(text: &str, options: &ValidatorOptions) -> Vec<GrammarCheckResult> {
    segmenter::segment(text)
        .into_iter()
        .map(|span| {
            let correct = diagnose_with(&span.text, options).is_none();
            GrammarCheckResult::new(span, correct)
        })
        .collect()
}

/// Grammar checker for Lao text.
#[derive(Debug, Clone, Default)]
pub struct LaoGrammarChecker {
    options: ValidatorOptions,
}

impl LaoGrammarChecker {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ValidatorOptions) {
        self.options = options;
    }

    /// Segment and annotate using this checker's options.
    pub fn check_spans(&self, text: &str) -> Vec<GrammarCheckResult> {
        check_with(text, &self.options)
    }
}

impl GrammarChecker for LaoGrammarChecker {
    fn check(&self, text: &str) -> Vec<GrammarError> {
        segmenter::segment(text)
            .into_iter()
            .filter_map(|span| {
                diagnose_with(&span.text, &self.options)
                    .map(|v| GrammarError::new(v, span.start_index, span.len()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laoword_core::grammar_error::Violation;

    fn verdicts(text: &str) -> Vec<(String, usize, usize, bool)> {
        check(text)
            .into_iter()
            .map(|r| (r.span.text, r.span.start_index, r.span.end_index, r.grammar_correct))
            .collect()
    }

    #[test]
    fn empty_text() {
        assert!(check("").is_empty());
    }

    #[test]
    fn mixed_verdicts() {
        assert_eq!(
            verdicts("ປ ທ້ດ ລວ"),
            vec![
                ("ປ".to_string(), 0, 0, false),
                (" ".to_string(), 1, 1, true),
                ("ທ້ດ".to_string(), 2, 4, true),
                (" ".to_string(), 5, 5, true),
                ("ລວ".to_string(), 6, 7, true),
            ]
        );
    }

    #[test]
    fn consonant_pair_is_incorrect() {
        assert_eq!(verdicts("ກກ"), vec![("ກກ".to_string(), 0, 1, false)]);
    }

    #[test]
    fn tone_mark_word_is_incorrect() {
        assert_eq!(verdicts("ກ້"), vec![("ກ້".to_string(), 0, 1, false)]);
    }

    #[test]
    fn spaces_only() {
        assert_eq!(
            verdicts("   "),
            vec![
                (" ".to_string(), 0, 0, true),
                (" ".to_string(), 1, 1, true),
                (" ".to_string(), 2, 2, true),
            ]
        );
    }

    #[test]
    fn checker_reports_errors_with_positions() {
        let checker = LaoGrammarChecker::default();
        let errors = GrammarChecker::check(&checker, "ປ ທ້ດ ກກ");
        assert_eq!(
            errors,
            vec![
                GrammarError::new(Violation::SingleCharacter, 0, 1),
                GrammarError::new(Violation::BareConsonantPair, 6, 2),
            ]
        );
    }

    #[test]
    fn checker_uses_its_options() {
        let mut checker = LaoGrammarChecker::default();
        assert!(GrammarChecker::check(&checker, "hello").is_empty());
        checker.set_options(ValidatorOptions {
            accept_non_lao: false,
            ..ValidatorOptions::default()
        });
        let errors = GrammarChecker::check(&checker, "hello");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].violation(), Some(Violation::NonLaoWord));
        assert!(!checker.check_spans("hello")[0].grammar_correct);
    }
}
