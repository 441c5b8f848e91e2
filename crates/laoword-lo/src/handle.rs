// LaoHandle: configurable entry point for segmentation and checking.
//
// The free functions in the crate root always use default options. The
// handle stores validator options so the command-line tools and the WASM
// bindings can change them by name.

use laoword_core::grammar_error::{GrammarError, Violation};
use laoword_core::span::{GrammarCheckResult, WordSpan};

use crate::grammar::GrammarChecker;
use crate::grammar::checker::LaoGrammarChecker;
use crate::grammar::rules::{ValidatorOptions, diagnose_with};
use crate::segmenter;

/// Language tags accepted by [`LaoHandle::new`].
const SUPPORTED_LANGUAGES: [&str; 2] = ["lo", "lo-LA"];

/// Error type for handle construction and configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LaoError {
    /// Unsupported language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// No option with this name exists.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The value could not be parsed for the option's type.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },
}

/// Top-level handle for Lao word segmentation and checking.
#[derive(Debug, Clone)]
pub struct LaoHandle {
    checker: LaoGrammarChecker,
}

impl LaoHandle {
    /// Create a handle for a BCP 47 language tag (`"lo"` or `"lo-LA"`).
    pub fn new(language: &str) -> Result<Self, LaoError> {
        if !SUPPORTED_LANGUAGES.contains(&language) {
            return Err(LaoError::UnsupportedLanguage(language.to_string()));
        }
        Ok(Self::with_options(ValidatorOptions::default()))
    }

    /// Create a handle with explicit validator options.
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self {
            checker: LaoGrammarChecker::new(options),
        }
    }

    pub fn options(&self) -> &ValidatorOptions {
        self.checker.options()
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Segment text into word spans.
    pub fn segment(&self, text: &str) -> Vec<WordSpan> {
        segmenter::segment(text)
    }

    /// Check whether a single word is structurally correct.
    pub fn validate(&self, word: &str) -> bool {
        self.diagnose(word).is_none()
    }

    /// The first rule a word breaks, if any.
    pub fn diagnose(&self, word: &str) -> Option<Violation> {
        diagnose_with(word, self.checker.options())
    }

    /// Segment text and annotate every span with its verdict.
    pub fn check(&self, text: &str) -> Vec<GrammarCheckResult> {
        self.checker.check_spans(text)
    }

    /// One error per incorrect span of `text`.
    pub fn grammar_errors(&self, text: &str) -> Vec<GrammarError> {
        self.checker.check(text)
    }

    /// Check text line by line.
    ///
    /// Each line (split at `\n`, trailing `\r` removed) is checked as its
    /// own paragraph. Error positions are relative to the whole text with
    /// zero width spaces removed.
    pub fn grammar_errors_from_text(&self, text: &str) -> Vec<GrammarError> {
        let chars = segmenter::preprocess(text);
        let text_len = chars.len();
        let mut result = Vec::new();
        let mut pos = 0;

        while pos < text_len {
            let nl_pos = chars[pos..]
                .iter()
                .position(|&c| c == '\n')
                .map(|p| pos + p)
                .unwrap_or(text_len);

            let para_end = if nl_pos > pos && chars[nl_pos - 1] == '\r' {
                nl_pos - 1
            } else {
                nl_pos
            };

            if para_end > pos {
                let para: String = chars[pos..para_end].iter().collect();
                let mut errors = self.checker.check(&para);
                for error in &mut errors {
                    error.start_pos += pos;
                }
                result.extend(errors);
            }

            if nl_pos >= text_len {
                break;
            }
            pos = nl_pos + 1;
        }

        result
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the maximum number of consonants allowed in one word.
    pub fn set_max_consonants(&mut self, value: usize) {
        let mut options = *self.checker.options();
        options.max_consonants = value;
        self.checker.set_options(options);
    }

    /// Set whether words starting with a non-Lao character are accepted.
    pub fn set_accept_non_lao(&mut self, value: bool) {
        let mut options = *self.checker.options();
        options.accept_non_lao = value;
        self.checker.set_options(options);
    }

    /// Set an option by name: `max_consonants` (integer) or
    /// `accept_non_lao` (`true`/`false`).
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), LaoError> {
        let invalid = || LaoError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "max_consonants" => {
                let n = value.trim().parse::<usize>().map_err(|_| invalid())?;
                self.set_max_consonants(n);
            }
            "accept_non_lao" => {
                let b = value.trim().parse::<bool>().map_err(|_| invalid())?;
                self.set_accept_non_lao(b);
            }
            _ => return Err(LaoError::UnknownOption(name.to_string())),
        }
        log::debug!("option {name} = {value}");
        Ok(())
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for LaoHandle {
    fn default() -> Self {
        Self::with_options(ValidatorOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_languages() {
        assert!(LaoHandle::new("lo").is_ok());
        assert!(LaoHandle::new("lo-LA").is_ok());
    }

    #[test]
    fn unsupported_language_returns_error() {
        match LaoHandle::new("th") {
            Err(LaoError::UnsupportedLanguage(lang)) => assert_eq!(lang, "th"),
            Err(other) => panic!("expected UnsupportedLanguage, got: {other}"),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn handle_check_matches_free_function() {
        let handle = LaoHandle::default();
        let text = "ສະບາຍດີ ກກ ໆ abc";
        assert_eq!(handle.check(text), crate::check(text));
        assert_eq!(handle.segment(text), crate::segment(text));
    }

    #[test]
    fn set_option_by_name() {
        let mut handle = LaoHandle::default();
        handle.set_option("max_consonants", "6").unwrap();
        assert_eq!(handle.options().max_consonants, 6);
        handle.set_option("accept_non_lao", "false").unwrap();
        assert!(!handle.options().accept_non_lao);
        assert!(!handle.validate("abc"));
        assert_eq!(handle.diagnose("abc"), Some(Violation::NonLaoWord));
    }

    #[test]
    fn set_option_errors() {
        let mut handle = LaoHandle::default();
        assert_eq!(
            handle.set_option("colour", "red"),
            Err(LaoError::UnknownOption("colour".to_string()))
        );
        assert_eq!(
            handle.set_option("max_consonants", "many"),
            Err(LaoError::InvalidOptionValue {
                name: "max_consonants".to_string(),
                value: "many".to_string(),
            })
        );
        assert_eq!(handle.options().max_consonants, 4);
    }

    #[test]
    fn error_messages() {
        let err = LaoError::InvalidOptionValue {
            name: "accept_non_lao".to_string(),
            value: "yes".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value \"yes\" for option accept_non_lao");
        assert_eq!(
            LaoError::UnsupportedLanguage("fi".to_string()).to_string(),
            "unsupported language: fi"
        );
    }

    #[test]
    fn grammar_errors_positions() {
        let handle = LaoHandle::default();
        let errors = handle.grammar_errors("ລາວ ກກ");
        assert_eq!(errors, vec![GrammarError::new(Violation::BareConsonantPair, 4, 2)]);
    }

    #[test]
    fn grammar_errors_from_text_offsets_lines() {
        let handle = LaoHandle::default();
        // Line 2 starts at 4: "ລາວ" is 3 characters plus \n
        let errors = handle.grammar_errors_from_text("ລາວ\nກກ\r\nປ");
        assert_eq!(
            errors,
            vec![
                GrammarError::new(Violation::BareConsonantPair, 4, 2),
                GrammarError::new(Violation::SingleCharacter, 8, 1),
            ]
        );
    }

    #[test]
    fn grammar_errors_from_text_empty_lines() {
        let handle = LaoHandle::default();
        assert!(handle.grammar_errors_from_text("\n\n").is_empty());
        assert!(handle.grammar_errors_from_text("").is_empty());
    }

    #[test]
    fn version_is_set() {
        assert!(!LaoHandle::get_version().is_empty());
    }
}
