// Word-structure violations and the error report type

// ---------------------------------------------------------------------------
// Violation
// ---------------------------------------------------------------------------

/// The rule that rejected a word.
///
/// Codes are stable and start at 1; 0 is reserved for "no error".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Violation {
    EmptyWord = 1,
    LoneVowelAm = 2,
    SingleCharacter = 3,
    NonLaoWord = 4,
    BareConsonantPair = 5,
    RepeatedCharacter = 6,
    MisplacedLeadingVowel = 7,
    TopVowelWithoutConsonant = 8,
    MisplacedToneMark = 9,
    DiacriticWithoutConsonant = 10,
    VowelIaWithoutFinal = 11,
    VowelAWithoutConsonant = 12,
    AdjacentVowels = 13,
    DoubledSign = 14,
    StackedToneMarks = 15,
    MisplacedVowelAaOrIa = 16,
    NoConsonant = 17,
    TooManyConsonants = 18,
}

const ALL_VIOLATIONS: [Violation; 18] = [
    Violation::EmptyWord,
    Violation::LoneVowelAm,
    Violation::SingleCharacter,
    Violation::NonLaoWord,
    Violation::BareConsonantPair,
    Violation::RepeatedCharacter,
    Violation::MisplacedLeadingVowel,
    Violation::TopVowelWithoutConsonant,
    Violation::MisplacedToneMark,
    Violation::DiacriticWithoutConsonant,
    Violation::VowelIaWithoutFinal,
    Violation::VowelAWithoutConsonant,
    Violation::AdjacentVowels,
    Violation::DoubledSign,
    Violation::StackedToneMarks,
    Violation::MisplacedVowelAaOrIa,
    Violation::NoConsonant,
    Violation::TooManyConsonants,
];

impl Violation {
    /// Numeric error code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a violation by its numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        ALL_VIOLATIONS.iter().copied().find(|v| v.code() == code)
    }

    /// Short English description.
    pub fn description(self) -> &'static str {
        match self {
            Violation::EmptyWord => "empty word",
            Violation::LoneVowelAm => "vowel sign AM without a consonant",
            Violation::SingleCharacter => "single character cannot stand alone",
            Violation::NonLaoWord => "word is not Lao text",
            Violation::BareConsonantPair => "two consonants without a vowel",
            Violation::RepeatedCharacter => "same character repeated",
            Violation::MisplacedLeadingVowel => "leading vowel in wrong position",
            Violation::TopVowelWithoutConsonant => "upper vowel not preceded by a consonant",
            Violation::MisplacedToneMark => "tone mark in wrong position",
            Violation::DiacriticWithoutConsonant => "vowel sign not preceded by a consonant",
            Violation::VowelIaWithoutFinal => "vowel IA not followed by a consonant",
            Violation::VowelAWithoutConsonant => "vowel A or AA without a nearby consonant",
            Violation::AdjacentVowels => "two vowel signs next to each other",
            Violation::DoubledSign => "vowel or mark written twice",
            Violation::StackedToneMarks => "two tone marks next to each other",
            Violation::MisplacedVowelAaOrIa => "vowel AA or IA in wrong context",
            Violation::NoConsonant => "word has no consonant",
            Violation::TooManyConsonants => "word has too many consonants",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

// ---------------------------------------------------------------------------
// GrammarError
// ---------------------------------------------------------------------------

/// An incorrect span found while checking text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    /// Violation code. 0 means no error was found.
    pub error_code: i32,

    /// Start position of the span (character offset).
    pub start_pos: usize,

    /// Length of the span in characters.
    pub error_len: usize,
}

impl GrammarError {
    pub fn new(violation: Violation, start_pos: usize, error_len: usize) -> Self {
        Self {
            error_code: violation.code(),
            start_pos,
            error_len,
        }
    }

    /// The violation behind this error, if the code is known.
    pub fn violation(&self) -> Option<Violation> {
        Violation::from_code(self.error_code)
    }

    /// Description of the error, or an empty string for unknown codes.
    pub fn short_description(&self) -> &'static str {
        self.violation().map(Violation::description).unwrap_or("")
    }
}

impl Default for GrammarError {
    /// Default grammar error with error_code 0 (no error).
    fn default() -> Self {
        Self {
            error_code: 0,
            start_pos: 0,
            error_len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dense_and_unique() {
        for (i, v) in ALL_VIOLATIONS.iter().enumerate() {
            assert_eq!(v.code(), i as i32 + 1);
            assert_eq!(Violation::from_code(v.code()), Some(*v));
        }
        assert_eq!(Violation::from_code(0), None);
        assert_eq!(Violation::from_code(19), None);
    }

    #[test]
    fn new_error() {
        let err = GrammarError::new(Violation::BareConsonantPair, 5, 2);
        assert_eq!(err.error_code, 5);
        assert_eq!(err.start_pos, 5);
        assert_eq!(err.error_len, 2);
        assert_eq!(err.violation(), Some(Violation::BareConsonantPair));
        assert_eq!(err.short_description(), "two consonants without a vowel");
    }

    #[test]
    fn default_error() {
        let err = GrammarError::default();
        assert_eq!(err.error_code, 0);
        assert_eq!(err.violation(), None);
        assert_eq!(err.short_description(), "");
    }

    #[test]
    fn display_uses_description() {
        assert_eq!(Violation::NoConsonant.to_string(), "word has no consonant");
    }
}
