// Word-structure rules for Lao.
//
// A word is checked in two stages. A short guard chain settles spaces,
// trivial lengths and non-Lao runs. Everything else is scanned left to
// right; each character is first matched against the rule for its own kind
// (leading vowel, upper vowel, tone mark, ...) and then against the rules
// about what may stand next to it. The first broken rule rejects the word.

use laoword_core::character::{
    MAI_YAMOK, VOWEL_AM, VOWEL_E, is_consonant, is_final_consonant, is_lao,
    is_leading_vowel, is_vowel_carrier,
};
use laoword_core::grammar_error::Violation;

/// Default upper bound on consonants in one word.
pub const DEFAULT_MAX_CONSONANTS: usize = 4;

/// Options for word validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Words with more consonants than this are rejected. Default: 4.
    pub max_consonants: usize,

    /// Accept words starting with a non-Lao character unchecked. Default: true.
    pub accept_non_lao: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_consonants: DEFAULT_MAX_CONSONANTS,
            accept_non_lao: true,
        }
    }
}

// ============================================================================
// Character sets used only by the rules
// ============================================================================

/// ິ ີ ຶ ື
fn is_upper_vowel(c: char) -> bool {
    matches!(c, '\u{0EB4}'..='\u{0EB7}')
}

/// ່ ້
fn is_low_tone_mark(c: char) -> bool {
    matches!(c, '\u{0EC8}' | '\u{0EC9}')
}

/// ໊ ໋ ໍ ໌ ົ ັ ຸ ູ ຼ
fn is_consonant_bound_sign(c: char) -> bool {
    matches!(
        c,
        '\u{0ECA}' // ໊
            | '\u{0ECB}' // ໋
            | '\u{0ECD}' // ໍ
            | '\u{0ECC}' // ໌
            | '\u{0EBB}' // ົ
            | '\u{0EB1}' // ັ
            | '\u{0EB8}' // ຸ
            | '\u{0EB9}' // ູ
            | '\u{0EBC}' // ຼ
    )
}

/// ຽ
const VOWEL_IA: char = '\u{0EBD}';

/// າ
const VOWEL_AA: char = '\u{0EB2}';

/// ະ າ
fn is_vowel_a(c: char) -> bool {
    matches!(c, '\u{0EB0}' | VOWEL_AA)
}

/// Vowel signs that may never touch each other:
/// ະ າ ິ ີ ຶ ື ຸ ູ ໍ ຼ ັ ົ
fn is_bare_vowel(c: char) -> bool {
    matches!(
        c,
        '\u{0EB0}' | '\u{0EB2}' | '\u{0EB4}'..='\u{0EB9}' | '\u{0ECD}' | '\u{0EBC}' | '\u{0EB1}'
            | '\u{0EBB}'
    )
}

/// Every vowel sign and mark counted as a vowel:
/// ະ າ ິ ີ ຶ ື ຸ ູ ໍ ຼ ໊ ັ ົ ່ ້ ໋ ໌ ຽ
fn is_vowel_sign(c: char) -> bool {
    is_bare_vowel(c) || matches!(c, '\u{0EC8}'..='\u{0ECC}' | VOWEL_IA)
}

/// ່ ້ ໋ ໌
fn is_stacking_mark(c: char) -> bool {
    matches!(c, '\u{0EC8}' | '\u{0EC9}' | '\u{0ECB}' | '\u{0ECC}')
}

/// Signs that may not come right before າ or ຽ:
/// ະ າ ິ ີ ຶ ື ຸ ູ ໍ ໊ ັ ົ ໋ ໌ ຽ
fn blocks_vowel_aa_or_ia(c: char) -> bool {
    matches!(
        c,
        '\u{0EB0}' | '\u{0EB2}' | '\u{0EB4}'..='\u{0EB9}' | '\u{0ECD}' | '\u{0ECA}' | '\u{0EB1}'
            | '\u{0EBB}' | '\u{0ECB}' | '\u{0ECC}' | VOWEL_IA
    )
}

// ============================================================================
// Letter counts
// ============================================================================

/// Consonants and vowel signs in a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts {
    pub consonants: usize,
    pub vowel_signs: usize,
}

impl LetterCounts {
    fn add(&mut self, c: char) {
        if is_consonant(c) {
            self.consonants += 1;
        }
        if is_vowel_sign(c) {
            self.vowel_signs += 1;
        }
    }
}

/// Count consonants and vowel signs the way the rule scan does.
pub fn letter_counts(word: &str) -> LetterCounts {
    let mut counts = LetterCounts::default();
    word.chars().for_each(|c| counts.add(c));
    counts
}

// ============================================================================
// Entry points
// ============================================================================

/// Check whether a word is structurally correct with default options.
pub fn validate(word: &str) -> bool {
    diagnose(word).is_none()
}

/// Find the first rule a word breaks, with default options.
pub fn diagnose(word: &str) -> Option<Violation> {
    diagnose_with(word, &ValidatorOptions::default())
}

/// Find the first rule a word breaks.
///
/// Returns `None` for a correct word.
pub fn diagnose_with(word: &str, options: &ValidatorOptions) -> Option<Violation> {
    let violation = find_violation(word, options);
    if let Some(v) = violation {
        log::debug!("rejected {word:?}: {v}");
    }
    violation
}

fn find_violation(word: &str, options: &ValidatorOptions) -> Option<Violation> {
    if word == " " {
        return None;
    }
    if word.is_empty() {
        return Some(Violation::EmptyWord);
    }

    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    // The single-character rule below rejects ຳ too; this only names why.
    if chars == [VOWEL_AM] {
        return Some(Violation::LoneVowelAm);
    }
    if len == 1 {
        return if chars[0] == MAI_YAMOK {
            None
        } else {
            Some(Violation::SingleCharacter)
        };
    }
    if !is_lao(chars[0]) {
        return if options.accept_non_lao {
            None
        } else {
            Some(Violation::NonLaoWord)
        };
    }

    if len == 2 {
        let (a, b) = (chars[0], chars[1]);
        // ວ and ອ after a consonant carry a vowel
        if is_consonant(a) && is_consonant(b) && !is_vowel_carrier(b) {
            return Some(Violation::BareConsonantPair);
        }
        // ເເ is the doubled spelling of ແ
        if a == b && a != VOWEL_E {
            return Some(Violation::RepeatedCharacter);
        }
    }
    if len == 3 && chars[0] == chars[1] && chars[1] == chars[2] {
        return Some(Violation::RepeatedCharacter);
    }

    scan(&chars, options)
}

// ============================================================================
// Character scan
// ============================================================================

/// Characters around the one being checked; `None` past either end.
#[derive(Debug, Clone, Copy)]
struct Neighbours {
    prev: Option<char>,
    prev2: Option<char>,
    prev3: Option<char>,
    next: Option<char>,
    next2: Option<char>,
}

impl Neighbours {
    fn at(chars: &[char], i: usize) -> Self {
        let back = |d: usize| i.checked_sub(d).map(|j| chars[j]);
        Self {
            prev: back(1),
            prev2: back(2),
            prev3: back(3),
            next: chars.get(i + 1).copied(),
            next2: chars.get(i + 2).copied(),
        }
    }
}

fn consonant(c: Option<char>) -> bool {
    c.is_some_and(is_consonant)
}

fn scan(chars: &[char], options: &ValidatorOptions) -> Option<Violation> {
    let mut counts = LetterCounts::default();

    for (i, &c) in chars.iter().enumerate() {
        counts.add(c);
        let around = Neighbours::at(chars, i);
        if let Some(v) = own_rule(chars, i, c, &around) {
            return Some(v);
        }
        if let Some(v) = neighbour_rule(c, &around) {
            return Some(v);
        }
    }

    if counts.consonants == 0 {
        return Some(Violation::NoConsonant);
    }
    if counts.consonants > options.max_consonants {
        return Some(Violation::TooManyConsonants);
    }
    None
}

/// The rule for the kind of character `c` is. At most one applies.
fn own_rule(chars: &[char], i: usize, c: char, n: &Neighbours) -> Option<Violation> {
    let len = chars.len();

    if is_leading_vowel(c) {
        let placed = if i == 0 {
            n.next
                .is_some_and(|next| is_consonant(next) || (c == VOWEL_E && next == VOWEL_E))
        } else {
            c == VOWEL_E && i == 1 && n.prev == Some(VOWEL_E)
        };
        return (!placed).then_some(Violation::MisplacedLeadingVowel);
    }

    if is_upper_vowel(c) {
        return (!consonant(n.prev)).then_some(Violation::TopVowelWithoutConsonant);
    }

    if is_low_tone_mark(c) {
        let misplaced = (!consonant(n.prev) && !consonant(n.prev2))
            || (len <= 2 && n.next.is_none())
            || (i == 1 && len < 3)
            || (is_leading_vowel(chars[0]) && consonant(n.next) && consonant(n.next2))
            || (len == 3
                && consonant(n.prev)
                && n.next.is_some_and(|next| is_consonant(next) && !is_final_consonant(next)));
        return misplaced.then_some(Violation::MisplacedToneMark);
    }

    if is_consonant_bound_sign(c) {
        return (!consonant(n.prev)).then_some(Violation::DiacriticWithoutConsonant);
    }

    if c == VOWEL_IA {
        return (!consonant(n.next)).then_some(Violation::VowelIaWithoutFinal);
    }

    if is_vowel_a(c) {
        let supported = consonant(n.prev) || consonant(n.prev2) || consonant(n.prev3);
        return (!supported).then_some(Violation::VowelAWithoutConsonant);
    }

    None
}

/// Rules about the characters next to `c`, checked for every character.
fn neighbour_rule(c: char, n: &Neighbours) -> Option<Violation> {
    if let Some(next) = n.next {
        if is_bare_vowel(c) && is_bare_vowel(next) {
            return Some(Violation::AdjacentVowels);
        }
        // Leading vowels are not vowel signs, so ເເ passes here
        if next == c && is_vowel_sign(c) {
            return Some(Violation::DoubledSign);
        }
        if is_stacking_mark(c) && is_stacking_mark(next) {
            return Some(Violation::StackedToneMarks);
        }
    }

    if c == VOWEL_AA || c == VOWEL_IA {
        if n.prev.is_some_and(blocks_vowel_aa_or_ia) {
            return Some(Violation::MisplacedVowelAaOrIa);
        }
        if consonant(n.next) && consonant(n.next2) {
            return Some(Violation::MisplacedVowelAaOrIa);
        }
    }

    None
}
