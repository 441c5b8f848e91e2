// Lao character classification
//
// Every Lao code point (U+0E80..=U+0EFF) maps to a bitmask in a fixed
// 128-entry table built at compile time. Characters outside the block are
// classified without touching the table.

// ---------------------------------------------------------------------------
// Code point constants
// ---------------------------------------------------------------------------

/// First code point of the Lao Unicode block.
pub const LAO_BLOCK_START: u32 = 0x0E80;

/// Last code point of the Lao Unicode block.
pub const LAO_BLOCK_END: u32 = 0x0EFF;

/// The only character treated as a space. Other whitespace is non-Lao text.
pub const SPACE: char = ' ';

/// ZERO WIDTH SPACE, stripped from input before segmentation.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// ໆ LAO KO LA (Mai Yamok), the repetition mark.
pub const MAI_YAMOK: char = '\u{0EC6}';

/// ເ LAO VOWEL SIGN E
pub const VOWEL_E: char = '\u{0EC0}';

/// ໃ LAO VOWEL SIGN AY
pub const VOWEL_AY: char = '\u{0EC3}';

/// ັ LAO VOWEL SIGN MAI KAN
pub const MAI_KAN: char = '\u{0EB1}';

/// ຳ LAO VOWEL SIGN AM
pub const VOWEL_AM: char = '\u{0EB3}';

/// ຫ LAO LETTER HO SUNG
pub const HO_SUNG: char = '\u{0EAB}';

/// ວ LAO LETTER WO
pub const WO: char = '\u{0EA7}';

/// ອ LAO LETTER O
pub const LETTER_O: char = '\u{0EAD}';

/// ຣ LAO LETTER LO LING
pub const LO_LING: char = '\u{0EA3}';

/// The 27 base consonants followed by the two precomposed aspirates ໜ and ໝ.
const CONSONANTS: [char; 29] = [
    'ກ', 'ຂ', 'ຄ', 'ງ', 'ຈ', 'ສ', 'ຊ', 'ຍ', 'ດ', 'ຕ', 'ຖ', 'ທ', 'ນ', 'ບ', 'ປ', 'ຜ', 'ຝ', 'ພ',
    'ຟ', 'ມ', 'ຢ', 'ຣ', 'ລ', 'ວ', 'ຫ', 'ອ', 'ຮ', 'ໜ', 'ໝ',
];

/// Leading vowels that open a new word during segmentation. ໃ is not one.
const WORD_OPENING_VOWELS: [char; 4] = ['ເ', 'ແ', 'ໂ', 'ໄ'];

/// All five vowels written before their consonant.
const LEADING_VOWELS: [char; 5] = ['ເ', 'ແ', 'ໂ', 'ໄ', 'ໃ'];

/// Vowels, tone marks and diacritics that attach to a preceding consonant.
const MIDDLE_CHARS: [char; 19] = [
    '\u{0EB0}', // ະ
    '\u{0EB2}', // າ
    '\u{0EB4}', // ິ
    '\u{0EB5}', // ີ
    '\u{0EB6}', // ຶ
    '\u{0EB7}', // ື
    '\u{0EB8}', // ຸ
    '\u{0EB9}', // ູ
    '\u{0ECD}', // ໍ
    '\u{0EB3}', // ຳ
    '\u{0EC8}', // ່
    '\u{0EC9}', // ້
    '\u{0ECA}', // ໊
    '\u{0ECB}', // ໋
    '\u{0EBC}', // ຼ
    '\u{0ECC}', // ໌
    '\u{0EBD}', // ຽ
    '\u{0EB1}', // ັ
    '\u{0EBB}', // ົ
];

/// Consonants that may follow ຫ to form a digraph.
const DIGRAPH_FOLLOWERS: [char; 5] = ['ງ', 'ຍ', 'ລ', 'ວ', 'ຣ'];

/// Consonants that may close a syllable.
const FINAL_CONSONANTS: [char; 8] = ['ກ', 'ງ', 'ຍ', 'ດ', 'ນ', 'ບ', 'ມ', 'ວ'];

// ---------------------------------------------------------------------------
// Lookup table
// ---------------------------------------------------------------------------

/// Bit flags stored per Lao code point.
pub mod flags {
    pub const CONSONANT: u8 = 1 << 0;
    pub const WORD_OPENING_VOWEL: u8 = 1 << 1;
    pub const LEADING_VOWEL: u8 = 1 << 2;
    pub const MIDDLE_CHAR: u8 = 1 << 3;
    pub const DIGRAPH_FOLLOWER: u8 = 1 << 4;
    pub const MAI_YAMOK: u8 = 1 << 5;
    pub const FINAL_CONSONANT: u8 = 1 << 6;
}

const fn mark(mut table: [u8; 128], chars: &[char], flag: u8) -> [u8; 128] {
    let mut i = 0;
    while i < chars.len() {
        let offset = (chars[i] as u32 - LAO_BLOCK_START) as usize;
        table[offset] |= flag;
        i += 1;
    }
    table
}

const fn build_table() -> [u8; 128] {
    let table = [0u8; 128];
    let table = mark(table, &CONSONANTS, flags::CONSONANT);
    let table = mark(table, &WORD_OPENING_VOWELS, flags::WORD_OPENING_VOWEL);
    let table = mark(table, &LEADING_VOWELS, flags::LEADING_VOWEL);
    let table = mark(table, &MIDDLE_CHARS, flags::MIDDLE_CHAR);
    let table = mark(table, &DIGRAPH_FOLLOWERS, flags::DIGRAPH_FOLLOWER);
    let table = mark(table, &[MAI_YAMOK], flags::MAI_YAMOK);
    mark(table, &FINAL_CONSONANTS, flags::FINAL_CONSONANT)
}

static CHAR_TABLE: [u8; 128] = build_table();

/// Returns the flag bits for a character, or 0 outside the Lao block.
#[inline]
pub fn char_flags(c: char) -> u8 {
    let cp = c as u32;
    if (LAO_BLOCK_START..=LAO_BLOCK_END).contains(&cp) {
        CHAR_TABLE[(cp - LAO_BLOCK_START) as usize]
    } else {
        0
    }
}

#[inline]
fn has_flag(c: char, flag: u8) -> bool {
    char_flags(c) & flag != 0
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Primary category of a single character.
///
/// Digraph followers (ງ ຍ ລ ວ ຣ) are consonants first; use
/// [`is_digraph_follower`] for the overlapping membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharCategory {
    /// A Lao consonant, including ໜ and ໝ.
    Consonant,
    /// One of ເ ແ ໂ ໃ ໄ.
    LeadingVowel,
    /// A vowel, tone mark or diacritic following a consonant.
    MiddleChar,
    /// ໆ, always segmented alone.
    MaiYamok,
    /// U+0020.
    Space,
    /// A Lao code point outside every set above (digits, reserved, ...).
    OtherLao,
    /// Anything outside U+0E80..=U+0EFF.
    NonLao,
}

/// Classify one character.
pub fn classify(c: char) -> CharCategory {
    if c == SPACE {
        return CharCategory::Space;
    }
    if !is_lao(c) {
        return CharCategory::NonLao;
    }
    let bits = char_flags(c);
    if bits & flags::CONSONANT != 0 {
        CharCategory::Consonant
    } else if bits & flags::LEADING_VOWEL != 0 {
        CharCategory::LeadingVowel
    } else if bits & flags::MIDDLE_CHAR != 0 {
        CharCategory::MiddleChar
    } else if bits & flags::MAI_YAMOK != 0 {
        CharCategory::MaiYamok
    } else {
        CharCategory::OtherLao
    }
}

/// Check whether a character lies in the Lao block U+0E80..=U+0EFF.
#[inline]
pub fn is_lao(c: char) -> bool {
    (LAO_BLOCK_START..=LAO_BLOCK_END).contains(&(c as u32))
}

#[inline]
pub fn is_consonant(c: char) -> bool {
    has_flag(c, flags::CONSONANT)
}

/// Leading vowels that start a new segment (ເ ແ ໂ ໄ).
#[inline]
pub fn is_word_opening_vowel(c: char) -> bool {
    has_flag(c, flags::WORD_OPENING_VOWEL)
}

/// All leading vowels (ເ ແ ໂ ໃ ໄ).
#[inline]
pub fn is_leading_vowel(c: char) -> bool {
    has_flag(c, flags::LEADING_VOWEL)
}

#[inline]
pub fn is_middle_char(c: char) -> bool {
    has_flag(c, flags::MIDDLE_CHAR)
}

#[inline]
pub fn is_digraph_follower(c: char) -> bool {
    has_flag(c, flags::DIGRAPH_FOLLOWER)
}

#[inline]
pub fn is_final_consonant(c: char) -> bool {
    has_flag(c, flags::FINAL_CONSONANT)
}

/// ວ and ອ, which double as vowel letters after another consonant.
#[inline]
pub fn is_vowel_carrier(c: char) -> bool {
    c == WO || c == LETTER_O
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_counts_match_sets() {
        let count = |flag: u8| CHAR_TABLE.iter().filter(|&&b| b & flag != 0).count();
        assert_eq!(count(flags::CONSONANT), 29);
        assert_eq!(count(flags::WORD_OPENING_VOWEL), 4);
        assert_eq!(count(flags::LEADING_VOWEL), 5);
        assert_eq!(count(flags::MIDDLE_CHAR), 19);
        assert_eq!(count(flags::DIGRAPH_FOLLOWER), 5);
        assert_eq!(count(flags::MAI_YAMOK), 1);
        assert_eq!(count(flags::FINAL_CONSONANT), 8);
    }

    #[test]
    fn classify_consonants() {
        assert_eq!(classify('ກ'), CharCategory::Consonant);
        assert_eq!(classify('ຮ'), CharCategory::Consonant);
        assert_eq!(classify('ໜ'), CharCategory::Consonant);
        assert_eq!(classify('ໝ'), CharCategory::Consonant);
        // Digraph followers are still consonants
        assert_eq!(classify('ລ'), CharCategory::Consonant);
        assert!(is_digraph_follower('ລ'));
        assert!(!is_digraph_follower('ກ'));
    }

    #[test]
    fn classify_vowels_and_marks() {
        assert_eq!(classify('ເ'), CharCategory::LeadingVowel);
        assert_eq!(classify('ໃ'), CharCategory::LeadingVowel);
        assert_eq!(classify('າ'), CharCategory::MiddleChar);
        assert_eq!(classify('\u{0EC9}'), CharCategory::MiddleChar); // ້
        assert_eq!(classify(VOWEL_AM), CharCategory::MiddleChar);
        assert_eq!(classify(MAI_YAMOK), CharCategory::MaiYamok);
    }

    #[test]
    fn classify_outside_sets() {
        assert_eq!(classify(' '), CharCategory::Space);
        assert_eq!(classify('a'), CharCategory::NonLao);
        assert_eq!(classify('\n'), CharCategory::NonLao);
        assert_eq!(classify('\u{0ED1}'), CharCategory::OtherLao); // ໑
    }

    #[test]
    fn opening_vowels_exclude_ay() {
        assert!(is_word_opening_vowel('ເ'));
        assert!(is_word_opening_vowel('ໄ'));
        assert!(!is_word_opening_vowel(VOWEL_AY));
        assert!(is_leading_vowel(VOWEL_AY));
    }

    #[test]
    fn lao_block_bounds() {
        assert!(is_lao('\u{0E80}'));
        assert!(is_lao('\u{0EFF}'));
        assert!(!is_lao('\u{0E7F}'));
        assert!(!is_lao('\u{0F00}'));
        assert_eq!(char_flags('x'), 0);
    }

    #[test]
    fn finals_and_carriers() {
        assert!(is_final_consonant('ດ'));
        assert!(is_final_consonant('ວ'));
        assert!(!is_final_consonant('ຂ'));
        assert!(is_vowel_carrier('ວ'));
        assert!(is_vowel_carrier('ອ'));
        assert!(!is_vowel_carrier('ລ'));
    }
}
