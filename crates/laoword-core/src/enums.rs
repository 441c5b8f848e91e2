// Shared enums

use crate::character::{MAI_YAMOK, SPACE, is_lao};

/// Kind of a segmented span, decided by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// A single U+0020.
    Space,
    /// A single ໆ.
    Repetition,
    /// A span starting with a Lao character.
    Lao,
    /// A run of characters outside the Lao block.
    NonLao,
}

impl SpanKind {
    /// Kind of a span whose text starts with `first`.
    pub fn of_first_char(first: char) -> Self {
        if first == SPACE {
            SpanKind::Space
        } else if first == MAI_YAMOK {
            SpanKind::Repetition
        } else if is_lao(first) {
            SpanKind::Lao
        } else {
            SpanKind::NonLao
        }
    }

    /// Upper-case label used by the command-line tools.
    pub fn label(self) -> &'static str {
        match self {
            SpanKind::Space => "SPACE",
            SpanKind::Repetition => "REPETITION",
            SpanKind::Lao => "LAO",
            SpanKind::NonLao => "NON_LAO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_first_char() {
        assert_eq!(SpanKind::of_first_char(' '), SpanKind::Space);
        assert_eq!(SpanKind::of_first_char('ໆ'), SpanKind::Repetition);
        assert_eq!(SpanKind::of_first_char('ກ'), SpanKind::Lao);
        assert_eq!(SpanKind::of_first_char('ເ'), SpanKind::Lao);
        assert_eq!(SpanKind::of_first_char('7'), SpanKind::NonLao);
    }

    #[test]
    fn labels() {
        assert_eq!(SpanKind::NonLao.label(), "NON_LAO");
        assert_eq!(SpanKind::Repetition.label(), "REPETITION");
    }
}
