// Alphabet symbols, case convention and word validation

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Error returned when a string cannot be stored as a word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    /// The word has no symbols at all.
    #[error("empty word")]
    Empty,

    /// A character outside the alphabet was found.
    #[error("invalid symbol {ch:?} at position {position}")]
    InvalidSymbol { ch: char, position: usize },
}

/// Case used when rendering stored symbols back into text.
///
/// Input is accepted in either case; the convention only decides how
/// enumerated words and suggestions are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    /// `a`..`z`
    #[default]
    Lower,
    /// `A`..`Z`
    Upper,
}

impl LetterCase {
    fn base(self) -> u8 {
        match self {
            LetterCase::Lower => b'a',
            LetterCase::Upper => b'A',
        }
    }
}

/// A single alphabet symbol, stored as its position in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Map a character to its symbol.
    ///
    /// Both `a`..`z` and `A`..`Z` are accepted and fold into the same
    /// symbol. Anything else yields `None`.
    pub fn from_char(c: char) -> Option<Symbol> {
        if c.is_ascii_lowercase() {
            Some(Symbol(c as u8 - b'a'))
        } else if c.is_ascii_uppercase() {
            Some(Symbol(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Build a symbol from its alphabet index. Returns `None` when
    /// `index >= ALPHABET_SIZE`.
    pub fn from_index(index: usize) -> Option<Symbol> {
        u8::try_from(index)
            .ok()
            .filter(|&i| usize::from(i) < ALPHABET_SIZE)
            .map(Symbol)
    }

    /// Position of the symbol in alphabet order (0..26).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Render the symbol in the given case.
    pub fn to_char(self, case: LetterCase) -> char {
        char::from(case.base() + self.0)
    }
}

/// Validate a whole word and convert it to symbols.
pub fn symbols(word: &str) -> Result<Vec<Symbol>, AlphabetError> {
    if word.is_empty() {
        return Err(AlphabetError::Empty);
    }
    word.chars()
        .enumerate()
        .map(|(position, ch)| {
            Symbol::from_char(ch).ok_or(AlphabetError::InvalidSymbol { ch, position })
        })
        .collect()
}
