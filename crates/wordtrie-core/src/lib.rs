//! Shared types for the wordtrie word index.
//!
//! - [`alphabet`] -- the 26-letter alphabet, case convention and word validation

pub mod alphabet;

pub use alphabet::{ALPHABET_SIZE, AlphabetError, LetterCase, Symbol, symbols};
