//! Scheme-based script transliteration.
//!
//! A [`Scheme`] holds the three lookup tables of a source/target pair and the
//! virama glyph; a [`Transliterator`] runs the greedy longest-match scan over
//! it. [`transliterate`] converts with the built-in Harvard-Kyoto →
//! Devanagari tables.

pub mod scheme;
pub mod settings;
pub mod translit;
pub mod unicode;

pub use scheme::{Scheme, SchemeConfigError, BUILTIN_SCHEMES, MAX_TOKEN_LEN};
pub use translit::{transliterate, Mark, ScanStep, Transliterator};
