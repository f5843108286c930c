//! Scheme tables: independent vowels, consonants and dependent vowel marks of
//! one source/target pair, plus the virama glyph.
//!
//! Tables are defined in TOML. Two pairs are embedded (Harvard-Kyoto and IAST,
//! both to Devanagari); custom pairs are loaded with [`Scheme::from_toml`].

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::SchemeConfigError;

use config::{parse_scheme_toml, SchemeTables};

/// Longest token any table may contain, in characters.
pub const MAX_TOKEN_LEN: usize = 3;

pub(crate) const HK_DEVANAGARI_TOML: &str = include_str!("hk_devanagari.toml");
pub(crate) const IAST_DEVANAGARI_TOML: &str = include_str!("iast_devanagari.toml");

/// Short names accepted by [`Scheme::builtin`].
pub const BUILTIN_SCHEMES: &[&str] = &["hk", "iast"];

/// Immutable lookup tables of one transliteration scheme.
#[derive(Debug, Clone)]
pub struct Scheme {
    name: String,
    virama: String,
    vowels: HashMap<String, String>,
    consonants: HashMap<String, String>,
    marks: HashMap<String, String>,
    max_token_len: usize,
}

impl Scheme {
    /// Parse and validate a scheme from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self, SchemeConfigError> {
        parse_scheme_toml(toml_str).map(Self::from_tables)
    }

    fn from_tables(tables: SchemeTables) -> Self {
        let max_token_len = tables
            .vowels
            .keys()
            .chain(tables.consonants.keys())
            .chain(tables.marks.keys())
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(1);
        Self {
            name: tables.name,
            virama: tables.virama,
            vowels: tables.vowels.into_iter().collect(),
            consonants: tables.consonants.into_iter().collect(),
            marks: tables.marks.into_iter().collect(),
            max_token_len,
        }
    }

    /// Harvard-Kyoto → Devanagari.
    pub fn harvard_kyoto() -> &'static Scheme {
        static INSTANCE: OnceLock<Scheme> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Scheme::from_toml(HK_DEVANAGARI_TOML).expect("embedded HK scheme must be valid")
        })
    }

    /// IAST → Devanagari.
    pub fn iast() -> &'static Scheme {
        static INSTANCE: OnceLock<Scheme> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Scheme::from_toml(IAST_DEVANAGARI_TOML).expect("embedded IAST scheme must be valid")
        })
    }

    /// Look up a built-in scheme by short name (see [`BUILTIN_SCHEMES`]).
    pub fn builtin(name: &str) -> Option<&'static Scheme> {
        match name {
            "hk" => Some(Self::harvard_kyoto()),
            "iast" => Some(Self::iast()),
            _ => None,
        }
    }

    /// The built-in scheme selected by `engine.scheme` in the global settings.
    pub fn configured() -> &'static Scheme {
        Self::builtin(&crate::settings::settings().engine.scheme)
            .unwrap_or_else(Self::harvard_kyoto)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn virama(&self) -> &str {
        &self.virama
    }

    /// Longest token across the three tables, never above [`MAX_TOKEN_LEN`].
    pub fn max_token_len(&self) -> usize {
        self.max_token_len
    }

    pub fn vowel(&self, token: &str) -> Option<&str> {
        self.vowels.get(token).map(String::as_str)
    }

    pub fn consonant(&self, token: &str) -> Option<&str> {
        self.consonants.get(token).map(String::as_str)
    }

    /// Dependent form of a vowel. `Some("")` for the inherent vowel.
    pub fn vowel_mark(&self, token: &str) -> Option<&str> {
        self.marks.get(token).map(String::as_str)
    }
}

/// Embedded TOML of a built-in scheme by short name.
pub fn builtin_toml(name: &str) -> Option<&'static str> {
    match name {
        "hk" => Some(HK_DEVANAGARI_TOML),
        "iast" => Some(IAST_DEVANAGARI_TOML),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_lookup() {
        let s = Scheme::harvard_kyoto();
        assert_eq!(s.vowel("a"), Some("अ"));
        assert_eq!(s.vowel("ai"), Some("ऐ"));
        assert_eq!(s.vowel("lRR"), Some("ॡ"));
        assert_eq!(s.vowel("k"), None);
    }

    #[test]
    fn test_consonant_lookup() {
        let s = Scheme::harvard_kyoto();
        assert_eq!(s.consonant("k"), Some("क"));
        assert_eq!(s.consonant("kh"), Some("ख"));
        assert_eq!(s.consonant("T"), Some("ट"));
        assert_eq!(s.consonant("t"), Some("त"));
        assert_eq!(s.consonant("."), Some("।"));
        assert_eq!(s.consonant("a"), None);
    }

    #[test]
    fn test_mark_lookup() {
        let s = Scheme::harvard_kyoto();
        assert_eq!(s.vowel_mark("a"), Some(""));
        assert_eq!(s.vowel_mark("i"), Some("ि"));
        assert_eq!(s.vowel_mark("au"), Some("ौ"));
        assert_eq!(s.vowel_mark("x"), None);
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let s = Scheme::harvard_kyoto();
        assert_eq!(s.consonant("K"), None);
        assert_ne!(s.vowel("a"), s.vowel("A"));
    }

    #[test]
    fn test_virama_and_name() {
        let s = Scheme::harvard_kyoto();
        assert_eq!(s.virama(), "\u{094D}");
        assert_eq!(s.name(), "hk-devanagari");
        assert_eq!(s.max_token_len(), 3);
    }

    #[test]
    fn test_vowel_and_mark_keys_agree() {
        for name in BUILTIN_SCHEMES {
            let s = Scheme::builtin(name).unwrap();
            assert_eq!(s.vowels.len(), s.marks.len());
            for token in s.vowels.keys() {
                assert!(s.marks.contains_key(token), "{name}: no mark for {token}");
                assert!(!s.consonants.contains_key(token), "{name}: {token} ambiguous");
            }
        }
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(Scheme::builtin("hk").unwrap().name(), "hk-devanagari");
        assert_eq!(Scheme::builtin("iast").unwrap().name(), "iast-devanagari");
        assert!(Scheme::builtin("itrans").is_none());
        assert!(builtin_toml("iast").is_some());
    }

    #[test]
    fn test_iast_lookup() {
        let s = Scheme::iast();
        assert_eq!(s.vowel("\u{0101}"), Some("आ"));
        assert_eq!(s.consonant("\u{1E6D}h"), Some("ठ"));
        assert_eq!(s.vowel_mark("\u{1E5B}"), Some("ृ"));
        assert_eq!(s.max_token_len(), 2);
    }

    #[test]
    fn test_custom_scheme_max_len() {
        let toml = r#"
[scheme]
name = "tiny"
virama = "~"

[vowels]
a = "A"

[consonants]
k = "K"

[marks]
a = ""
"#;
        let s = Scheme::from_toml(toml).unwrap();
        assert_eq!(s.max_token_len(), 1);
        assert_eq!(s.virama(), "~");
    }
}
