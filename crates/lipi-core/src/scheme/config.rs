use std::collections::BTreeMap;

use serde::Deserialize;

use super::MAX_TOKEN_LEN;

#[derive(Deserialize)]
struct SchemeFile {
    scheme: SchemeHeader,
    vowels: BTreeMap<String, String>,
    consonants: BTreeMap<String, String>,
    marks: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct SchemeHeader {
    name: String,
    virama: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("token must be 1..=3 characters in [{table}]: {token:?}")]
    TokenLength { table: &'static str, token: String },
    #[error("empty value in [{table}] for token: {token}")]
    EmptyValue { table: &'static str, token: String },
    #[error("token is both a vowel and a consonant: {0}")]
    Ambiguous(String),
    #[error("vowel without a matching mark (or mark without a vowel): {0}")]
    MarkMismatch(String),
    #[error("scheme.virama is empty")]
    EmptyVirama,
    #[error("scheme.name is empty")]
    EmptyName,
}

/// Validated tables, still sorted by token.
#[derive(Debug)]
pub(crate) struct SchemeTables {
    pub name: String,
    pub virama: String,
    pub vowels: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    pub marks: BTreeMap<String, String>,
}

/// Parse and validate a scheme definition.
pub(crate) fn parse_scheme_toml(toml_str: &str) -> Result<SchemeTables, SchemeConfigError> {
    let file: SchemeFile =
        toml::from_str(toml_str).map_err(|e| SchemeConfigError::Parse(e.to_string()))?;

    if file.scheme.name.is_empty() {
        return Err(SchemeConfigError::EmptyName);
    }
    if file.scheme.virama.is_empty() {
        return Err(SchemeConfigError::EmptyVirama);
    }

    check_table("vowels", &file.vowels, false)?;
    check_table("consonants", &file.consonants, false)?;
    // The inherent vowel's mark is the empty string.
    check_table("marks", &file.marks, true)?;

    if let Some(token) = file.vowels.keys().find(|t| file.consonants.contains_key(*t)) {
        return Err(SchemeConfigError::Ambiguous(token.clone()));
    }

    if let Some(token) = file
        .vowels
        .keys()
        .find(|t| !file.marks.contains_key(*t))
        .or_else(|| file.marks.keys().find(|t| !file.vowels.contains_key(*t)))
    {
        return Err(SchemeConfigError::MarkMismatch(token.clone()));
    }

    Ok(SchemeTables {
        name: file.scheme.name,
        virama: file.scheme.virama,
        vowels: file.vowels,
        consonants: file.consonants,
        marks: file.marks,
    })
}

fn check_table(
    table: &'static str,
    map: &BTreeMap<String, String>,
    allow_empty_values: bool,
) -> Result<(), SchemeConfigError> {
    if map.is_empty() {
        return Err(SchemeConfigError::EmptyTable(table));
    }
    for (token, glyph) in map {
        let len = token.chars().count();
        if len == 0 || len > MAX_TOKEN_LEN {
            return Err(SchemeConfigError::TokenLength {
                table,
                token: token.clone(),
            });
        }
        if glyph.is_empty() && !allow_empty_values {
            return Err(SchemeConfigError::EmptyValue {
                table,
                token: token.clone(),
            });
        }
    }
    Ok(())
}
