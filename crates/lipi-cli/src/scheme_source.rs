//! Resolving which scheme a command runs with.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use lipi_core::{Scheme, SchemeConfigError};

#[derive(Debug, thiserror::Error)]
pub enum SchemeLoadError {
    #[error("unknown scheme {0:?} (built-in: {list})", list = lipi_core::BUILTIN_SCHEMES.join(", "))]
    UnknownBuiltin(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid scheme table {path}: {source}")]
    Config {
        path: String,
        source: SchemeConfigError,
    },
}

/// A scheme chosen on the command line.
pub enum SchemeSource {
    Builtin(&'static Scheme),
    Custom(Scheme),
}

impl SchemeSource {
    pub fn scheme(&self) -> &Scheme {
        match self {
            SchemeSource::Builtin(s) => s,
            SchemeSource::Custom(s) => s,
        }
    }
}

/// `--table` wins over `--scheme`; neither means the configured default.
pub fn resolve(builtin: Option<&str>, table: Option<&Path>) -> Result<SchemeSource, SchemeLoadError> {
    if let Some(path) = table {
        return load_table(path).map(SchemeSource::Custom);
    }
    match builtin {
        Some(name) => Scheme::builtin(name)
            .map(SchemeSource::Builtin)
            .ok_or_else(|| SchemeLoadError::UnknownBuiltin(name.to_string())),
        None => Ok(SchemeSource::Builtin(Scheme::configured())),
    }
}

/// Like [`resolve`], but a failure is logged and yields `None` so callers can
/// fall back to passing input through unchanged.
pub fn resolve_or_passthrough(builtin: Option<&str>, table: Option<&Path>) -> Option<SchemeSource> {
    match resolve(builtin, table) {
        Ok(source) => {
            debug!(scheme = source.scheme().name(), "scheme loaded");
            Some(source)
        }
        Err(e) => {
            warn!("{e}; input will be passed through unchanged");
            None
        }
    }
}

pub fn load_table(path: &Path) -> Result<Scheme, SchemeLoadError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| SchemeLoadError::Io {
        path: display.clone(),
        source,
    })?;
    Scheme::from_toml(&content).map_err(|source| SchemeLoadError::Config {
        path: display,
        source,
    })
}
