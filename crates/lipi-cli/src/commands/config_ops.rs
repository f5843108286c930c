use std::fs;
use std::path::Path;

use lipi_core::scheme::builtin_toml;
use lipi_core::BUILTIN_SCHEMES;

use crate::scheme_source::load_table;

pub fn scheme_export(name: &str) {
    let toml = die!(
        builtin_toml(name).ok_or_else(|| BUILTIN_SCHEMES.join(", ")),
        "Error: unknown scheme (built-in: {})"
    );
    print!("{toml}");
}

pub fn scheme_validate(file: &Path) {
    let scheme = die!(load_table(file), "Error: {}");
    println!(
        "OK: {} (longest token {} chars)",
        scheme.name(),
        scheme.max_token_len()
    );
}

pub fn settings_export() {
    print!("{}", lipi_core::settings::default_toml());
}

pub fn settings_validate(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    let s = die!(
        lipi_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: engine.scheme={}, session.auto_transliterate={}, examples={}",
        s.engine.scheme,
        s.session.auto_transliterate,
        s.examples.len()
    );
}

/// Install a custom settings file before anything reads the settings.
pub fn load_settings(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    die!(lipi_core::settings::init_custom(content), "Error: {}");
}
