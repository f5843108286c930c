fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/scheme/hk_devanagari.toml",
        include_str!("src/scheme/hk_devanagari.toml"),
    );
    validate_toml(
        "src/scheme/iast_devanagari.toml",
        include_str!("src/scheme/iast_devanagari.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
