use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lipi_cli::commands::{config_ops, convert_ops};
use lipi_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "lipitool", about = "Romanized text to Devanagari transliteration")]
struct Cli {
    /// Custom settings TOML replacing the embedded defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (or stdin, line by line)
    Convert {
        /// Input text; reads stdin when omitted
        text: Option<String>,
        /// Built-in scheme: hk or iast (default: engine.scheme setting)
        #[arg(long)]
        scheme: Option<String>,
        /// Custom scheme table (TOML); overrides --scheme
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Show each decision of the scan
    Explain {
        /// Input text
        text: String,
        /// Built-in scheme: hk or iast
        #[arg(long)]
        scheme: Option<String>,
        /// Custom scheme table (TOML); overrides --scheme
        #[arg(long)]
        table: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate the example presets
    Examples {
        /// Built-in scheme: hk or iast
        #[arg(long)]
        scheme: Option<String>,
    },
    /// Export a built-in scheme table as TOML
    SchemeExport {
        /// Built-in scheme name
        #[arg(long, default_value = "hk")]
        scheme: String,
    },
    /// Validate a custom scheme table
    SchemeValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Some(path) = &cli.settings {
        config_ops::load_settings(path);
    }

    match cli.command {
        Command::Convert {
            text,
            scheme,
            table,
        } => convert_ops::convert_cmd(text.as_deref(), scheme.as_deref(), table.as_deref()),
        Command::Explain {
            text,
            scheme,
            table,
            json,
        } => convert_ops::explain_cmd(&text, scheme.as_deref(), table.as_deref(), json),
        Command::Examples { scheme } => convert_ops::examples_cmd(scheme.as_deref()),
        Command::SchemeExport { scheme } => config_ops::scheme_export(&scheme),
        Command::SchemeValidate { file } => config_ops::scheme_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
