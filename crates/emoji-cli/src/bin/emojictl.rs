use clap::{Parser, Subcommand};

use emoji_cli::commands::{config_ops, dict_ops, suggest_ops};

#[derive(Parser)]
#[command(name = "emojictl", about = "Emoji autocomplete tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List suggestions for a search term (with or without the sentinel)
    Suggest {
        term: String,
        /// Symbol dictionary (.tsv or .toml); built-in emoji when omitted
        #[arg(long)]
        dict: Option<String>,
        /// Settings TOML; embedded defaults when omitted
        #[arg(long)]
        settings: Option<String>,
        /// Maximum number of suggestions (overrides suggestions.max_results)
        #[arg(short, long)]
        n: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Commit a suggestion at the caret and print the resulting text
    Expand {
        text: String,
        /// Caret offset in the configured encoding; end of text when omitted
        #[arg(long)]
        caret: Option<usize>,
        /// Index of the suggestion to commit
        #[arg(long, default_value = "0")]
        pick: usize,
        #[arg(long)]
        dict: Option<String>,
        #[arg(long)]
        settings: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show dictionary statistics
    DictInfo {
        /// Symbol dictionary; built-in emoji when omitted
        file: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Check that a dictionary file parses
    DictValidate { file: String },
    /// Print the default settings TOML to stdout
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Suggest {
            term,
            dict,
            settings,
            n,
            json,
        } => suggest_ops::suggest(&term, dict.as_deref(), settings.as_deref(), n, json),
        Command::Expand {
            text,
            caret,
            pick,
            dict,
            settings,
            json,
        } => suggest_ops::expand(
            &text,
            caret,
            pick,
            dict.as_deref(),
            settings.as_deref(),
            json,
        ),
        Command::DictInfo { file, json } => dict_ops::info(file.as_deref(), json),
        Command::DictValidate { file } => dict_ops::validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
