macro_rules! die {
    ($result:expr) => {
        $result.unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod dict_ops;
pub mod suggest_ops;

use std::fs;

use emoji_core::dict::SymbolDictionary;
use emoji_core::settings::{parse_settings_toml, Settings};

use crate::error::CliError;

/// Settings from `path`, or the embedded defaults.
pub fn load_settings(path: Option<&str>) -> Result<Settings, CliError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_settings_toml(&content).map_err(|source| CliError::Settings {
        path: path.to_string(),
        source,
    })
}

/// Symbol dictionary from `path`, or the built-in emoji set.
pub fn load_dict(path: Option<&str>) -> Result<SymbolDictionary, CliError> {
    let Some(path) = path else {
        return Ok(SymbolDictionary::default_emoji());
    };
    SymbolDictionary::from_path(path).map_err(|source| CliError::Dict {
        path: path.to_string(),
        source,
    })
}
