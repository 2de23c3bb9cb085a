use emoji_core::dict::DictError;
use emoji_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error in {path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: SettingsError,
    },
    #[error("Error in {path}: {source}")]
    Dict {
        path: String,
        #[source]
        source: DictError,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
