use std::path::PathBuf;

use emoji_core::dict::DictError;
use emoji_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid dictionary: {0}")]
    Dict(#[from] DictError),
}
