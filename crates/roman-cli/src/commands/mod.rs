pub mod config_ops;
pub mod convert_ops;

use roman_core::settings::SettingsError;
use roman_core::NumeralError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("{input:?}: {source}")]
    Numeral { input: String, source: NumeralError },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty range: {from}..={to}")]
    EmptyRange { from: u32, to: u32 },
}
