use shared::utils::ParseAmountError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid amount: {0} is not a finite number")]
    InvalidAmount(f64),

    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Invalid formatter configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot parse amount '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseAmountError,
    },

    #[error("Settings file error: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
