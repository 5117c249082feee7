use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Domain is empty after cleanup")]
    EmptyDomain,

    #[error("API key is missing: set ANYMAILFINDER_API_KEY or provide one at the prompt")]
    MissingCredential,

    #[error("Cannot read input file '{path}': {source}")]
    UnreadableInput {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LookupError>;
