use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error on line {line} ({content:?}): {reason}")]
    Parse {
        line: u64,
        content: String,
        reason: String,
    },

    #[error("Dataset contains no records")]
    EmptyDataset,

    #[error("Month {month} has no season: {context}")]
    MalformedSeason { month: u32, context: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ProcessingError {
    pub fn parse(line: u64, content: impl Into<String>, reason: impl Into<String>) -> Self {
        ProcessingError::Parse {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }
}
