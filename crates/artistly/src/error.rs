use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtistlyError {
    #[error("Submission not found: {0}")]
    NotFound(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ArtistlyError {
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtistlyError>;
