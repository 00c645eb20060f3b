//! Error types for readme-action

/// Result type for readme-action operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing action metadata
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to unmarshal yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse {field} order: expected a mapping node")]
    ExpectedMapping { field: String },
}

impl Error {
    pub fn expected_mapping(field: impl Into<String>) -> Self {
        Self::ExpectedMapping {
            field: field.into(),
        }
    }
}
