//! Error types for readme-content

/// Result type for readme-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while updating a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "missing end comment for {section} section. add <!--/{section}--> to the end of the {section} section"
    )]
    MissingEndMarker { section: String },

    #[error("failed to get attribute {attribute}")]
    MissingAttribute { attribute: String },

    #[error("the environment variable {name} is not set")]
    EnvVarNotSet { name: String },

    #[error("invalid action glob {pattern:?}: {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn missing_end_marker(section: impl Into<String>) -> Self {
        Self::MissingEndMarker {
            section: section.into(),
        }
    }

    pub fn missing_attribute(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
        }
    }
}
