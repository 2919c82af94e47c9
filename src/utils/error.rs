use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Listing source request failed: {0}")]
    UpstreamFetch(#[from] reqwest::Error),

    #[error("Malformed slug '{slug}': {reason}")]
    MalformedSlug { slug: String, reason: String },

    #[error("No listing registered under code {code}")]
    RegistrationCodeNotFound { code: String },

    #[error("Invalid filter state: {field} = {value} ({reason})")]
    InvalidFilterState {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid listing source endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Configuration error: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

impl DirectoryError {
    /// True for errors an API boundary should present as a plain "not found".
    /// Malformed slugs and unknown registration codes stay distinct in logs.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DirectoryError::MalformedSlug { .. } | DirectoryError::RegistrationCodeNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
