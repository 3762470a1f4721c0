//! Error taxonomy of the dashboard. Every failure is local to the action
//! that triggered it and ends up as a message line next to that action.

use thiserror::Error;

/// Failure of a single HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("image hosting API key is not configured")]
    MissingApiKey,
    #[error("{file}: image host rejected the upload")]
    Rejected { file: String },
    #[error("{file}: {reason}")]
    Network { file: String, reason: String },
    #[error("One or more images failed to upload ({failed} of {total}).")]
    Batch { failed: usize, total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// Entity name has no registered data source.
    #[error("No data available for {0}")]
    Configuration(String),
    #[error("Failed to load data: {0}")]
    Fetch(TransportError),
    #[error("{0}")]
    Upload(#[from] UploadError),
    #[error("Request failed: {0}")]
    Mutation(TransportError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Auth(String),
}

impl AdminError {
    pub fn validation(message: impl Into<String>) -> Self {
        AdminError::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AdminError::Configuration("vendor".into()).to_string(),
            "No data available for vendor"
        );
        assert_eq!(
            AdminError::Fetch(TransportError::Status(500)).to_string(),
            "Failed to load data: server responded with HTTP 500"
        );
        assert_eq!(
            AdminError::Mutation(TransportError::Rejected {
                status: 409,
                message: "Brand already exists".into()
            })
            .to_string(),
            "Request failed: Brand already exists (HTTP 409)"
        );
        let upload: AdminError = UploadError::Batch { failed: 1, total: 3 }.into();
        assert_eq!(
            upload.to_string(),
            "One or more images failed to upload (1 of 3)."
        );
    }
}
