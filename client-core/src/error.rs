use thiserror::Error;

/// Error type shared by every Rentify client crate.
///
/// The backend communicates failures as non-2xx responses with a
/// `{"message": "..."}` body; those surface as [`ClientError::Api`] with
/// the server's message verbatim. Everything else is transport, decoding,
/// or local-storage trouble.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Session storage error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Upload failed: {0}")]
    Upload(String),
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// True for a 404 from the backend. The notification endpoints use
    /// this to distinguish "not rolled out yet" from a real failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message_verbatim() {
        let err = ClientError::api(404, "Rental not found");
        assert_eq!(err.to_string(), "Rental not found");
    }

    #[test]
    fn is_not_found_only_matches_404() {
        assert!(ClientError::api(404, "gone").is_not_found());
        assert!(!ClientError::api(500, "boom").is_not_found());
        assert!(!ClientError::Cancelled.is_not_found());
    }
}
