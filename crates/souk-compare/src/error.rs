use souk_core::{ErrorKind, ErrorState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Blank query; rejected before any provider call.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// The external platform could not be reached or answered with garbage.
    #[error("transport error from {platform}: {reason}")]
    Transport { platform: String, reason: String },

    /// The pending search was abandoned before it resolved.
    #[error("search cancelled")]
    Cancelled,
}

impl From<&SearchError> for ErrorState {
    fn from(err: &SearchError) -> Self {
        let kind = match err {
            SearchError::Transport { .. } | SearchError::Cancelled => ErrorKind::Network,
            SearchError::InvalidQuery { .. } => ErrorKind::Generic,
        };
        ErrorState::new(kind, err.to_string())
    }
}
