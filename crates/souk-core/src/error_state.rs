//! Failure classification handed to the presentation layer.

use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Transport failure; the user may retry.
    Network,
    NotFound,
    Generic,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Network => "NETWORK",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Generic => "GENERIC",
        }
    }
}

/// A classified `{type, message}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorState {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorState {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::Network
    }
}

impl From<&CoreError> for ErrorState {
    fn from(err: &CoreError) -> Self {
        let kind = match err {
            CoreError::ListingNotFound { .. } => ErrorKind::NotFound,
            CoreError::InvalidRange { .. } | CoreError::InvalidPrice(_) => ErrorKind::Generic,
        };
        ErrorState::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_not_found_classifies_as_not_found() {
        let state = ErrorState::from(&CoreError::ListingNotFound {
            id: "p-404".to_owned(),
        });
        assert_eq!(state.kind, ErrorKind::NotFound);
        assert!(state.message.contains("p-404"));
        assert!(!state.is_retryable());
    }

    #[test]
    fn price_errors_classify_as_generic() {
        let state = ErrorState::from(&CoreError::InvalidRange {
            min: 2.0,
            max: 1.0,
        });
        assert_eq!(state.kind, ErrorKind::Generic);
    }

    #[test]
    fn serializes_kind_under_type_key() {
        let state = ErrorState::new(ErrorKind::Network, "connection reset");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["type"], "NETWORK");
        assert_eq!(json["message"], "connection reset");
        assert_eq!(json["type"], ErrorKind::Network.as_str());
    }
}
