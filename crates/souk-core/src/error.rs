use thiserror::Error;

/// Domain errors raised by the pure listing transforms.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A `{min, max}` price with `min > max`. Bounds are never swapped.
    #[error("invalid price range: min {min} exceeds max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// A negative or non-finite price value.
    #[error("invalid price value: {0}")]
    InvalidPrice(f64),

    /// No source record carries the requested listing id.
    #[error("listing not found: {id}")]
    ListingNotFound { id: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read fallback policy file at {path}: {source}")]
    PolicyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fallback policy file: {0}")]
    PolicyFileParse(#[from] serde_yaml::Error),

    #[error("fallback policy validation error: {0}")]
    Validation(String),
}
