use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// The query was empty after trimming. Nothing was mutated.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("history storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The persisted slot exists but does not hold a history list.
    #[error("persisted history is corrupt: {reason}")]
    Corrupt { reason: String },
}
