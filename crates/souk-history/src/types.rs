use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    /// Trimmed query, case preserved as typed.
    pub query: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub category: Option<String>,
}
