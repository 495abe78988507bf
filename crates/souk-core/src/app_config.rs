use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub history_path: PathBuf,
    pub history_capacity: usize,
    pub recent_limit: usize,
    pub debounce_ms: u64,
    pub search_latency_ms: u64,
    pub search_max_retries: u32,
    pub search_backoff_ms: u64,
    pub listings_path: PathBuf,
    pub fallback_policy_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("history_path", &self.history_path)
            .field("history_capacity", &self.history_capacity)
            .field("recent_limit", &self.recent_limit)
            .field("debounce_ms", &self.debounce_ms)
            .field("search_latency_ms", &self.search_latency_ms)
            .field("search_max_retries", &self.search_max_retries)
            .field("search_backoff_ms", &self.search_backoff_ms)
            .field("listings_path", &self.listings_path)
            .field("fallback_policy_path", &self.fallback_policy_path)
            .finish()
    }
}
