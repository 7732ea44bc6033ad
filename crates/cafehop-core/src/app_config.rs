use std::net::SocketAddr;

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
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Yelp Fusion API key; `None` disables thumbnail enrichment entirely.
    pub yelp_api_key: Option<String>,
    /// Ordered Overpass mirror endpoints, tried front to back.
    pub overpass_mirrors: Vec<String>,
    pub overpass_timeout_secs: u64,
    pub overpass_max_attempts: u32,
    pub overpass_backoff_base_ms: u64,
    pub overpass_backoff_step_ms: u64,
    pub yelp_timeout_ms: u64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field(
                "yelp_api_key",
                &self.yelp_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("overpass_mirrors", &self.overpass_mirrors)
            .field("overpass_timeout_secs", &self.overpass_timeout_secs)
            .field("overpass_max_attempts", &self.overpass_max_attempts)
            .field("overpass_backoff_base_ms", &self.overpass_backoff_base_ms)
            .field("overpass_backoff_step_ms", &self.overpass_backoff_step_ms)
            .field("yelp_timeout_ms", &self.yelp_timeout_ms)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
