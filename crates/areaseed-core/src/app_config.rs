use std::path::PathBuf;

use crate::delivery_area::Tenant;

#[derive(Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub api_token: String,
    pub tenant: Tenant,
    pub catalog_path: PathBuf,
    pub log_level: String,
    /// `None` leaves the HTTP client without an overall request timeout.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &"[redacted]")
            .field("tenant", &self.tenant)
            .field("catalog_path", &self.catalog_path)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
