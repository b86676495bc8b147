use std::env;

/// Base URL used when `USERDESK_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Deployment environment, selects the tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Pretty logs, debug-friendly defaults
    Development,
    /// JSON logs for aggregation
    Production,
}

impl Environment {
    /// True outside of production.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Application configuration, read from environment variables
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the remote user collection
    pub api_base_url: String,
    /// Deployment environment
    pub env: Environment,
}

impl AppConfig {
    /// Build the configuration from the environment. Every variable has a
    /// default, so this cannot fail.
    pub fn from_env() -> Self {
        let env = match env::var("USERDESK_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        Self {
            api_base_url: env::var("USERDESK_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            env,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
    }
}
