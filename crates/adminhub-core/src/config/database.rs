//! Database configuration.

use serde::{Deserialize, Serialize};

/// Database connection pool configuration.
///
/// AdminHub keeps a modest pool per instance; an admin panel sees far
/// less concurrency than the sites it manages, so the defaults favor
/// recycling connections over holding a large pool open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of idle connections kept open.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait when acquiring a connection from the pool.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    /// Seconds an idle connection may linger before being closed.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Seconds a connection may live before being recycled.
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_seconds: u64,
}

fn default_max_connections() -> u32 {
    16
}

fn default_min_connections() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_defaults_apply_when_only_url_is_set() {
        let config: DatabaseConfig =
            serde_json::from_value(serde_json::json!({"url": "postgres://localhost/adminhub"}))
                .unwrap();
        assert_eq!(config.max_connections, 16);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout_seconds, 5);
        assert_eq!(config.idle_timeout_seconds, 600);
        assert_eq!(config.max_lifetime_seconds, 1800);
    }
}
