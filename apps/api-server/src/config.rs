//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::database::DatabaseConfig;

/// Startup seeding of fake posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    /// Number of posts to generate; 0 disables seeding.
    pub count: usize,
    pub seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { count: 0, seed: 42 }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub run_migrations: bool,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = parsed(&lookup, "DB_MAX_CONNECTIONS") {
                config.max_connections = max;
            }
            if let Some(min) = parsed(&lookup, "DB_MIN_CONNECTIONS") {
                config.min_connections = min;
            }
            config
        });

        let defaults = SeedConfig::default();

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(&lookup, "PORT").unwrap_or(8080),
            database,
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            seed: SeedConfig {
                count: parsed(&lookup, "SEED_POSTS").unwrap_or(defaults.count),
                seed: parsed(&lookup, "SEED").unwrap_or(defaults.seed),
            },
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.database.is_none());
        assert!(!cfg.run_migrations);
        assert_eq!(cfg.seed, SeedConfig::default());
    }

    #[test]
    fn test_database_settings() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://localhost/blog"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("RUN_MIGRATIONS", "true"),
        ]);
        let db = cfg.database.unwrap();
        assert_eq!(db.url, "postgres://localhost/blog");
        assert_eq!(db.max_connections, 20);
        assert_eq!(db.min_connections, 10);
        assert!(cfg.run_migrations);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let cfg = config(&[("PORT", "http"), ("SEED_POSTS", "ten")]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.seed.count, 0);
    }

    #[test]
    fn test_seed_settings() {
        let cfg = config(&[("SEED_POSTS", "10"), ("SEED", "7")]);
        assert_eq!(cfg.seed, SeedConfig { count: 10, seed: 7 });
    }
}
