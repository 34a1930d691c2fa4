use crate::constants::{DEFAULT_CACHE_PATH, DEFAULT_PORT, DEFAULT_QUERY_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where and how long to wait for the SQL-over-HTTP data catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub query_url: String,
    pub timeout_seconds: u64,
}

/// One datastore resource id per source type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceConfig {
    #[serde(default)]
    pub family_services: String,
    #[serde(default)]
    pub schools: String,
    #[serde(default)]
    pub early_education: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            query_url: DEFAULT_QUERY_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CACHE_PATH),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Load `config.toml` (or `path`), then apply `NEARBY_*` environment overrides.
    ///
    /// A missing file is not an error: defaults plus environment are enough to run.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.unwrap_or_else(|| Path::new("config.toml"));
        let mut config = if config_path.exists() {
            let config_content =
                fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                    path: config_path.display().to_string(),
                    source,
                })?;
            Self::from_toml_str(&config_content)?
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Self::from_toml_str("")?
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from a key lookup; `std::env::var` in production.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("NEARBY_QUERY_URL") {
            self.remote.query_url = v;
        }
        if let Some(v) = lookup("NEARBY_TIMEOUT_SECONDS") {
            self.remote.timeout_seconds = parse_number("NEARBY_TIMEOUT_SECONDS", &v)?;
        }
        if let Some(v) = lookup("NEARBY_FAMILY_SERVICES_RESOURCE") {
            self.resources.family_services = v;
        }
        if let Some(v) = lookup("NEARBY_SCHOOLS_RESOURCE") {
            self.resources.schools = v;
        }
        if let Some(v) = lookup("NEARBY_EARLY_EDUCATION_RESOURCE") {
            self.resources.early_education = v;
        }
        if let Some(v) = lookup("NEARBY_CACHE_PATH") {
            self.cache.path = PathBuf::from(v);
        }
        if let Some(v) = lookup("NEARBY_PORT") {
            self.server.port = parse_number("NEARBY_PORT", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("remote.query_url", &self.remote.query_url)?;
        require_non_empty("resources.family_services", &self.resources.family_services)?;
        require_non_empty("resources.schools", &self.resources.schools)?;
        require_non_empty("resources.early_education", &self.resources.early_education)?;
        if self.remote.timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "remote.timeout_seconds".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: key.to_string(),
            message: "must be set".into(),
        });
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const FULL: &str = r#"
        [remote]
        query_url = "https://catalog.example/api/sql"
        timeout_seconds = 5

        [resources]
        family_services = "fs-resource"
        schools = "schools-resource"
        early_education = "ece-resource"

        [cache]
        path = "/tmp/lookup.db"

        [server]
        port = 9000
    "#;

    #[test]
    fn parses_full_file() {
        let config = Config::from_toml_str(FULL).unwrap();
        assert_eq!(config.remote.query_url, "https://catalog.example/api/sql");
        assert_eq!(config.remote.timeout(), Duration::from_secs(5));
        assert_eq!(config.resources.schools, "schools-resource");
        assert_eq!(config.cache.path, PathBuf::from("/tmp/lookup.db"));
        assert_eq!(config.server.port, 9000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_file_uses_defaults_but_fails_validation() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.remote.query_url, DEFAULT_QUERY_URL);
        assert_eq!(config.remote.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.server.port, DEFAULT_PORT);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("resources.family_services"));
    }

    #[test]
    fn partial_sections_fill_missing_keys_from_defaults() {
        let config = Config::from_toml_str(
            r#"
            [remote]
            query_url = "https://catalog.example/api/sql"

            [server]
            "#,
        )
        .unwrap();

        assert_eq!(config.remote.query_url, "https://catalog.example/api/sql");
        assert_eq!(config.remote.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.cache.path, PathBuf::from(DEFAULT_CACHE_PATH));
    }

    #[test]
    fn environment_overrides_win() {
        let mut config = Config::from_toml_str(FULL).unwrap();
        let env: HashMap<&str, &str> = [
            ("NEARBY_SCHOOLS_RESOURCE", "override-schools"),
            ("NEARBY_TIMEOUT_SECONDS", "12"),
            ("NEARBY_PORT", "8081"),
        ]
        .into_iter()
        .collect();

        config
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.resources.schools, "override-schools");
        assert_eq!(config.resources.family_services, "fs-resource");
        assert_eq!(config.remote.timeout_seconds, 12);
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn bad_numeric_override_is_rejected() {
        let mut config = Config::from_toml_str(FULL).unwrap();
        let err = config
            .apply_overrides(|k| (k == "NEARBY_PORT").then(|| "not-a-port".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "NEARBY_PORT"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::from_toml_str(FULL).unwrap();
        config.remote.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
