//! Environment configuration for the seed binaries.

use std::path::PathBuf;

/// Configuration loaded from environment variables.
///
/// | Env Var             | Required | Default | Description                          |
/// |---------------------|----------|---------|--------------------------------------|
/// | `DATABASE_URL`      | yes      | --      | SQLite store, e.g. `sqlite://projects.db` or a bare path |
/// | `SEED_FIXTURES_DIR` | no       | --      | Read `<table>.json` fixtures from here instead of the built-in copies |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub database_url: String,
    pub fixtures_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
}

impl SeedConfig {
    pub fn new(database_url: &str) -> Self {
        Self {
            database_url: normalize_url(database_url),
            fixtures_dir: None,
        }
    }

    /// Load configuration from the process environment (and `.env`, if the
    /// caller ran `dotenvy::dotenv()` first).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("SEED_FIXTURES_DIR").ok(),
        )
    }

    pub fn from_vars(
        database_url: Option<String>,
        fixtures_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let fixtures_dir = fixtures_dir
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_url: normalize_url(&database_url),
            fixtures_dir,
        })
    }
}

/// Bare paths become `sqlite://` URLs.
fn normalize_url(raw: &str) -> String {
    if raw.starts_with("sqlite:") {
        raw.to_string()
    } else {
        format!("sqlite://{raw}")
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn database_url_is_required() {
        assert_matches!(
            SeedConfig::from_vars(None, None),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
        assert_matches!(
            SeedConfig::from_vars(Some("  ".into()), None),
            Err(ConfigError::Missing(_))
        );
    }

    #[test]
    fn bare_path_becomes_url() {
        let config = SeedConfig::from_vars(Some("../projects.db".into()), None).unwrap();
        assert_eq!(config.database_url, "sqlite://../projects.db");
    }

    #[test]
    fn url_is_kept() {
        let config = SeedConfig::from_vars(Some("sqlite://projects.db".into()), None).unwrap();
        assert_eq!(config.database_url, "sqlite://projects.db");
        assert_eq!(config.fixtures_dir, None);
    }

    #[test]
    fn fixtures_dir_is_optional() {
        let config =
            SeedConfig::from_vars(Some("projects.db".into()), Some("/srv/fixtures".into()))
                .unwrap();
        assert_eq!(config.fixtures_dir, Some(PathBuf::from("/srv/fixtures")));

        let config = SeedConfig::from_vars(Some("projects.db".into()), Some(String::new())).unwrap();
        assert_eq!(config.fixtures_dir, None);
    }
}
