//! Process configuration, read once from the environment at startup.

use log::info;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Store connection string. `sqlite://` prefixes are accepted.
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub placeholder_image: String,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    key: &'static str,
    message: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load("HOST", "127.0.0.1")?,
            port: try_load("PORT", "5000")?,
            database_url: try_load("DATABASE_URL", "recipes.sqlite")?,
            upload_dir: try_load("UPLOAD_DIR", "public/uploads")?,
            placeholder_image: try_load("PLACEHOLDER_IMAGE", DEFAULT_PLACEHOLDER_IMAGE)?,
        })
    }

    /// Filesystem path (or `:memory:`) the store should open.
    pub fn database_path(&self) -> &str {
        self.database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))
            .unwrap_or(&self.database_url)
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| ConfigError {
        key,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(database_url: &str) -> Config {
        Config {
            host: "127.0.0.1".into(),
            port: 5000,
            database_url: database_url.into(),
            upload_dir: PathBuf::from("uploads"),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.into(),
        }
    }

    #[test]
    fn database_path_strips_scheme() {
        assert_eq!(config("sqlite://data/recipes.db").database_path(), "data/recipes.db");
        assert_eq!(config("sqlite::memory:").database_path(), ":memory:");
        assert_eq!(config("recipes.sqlite").database_path(), "recipes.sqlite");
    }

    #[test]
    fn unparsable_value_is_reported() {
        env::set_var("RECIPES_TEST_BAD_PORT", "abc");
        let err = try_load::<u16>("RECIPES_TEST_BAD_PORT", "5000").unwrap_err();
        assert!(err.to_string().starts_with("invalid value for RECIPES_TEST_BAD_PORT"));
    }

    #[test]
    fn missing_value_falls_back_to_default() {
        let port: u16 = try_load("RECIPES_TEST_UNSET_PORT", "5000").unwrap();
        assert_eq!(port, 5000);
    }
}
