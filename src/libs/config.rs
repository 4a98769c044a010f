//! Configuration for locating the employee database.
//!
//! The database path is taken from the first of these that is set:
//!
//! 1. the `--database` command-line flag
//! 2. the `EMPTRACK_DATABASE` environment variable (a `.env` file is loaded first)
//! 3. `database.path` in `config.json` inside the data directory
//! 4. `emptrack.db` inside the data directory
//!
//! ```rust,no_run
//! use emptrack::libs::config::Config;
//!
//! let path = Config::database_path(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database file name used when nothing else is configured.
pub const DB_FILE_NAME: &str = "emptrack.db";

/// Environment variable overriding the database path.
pub const DATABASE_ENV: &str = "EMPTRACK_DATABASE";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
}

/// Root of `config.json`. Every section is optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Loads `config.json` from the data directory, or defaults if it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| Message::ConfigParseFailed(config_file_path.display().to_string()).to_string())?;
        Ok(config)
    }

    /// Resolves the database file to open. `flag` is the `--database` value.
    ///
    /// `config.json` is only read when neither the flag nor `EMPTRACK_DATABASE` is set.
    pub fn database_path(flag: Option<PathBuf>) -> Result<PathBuf> {
        let from_env = env::var(DATABASE_ENV).ok().filter(|value| !value.trim().is_empty()).map(PathBuf::from);

        match resolve_database_path(flag, from_env, Config::read)? {
            Some(path) => Ok(path),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}

fn resolve_database_path(
    flag: Option<PathBuf>,
    from_env: Option<PathBuf>,
    read_config: impl FnOnce() -> Result<Config>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = flag.or(from_env) {
        return Ok(Some(path));
    }
    Ok(read_config()?.database.map(|database| database.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn configured(path: &str) -> Result<Config> {
        Ok(Config {
            database: Some(DatabaseConfig { path: PathBuf::from(path) }),
        })
    }

    #[test]
    fn flag_wins_over_everything() {
        let resolved = resolve_database_path(Some("/from/flag.db".into()), Some("/from/env.db".into()), || configured("/from/config.db"));
        assert_eq!(resolved.unwrap(), Some(PathBuf::from("/from/flag.db")));
    }

    #[test]
    fn env_wins_over_config_file() {
        let resolved = resolve_database_path(None, Some("/from/env.db".into()), || configured("/from/config.db"));
        assert_eq!(resolved.unwrap(), Some(PathBuf::from("/from/env.db")));
    }

    #[test]
    fn config_file_not_read_when_flag_or_env_set() {
        let broken = || Err(anyhow!("config.json is unreadable"));
        assert_eq!(resolve_database_path(Some("/from/flag.db".into()), None, broken).unwrap(), Some(PathBuf::from("/from/flag.db")));
        assert_eq!(resolve_database_path(None, Some("/from/env.db".into()), broken).unwrap(), Some(PathBuf::from("/from/env.db")));
        assert!(resolve_database_path(None, None, broken).is_err());
    }

    #[test]
    fn config_file_used_when_nothing_else_set() {
        let resolved = resolve_database_path(None, None, || configured("/from/config.db"));
        assert_eq!(resolved.unwrap(), Some(PathBuf::from("/from/config.db")));
        assert_eq!(resolve_database_path(None, None, || Ok(Config::default())).unwrap(), None);
    }

    #[test]
    fn parses_partial_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"database":{"path":"/srv/staff.db"}}"#).unwrap();
        assert_eq!(Some(config), configured("/srv/staff.db").ok());
    }
}
