//! Runtime configuration for the `qlog` binary.
//!
//! Resolution order for each setting: explicit value (CLI flag), then
//! environment, then default.
//! - `QUESTLOG_DB` - path to the SQLite database
//! - `QUESTLOG_PORT` - port for `qlog serve`

use std::path::PathBuf;

use anyhow::Result;

const APP_NAME: &str = "questlog";
const DB_FILE: &str = "questlog.db";

pub const DEFAULT_PORT: u16 = 17020;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub port: u16,
}

impl Config {
    /// Resolve configuration, letting explicit values win over the environment.
    pub fn resolve(db_path: Option<PathBuf>, port: Option<u16>) -> Result<Self> {
        let db_path = match db_path.or_else(|| env_path("QUESTLOG_DB")) {
            Some(path) => path,
            None => default_db_path()?,
        };

        let port = port
            .or_else(|| {
                std::env::var("QUESTLOG_PORT")
                    .ok()
                    .and_then(|s| s.trim().parse::<u16>().ok())
            })
            .unwrap_or(DEFAULT_PORT);

        Ok(Self { db_path, port })
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Database location inside the platform data directory.
pub fn default_db_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join(DB_FILE))
}
