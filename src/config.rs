use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Port the server binds when neither the CLI nor the config file names one
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GreetdbConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("greetdb.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("greetdb.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<GreetdbConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: GreetdbConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &GreetdbConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Resolve the database path: CLI flag, then config file, then built-in default
pub fn resolve_database(flag: Option<PathBuf>, config: Option<&GreetdbConfig>) -> PathBuf {
    flag.or_else(|| config.and_then(|c| c.database.as_ref().map(PathBuf::from)))
        .unwrap_or_else(default_database_path)
}

/// Resolve the server port: CLI flag, then config file, then built-in default
pub fn resolve_port(flag: Option<u16>, config: Option<&GreetdbConfig>) -> u16 {
    flag.or_else(|| config.and_then(|c| c.port)).unwrap_or(DEFAULT_PORT)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
