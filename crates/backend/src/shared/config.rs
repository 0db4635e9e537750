use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    Rest,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub kind: StoreKind,
    /// Base URL of the hosted store, required for `rest`
    pub url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Relative paths resolve against the executable directory
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_dir() -> String {
    "logs".into()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[store]
kind = "memory"

[logging]
level = "info"
dir = "logs"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            return load_config_from(&config_path);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config in {}", path.display()))
}

/// Parses and checks that a `rest` store has a URL
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.store.kind == StoreKind::Rest {
        let url = config.store.url.as_deref().unwrap_or("").trim();
        if url.is_empty() {
            anyhow::bail!("store.url is required when store.kind = \"rest\"");
        }
    }
    Ok(config)
}

/// Resolves the log directory, relative paths against the executable directory
pub fn get_log_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.logging.dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match exe_dir() {
        Some(exe_dir) => exe_dir.join(dir),
        None => Path::new("target").join(dir),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}
