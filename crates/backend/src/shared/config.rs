use chrono::NaiveDate;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {addr}: {e}"))
    }
}

/// Parameters of the synthetic dataset
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub seed: u64,
    pub row_count: usize,
    /// Order dates are spread over this many days before the anchor date
    pub window_days: i64,
    /// Last possible order date ("YYYY-MM-DD", quoted). Today when absent.
    pub anchor_date: Option<NaiveDate>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            row_count: 10_000,
            window_days: 730,
            anchor_date: None,
        }
    }
}

impl DatasetConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.row_count == 0 {
            anyhow::bail!("dataset.row_count must be greater than zero");
        }
        if self.window_days < 0 {
            anyhow::bail!(
                "dataset.window_days must not be negative, got {}",
                self.window_days
            );
        }
        Ok(())
    }

    /// Anchor date, falling back to the current UTC date
    pub fn end_date(&self) -> NaiveDate {
        self.anchor_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: String,
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "target/logs".into(),
            file: "backend.log".into(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[dataset]
seed = 42
row_count = 10000
window_days = 730

[logging]
dir = "target/logs"
file = "backend.log"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                // tracing is not initialised yet: the log location comes from this file
                eprintln!("Loading config from: {}", config_path.display());
                return parse_config(&std::fs::read_to_string(&config_path)?);
            }
        }
    }

    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.dataset.validate()?;
    Ok(config)
}

/// Resolve the log file path. Relative directories are resolved against the
/// current directory.
pub fn get_log_path(config: &LoggingConfig) -> PathBuf {
    let dir = Path::new(&config.dir);
    let dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(dir))
            .unwrap_or_else(|_| dir.to_path_buf())
    };
    dir.join(&config.file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dataset, DatasetConfig::default());
        assert_eq!(config.logging.file, "backend.log");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
            [dataset]
            row_count = 50
            anchor_date = "2024-06-30"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.row_count, 50);
        assert_eq!(config.dataset.seed, 42);
        assert_eq!(
            config.dataset.end_date(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_zero_rows_rejected() {
        let err = parse_config("[dataset]\nrow_count = 0\n").unwrap_err();
        assert!(err.to_string().contains("row_count"));
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 8080,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 8080);
    }
}
