//! Application-level configuration loading: bind address, database and static assets.

use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "HOOP_STORY_BACK_CONFIG_PATH";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "./data/players.db";
const DEFAULT_STATIC_DIR: &str = "client";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// SQLite file path, or `:memory:`.
    pub database_url: String,
    /// Directory served for every path the API does not handle.
    pub static_dir: PathBuf,
    /// Insert the sample player when the database starts empty.
    pub seed_sample_player: bool,
}

impl AppConfig {
    /// Load the configuration from disk and the environment, falling back to built-in defaults.
    pub fn load() -> Self {
        let mut config = Self::from_file(&resolve_config_path());
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(path = %path.display(), "loaded config");
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply `PORT` and `DATABASE_URL` on top of the file values.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("PORT") {
            match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(value = %raw, error = %err, "ignoring invalid PORT"),
            }
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            self.database_url = url;
        }
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_sample_player: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file; missing keys keep their defaults.
struct RawConfig {
    host: Option<IpAddr>,
    port: Option<u16>,
    database_url: Option<String>,
    static_dir: Option<PathBuf>,
    seed_sample_player: Option<bool>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            host: value.host.unwrap_or(defaults.host),
            port: value.port.unwrap_or(defaults.port),
            database_url: value.database_url.unwrap_or(defaults.database_url),
            static_dir: value.static_dir.unwrap_or(defaults.static_dir),
            seed_sample_player: value
                .seed_sample_player
                .unwrap_or(defaults.seed_sample_player),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{ "port": 8080, "seed_sample_player": false }"#).unwrap();
        let config = AppConfig::from(raw);
        assert_eq!(config.port, 8080);
        assert!(!config.seed_sample_player);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::from_file(Path::new("does/not/exist.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn environment_overrides_file_values() {
        let vars = HashMap::from([("PORT", "4100"), ("DATABASE_URL", ":memory:")]);
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));
        assert_eq!(config.port, 4100);
        assert_eq!(config.database_url, ":memory:");
    }

    #[test]
    fn invalid_port_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
