//! Server configuration using Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. A config file: the one given explicitly, or the first of
//!    `kanban-board.{toml,yaml,yml,json}` found in the working directory
//! 3. The bare `PORT` environment variable
//! 4. Environment variables with the `KANBAN_` prefix (`KANBAN_DATA_DIR`, ...)
//! 5. Command line overrides

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed in the working directory when no config file is given
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "kanban-board.toml",
    "kanban-board.yaml",
    "kanban-board.yml",
    "kanban-board.json",
];

/// Which document store backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// One JSON document per board under `data_dir`
    File,
    /// Process-local, lost on exit
    Memory,
}

/// Resolved server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageKind,
    pub data_dir: PathBuf,
    /// Default log filter when `RUST_LOG` is unset
    pub log: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 1000,
            storage: StorageKind::File,
            data_dir: PathBuf::from(".kanban-board"),
            log: "info".to_string(),
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from every source
    pub fn load(
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(config_file, overrides).extract()?;
        debug!(?config, "loaded server configuration");
        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match config_file {
            Some(path) => figment = figment.merge(file_provider(path)),
            None => {
                if let Some(path) = CONFIG_FILE_NAMES
                    .iter()
                    .map(Path::new)
                    .find(|path| path.is_file())
                {
                    debug!(path = %path.display(), "using discovered config file");
                    figment = figment.merge(file_provider(path));
                }
            }
        }

        figment
            .merge(Env::raw().only(&["PORT"]))
            .merge(Env::prefixed("KANBAN_"))
            .merge(Serialized::globals(overrides))
    }

    /// The address to bind
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

/// Pick a figment provider from the file extension, defaulting to TOML
fn file_provider(path: &Path) -> Figment {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
        Some("json") => Figment::from(Json::file(path)),
        _ => Figment::from(Toml::file(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Variables that would leak into the layered config from the host
    fn clear_env() {
        for (key, _) in std::env::vars() {
            if key == "PORT" || key.starts_with("KANBAN_") {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.toml");

        let config = ServerConfig::load(Some(&missing), &ConfigOverrides::default()).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 1000);
    }

    #[test]
    #[serial]
    fn test_toml_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kanban-board.toml");
        std::fs::write(&path, "port = 8080\nstorage = \"memory\"\n").unwrap();

        let config = ServerConfig::load(Some(&path), &ConfigOverrides::default()).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    #[serial]
    fn test_yaml_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        std::fs::write(&path, "data_dir: /srv/boards\nlog: debug\n").unwrap();

        let config = ServerConfig::load(Some(&path), &ConfigOverrides::default()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/boards"));
        assert_eq!(config.log, "debug");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_and_cli_overrides_env() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kanban-board.toml");
        std::fs::write(&path, "port = 8080\n").unwrap();

        std::env::set_var("PORT", "9000");
        std::env::set_var("KANBAN_HOST", "127.0.0.1");

        let from_env = ServerConfig::load(Some(&path), &ConfigOverrides::default()).unwrap();
        let from_cli = ServerConfig::load(
            Some(&path),
            &ConfigOverrides {
                port: Some(7000),
                ..Default::default()
            },
        )
        .unwrap();

        clear_env();

        assert_eq!(from_env.port, 9000);
        assert_eq!(from_env.host, "127.0.0.1");
        assert_eq!(from_cli.port, 7000);
    }

    #[test]
    #[serial]
    fn test_bad_value_is_an_error() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kanban-board.toml");
        std::fs::write(&path, "port = \"not a port\"\n").unwrap();

        assert!(ServerConfig::load(Some(&path), &ConfigOverrides::default()).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 4000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap().port(), 4000);

        let bad = ServerConfig {
            host: "not a host".into(),
            ..Default::default()
        };
        assert!(bad.socket_addr().is_err());
    }
}
