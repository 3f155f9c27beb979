use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".todoql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /graphql`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Seed file loaded into the store at startup, relative to the config
    /// file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

/// A loaded configuration together with the directory relative paths resolve
/// against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TodoqlConfig,
    pub root: PathBuf,
}

impl LoadedConfig {
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.config.store.seed.as_ref().map(|p| self.root.join(p))
    }
}

impl TodoqlConfig {
    pub fn from_file(path: &Path) -> Result<LoadedConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: TodoqlConfig = if content.trim().is_empty() {
            TodoqlConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        let root = path
            .parent()
            .ok_or_else(|| TodoError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok(LoadedConfig { config, root })
    }

    /// Search upward from `start_path` for a config file. Without one the
    /// defaults apply and `start_path` becomes the root.
    pub fn discover(start_path: &Path) -> Result<LoadedConfig> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::from_file(&path),
            None => Ok(LoadedConfig {
                config: TodoqlConfig::default(),
                root: start_path.to_path_buf(),
            }),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TodoqlConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.graphiql);
        assert!(config.store.seed.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "server:\n  port: 4000\n").unwrap();

        let loaded = TodoqlConfig::from_file(&path).unwrap();
        assert_eq!(loaded.config.server.port, 4000);
        assert_eq!(loaded.config.server.host, "0.0.0.0");
        assert_eq!(loaded.root, temp_dir.path());
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "").unwrap();

        let loaded = TodoqlConfig::from_file(&path).unwrap();
        assert_eq!(loaded.config.server.port, 8000);
    }

    #[test]
    fn test_discover_searches_parents() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "store:\n  seed: todos.yml\n",
        )
        .unwrap();

        let loaded = TodoqlConfig::discover(&nested).unwrap();
        assert_eq!(loaded.root, temp_dir.path());
        assert_eq!(loaded.seed_path(), Some(temp_dir.path().join("todos.yml")));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let mut config = TodoqlConfig::default();
        config.server.port = 9100;
        config.save(&path).unwrap();

        let loaded = TodoqlConfig::from_file(&path).unwrap();
        assert_eq!(loaded.config.server.port, 9100);
    }
}
