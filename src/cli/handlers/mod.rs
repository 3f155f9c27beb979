mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::{execute_document, handle_query};
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::{LoadedConfig, TodoqlConfig};
use crate::storage::{TodoStore, load_seed};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Common context passed to command handlers that need a store
pub struct CommandContext {
    pub loaded: LoadedConfig,
    /// Seed file given on the command line; wins over the config file.
    pub seed_override: Option<PathBuf>,
}

impl CommandContext {
    pub fn load(config_path: Option<&Path>, seed_override: Option<PathBuf>) -> Result<Self> {
        let loaded = match config_path {
            Some(path) => TodoqlConfig::from_file(path),
            None => TodoqlConfig::discover(&std::env::current_dir()?),
        }
        .context("Failed to load todoql configuration")?;
        Ok(Self {
            loaded,
            seed_override,
        })
    }

    pub fn config(&self) -> &TodoqlConfig {
        &self.loaded.config
    }

    pub fn seed_path(&self) -> Option<PathBuf> {
        self.seed_override
            .clone()
            .or_else(|| self.loaded.seed_path())
    }

    /// Build the store, pre-populated from the seed file if one is set.
    pub fn build_store(&self) -> Result<Arc<TodoStore>> {
        let store = match self.seed_path() {
            Some(path) => {
                let todos = load_seed(&path)?;
                TodoStore::with_todos(todos)
                    .with_context(|| format!("Invalid seed file {}", path.display()))?
            }
            None => TodoStore::new(),
        };
        Ok(Arc::new(store))
    }
}
