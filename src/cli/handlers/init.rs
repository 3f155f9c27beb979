use crate::config::{CONFIG_FILE_NAME, TodoqlConfig};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn handle_init(port: Option<u16>, seed: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    let mut config = TodoqlConfig::default();
    if let Some(port) = port {
        config.server.port = port;
    }
    config.store.seed = seed;

    config.save(&config_path)?;

    println!("{} todoql config in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    println!(
        "  Server: {}:{}",
        config.server.host, config.server.port
    );

    Ok(())
}
