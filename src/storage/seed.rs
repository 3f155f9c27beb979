use crate::{
    error::{Result, TodoError},
    model::Todo,
};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
}

/// Pick the seed format from the file extension. Anything other than `.json`
/// is read as YAML.
pub fn detect_format(path: &Path) -> SeedFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => SeedFormat::Json,
        _ => SeedFormat::Yaml,
    }
}

pub fn parse_seed(content: &str, format: SeedFormat) -> Result<Vec<Todo>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let todos: Vec<Todo> = match format {
        SeedFormat::Json => serde_json::from_str(content)?,
        SeedFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(todos)
}

/// Read the initial todo list from a YAML or JSON file.
pub fn load_seed(path: &Path) -> Result<Vec<Todo>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        TodoError::Seed(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    let todos = parse_seed(&content, detect_format(path))?;
    tracing::info!(path = %path.display(), count = todos.len(), "Loaded seed todos");
    Ok(todos)
}
