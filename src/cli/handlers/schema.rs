use crate::graphql::build_schema;
use crate::storage::TodoStore;
use anyhow::Result;
use std::sync::Arc;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(TodoStore::new()));
    print!("{}", schema.sdl());
    Ok(())
}
