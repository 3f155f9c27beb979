use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;
use super::query::{execute_document, print_response};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema(ctx.build_store()?);

    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let response = execute_document(&schema, &document, variables)?;
    print_response(&response)
}
