use crate::graphql::TodoSchema;
use anyhow::{Context, Result};

use super::CommandContext;
use crate::graphql::build_schema;

/// Run one GraphQL document on a throwaway runtime.
pub fn execute_document(
    schema: &TodoSchema,
    document: &str,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Variables must be a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    Ok(response)
}

/// Print `response` and fail when it carries GraphQL errors.
pub(super) fn print_response(response: &async_graphql::Response) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    if !response.errors.is_empty() {
        anyhow::bail!(
            "GraphQL request returned {} error(s)",
            response.errors.len()
        );
    }
    Ok(())
}

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.build_store()?);
    let response = execute_document(&schema, &query, variables)?;
    print_response(&response)
}
