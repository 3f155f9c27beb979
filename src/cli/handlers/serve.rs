use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::{Context, Result};
use colored::Colorize;
use std::net::{IpAddr, SocketAddr};

use super::CommandContext;

pub fn handle_serve(
    ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_graphiql: bool,
) -> Result<()> {
    let settings = &ctx.config().server;
    let host = host.unwrap_or_else(|| settings.host.clone());
    let port = port.unwrap_or(settings.port);
    let graphiql = settings.graphiql && !no_graphiql;

    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("Invalid host address: {}", host))?;
    let addr = SocketAddr::new(ip, port);

    let store = ctx.build_store()?;
    tracing::info!(todos = store.len()?, "Store ready");
    let schema = build_schema(store);

    println!(
        "{} GraphQL server on http://localhost:{}{}",
        "Starting".green(),
        port,
        GRAPHQL_PATH
    );
    if graphiql {
        println!("GraphiQL IDE: http://localhost:{}{}", port, GRAPHQL_PATH);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, addr, graphiql))?;
    Ok(())
}
