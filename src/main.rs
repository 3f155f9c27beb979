use anyhow::Result;
use clap::Parser;

use todoql::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use todoql::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    todoql::logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init { port } => handle_init(port, cli.seed),
        Commands::Schema => handle_schema(),
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref(), cli.seed)?;
            handle_serve(ctx, host, port, no_graphiql)
        }
        Commands::Query { query, variables } => {
            let ctx = CommandContext::load(cli.config.as_deref(), cli.seed)?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref(), cli.seed)?;
            handle_mutate(ctx, mutation, variables)
        }
    }
}
