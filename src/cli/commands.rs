use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todoql")]
#[command(author, version, about = "An in-memory todo list served over GraphQL")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .todoql.yml by default)
    #[arg(long, global = true, env = "TODOQL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed file (YAML or JSON) loaded into the store at startup
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "TODOQL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .todoql.yml with default settings in the current directory
    Init {
        /// Port to record in the config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "TODOQL_PORT")]
        port: Option<u16>,

        /// Do not serve GraphiQL on GET /graphql
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a fresh store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL
    Schema,
}
