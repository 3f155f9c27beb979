//! GraphQL schema, resolvers and HTTP transport for todoql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! todoql serve --port 8000
//!
//! # Execute a query from CLI
//! todoql query '{ getTodos { id title completed } }'
//!
//! # Execute a mutation from CLI
//! todoql mutate 'addTodo(title: "Buy milk", completed: false) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getTodos`, `getTodoById`
//! - **Mutations**: `addTodo`, `removeTodo`, `updateTodo`

pub mod resolvers;
mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, TodoSchema, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
