//! # todoql - an in-memory todo list served over GraphQL
//!
//! todoql keeps an ordered list of todos in process memory and exposes it
//! through a small GraphQL API. Nothing is persisted; the list lives as long
//! as the server does, optionally pre-populated from a seed file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://localhost:8000/graphql
//! todoql serve
//!
//! # Start from a seed file
//! todoql serve --seed todos.yml
//!
//! # Print the schema
//! todoql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: The `Todo` record
//! - [`storage`]: The in-memory todo store and seed loading

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.todoql.yml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TodoError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP transport.
pub mod graphql;

pub mod logging;

pub mod model;

/// In-memory storage layer.
pub mod storage;
