use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::post,
};
use tower_http::cors::CorsLayer;

use super::schema::TodoSchema;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Build the HTTP router: `POST /graphql` executes documents, `GET /graphql`
/// serves GraphiQL when enabled. Cross-origin requests are allowed.
pub fn router(schema: TodoSchema, graphiql: bool) -> Router {
    let mut endpoint = post(graphql_handler);
    if graphiql {
        endpoint = endpoint.get(graphiql_page);
    }

    Router::new()
        .route(GRAPHQL_PATH, endpoint)
        .with_state(schema)
        .layer(CorsLayer::permissive())
}

async fn graphql_handler(
    State(schema): State<TodoSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Serve `schema` on `addr` until Ctrl-C.
#[tracing::instrument(name = "run_server", skip_all, fields(%addr))]
pub async fn run_server(schema: TodoSchema, addr: SocketAddr, graphiql: bool) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Server is running on http://{}{}",
        listener.local_addr()?,
        GRAPHQL_PATH
    );

    axum::serve(listener, router(schema, graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
