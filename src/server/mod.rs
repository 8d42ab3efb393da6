//! HTTP surface exposing the documentation passes as endpoints

mod routes;

use anyhow::Result;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::Engine;
use crate::error::DocsmithError;

impl IntoResponse for DocsmithError {
    fn into_response(self) -> Response {
        let status = match &self {
            DocsmithError::MissingInput(_) => StatusCode::BAD_REQUEST,
            DocsmithError::Llm(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Run the server until it is shut down externally
pub async fn run(engine: Engine, port: u16) -> Result<()> {
    let state = Arc::new(engine);

    // Permissive CORS; the endpoints carry no credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Docs generator API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
