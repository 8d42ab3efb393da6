use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

use crate::core::Engine;
use crate::error::{DocsmithError, Result};

type AppState = Arc<Engine>;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate-jsdoc", post(generate_jsdoc))
        .route("/create-readme", post(create_readme))
        .route("/document-api", post(document_api))
        .route("/generate-usage-examples", post(generate_usage_examples))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsdocRequest {
    file_path: Option<String>,
}

async fn generate_jsdoc(
    State(engine): State<AppState>,
    Json(request): Json<JsdocRequest>,
) -> Result<&'static str> {
    let file_path = request
        .file_path
        .ok_or_else(|| DocsmithError::MissingInput("filePath".to_string()))?;

    engine.generate_jsdoc(Path::new(&file_path)).await?;
    Ok("JSDoc comments generated successfully")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadmeRequest {
    project_name: Option<String>,
}

async fn create_readme(
    State(engine): State<AppState>,
    Json(request): Json<ReadmeRequest>,
) -> Result<&'static str> {
    let project_name = request
        .project_name
        .ok_or_else(|| DocsmithError::MissingInput("projectName".to_string()))?;

    engine.create_readme(&project_name)?;
    Ok("README file created successfully")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentApiRequest {
    api_data: Option<String>,
}

async fn document_api(
    State(engine): State<AppState>,
    Json(request): Json<DocumentApiRequest>,
) -> Result<&'static str> {
    let api_data = request
        .api_data
        .ok_or_else(|| DocsmithError::MissingInput("apiData".to_string()))?;

    engine.document_api(&api_data)?;
    Ok("API documentation generated successfully")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageRequest {
    file_path: Option<String>,
}

async fn generate_usage_examples(
    State(engine): State<AppState>,
    request: Option<Json<UsageRequest>>,
) -> Result<&'static str> {
    let file_path = request.and_then(|Json(r)| r.file_path);

    engine
        .generate_usage_examples(file_path.as_deref().map(Path::new))
        .await?;
    Ok("Usage examples generated successfully")
}
