use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::ResolutionError;
use crate::models::{CallNumber, ClassificationRequest, ResolutionResult, WorkCategory};
use crate::modules::cataloguing_pro::literature;
use crate::services::CutterService;

#[derive(Deserialize, ToSchema)]
pub struct ResolveRequest {
    /// Surname or title to place in the cutter table
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct YearCode {
    pub year: i32,
    pub code: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CategoryInfo {
    pub id: WorkCategory,
    pub prefix: Option<String>,
    pub description: String,
}

fn status_for(err: &ResolutionError) -> StatusCode {
    match err {
        ResolutionError::EmptyInput => StatusCode::BAD_REQUEST,
        ResolutionError::NotClassifiable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ResolutionError::NoEntriesForLetter(_) => StatusCode::NOT_FOUND,
        ResolutionError::TableUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn error_response(err: ResolutionError) -> Response {
    let body = match err.details() {
        Some(details) => json!({ "error": err.to_string(), "details": details }),
        None => json!({ "error": err.to_string() }),
    };
    (status_for(&err), Json(body)).into_response()
}

#[utoipa::path(
    post,
    path = "/api/cutter/resolve",
    request_body = ResolveRequest,
    responses(
        (status = 200, description = "Cutter resolved", body = ResolutionResult),
        (status = 400, description = "Empty name"),
        (status = 404, description = "No entries for the name's letter"),
        (status = 503, description = "Cutter table unavailable")
    )
)]
pub async fn resolve_name(
    State(service): State<Arc<CutterService>>,
    Json(payload): Json<ResolveRequest>,
) -> impl IntoResponse {
    match service.find_cutter(&payload.name).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/cutter/classify",
    request_body = ClassificationRequest,
    responses(
        (status = 200, description = "Call number generated", body = CallNumber),
        (status = 400, description = "Empty author name"),
        (status = 404, description = "No entries for the author's letter"),
        (status = 422, description = "Item cannot be classified"),
        (status = 503, description = "Cutter table unavailable")
    )
)]
pub async fn classify(
    State(service): State<Arc<CutterService>>,
    Json(payload): Json<ClassificationRequest>,
) -> impl IntoResponse {
    match service.classify(&payload).await {
        Ok(call_number) => (StatusCode::OK, Json(call_number)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/cutter/year/{year}",
    params(
        ("year" = i32, Path, description = "Publication year")
    ),
    responses(
        (status = 200, description = "Date cutter for the year", body = YearCode)
    )
)]
pub async fn year_code(Path(year): Path<i32>) -> Json<YearCode> {
    Json(YearCode {
        year,
        code: literature::year_code(year),
    })
}

#[utoipa::path(
    get,
    path = "/api/cutter/categories",
    responses(
        (status = 200, description = "Literature work categories", body = [CategoryInfo])
    )
)]
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        WorkCategory::ALL
            .into_iter()
            .map(|c| CategoryInfo {
                id: c,
                prefix: c.prefix().map(str::to_string),
                description: c.description().to_string(),
            })
            .collect(),
    )
}
