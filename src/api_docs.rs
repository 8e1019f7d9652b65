use crate::api;
use crate::models;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::cutter::resolve_name,
        api::cutter::classify,
        api::cutter::year_code,
        api::cutter::list_categories,
    ),
    components(
        schemas(
            models::ReferenceEntry,
            models::ResolutionResult,
            models::NearbyMatch,
            models::WorkCategory,
            models::ItemType,
            models::ClassificationRequest,
            models::CallNumber,
            api::cutter::ResolveRequest,
            api::cutter::YearCode,
            api::cutter::CategoryInfo,
        )
    ),
    tags(
        (name = "cutter-finder", description = "Cutter number API")
    )
)]
pub struct ApiDoc;
