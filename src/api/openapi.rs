//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, storage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "StorageIT API",
        version = "1.0.0",
        description = "Equipment Inventory REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Storage
        storage::create_record,
        storage::list_records,
        storage::get_record,
        storage::list_by_type,
        storage::list_by_warehouse,
        storage::update_record,
        storage::delete_record,
    ),
    components(
        schemas(
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            storage::StatusBody,
            health::HealthResponse,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "storage", description = "Equipment inventory CRUD")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
