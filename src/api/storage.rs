//! Storage API endpoints
//!
//! One handler per route of the storage contract. Handlers stay thin: the
//! equipment service validates input and decides the not-found cases, and
//! [`crate::error::AppError`] carries the status and body shape back.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorBody},
    models::equipment::{CreateEquipment, Equipment},
};

/// Success response body; `error` is always empty, for symmetry with the
/// failure shape
#[derive(Serialize, ToSchema)]
pub struct StatusBody {
    pub error: String,
    pub message: String,
}

impl StatusBody {
    fn ok(message: &str) -> Self {
        Self {
            error: String::new(),
            message: message.to_string(),
        }
    }
}

/// Store a new record
#[utoipa::path(
    post,
    path = "/storage",
    tag = "storage",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Record created", body = StatusBody),
        (status = 500, description = "Missing field or write failure", body = ErrorBody)
    )
)]
pub async fn create_record(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<StatusBody>)> {
    state.services.equipment.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusBody::ok("Record created successfully!")),
    ))
}

/// Display all stored records
#[utoipa::path(
    get,
    path = "/storage",
    tag = "storage",
    responses(
        (status = 200, description = "All records", body = Vec<Equipment>),
        (status = 404, description = "Storage is empty", body = ErrorBody)
    )
)]
pub async fn list_records(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Equipment>>> {
    let records = state.services.equipment.list_all().await?;
    Ok(Json(records))
}

/// Read a specific record by id
#[utoipa::path(
    get,
    path = "/storage/{id}",
    tag = "storage",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Matching record", body = Vec<Equipment>),
        (status = 404, description = "No record with this id", body = ErrorBody)
    )
)]
pub async fn get_record(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Equipment>>> {
    let records = state.services.equipment.find_by_id(&id).await?;
    Ok(Json(records))
}

/// Read records by type
#[utoipa::path(
    get,
    path = "/storage/type/{type}",
    tag = "storage",
    params(("type" = String, Path, description = "Equipment type")),
    responses(
        (status = 200, description = "Matching records", body = Vec<Equipment>),
        (status = 404, description = "No record of this type", body = ErrorBody)
    )
)]
pub async fn list_by_type(
    State(state): State<crate::AppState>,
    Path(equipment_type): Path<String>,
) -> AppResult<Json<Vec<Equipment>>> {
    let records = state.services.equipment.find_by_type(&equipment_type).await?;
    Ok(Json(records))
}

/// Read records by warehouse
#[utoipa::path(
    get,
    path = "/storage/warehouse/{warehouse}",
    tag = "storage",
    params(("warehouse" = String, Path, description = "Warehouse name")),
    responses(
        (status = 200, description = "Matching records", body = Vec<Equipment>),
        (status = 404, description = "No record in this warehouse", body = ErrorBody)
    )
)]
pub async fn list_by_warehouse(
    State(state): State<crate::AppState>,
    Path(warehouse): Path<String>,
) -> AppResult<Json<Vec<Equipment>>> {
    let records = state.services.equipment.find_by_warehouse(&warehouse).await?;
    Ok(Json(records))
}

/// Update an existing record
#[utoipa::path(
    put,
    path = "/storage/{id}",
    tag = "storage",
    params(("id" = String, Path, description = "Record identifier")),
    request_body = CreateEquipment,
    responses(
        (status = 200, description = "Record updated", body = StatusBody),
        (status = 404, description = "Missing field, write failure or no such id", body = ErrorBody)
    )
)]
pub async fn update_record(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<Json<StatusBody>> {
    state.services.equipment.update(&id, &data).await?;
    Ok(Json(StatusBody::ok("Record updated successfully!")))
}

/// Delete an existing record
#[utoipa::path(
    delete,
    path = "/storage/{id}",
    tag = "storage",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 202, description = "Record deleted", body = StatusBody),
        (status = 404, description = "Write failure or no such id", body = ErrorBody)
    )
)]
pub async fn delete_record(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<StatusBody>)> {
    state.services.equipment.delete(&id).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(StatusBody::ok("Record deleted successfully!")),
    ))
}
