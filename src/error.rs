//! Error types for the StorageIT server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Generic failure message used by the write routes and the empty-table case
pub const MSG_CHECK_INPUT: &str =
    "It looks like something went wrong, check your input and try again";

/// Field a single-key lookup filtered on; doubles as the JSON key echoed
/// back in the not-found body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Id,
    Type,
    Warehouse,
}

impl LookupField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupField::Id => "id",
            LookupField::Type => "type",
            LookupField::Warehouse => "warehouse",
        }
    }

    fn not_found_message(&self) -> &'static str {
        match self {
            LookupField::Id => "It looks like this item was not found in our storage",
            LookupField::Type => "It looks like this type was not found in our storage",
            LookupField::Warehouse => "It looks like this warehouse was not found in our storage",
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing required field `{0}`")]
    Validation(&'static str),

    #[error("no record matching {}=`{}`", .field.as_str(), .value)]
    NotFound { field: LookupField, value: String },

    #[error("storage is empty")]
    EmptyStorage,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A write addressing a specific row failed; the row id is echoed back
    /// in the error body per the storage contract.
    #[error("write to row `{id}` failed: {reason}")]
    RowWrite { id: String, reason: String },
}

impl AppError {
    /// Tag a validation or database failure with the row id the route
    /// addressed, switching it to the 404 `{error, id, message}` shape the
    /// update and delete routes report.
    pub fn for_row(self, id: &str) -> Self {
        match self {
            AppError::Validation(_) | AppError::Database(_) => AppError::RowWrite {
                id: id.to_string(),
                reason: self.to_string(),
            },
            other => other,
        }
    }
}

/// Error response body. `error` is the underlying error description, or
/// `null` for a plain not-found; exactly one of the key fields is set when
/// the failing route addressed a single key.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    pub message: String,
}

impl ErrorBody {
    fn new(error: Option<String>, message: &str) -> Self {
        Self {
            error,
            id: None,
            equipment_type: None,
            warehouse: None,
            message: message.to_string(),
        }
    }

    /// Not-found body echoing the lookup key under its own JSON name
    fn keyed(field: LookupField, value: String) -> Self {
        let mut body = Self::new(None, field.not_found_message());
        match field {
            LookupField::Id => body.id = Some(value),
            LookupField::Type => body.equipment_type = Some(value),
            LookupField::Warehouse => body.warehouse = Some(value),
        }
        body
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(Some(self.to_string()), MSG_CHECK_INPUT),
            ),
            AppError::Database(ref e) => {
                tracing::error!("database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(Some(self.to_string()), MSG_CHECK_INPUT),
                )
            }
            AppError::EmptyStorage => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(None, MSG_CHECK_INPUT),
            ),
            AppError::NotFound { field, value } => {
                (StatusCode::NOT_FOUND, ErrorBody::keyed(field, value))
            }
            AppError::RowWrite { id, reason } => {
                let mut body = ErrorBody::new(Some(reason), MSG_CHECK_INPUT);
                body.id = Some(id);
                (StatusCode::NOT_FOUND, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
