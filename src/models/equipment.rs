//! Equipment model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Equipment record, one row of the equipment table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    /// Unique identifier, assigned by storage on insert
    pub id: i64,
    /// Category label, free-form
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub equipment_type: String,
    /// Number of units stored; zero and negative values are accepted
    pub quantity: i64,
    /// Location label, free-form
    pub warehouse: String,
}

/// Create / update request body.
///
/// All three fields are required; an update overwrites every field, so
/// create and update share this payload. Fields are optional at the serde
/// level so presence can be checked against the storage contract instead of
/// rejected by the body parser.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipment {
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub quantity: Option<i64>,
    pub warehouse: Option<String>,
}

/// Validated form of [`CreateEquipment`], ready to be bound into a query
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub equipment_type: String,
    pub quantity: i64,
    pub warehouse: String,
}

impl CreateEquipment {
    /// Check field presence, before any write is issued.
    ///
    /// `type` and `warehouse` must be present and non-empty; `quantity`
    /// must be present but carries no range constraint.
    pub fn validated(&self) -> AppResult<NewEquipment> {
        let equipment_type = match self.equipment_type.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => return Err(AppError::Validation("type")),
        };
        let quantity = self.quantity.ok_or(AppError::Validation("quantity"))?;
        let warehouse = match self.warehouse.as_deref() {
            Some(w) if !w.is_empty() => w.to_string(),
            _ => return Err(AppError::Validation("warehouse")),
        };

        Ok(NewEquipment {
            equipment_type,
            quantity,
            warehouse,
        })
    }
}
