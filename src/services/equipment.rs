//! Equipment service
//!
//! Carries the two policies of the storage contract: writes are validated
//! before any query is issued, and lookups that match nothing are reported
//! as not-found rather than as an empty success.

use crate::{
    error::{AppError, AppResult, LookupField},
    models::equipment::{CreateEquipment, Equipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate, then insert
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let input = data.validated()?;
        self.repository.equipment.create(&input).await
    }

    /// List every record; an empty table is a not-found condition for the
    /// unfiltered list
    pub async fn list_all(&self) -> AppResult<Vec<Equipment>> {
        let rows = self.repository.equipment.list_all().await?;
        if rows.is_empty() {
            return Err(AppError::EmptyStorage);
        }
        Ok(rows)
    }

    /// Find by id; the raw path segment is echoed back when nothing matches
    pub async fn find_by_id(&self, id: &str) -> AppResult<Vec<Equipment>> {
        let rows = match parse_id(id) {
            Some(row_id) => self.repository.equipment.find_by_id(row_id).await?,
            // A non-numeric id cannot match any row.
            None => Vec::new(),
        };
        if rows.is_empty() {
            return Err(AppError::NotFound {
                field: LookupField::Id,
                value: id.to_string(),
            });
        }
        Ok(rows)
    }

    pub async fn find_by_type(&self, equipment_type: &str) -> AppResult<Vec<Equipment>> {
        let rows = self.repository.equipment.find_by_type(equipment_type).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound {
                field: LookupField::Type,
                value: equipment_type.to_string(),
            });
        }
        Ok(rows)
    }

    pub async fn find_by_warehouse(&self, warehouse: &str) -> AppResult<Vec<Equipment>> {
        let rows = self.repository.equipment.find_by_warehouse(warehouse).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound {
                field: LookupField::Warehouse,
                value: warehouse.to_string(),
            });
        }
        Ok(rows)
    }

    /// Validate, then overwrite all three fields of the addressed row.
    ///
    /// Zero rows affected means no such id and is reported as not-found
    /// instead of silent success.
    pub async fn update(&self, id: &str, data: &CreateEquipment) -> AppResult<()> {
        let input = data.validated().map_err(|e| e.for_row(id))?;

        let affected = match parse_id(id) {
            Some(row_id) => self
                .repository
                .equipment
                .update(row_id, &input)
                .await
                .map_err(|e| e.for_row(id))?,
            None => 0,
        };
        if affected == 0 {
            return Err(AppError::NotFound {
                field: LookupField::Id,
                value: id.to_string(),
            });
        }
        Ok(())
    }

    /// Remove the addressed row; zero rows affected is reported as
    /// not-found, so a repeated delete of the same id fails
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let affected = match parse_id(id) {
            Some(row_id) => self
                .repository
                .equipment
                .delete(row_id)
                .await
                .map_err(|e| e.for_row(id))?,
            None => 0,
        };
        if affected == 0 {
            return Err(AppError::NotFound {
                field: LookupField::Id,
                value: id.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok()
}
