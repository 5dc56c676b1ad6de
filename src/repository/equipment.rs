//! Equipment repository
//!
//! Every query binds caller-supplied values; nothing is interpolated into
//! the SQL text.

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::equipment::{Equipment, NewEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a row; the id is assigned by storage
    pub async fn create(&self, data: &NewEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            "INSERT INTO equipment (quantity, type, warehouse) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(data.quantity)
        .bind(&data.equipment_type)
        .bind(&data.warehouse)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List every row; an empty vec is a valid, non-error result
    pub async fn list_all(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find by id: 0 or 1 row, returned as a sequence to match the
    /// response contract
    pub async fn find_by_id(&self, id: i64) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = ?")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Exact-match filter on type, case-sensitive
    pub async fn find_by_type(&self, equipment_type: &str) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE type = ?")
            .bind(equipment_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Exact-match filter on warehouse, case-sensitive
    pub async fn find_by_warehouse(&self, warehouse: &str) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE warehouse = ?")
            .bind(warehouse)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Overwrite all three mutable fields of the row matching `id`.
    ///
    /// Returns the number of rows affected; zero means no such row, which
    /// the storage engine does not report as an error.
    pub async fn update(&self, id: i64, data: &NewEquipment) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE equipment SET type = ?, quantity = ?, warehouse = ? WHERE id = ?")
                .bind(&data.equipment_type)
                .bind(data.quantity)
                .bind(&data.warehouse)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Remove the row matching `id`; returns the number of rows affected
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    // Each :memory: connection is its own database, so the pool is capped
    // at a single connection.
    async fn test_pool() -> Pool<Sqlite> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");
        pool
    }

    fn sample(equipment_type: &str, quantity: i64, warehouse: &str) -> NewEquipment {
        NewEquipment {
            equipment_type: equipment_type.to_string(),
            quantity,
            warehouse: warehouse.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_and_round_trips() {
        let repo = EquipmentRepository::new(test_pool().await);

        let created = repo.create(&sample("laptops", 355, "st_peters")).await.unwrap();
        let rows = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].equipment_type, "laptops");
        assert_eq!(rows[0].quantity, 355);
        assert_eq!(rows[0].warehouse, "st_peters");

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn ids_are_unique_across_inserts() {
        let repo = EquipmentRepository::new(test_pool().await);

        let a = repo.create(&sample("laptops", 1, "roker")).await.unwrap();
        let b = repo.create(&sample("laptops", 1, "roker")).await.unwrap();

        // Same type/warehouse pair is allowed; only ids differ.
        assert_ne!(a.id, b.id);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filters_match_exactly_and_case_sensitively() {
        let repo = EquipmentRepository::new(test_pool().await);
        repo.create(&sample("headphones", 65, "wearmouth")).await.unwrap();
        repo.create(&sample("graphic_cards", 221, "roker")).await.unwrap();

        assert_eq!(repo.find_by_type("headphones").await.unwrap().len(), 1);
        assert_eq!(repo.find_by_type("Headphones").await.unwrap().len(), 0);
        assert_eq!(repo.find_by_warehouse("roker").await.unwrap().len(), 1);
        assert_eq!(repo.find_by_warehouse("gateshead").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let repo = EquipmentRepository::new(test_pool().await);
        let created = repo.create(&sample("iphones", 10, "roker")).await.unwrap();

        let affected = repo
            .update(created.id, &sample("iphones", 143, "st_peters"))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let rows = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(rows[0].quantity, 143);
        assert_eq!(rows[0].warehouse, "st_peters");
    }

    #[tokio::test]
    async fn update_and_delete_report_zero_rows_for_unknown_id() {
        let repo = EquipmentRepository::new(test_pool().await);

        assert_eq!(repo.update(999, &sample("laptops", 1, "roker")).await.unwrap(), 0);
        assert_eq!(repo.delete(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = EquipmentRepository::new(test_pool().await);
        let created = repo.create(&sample("tablets", 8, "roker")).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), 1);
        assert!(repo.find_by_id(created.id).await.unwrap().is_empty());
        // A second delete matches nothing.
        assert_eq!(repo.delete(created.id).await.unwrap(), 0);
    }
}
