//! # Warehouse Repository
//!
//! Warehouse codes are unique regardless of case. Each row also stores
//! `code_key`, the Unicode-lowercased code, which carries the UNIQUE
//! constraint and serves lookups. SQLite's `NOCASE` only folds ASCII.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::Warehouse;

fn code_key(code: &str) -> String {
    code.to_lowercase()
}

#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    pool: SqlitePool,
}

impl WarehouseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        WarehouseRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Warehouse>> {
        let warehouses = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, warehouse_code, address, telephone, locality_id,
                   minimum_capacity, minimum_temperature
            FROM warehouses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(warehouses)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Warehouse>> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, warehouse_code, address, telephone, locality_id,
                   minimum_capacity, minimum_temperature
            FROM warehouses
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(warehouse)
    }

    /// Finds a warehouse by code, ignoring case.
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<Warehouse>> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, warehouse_code, address, telephone, locality_id,
                   minimum_capacity, minimum_temperature
            FROM warehouses
            WHERE code_key = ?1
            "#,
        )
        .bind(code_key(code))
        .fetch_optional(&self.pool)
        .await?;

        Ok(warehouse)
    }

    pub async fn insert(&self, warehouse: &Warehouse) -> DbResult<Warehouse> {
        debug!(code = %warehouse.warehouse_code, "Inserting warehouse");

        let result = sqlx::query(
            r#"
            INSERT INTO warehouses (
                warehouse_code, code_key, address, telephone, locality_id,
                minimum_capacity, minimum_temperature
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&warehouse.warehouse_code)
        .bind(code_key(&warehouse.warehouse_code))
        .bind(&warehouse.address)
        .bind(&warehouse.telephone)
        .bind(warehouse.locality_id)
        .bind(warehouse.minimum_capacity)
        .bind(warehouse.minimum_temperature)
        .execute(&self.pool)
        .await?;

        Ok(Warehouse {
            id: result.last_insert_rowid(),
            ..warehouse.clone()
        })
    }

    pub async fn update(&self, warehouse: &Warehouse) -> DbResult<()> {
        debug!(id = warehouse.id, "Updating warehouse");

        let result = sqlx::query(
            r#"
            UPDATE warehouses SET
                warehouse_code = ?2,
                code_key = ?3,
                address = ?4,
                telephone = ?5,
                locality_id = ?6,
                minimum_capacity = ?7,
                minimum_temperature = ?8
            WHERE id = ?1
            "#,
        )
        .bind(warehouse.id)
        .bind(&warehouse.warehouse_code)
        .bind(code_key(&warehouse.warehouse_code))
        .bind(&warehouse.address)
        .bind(&warehouse.telephone)
        .bind(warehouse.locality_id)
        .bind(warehouse.minimum_capacity)
        .bind(warehouse.minimum_temperature)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Warehouse", warehouse.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting warehouse");

        let result = sqlx::query("DELETE FROM warehouses WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Warehouse", id));
        }

        Ok(())
    }
}
