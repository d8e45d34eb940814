//! # Product Type Repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::ProductType;

#[derive(Debug, Clone)]
pub struct ProductTypeRepository {
    pool: SqlitePool,
}

impl ProductTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductTypeRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<ProductType>> {
        let types =
            sqlx::query_as::<_, ProductType>("SELECT id, description FROM product_types ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(types)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ProductType>> {
        let product_type =
            sqlx::query_as::<_, ProductType>("SELECT id, description FROM product_types WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(product_type)
    }

    pub async fn insert(&self, product_type: &ProductType) -> DbResult<ProductType> {
        debug!(description = %product_type.description, "Inserting product type");

        let result = sqlx::query("INSERT INTO product_types (description) VALUES (?1)")
            .bind(&product_type.description)
            .execute(&self.pool)
            .await?;

        Ok(ProductType {
            id: result.last_insert_rowid(),
            ..product_type.clone()
        })
    }

    pub async fn update(&self, product_type: &ProductType) -> DbResult<()> {
        let result = sqlx::query("UPDATE product_types SET description = ?2 WHERE id = ?1")
            .bind(product_type.id)
            .bind(&product_type.description)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("ProductType", product_type.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product type");

        let result = sqlx::query("DELETE FROM product_types WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("ProductType", id));
        }

        Ok(())
    }
}
