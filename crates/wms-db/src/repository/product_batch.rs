//! # Product Batch Repository
//!
//! Batches of a product stored in a section, plus the stock-per-section
//! report (sum of `current_quantity` over a section's batches).

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use wms_core::{ProductBatch, SectionProductsReport};

#[derive(Debug, Clone)]
pub struct ProductBatchRepository {
    pool: SqlitePool,
}

impl ProductBatchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductBatchRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<ProductBatch>> {
        let batches = sqlx::query_as::<_, ProductBatch>(
            r#"
            SELECT id, batch_number, current_quantity, initial_quantity,
                   current_temperature, minimum_temperature, due_date,
                   manufacturing_date, manufacturing_hour, product_id, section_id
            FROM product_batches
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(batches)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ProductBatch>> {
        let batch = sqlx::query_as::<_, ProductBatch>(
            r#"
            SELECT id, batch_number, current_quantity, initial_quantity,
                   current_temperature, minimum_temperature, due_date,
                   manufacturing_date, manufacturing_hour, product_id, section_id
            FROM product_batches
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(batch)
    }

    pub async fn get_by_batch_number(&self, batch_number: i64) -> DbResult<Option<ProductBatch>> {
        let batch = sqlx::query_as::<_, ProductBatch>(
            r#"
            SELECT id, batch_number, current_quantity, initial_quantity,
                   current_temperature, minimum_temperature, due_date,
                   manufacturing_date, manufacturing_hour, product_id, section_id
            FROM product_batches
            WHERE batch_number = ?1
            "#,
        )
        .bind(batch_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(batch)
    }

    pub async fn insert(&self, batch: &ProductBatch) -> DbResult<ProductBatch> {
        debug!(batch_number = batch.batch_number, "Inserting product batch");

        let result = sqlx::query(
            r#"
            INSERT INTO product_batches (
                batch_number, current_quantity, initial_quantity,
                current_temperature, minimum_temperature, due_date,
                manufacturing_date, manufacturing_hour, product_id, section_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(batch.batch_number)
        .bind(batch.current_quantity)
        .bind(batch.initial_quantity)
        .bind(batch.current_temperature)
        .bind(batch.minimum_temperature)
        .bind(&batch.due_date)
        .bind(&batch.manufacturing_date)
        .bind(batch.manufacturing_hour)
        .bind(batch.product_id)
        .bind(batch.section_id)
        .execute(&self.pool)
        .await?;

        Ok(ProductBatch {
            id: result.last_insert_rowid(),
            ..batch.clone()
        })
    }

    /// Units in stock per section. `None` reports every section; a section
    /// without batches reports zero.
    pub async fn report_by_section(
        &self,
        section_id: Option<i64>,
    ) -> DbResult<Vec<SectionProductsReport>> {
        let rows = sqlx::query_as::<_, SectionProductsReport>(
            r#"
            SELECT
                s.id AS section_id,
                s.section_number AS section_number,
                COALESCE(SUM(pb.current_quantity), 0) AS products_count
            FROM sections s
            LEFT JOIN product_batches pb ON pb.section_id = s.id
            WHERE ?1 IS NULL OR s.id = ?1
            GROUP BY s.id, s.section_number
            ORDER BY s.id
            "#,
        )
        .bind(section_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
