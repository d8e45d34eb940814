//! # Product Record Repository
//!
//! Price history for products. Records are append-only.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use wms_core::ProductRecord;

#[derive(Debug, Clone)]
pub struct ProductRecordRepository {
    pool: SqlitePool,
}

impl ProductRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRecordRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<ProductRecord>> {
        let records = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, last_update_date, purchase_price, sale_price, product_id
            FROM product_records
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ProductRecord>> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, last_update_date, purchase_price, sale_price, product_id
            FROM product_records
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn insert(&self, record: &ProductRecord) -> DbResult<ProductRecord> {
        debug!(product_id = record.product_id, "Inserting product record");

        let result = sqlx::query(
            r#"
            INSERT INTO product_records (last_update_date, purchase_price, sale_price, product_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&record.last_update_date)
        .bind(record.purchase_price)
        .bind(record.sale_price)
        .bind(record.product_id)
        .execute(&self.pool)
        .await?;

        Ok(ProductRecord {
            id: result.last_insert_rowid(),
            ..record.clone()
        })
    }
}
