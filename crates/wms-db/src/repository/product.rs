//! # Product Repository
//!
//! Products and the price-record count per product.
//!
//! ## Product Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Product Code Uniqueness                               │
//! │                                                                         │
//! │  POST /api/v1/products { product_code: "FRZ-001", ... }                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductService::save                                                  │
//! │       │                                                                 │
//! │       │  products.get_by_code("FRZ-001")                               │
//! │       ▼                                                                 │
//! │  Some(_) → Conflict (409)                                              │
//! │  None    → products.insert(product)                                    │
//! │                │                                                        │
//! │                └── UNIQUE(product_code) catches the concurrent case    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::{Product, ProductRecordsReport};

#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_code, description, width, height, length, net_weight,
                   expiration_rate, recommended_freezing_temperature, freezing_rate,
                   product_type_id, seller_id
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_code, description, width, height, length, net_weight,
                   expiration_rate, recommended_freezing_temperature, freezing_rate,
                   product_type_id, seller_id
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by its business code (exact match).
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_code, description, width, height, length, net_weight,
                   expiration_rate, recommended_freezing_temperature, freezing_rate,
                   product_type_id, seller_id
            FROM products
            WHERE product_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a product and returns it with its new id.
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        debug!(code = %product.product_code, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (
                product_code, description, width, height, length, net_weight,
                expiration_rate, recommended_freezing_temperature, freezing_rate,
                product_type_id, seller_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(&product.product_code)
        .bind(&product.description)
        .bind(product.width)
        .bind(product.height)
        .bind(product.length)
        .bind(product.net_weight)
        .bind(product.expiration_rate)
        .bind(product.recommended_freezing_temperature)
        .bind(product.freezing_rate)
        .bind(product.product_type_id)
        .bind(product.seller_id)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            ..product.clone()
        })
    }

    /// Overwrites every column of an existing product.
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                product_code = ?2,
                description = ?3,
                width = ?4,
                height = ?5,
                length = ?6,
                net_weight = ?7,
                expiration_rate = ?8,
                recommended_freezing_temperature = ?9,
                freezing_rate = ?10,
                product_type_id = ?11,
                seller_id = ?12
            WHERE id = ?1
            "#,
        )
        .bind(product.id)
        .bind(&product.product_code)
        .bind(&product.description)
        .bind(product.width)
        .bind(product.height)
        .bind(product.length)
        .bind(product.net_weight)
        .bind(product.expiration_rate)
        .bind(product.recommended_freezing_temperature)
        .bind(product.freezing_rate)
        .bind(product.product_type_id)
        .bind(product.seller_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Price records per product. `None` reports every product.
    pub async fn records_report(&self, id: Option<i64>) -> DbResult<Vec<ProductRecordsReport>> {
        let rows = sqlx::query_as::<_, ProductRecordsReport>(
            r#"
            SELECT
                p.id AS product_id,
                p.description AS description,
                COUNT(r.id) AS records_count
            FROM products p
            LEFT JOIN product_records r ON r.product_id = p.id
            WHERE ?1 IS NULL OR p.id = ?1
            GROUP BY p.id, p.description
            ORDER BY p.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;
    use wms_core::ProductRecord;

    #[tokio::test]
    async fn test_get_by_code() {
        let db = test_support::database().await;
        let created = test_support::product(&db, "FRZ-001").await;

        assert_eq!(db.products().get_by_code("FRZ-001").await.unwrap(), Some(created));
        assert!(db.products().get_by_code("frz-001").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_product() {
        let db = test_support::database().await;
        let mut created = test_support::product(&db, "FRZ-001").await;

        created.net_weight = 2.5;
        db.products().update(&created).await.unwrap();

        let stored = db.products().get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.net_weight, 2.5);
    }

    #[tokio::test]
    async fn test_records_report() {
        let db = test_support::database().await;
        let created = test_support::product(&db, "FRZ-001").await;

        for date in ["2024-01-01", "2024-02-01", "2024-03-01"] {
            db.product_records()
                .insert(&ProductRecord {
                    id: 0,
                    last_update_date: date.to_string(),
                    purchase_price: 10.0,
                    sale_price: 12.0,
                    product_id: created.id,
                })
                .await
                .unwrap();
        }

        let report = db.products().records_report(None).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].records_count, 3);
        assert_eq!(report[0].description, "Green peas");

        assert!(db.products().records_report(Some(999)).await.unwrap().is_empty());
    }
}
