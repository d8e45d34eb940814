//! # Purchase Order Repository
//!
//! Purchase orders plus the per-buyer summary (order count and the order
//! numbers themselves).

use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::{BuyerPurchaseOrdersReport, PurchaseOrder};

/// Raw report row. Order numbers come back as a JSON array (`[]` when the
/// buyer has no orders).
#[derive(Debug, FromRow)]
struct BuyerOrdersRow {
    id: i64,
    card_number_id: String,
    first_name: String,
    last_name: String,
    purchase_orders_count: i64,
    order_codes: String,
}

impl TryFrom<BuyerOrdersRow> for BuyerPurchaseOrdersReport {
    type Error = DbError;

    fn try_from(row: BuyerOrdersRow) -> DbResult<Self> {
        let mut order_codes: Vec<String> = serde_json::from_str(&row.order_codes)
            .map_err(|e| DbError::Internal(format!("order codes for buyer {}: {e}", row.id)))?;
        order_codes.sort();

        Ok(BuyerPurchaseOrdersReport {
            id: row.id,
            card_number_id: row.card_number_id,
            first_name: row.first_name,
            last_name: row.last_name,
            purchase_orders_count: row.purchase_orders_count,
            order_codes,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PurchaseOrderRepository {
    pool: SqlitePool,
}

impl PurchaseOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseOrderRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<PurchaseOrder>> {
        let orders = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT id, order_number, order_date, tracking_code, buyer_id, product_record_id
            FROM purchase_orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<PurchaseOrder>> {
        let order = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT id, order_number, order_date, tracking_code, buyer_id, product_record_id
            FROM purchase_orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn get_by_order_number(&self, order_number: &str) -> DbResult<Option<PurchaseOrder>> {
        let order = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT id, order_number, order_date, tracking_code, buyer_id, product_record_id
            FROM purchase_orders
            WHERE order_number = ?1
            "#,
        )
        .bind(order_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn insert(&self, order: &PurchaseOrder) -> DbResult<PurchaseOrder> {
        debug!(order_number = %order.order_number, "Inserting purchase order");

        let result = sqlx::query(
            r#"
            INSERT INTO purchase_orders (
                order_number, order_date, tracking_code, buyer_id, product_record_id
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&order.order_number)
        .bind(&order.order_date)
        .bind(&order.tracking_code)
        .bind(order.buyer_id)
        .bind(order.product_record_id)
        .execute(&self.pool)
        .await?;

        Ok(PurchaseOrder {
            id: result.last_insert_rowid(),
            ..order.clone()
        })
    }

    /// Purchase orders per buyer. `None` reports every buyer, including the
    /// ones without orders.
    pub async fn report_by_buyer(
        &self,
        buyer_id: Option<i64>,
    ) -> DbResult<Vec<BuyerPurchaseOrdersReport>> {
        let rows = sqlx::query_as::<_, BuyerOrdersRow>(
            r#"
            SELECT
                b.id AS id,
                b.card_number_id AS card_number_id,
                b.first_name AS first_name,
                b.last_name AS last_name,
                COUNT(p.id) AS purchase_orders_count,
                json_group_array(p.order_number) FILTER (WHERE p.id IS NOT NULL) AS order_codes
            FROM buyers b
            LEFT JOIN purchase_orders p ON p.buyer_id = b.id
            WHERE ?1 IS NULL OR b.id = ?1
            GROUP BY b.id, b.card_number_id, b.first_name, b.last_name
            ORDER BY b.id
            "#,
        )
        .bind(buyer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;
    use crate::DbError;
    use wms_core::Buyer;

    async fn buyer(db: &crate::Database, card: &str) -> Buyer {
        db.buyers()
            .insert(&Buyer {
                id: 0,
                card_number_id: card.to_string(),
                first_name: "Ana".to_string(),
                last_name: "Diaz".to_string(),
            })
            .await
            .unwrap()
    }

    /// Seller, product type, product and one product record (all id 1).
    async fn product_record(db: &crate::Database) {
        test_support::locality(db, 6700, "Lujan").await;
        sqlx::raw_sql(
            r#"
            INSERT INTO sellers (cid, company_name, address, telephone, locality_id) VALUES (1, 'S', 'A', 'T', 6700);
            INSERT INTO product_types (description) VALUES ('Frozen');
            INSERT INTO products (product_code, description, width, height, length, net_weight,
                expiration_rate, recommended_freezing_temperature, freezing_rate, product_type_id, seller_id)
                VALUES ('P1', 'Peas', 1, 1, 1, 1, 1, -18, 1, 1, 1);
            INSERT INTO product_records (last_update_date, purchase_price, sale_price, product_id)
                VALUES ('2024-01-01', 10, 15, 1);
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();
    }

    fn order(number: &str, buyer_id: i64) -> PurchaseOrder {
        PurchaseOrder {
            id: 0,
            order_number: number.to_string(),
            order_date: "2024-02-01".to_string(),
            tracking_code: "TRK".to_string(),
            buyer_id,
            product_record_id: 1,
        }
    }

    #[tokio::test]
    async fn test_order_number_is_unique() {
        let db = test_support::database().await;
        let buyer = buyer(&db, "B-1").await;
        product_record(&db).await;

        let created = db.purchase_orders().insert(&order("ORD-1", buyer.id)).await.unwrap();
        assert_eq!(
            db.purchase_orders().get_by_order_number("ORD-1").await.unwrap(),
            Some(created)
        );

        let err = db
            .purchase_orders()
            .insert(&order("ORD-1", buyer.id))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_report_by_buyer() {
        let db = test_support::database().await;
        let with_orders = buyer(&db, "B-1").await;
        let without = buyer(&db, "B-2").await;
        product_record(&db).await;

        for number in ["ORD-2", "ORD-1"] {
            db.purchase_orders()
                .insert(&order(number, with_orders.id))
                .await
                .unwrap();
        }

        let all = db.purchase_orders().report_by_buyer(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].purchase_orders_count, 2);
        assert_eq!(all[0].order_codes, vec!["ORD-1", "ORD-2"]);
        assert_eq!(all[1].purchase_orders_count, 0);
        assert!(all[1].order_codes.is_empty());

        let one = db
            .purchase_orders()
            .report_by_buyer(Some(without.id))
            .await
            .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].card_number_id, "B-2");
    }

    #[tokio::test]
    async fn test_report_keeps_order_numbers_with_commas() {
        let db = test_support::database().await;
        let buyer = buyer(&db, "B-1").await;
        product_record(&db).await;

        db.purchase_orders()
            .insert(&order("ORD,1", buyer.id))
            .await
            .unwrap();

        let report = db
            .purchase_orders()
            .report_by_buyer(Some(buyer.id))
            .await
            .unwrap();
        assert_eq!(report[0].purchase_orders_count, 1);
        assert_eq!(report[0].order_codes, vec!["ORD,1"]);
    }
}
