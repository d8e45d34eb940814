//! # Inbound Order Repository
//!
//! Inbound orders plus the per-employee order count.
//!
//! Inbound orders are validated only for shape by the service; the
//! referenced employee, batch and warehouse are enforced by foreign keys.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use wms_core::{EmployeeInboundOrdersReport, InboundOrder};

#[derive(Debug, Clone)]
pub struct InboundOrderRepository {
    pool: SqlitePool,
}

impl InboundOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        InboundOrderRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<InboundOrder>> {
        let orders = sqlx::query_as::<_, InboundOrder>(
            r#"
            SELECT id, order_date, order_number, employee_id, product_batch_id, warehouse_id
            FROM inbound_orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<InboundOrder>> {
        let order = sqlx::query_as::<_, InboundOrder>(
            r#"
            SELECT id, order_date, order_number, employee_id, product_batch_id, warehouse_id
            FROM inbound_orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn get_by_order_number(&self, order_number: &str) -> DbResult<Option<InboundOrder>> {
        let order = sqlx::query_as::<_, InboundOrder>(
            r#"
            SELECT id, order_date, order_number, employee_id, product_batch_id, warehouse_id
            FROM inbound_orders
            WHERE order_number = ?1
            "#,
        )
        .bind(order_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn insert(&self, order: &InboundOrder) -> DbResult<InboundOrder> {
        debug!(order_number = %order.order_number, "Inserting inbound order");

        let result = sqlx::query(
            r#"
            INSERT INTO inbound_orders (
                order_date, order_number, employee_id, product_batch_id, warehouse_id
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&order.order_date)
        .bind(&order.order_number)
        .bind(order.employee_id)
        .bind(order.product_batch_id)
        .bind(order.warehouse_id)
        .execute(&self.pool)
        .await?;

        Ok(InboundOrder {
            id: result.last_insert_rowid(),
            ..order.clone()
        })
    }

    /// Inbound orders handled per employee. `None` reports every employee.
    pub async fn report_by_employee(
        &self,
        employee_id: Option<i64>,
    ) -> DbResult<Vec<EmployeeInboundOrdersReport>> {
        let rows = sqlx::query_as::<_, EmployeeInboundOrdersReport>(
            r#"
            SELECT
                e.id AS id,
                e.card_number_id AS card_number_id,
                e.first_name AS first_name,
                e.last_name AS last_name,
                e.warehouse_id AS warehouse_id,
                COUNT(io.id) AS inbound_orders_count
            FROM employees e
            LEFT JOIN inbound_orders io ON io.employee_id = e.id
            WHERE ?1 IS NULL OR e.id = ?1
            GROUP BY e.id, e.card_number_id, e.first_name, e.last_name, e.warehouse_id
            ORDER BY e.id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;
    use crate::DbError;

    #[tokio::test]
    async fn test_dangling_references_are_rejected() {
        let db = test_support::database().await;

        let err = db
            .inbound_orders()
            .insert(&InboundOrder {
                id: 0,
                order_date: "2024-05-01".to_string(),
                order_number: "IN-1".to_string(),
                employee_id: 1,
                product_batch_id: 1,
                warehouse_id: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert!(db.inbound_orders().get_by_order_number("IN-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_report_by_employee() {
        let db = test_support::database().await;
        let warehouse = test_support::warehouse(&db, "WH-1").await;
        sqlx::query(
            "INSERT INTO employees (card_number_id, first_name, last_name, warehouse_id) VALUES ('E-1', 'Lucia', 'Gomez', ?1), ('E-2', 'Martin', 'Ruiz', ?1)",
        )
        .bind(warehouse.id)
        .execute(db.pool())
        .await
        .unwrap();

        let all = db.inbound_orders().report_by_employee(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|row| row.inbound_orders_count == 0));

        let one = db.inbound_orders().report_by_employee(Some(all[1].id)).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].card_number_id, "E-2");
        assert_eq!(one[0].warehouse_id, warehouse.id);

        assert!(db.inbound_orders().report_by_employee(Some(99)).await.unwrap().is_empty());
    }
}
