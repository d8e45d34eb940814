//! # Inbound Order Service
//!
//! Field checks run before the duplicate check, so an order that is both
//! incomplete and a duplicate is reported as invalid. References to the
//! employee, batch and warehouse are enforced by the schema.

use tracing::info;
use wms_core::validation::validate_inbound_order;
use wms_core::{EmployeeInboundOrdersReport, InboundOrder};
use wms_db::InboundOrderRepository;

use crate::error::{ServiceError, ServiceResult};

pub struct InboundOrderService {
    orders: InboundOrderRepository,
}

impl InboundOrderService {
    pub fn new(orders: InboundOrderRepository) -> Self {
        InboundOrderService { orders }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<InboundOrder>> {
        Ok(self.orders.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<InboundOrder> {
        self.orders
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("InboundOrder", id))
    }

    pub async fn create(&self, order: InboundOrder) -> ServiceResult<InboundOrder> {
        validate_inbound_order(&order)?;

        if self
            .orders
            .get_by_order_number(&order.order_number)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict(format!(
                "inbound order {} already exists",
                order.order_number
            )));
        }

        let created = self.orders.insert(&order).await?;
        info!(
            id = created.id,
            order_number = %created.order_number,
            employee_id = created.employee_id,
            "Inbound order created"
        );
        Ok(created)
    }

    /// Inbound orders per employee. Zero reports every employee; an unknown
    /// employee id is not found.
    pub async fn inbound_orders_report(
        &self,
        employee_id: i64,
    ) -> ServiceResult<Vec<EmployeeInboundOrdersReport>> {
        let filter = (employee_id != 0).then_some(employee_id);
        let report = self.orders.report_by_employee(filter).await?;

        if filter.is_some() && report.is_empty() {
            return Err(ServiceError::not_found("Employee", employee_id));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use wms_db::{Database, DbError};

    struct Fixture {
        employee_id: i64,
        batch_id: i64,
        warehouse_id: i64,
    }

    async fn fixture(db: &Database) -> Fixture {
        let batch = test_support::product_batch(db, 1).await;
        let warehouse = test_support::warehouse(db, "DHM").await;
        let employee = test_support::employee(db, "E-1", warehouse.id).await;
        Fixture {
            employee_id: employee.id,
            batch_id: batch.id,
            warehouse_id: warehouse.id,
        }
    }

    fn order(number: &str, f: &Fixture) -> InboundOrder {
        InboundOrder {
            id: 0,
            order_date: "2021-04-04".to_string(),
            order_number: number.to_string(),
            employee_id: f.employee_id,
            product_batch_id: f.batch_id,
            warehouse_id: f.warehouse_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_support::database().await;
        let f = fixture(&db).await;
        let svc = InboundOrderService::new(db.inbound_orders());

        let created = svc.create(order("order#1", &f)).await.unwrap();
        assert_ne!(created.id, 0);
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
        assert_eq!(svc.get_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_duplicate_conflicts() {
        let db = test_support::database().await;
        let f = fixture(&db).await;
        let svc = InboundOrderService::new(db.inbound_orders());

        svc.create(order("order#1", &f)).await.unwrap();
        let err = svc.create(order("order#1", &f)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_missing_field_wins_over_duplicate() {
        let db = test_support::database().await;
        let f = fixture(&db).await;
        let svc = InboundOrderService::new(db.inbound_orders());
        svc.create(order("order#1", &f)).await.unwrap();

        let mut input = order("order#1", &f);
        input.employee_id = 0;
        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_dangling_reference_is_a_storage_conflict() {
        let db = test_support::database().await;
        let f = fixture(&db).await;
        let svc = InboundOrderService::new(db.inbound_orders());

        let mut input = order("order#2", &f);
        input.product_batch_id = 99;
        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Storage(DbError::ForeignKeyViolation { .. })
        ));
    }

    #[tokio::test]
    async fn test_report() {
        let db = test_support::database().await;
        let f = fixture(&db).await;
        let svc = InboundOrderService::new(db.inbound_orders());
        svc.create(order("order#1", &f)).await.unwrap();
        svc.create(order("order#2", &f)).await.unwrap();

        let report = svc.inbound_orders_report(f.employee_id).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].inbound_orders_count, 2);

        assert_eq!(svc.inbound_orders_report(0).await.unwrap().len(), 1);
        assert!(matches!(
            svc.inbound_orders_report(404).await,
            Err(ServiceError::NotFound { .. })
        ));
    }
}
