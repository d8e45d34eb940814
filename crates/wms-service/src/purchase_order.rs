//! # Purchase Order Service
//!
//! A missing value on a purchase order is reported as
//! [`ServiceError::EmptyArguments`] rather than the usual invalid
//! arguments, and a missing buyer as [`ServiceError::BuyerDoesNotExist`].
//! An unknown product record is an invalid argument.

use std::sync::Arc;

use tracing::info;
use wms_core::validation::validate_purchase_order;
use wms_core::{BuyerPurchaseOrdersReport, PurchaseOrder};
use wms_db::PurchaseOrderRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::{BuyerLookup, ProductRecordLookup};

pub struct PurchaseOrderService {
    orders: PurchaseOrderRepository,
    buyers: Arc<dyn BuyerLookup>,
    product_records: Arc<dyn ProductRecordLookup>,
}

impl PurchaseOrderService {
    pub fn new(
        orders: PurchaseOrderRepository,
        buyers: Arc<dyn BuyerLookup>,
        product_records: Arc<dyn ProductRecordLookup>,
    ) -> Self {
        PurchaseOrderService {
            orders,
            buyers,
            product_records,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<PurchaseOrder>> {
        Ok(self.orders.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<PurchaseOrder> {
        self.orders
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("PurchaseOrder", id))
    }

    pub async fn create(&self, order: PurchaseOrder) -> ServiceResult<PurchaseOrder> {
        validate_purchase_order(&order).map_err(|err| {
            if err.is_missing_value() {
                ServiceError::EmptyArguments(err)
            } else {
                err.into()
            }
        })?;

        if self
            .orders
            .get_by_order_number(&order.order_number)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict(format!(
                "purchase order {} already exists",
                order.order_number
            )));
        }

        if self.buyers.find_buyer(order.buyer_id).await?.is_none() {
            return Err(ServiceError::BuyerDoesNotExist(order.buyer_id));
        }

        if self
            .product_records
            .find_product_record(order.product_record_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::unknown_reference(
                "product record",
                order.product_record_id,
            ));
        }

        let created = self.orders.insert(&order).await?;
        info!(
            id = created.id,
            order_number = %created.order_number,
            buyer_id = created.buyer_id,
            "Purchase order created"
        );
        Ok(created)
    }

    /// Orders summarised per buyer. Zero reports every buyer.
    pub async fn find_all_by_buyer_id(
        &self,
        buyer_id: i64,
    ) -> ServiceResult<Vec<BuyerPurchaseOrdersReport>> {
        if buyer_id == 0 {
            return Ok(self.orders.report_by_buyer(None).await?);
        }

        if self.buyers.find_buyer(buyer_id).await?.is_none() {
            return Err(ServiceError::BuyerDoesNotExist(buyer_id));
        }
        Ok(self.orders.report_by_buyer(Some(buyer_id)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use async_trait::async_trait;
    use wms_core::{Buyer, ValidationError};
    use wms_db::{Database, DbError, DbResult};

    /// Buyer lookup whose storage is down.
    struct BrokenBuyers;

    #[async_trait]
    impl BuyerLookup for BrokenBuyers {
        async fn find_buyer(&self, _id: i64) -> DbResult<Option<Buyer>> {
            Err(DbError::PoolExhausted)
        }
    }

    fn service(db: &Database) -> PurchaseOrderService {
        PurchaseOrderService::new(
            db.purchase_orders(),
            Arc::new(db.buyers()),
            Arc::new(db.product_records()),
        )
    }

    fn order(number: &str, buyer_id: i64, product_record_id: i64) -> PurchaseOrder {
        PurchaseOrder {
            id: 0,
            order_number: number.to_string(),
            order_date: "2021-04-04".to_string(),
            tracking_code: "abscf123".to_string(),
            buyer_id,
            product_record_id,
        }
    }

    async fn record(db: &Database) -> i64 {
        let product = test_support::product(db, "PRD-1").await;
        test_support::product_record(db, product.id).await.id
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_support::database().await;
        let buyer = test_support::buyer(&db, "402323").await;
        let record_id = record(&db).await;
        let svc = service(&db);

        let input = order("order#1", buyer.id, record_id);
        let created = svc.create(input.clone()).await.unwrap();

        assert_ne!(created.id, 0);
        assert_eq!(PurchaseOrder { id: 0, ..created.clone() }, input);
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_values_are_empty_arguments() {
        let db = test_support::database().await;
        let svc = service(&db);

        let err = svc.create(order("", 1, 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyArguments(_)));

        let err = svc.create(order("order#1", 0, 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyArguments(_)));
    }

    #[tokio::test]
    async fn test_malformed_date_is_invalid() {
        let db = test_support::database().await;
        let svc = service(&db);

        let mut input = order("order#1", 1, 1);
        input.order_date = "04/04/2021".to_string();
        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidArguments(crate::ArgumentError::Validation(
                ValidationError::InvalidFormat { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_order_number() {
        let db = test_support::database().await;
        let buyer = test_support::buyer(&db, "402323").await;
        let record_id = record(&db).await;
        let svc = service(&db);

        svc.create(order("order#1", buyer.id, record_id))
            .await
            .unwrap();
        let err = svc
            .create(order("order#1", buyer.id, record_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_missing_buyer() {
        let db = test_support::database().await;
        let svc = service(&db);

        let err = svc.create(order("order#1", 9, 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::BuyerDoesNotExist(9)));
    }

    #[tokio::test]
    async fn test_unknown_product_record_is_invalid() {
        let db = test_support::database().await;
        let buyer = test_support::buyer(&db, "402323").await;
        let svc = service(&db);

        let err = svc.create(order("order#1", buyer.id, 42)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidArguments(crate::ArgumentError::UnknownReference {
                entity: "product record",
                id: 42
            })
        ));
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_buyer_lookup_failure_propagates() {
        let db = test_support::database().await;
        let svc = PurchaseOrderService::new(
            db.purchase_orders(),
            Arc::new(BrokenBuyers),
            Arc::new(db.product_records()),
        );

        let err = svc.create(order("order#1", 9, 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(DbError::PoolExhausted)));
    }

    #[tokio::test]
    async fn test_report_by_buyer() {
        let db = test_support::database().await;
        let buyer = test_support::buyer(&db, "402323").await;
        let idle = test_support::buyer(&db, "402324").await;
        let record_id = record(&db).await;
        let svc = service(&db);
        svc.create(order("B", buyer.id, record_id)).await.unwrap();
        svc.create(order("A", buyer.id, record_id)).await.unwrap();

        let one = svc.find_all_by_buyer_id(buyer.id).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].purchase_orders_count, 2);
        assert_eq!(one[0].order_codes, vec!["A".to_string(), "B".to_string()]);

        let all = svc.find_all_by_buyer_id(0).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].id, idle.id);
        assert_eq!(all[1].purchase_orders_count, 0);

        assert!(matches!(
            svc.find_all_by_buyer_id(77).await,
            Err(ServiceError::BuyerDoesNotExist(77))
        ));
    }
}
