use std::sync::Arc;

use tracing::info;
use wms_core::validation::validate_product_record;
use wms_core::ProductRecord;
use wms_db::ProductRecordRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::ProductLookup;

pub struct ProductRecordService {
    records: ProductRecordRepository,
    products: Arc<dyn ProductLookup>,
}

impl ProductRecordService {
    pub fn new(records: ProductRecordRepository, products: Arc<dyn ProductLookup>) -> Self {
        ProductRecordService { records, products }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<ProductRecord>> {
        Ok(self.records.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<ProductRecord> {
        self.records
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ProductRecord", id))
    }

    pub async fn save(&self, record: ProductRecord) -> ServiceResult<ProductRecord> {
        validate_product_record(&record)?;

        if self.products.find_product(record.product_id).await?.is_none() {
            return Err(ServiceError::unknown_reference("product", record.product_id));
        }

        let created = self.records.insert(&record).await?;
        info!(id = created.id, product_id = created.product_id, "Product record created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn record(product_id: i64) -> ProductRecord {
        ProductRecord {
            id: 0,
            last_update_date: "2021-04-04".to_string(),
            purchase_price: 10.5,
            sale_price: 15.0,
            product_id,
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let db = test_support::database().await;
        let product = test_support::product(&db, "PRD-1").await;
        let svc = ProductRecordService::new(db.product_records(), Arc::new(db.products()));

        let created = svc.save(record(product.id)).await.unwrap();
        assert_eq!(ProductRecord { id: 0, ..created.clone() }, record(product.id));
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_rules() {
        let db = test_support::database().await;
        let svc = ProductRecordService::new(db.product_records(), Arc::new(db.products()));

        let mut bad_date = record(1);
        bad_date.last_update_date = "2021-13-40".to_string();
        assert!(matches!(
            svc.save(bad_date).await,
            Err(ServiceError::InvalidArguments(_))
        ));
        assert!(matches!(
            svc.save(record(42)).await,
            Err(ServiceError::InvalidArguments(_))
        ));
        assert!(matches!(
            svc.get_by_id(42).await,
            Err(ServiceError::NotFound { .. })
        ));
    }
}
