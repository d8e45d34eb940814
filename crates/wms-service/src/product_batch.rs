//! # Product Batch Service
//!
//! Unlike other services, a batch pointing at a missing section or product
//! is a conflict rather than invalid input.

use std::sync::Arc;

use tracing::info;
use wms_core::validation::validate_product_batch;
use wms_core::{ProductBatch, SectionProductsReport};
use wms_db::ProductBatchRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::{ProductLookup, SectionLookup};

pub struct ProductBatchService {
    batches: ProductBatchRepository,
    sections: Arc<dyn SectionLookup>,
    products: Arc<dyn ProductLookup>,
}

impl ProductBatchService {
    pub fn new(
        batches: ProductBatchRepository,
        sections: Arc<dyn SectionLookup>,
        products: Arc<dyn ProductLookup>,
    ) -> Self {
        ProductBatchService {
            batches,
            sections,
            products,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<ProductBatch>> {
        Ok(self.batches.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<ProductBatch> {
        self.batches
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ProductBatch", id))
    }

    pub async fn save(&self, batch: ProductBatch) -> ServiceResult<ProductBatch> {
        validate_product_batch(&batch)?;

        if self
            .batches
            .get_by_batch_number(batch.batch_number)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict(format!(
                "batch number {} already exists",
                batch.batch_number
            )));
        }

        if self.sections.find_section(batch.section_id).await?.is_none() {
            return Err(ServiceError::conflict(format!(
                "section {} does not exist",
                batch.section_id
            )));
        }

        if self.products.find_product(batch.product_id).await?.is_none() {
            return Err(ServiceError::conflict(format!(
                "product {} does not exist",
                batch.product_id
            )));
        }

        let created = self.batches.insert(&batch).await?;
        info!(
            id = created.id,
            batch_number = created.batch_number,
            section_id = created.section_id,
            "Product batch created"
        );
        Ok(created)
    }

    /// Units in stock per section. Zero reports every section.
    pub async fn products_by_section(
        &self,
        section_id: i64,
    ) -> ServiceResult<Vec<SectionProductsReport>> {
        if section_id == 0 {
            return Ok(self.batches.report_by_section(None).await?);
        }

        if self.sections.find_section(section_id).await?.is_none() {
            return Err(ServiceError::not_found("Section", section_id));
        }
        Ok(self.batches.report_by_section(Some(section_id)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use wms_db::Database;

    fn service(db: &Database) -> ProductBatchService {
        ProductBatchService::new(
            db.product_batches(),
            Arc::new(db.sections()),
            Arc::new(db.products()),
        )
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let db = test_support::database().await;
        let product = test_support::product(&db, "PRD-1").await;
        let section = test_support::section(&db, 1).await;
        let svc = service(&db);

        let input = test_support::batch(111, product.id, section.id);
        let created = svc.save(input.clone()).await.unwrap();

        assert_ne!(created.id, 0);
        assert_eq!(ProductBatch { id: 0, ..created.clone() }, input);
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_field_rules() {
        let db = test_support::database().await;
        let svc = service(&db);

        let mut input = test_support::batch(111, 1, 1);
        input.current_temperature = 0.0;
        assert!(matches!(
            svc.save(input).await,
            Err(ServiceError::InvalidArguments(_))
        ));

        let mut input = test_support::batch(111, 1, 1);
        input.due_date = String::new();
        assert!(matches!(
            svc.save(input).await,
            Err(ServiceError::InvalidArguments(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_batch_number() {
        let db = test_support::database().await;
        let existing = test_support::product_batch(&db, 1).await;
        let svc = service(&db);

        let input = test_support::batch(1, existing.product_id, existing.section_id);
        assert!(matches!(
            svc.save(input).await,
            Err(ServiceError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_section_or_product_conflicts() {
        let db = test_support::database().await;
        let product = test_support::product(&db, "PRD-1").await;
        let section = test_support::section(&db, 1).await;
        let svc = service(&db);

        let err = svc
            .save(test_support::batch(5, product.id, 99))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m.contains("section")));

        let err = svc
            .save(test_support::batch(5, 99, section.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m.contains("product")));
    }

    #[tokio::test]
    async fn test_products_by_section() {
        let db = test_support::database().await;
        let batch = test_support::product_batch(&db, 1).await;
        let empty = test_support::section(&db, 2).await;
        let svc = service(&db);

        let report = svc.products_by_section(batch.section_id).await.unwrap();
        assert_eq!(report[0].products_count, batch.current_quantity);

        let all = svc.products_by_section(0).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].section_id, empty.id);
        assert_eq!(all[1].products_count, 0);

        assert!(matches!(
            svc.products_by_section(99).await,
            Err(ServiceError::NotFound { .. })
        ));
    }
}
