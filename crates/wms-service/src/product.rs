//! # Product Service
//!
//! Products reference a product type and the seller supplying them.
//! `product_code` is unique.

use std::sync::Arc;

use tracing::{debug, info};
use wms_core::validation::validate_product;
use wms_core::{Product, ProductPatch, ProductRecordsReport};
use wms_db::ProductRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::{ProductTypeLookup, SellerLookup};

pub struct ProductService {
    products: ProductRepository,
    product_types: Arc<dyn ProductTypeLookup>,
    sellers: Arc<dyn SellerLookup>,
}

impl ProductService {
    pub fn new(
        products: ProductRepository,
        product_types: Arc<dyn ProductTypeLookup>,
        sellers: Arc<dyn SellerLookup>,
    ) -> Self {
        ProductService {
            products,
            product_types,
            sellers,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.products.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Product> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    pub async fn save(&self, product: Product) -> ServiceResult<Product> {
        self.validate(&product, None).await?;

        let created = self.products.insert(&product).await?;
        info!(id = created.id, code = %created.product_code, "Product created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: ProductPatch) -> ServiceResult<Product> {
        let mut product = self.get_by_id(id).await?;
        patch.apply(&mut product);

        self.validate(&product, Some(id)).await?;

        self.products.update(&product).await?;
        debug!(id, "Product updated");
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.get_by_id(id).await?;
        self.products.delete(id).await?;
        info!(id, "Product deleted");
        Ok(())
    }

    /// Price records kept per product. Zero reports every product.
    pub async fn records_report(&self, id: i64) -> ServiceResult<Vec<ProductRecordsReport>> {
        if id == 0 {
            return Ok(self.products.records_report(None).await?);
        }
        self.get_by_id(id).await?;
        Ok(self.products.records_report(Some(id)).await?)
    }

    async fn validate(&self, product: &Product, own_id: Option<i64>) -> ServiceResult<()> {
        validate_product(product)?;

        if let Some(existing) = self.products.get_by_code(&product.product_code).await? {
            if Some(existing.id) != own_id {
                return Err(ServiceError::conflict(format!(
                    "product code {} already exists",
                    product.product_code
                )));
            }
        }

        if self
            .product_types
            .find_product_type(product.product_type_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::unknown_reference(
                "product type",
                product.product_type_id,
            ));
        }

        if self.sellers.find_seller(product.seller_id).await?.is_none() {
            return Err(ServiceError::unknown_reference("seller", product.seller_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use crate::ArgumentError;
    use wms_db::Database;

    fn service(db: &Database) -> ProductService {
        ProductService::new(
            db.products(),
            Arc::new(db.product_types()),
            Arc::new(db.sellers()),
        )
    }

    fn product(code: &str, product_type_id: i64, seller_id: i64) -> Product {
        Product {
            id: 0,
            product_code: code.to_string(),
            description: "Yogurt".to_string(),
            width: 1.2,
            height: 6.4,
            length: 4.5,
            net_weight: 3.4,
            expiration_rate: 1.5,
            recommended_freezing_temperature: 1.3,
            freezing_rate: 2.0,
            product_type_id,
            seller_id,
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let db = test_support::database().await;
        let seller = test_support::seller(&db, 1).await;
        let product_type = test_support::product_type(&db).await;
        let svc = service(&db);

        let input = product("PRD-1", product_type.id, seller.id);
        let created = svc.save(input.clone()).await.unwrap();
        assert_ne!(created.id, 0);
        assert_eq!(Product { id: 0, ..created.clone() }, input);
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_duplicate_code() {
        let db = test_support::database().await;
        let existing = test_support::product(&db, "PRD-1").await;
        let svc = service(&db);

        let err = svc
            .save(product("PRD-1", existing.product_type_id, existing.seller_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_missing_references() {
        let db = test_support::database().await;
        let seller = test_support::seller(&db, 1).await;
        let product_type = test_support::product_type(&db).await;
        let svc = service(&db);

        let err = svc.save(product("PRD-1", 99, seller.id)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidArguments(ArgumentError::UnknownReference { entity: "product type", .. })
        ));

        let err = svc
            .save(product("PRD-1", product_type.id, 99))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidArguments(ArgumentError::UnknownReference { entity: "seller", .. })
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_own_code() {
        let db = test_support::database().await;
        let existing = test_support::product(&db, "PRD-1").await;
        let svc = service(&db);

        let updated = svc
            .update(
                existing.id,
                ProductPatch {
                    product_code: Some("PRD-1".to_string()),
                    net_weight: Some(2.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.net_weight, 2.0);
        assert_eq!(svc.get_by_id(existing.id).await.unwrap(), updated);

        let err = svc
            .update(
                existing.id,
                ProductPatch {
                    width: Some(0.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_records_report() {
        let db = test_support::database().await;
        let existing = test_support::product(&db, "PRD-1").await;
        test_support::product_record(&db, existing.id).await;
        test_support::product_record(&db, existing.id).await;
        let svc = service(&db);

        let report = svc.records_report(existing.id).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].records_count, 2);

        assert_eq!(svc.records_report(0).await.unwrap().len(), 1);
        assert!(matches!(
            svc.records_report(99).await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_support::database().await;
        let existing = test_support::product(&db, "PRD-1").await;
        let svc = service(&db);

        svc.delete(existing.id).await.unwrap();
        assert!(svc.get_all().await.unwrap().is_empty());
    }
}
