use tracing::{debug, info};
use wms_core::validation::validate_product_type;
use wms_core::{ProductType, ProductTypePatch};
use wms_db::ProductTypeRepository;

use crate::error::{ServiceError, ServiceResult};

pub struct ProductTypeService {
    product_types: ProductTypeRepository,
}

impl ProductTypeService {
    pub fn new(product_types: ProductTypeRepository) -> Self {
        ProductTypeService { product_types }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<ProductType>> {
        Ok(self.product_types.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<ProductType> {
        self.product_types
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ProductType", id))
    }

    pub async fn save(&self, product_type: ProductType) -> ServiceResult<ProductType> {
        validate_product_type(&product_type)?;

        let created = self.product_types.insert(&product_type).await?;
        info!(id = created.id, description = %created.description, "Product type created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: ProductTypePatch) -> ServiceResult<ProductType> {
        let mut product_type = self.get_by_id(id).await?;
        patch.apply(&mut product_type);

        validate_product_type(&product_type)?;

        self.product_types.update(&product_type).await?;
        debug!(id, "Product type updated");
        Ok(product_type)
    }

    /// Deleting a type still used by a section or product fails in storage.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.get_by_id(id).await?;
        self.product_types.delete(id).await?;
        info!(id, "Product type deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use wms_db::DbError;

    #[tokio::test]
    async fn test_lifecycle() {
        let db = test_support::database().await;
        let svc = ProductTypeService::new(db.product_types());

        let created = svc
            .save(ProductType {
                id: 0,
                description: "Dairy".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);

        let updated = svc
            .update(
                created.id,
                ProductTypePatch {
                    description: Some("Chilled dairy".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description, "Chilled dairy");

        svc.delete(created.id).await.unwrap();
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_description() {
        let db = test_support::database().await;
        let svc = ProductTypeService::new(db.product_types());

        let err = svc.save(ProductType::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_delete_type_in_use() {
        let db = test_support::database().await;
        let section = test_support::section(&db, 1).await;
        let svc = ProductTypeService::new(db.product_types());

        let err = svc.delete(section.product_type_id).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Storage(DbError::ForeignKeyViolation { .. })
        ));
    }
}
