use std::sync::Arc;

use tracing::{debug, info};
use wms_core::validation::validate_seller;
use wms_core::{Seller, SellerPatch};
use wms_db::SellerRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::LocalityLookup;

pub struct SellerService {
    sellers: SellerRepository,
    localities: Arc<dyn LocalityLookup>,
}

impl SellerService {
    pub fn new(sellers: SellerRepository, localities: Arc<dyn LocalityLookup>) -> Self {
        SellerService {
            sellers,
            localities,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Seller>> {
        Ok(self.sellers.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Seller> {
        self.sellers
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Seller", id))
    }

    pub async fn save(&self, seller: Seller) -> ServiceResult<Seller> {
        self.validate(&seller, None).await?;

        let created = self.sellers.insert(&seller).await?;
        info!(id = created.id, cid = created.cid, "Seller created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: SellerPatch) -> ServiceResult<Seller> {
        let mut seller = self.get_by_id(id).await?;
        patch.apply(&mut seller);

        self.validate(&seller, Some(id)).await?;

        self.sellers.update(&seller).await?;
        debug!(id, "Seller updated");
        Ok(seller)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.get_by_id(id).await?;
        self.sellers.delete(id).await?;
        info!(id, "Seller deleted");
        Ok(())
    }

    async fn validate(&self, seller: &Seller, own_id: Option<i64>) -> ServiceResult<()> {
        validate_seller(seller)?;

        if let Some(existing) = self.sellers.get_by_cid(seller.cid).await? {
            if Some(existing.id) != own_id {
                return Err(ServiceError::conflict(format!(
                    "seller cid {} already exists",
                    seller.cid
                )));
            }
        }

        if self
            .localities
            .find_locality(seller.locality_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::unknown_reference("locality", seller.locality_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use crate::ArgumentError;
    use async_trait::async_trait;
    use wms_core::Locality;
    use wms_db::DbResult;

    /// Every locality exists.
    struct AnyLocality;

    #[async_trait]
    impl LocalityLookup for AnyLocality {
        async fn find_locality(&self, id: i64) -> DbResult<Option<Locality>> {
            Ok(Some(Locality {
                id,
                ..Default::default()
            }))
        }
    }

    fn seller(cid: i64, locality_id: i64) -> Seller {
        Seller {
            id: 0,
            cid,
            company_name: "Mercado Libre".to_string(),
            address: "Ramallo 6023".to_string(),
            telephone: "48557589".to_string(),
            locality_id,
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let db = test_support::database().await;
        test_support::locality(&db, 6700).await;
        let svc = SellerService::new(db.sellers(), Arc::new(db.localities()));

        let created = svc.save(seller(1, 6700)).await.unwrap();
        assert_ne!(created.id, 0);
        assert_eq!(Seller { id: 0, ..created.clone() }, seller(1, 6700));
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_duplicate_cid_is_checked_before_locality() {
        let db = test_support::database().await;
        test_support::locality(&db, 6700).await;
        let svc = SellerService::new(db.sellers(), Arc::new(db.localities()));
        svc.save(seller(1, 6700)).await.unwrap();

        let err = svc.save(seller(1, 9999)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unknown_locality() {
        let db = test_support::database().await;
        let svc = SellerService::new(db.sellers(), Arc::new(db.localities()));

        let err = svc.save(seller(1, 1234)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidArguments(ArgumentError::UnknownReference {
                entity: "locality",
                id: 1234
            })
        ));
    }

    #[tokio::test]
    async fn test_schema_still_guards_locality() {
        let db = test_support::database().await;
        let svc = SellerService::new(db.sellers(), Arc::new(AnyLocality));

        let err = svc.save(seller(1, 1234)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = test_support::database().await;
        test_support::locality(&db, 6700).await;
        let svc = SellerService::new(db.sellers(), Arc::new(db.localities()));
        let created = svc.save(seller(1, 6700)).await.unwrap();

        let updated = svc
            .update(
                created.id,
                SellerPatch {
                    telephone: Some("555-0199".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.telephone, "555-0199");
        assert_eq!(updated.company_name, created.company_name);

        svc.delete(created.id).await.unwrap();
        assert!(matches!(
            svc.get_by_id(created.id).await,
            Err(ServiceError::NotFound { .. })
        ));
    }
}
