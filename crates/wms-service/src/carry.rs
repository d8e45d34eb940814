use std::sync::Arc;

use tracing::info;
use wms_core::validation::validate_carry;
use wms_core::Carry;
use wms_db::CarryRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::LocalityLookup;

pub struct CarryService {
    carries: CarryRepository,
    localities: Arc<dyn LocalityLookup>,
}

impl CarryService {
    pub fn new(carries: CarryRepository, localities: Arc<dyn LocalityLookup>) -> Self {
        CarryService {
            carries,
            localities,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Carry>> {
        Ok(self.carries.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Carry> {
        self.carries
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Carry", id))
    }

    pub async fn save(&self, carry: Carry) -> ServiceResult<Carry> {
        validate_carry(&carry)?;

        if self.carries.get_by_cid(&carry.cid).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "carry cid {} already exists",
                carry.cid
            )));
        }

        if self
            .localities
            .find_locality(carry.locality_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::unknown_reference("locality", carry.locality_id));
        }

        let created = self.carries.insert(&carry).await?;
        info!(id = created.id, cid = %created.cid, "Carry created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn carry(cid: &str, locality_id: i64) -> Carry {
        Carry {
            id: 0,
            cid: cid.to_string(),
            company_name: "Andreani".to_string(),
            address: "Av. Rivadavia 100".to_string(),
            telephone: "0810-122".to_string(),
            locality_id,
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let db = test_support::database().await;
        test_support::locality(&db, 6700).await;
        let svc = CarryService::new(db.carries(), Arc::new(db.localities()));

        let created = svc.save(carry("CID#1", 6700)).await.unwrap();
        assert_eq!(Carry { id: 0, ..created.clone() }, carry("CID#1", 6700));
        assert_eq!(svc.get_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_rules() {
        let db = test_support::database().await;
        test_support::locality(&db, 6700).await;
        let svc = CarryService::new(db.carries(), Arc::new(db.localities()));
        svc.save(carry("CID#1", 6700)).await.unwrap();

        assert!(matches!(
            svc.save(carry("", 6700)).await,
            Err(ServiceError::InvalidArguments(_))
        ));
        assert!(matches!(
            svc.save(carry("CID#1", 6700)).await,
            Err(ServiceError::Conflict(_))
        ));
        assert!(matches!(
            svc.save(carry("CID#2", 1)).await,
            Err(ServiceError::InvalidArguments(_))
        ));
    }
}
