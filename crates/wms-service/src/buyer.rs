use tracing::{debug, info};
use wms_core::validation::validate_buyer;
use wms_core::{Buyer, BuyerPatch};
use wms_db::BuyerRepository;

use crate::error::{ServiceError, ServiceResult};

pub struct BuyerService {
    buyers: BuyerRepository,
}

impl BuyerService {
    pub fn new(buyers: BuyerRepository) -> Self {
        BuyerService { buyers }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Buyer>> {
        Ok(self.buyers.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Buyer> {
        self.buyers
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Buyer", id))
    }

    pub async fn save(&self, buyer: Buyer) -> ServiceResult<Buyer> {
        validate_buyer(&buyer)?;
        self.ensure_card_free(&buyer.card_number_id, None).await?;

        let created = self.buyers.insert(&buyer).await?;
        info!(id = created.id, "Buyer created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: BuyerPatch) -> ServiceResult<Buyer> {
        let mut buyer = self.get_by_id(id).await?;
        patch.apply(&mut buyer);

        validate_buyer(&buyer)?;
        self.ensure_card_free(&buyer.card_number_id, Some(id)).await?;

        self.buyers.update(&buyer).await?;
        debug!(id, "Buyer updated");
        Ok(buyer)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.get_by_id(id).await?;
        self.buyers.delete(id).await?;
        info!(id, "Buyer deleted");
        Ok(())
    }

    async fn ensure_card_free(&self, card_number_id: &str, own_id: Option<i64>) -> ServiceResult<()> {
        match self.buyers.get_by_card_number(card_number_id).await? {
            Some(existing) if Some(existing.id) != own_id => Err(ServiceError::conflict(format!(
                "buyer card {card_number_id} already exists"
            ))),
            _ => Ok(()),
        }
    }
}
