//! # Buyer Repository
//!
//! Buyers are identified by their card number, unique across buyers.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::Buyer;

#[derive(Debug, Clone)]
pub struct BuyerRepository {
    pool: SqlitePool,
}

impl BuyerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        BuyerRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Buyer>> {
        let buyers = sqlx::query_as::<_, Buyer>(
            "SELECT id, card_number_id, first_name, last_name FROM buyers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(buyers)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Buyer>> {
        let buyer = sqlx::query_as::<_, Buyer>(
            "SELECT id, card_number_id, first_name, last_name FROM buyers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(buyer)
    }

    pub async fn get_by_card_number(&self, card_number_id: &str) -> DbResult<Option<Buyer>> {
        let buyer = sqlx::query_as::<_, Buyer>(
            "SELECT id, card_number_id, first_name, last_name FROM buyers WHERE card_number_id = ?1",
        )
        .bind(card_number_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(buyer)
    }

    pub async fn insert(&self, buyer: &Buyer) -> DbResult<Buyer> {
        debug!(card_number_id = %buyer.card_number_id, "Inserting buyer");

        let result = sqlx::query(
            "INSERT INTO buyers (card_number_id, first_name, last_name) VALUES (?1, ?2, ?3)",
        )
        .bind(&buyer.card_number_id)
        .bind(&buyer.first_name)
        .bind(&buyer.last_name)
        .execute(&self.pool)
        .await?;

        Ok(Buyer {
            id: result.last_insert_rowid(),
            ..buyer.clone()
        })
    }

    pub async fn update(&self, buyer: &Buyer) -> DbResult<()> {
        debug!(id = buyer.id, "Updating buyer");

        let result = sqlx::query(
            "UPDATE buyers SET card_number_id = ?2, first_name = ?3, last_name = ?4 WHERE id = ?1",
        )
        .bind(buyer.id)
        .bind(&buyer.card_number_id)
        .bind(&buyer.first_name)
        .bind(&buyer.last_name)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Buyer", buyer.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting buyer");

        let result = sqlx::query("DELETE FROM buyers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Buyer", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;

    fn buyer(card: &str) -> Buyer {
        Buyer {
            id: 0,
            card_number_id: card.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
        }
    }

    #[tokio::test]
    async fn test_buyer_update_and_delete() {
        let db = test_support::database().await;
        let repo = db.buyers();

        let created = repo.insert(&buyer("B-1")).await.unwrap();
        let mut changed = created.clone();
        changed.last_name = "Perez".to_string();
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.get_by_card_number("B-1").await.unwrap(), Some(changed));

        repo.delete(created.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());

        let missing = Buyer { id: 99, ..buyer("B-9") };
        assert!(matches!(
            repo.update(&missing).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
