//! # Seller Repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::Seller;

const SELECT_SELLER: &str =
    "SELECT id, cid, company_name, address, telephone, locality_id FROM sellers";

#[derive(Debug, Clone)]
pub struct SellerRepository {
    pool: SqlitePool,
}

impl SellerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SellerRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Seller>> {
        let sellers = sqlx::query_as::<_, Seller>(&format!("{SELECT_SELLER} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(sellers)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Seller>> {
        let seller = sqlx::query_as::<_, Seller>(&format!("{SELECT_SELLER} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(seller)
    }

    pub async fn get_by_cid(&self, cid: i64) -> DbResult<Option<Seller>> {
        let seller = sqlx::query_as::<_, Seller>(&format!("{SELECT_SELLER} WHERE cid = ?1"))
            .bind(cid)
            .fetch_optional(&self.pool)
            .await?;

        Ok(seller)
    }

    pub async fn insert(&self, seller: &Seller) -> DbResult<Seller> {
        debug!(cid = seller.cid, "Inserting seller");

        let result = sqlx::query(
            r#"
            INSERT INTO sellers (cid, company_name, address, telephone, locality_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(seller.cid)
        .bind(&seller.company_name)
        .bind(&seller.address)
        .bind(&seller.telephone)
        .bind(seller.locality_id)
        .execute(&self.pool)
        .await?;

        Ok(Seller {
            id: result.last_insert_rowid(),
            ..seller.clone()
        })
    }

    pub async fn update(&self, seller: &Seller) -> DbResult<()> {
        debug!(id = seller.id, "Updating seller");

        let result = sqlx::query(
            r#"
            UPDATE sellers SET
                cid = ?2, company_name = ?3, address = ?4, telephone = ?5, locality_id = ?6
            WHERE id = ?1
            "#,
        )
        .bind(seller.id)
        .bind(seller.cid)
        .bind(&seller.company_name)
        .bind(&seller.address)
        .bind(&seller.telephone)
        .bind(seller.locality_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Seller", seller.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting seller");

        let result = sqlx::query("DELETE FROM sellers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Seller", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;

    fn seller(cid: i64) -> Seller {
        Seller {
            id: 0,
            cid,
            company_name: "Frutas del Sur".to_string(),
            address: "Ruta 3 km 40".to_string(),
            telephone: "221-555".to_string(),
            locality_id: 6700,
        }
    }

    #[tokio::test]
    async fn test_seller_crud() {
        let db = test_support::database().await;
        test_support::locality(&db, 6700, "Lujan").await;
        let repo = db.sellers();

        let created = repo.insert(&seller(10)).await.unwrap();
        assert_eq!(repo.get_by_cid(10).await.unwrap(), Some(created.clone()));

        let mut changed = created.clone();
        changed.company_name = "Frutas del Norte".to_string();
        repo.update(&changed).await.unwrap();
        assert_eq!(
            repo.get_by_id(created.id).await.unwrap().unwrap().company_name,
            "Frutas del Norte"
        );

        repo.delete(created.id).await.unwrap();
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(created.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_locality_is_rejected_by_schema() {
        let db = test_support::database().await;

        let err = db.sellers().insert(&seller(10)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
