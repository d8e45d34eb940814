//! # Carry Repository
//!
//! Carriers are created and listed, never updated or deleted.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use wms_core::Carry;

#[derive(Debug, Clone)]
pub struct CarryRepository {
    pool: SqlitePool,
}

impl CarryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        CarryRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Carry>> {
        let carries = sqlx::query_as::<_, Carry>(
            "SELECT id, cid, company_name, address, telephone, locality_id FROM carries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(carries)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Carry>> {
        let carry = sqlx::query_as::<_, Carry>(
            "SELECT id, cid, company_name, address, telephone, locality_id FROM carries WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(carry)
    }

    pub async fn get_by_cid(&self, cid: &str) -> DbResult<Option<Carry>> {
        let carry = sqlx::query_as::<_, Carry>(
            "SELECT id, cid, company_name, address, telephone, locality_id FROM carries WHERE cid = ?1",
        )
        .bind(cid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(carry)
    }

    pub async fn insert(&self, carry: &Carry) -> DbResult<Carry> {
        debug!(cid = %carry.cid, "Inserting carry");

        let result = sqlx::query(
            r#"
            INSERT INTO carries (cid, company_name, address, telephone, locality_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&carry.cid)
        .bind(&carry.company_name)
        .bind(&carry.address)
        .bind(&carry.telephone)
        .bind(carry.locality_id)
        .execute(&self.pool)
        .await?;

        Ok(Carry {
            id: result.last_insert_rowid(),
            ..carry.clone()
        })
    }
}
