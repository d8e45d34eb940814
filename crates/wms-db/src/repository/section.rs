//! # Section Repository
//!
//! Section numbers are unique across all warehouses.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::Section;

#[derive(Debug, Clone)]
pub struct SectionRepository {
    pool: SqlitePool,
}

impl SectionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SectionRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Section>> {
        let sections = sqlx::query_as::<_, Section>(
            r#"
            SELECT id, section_number, current_temperature, minimum_temperature,
                   current_capacity, minimum_capacity, maximum_capacity,
                   warehouse_id, product_type_id
            FROM sections
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sections)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Section>> {
        let section = sqlx::query_as::<_, Section>(
            r#"
            SELECT id, section_number, current_temperature, minimum_temperature,
                   current_capacity, minimum_capacity, maximum_capacity,
                   warehouse_id, product_type_id
            FROM sections
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(section)
    }

    pub async fn get_by_number(&self, section_number: i64) -> DbResult<Option<Section>> {
        let section = sqlx::query_as::<_, Section>(
            r#"
            SELECT id, section_number, current_temperature, minimum_temperature,
                   current_capacity, minimum_capacity, maximum_capacity,
                   warehouse_id, product_type_id
            FROM sections
            WHERE section_number = ?1
            "#,
        )
        .bind(section_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(section)
    }

    pub async fn insert(&self, section: &Section) -> DbResult<Section> {
        debug!(section_number = section.section_number, "Inserting section");

        let result = sqlx::query(
            r#"
            INSERT INTO sections (
                section_number, current_temperature, minimum_temperature,
                current_capacity, minimum_capacity, maximum_capacity,
                warehouse_id, product_type_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(section.section_number)
        .bind(section.current_temperature)
        .bind(section.minimum_temperature)
        .bind(section.current_capacity)
        .bind(section.minimum_capacity)
        .bind(section.maximum_capacity)
        .bind(section.warehouse_id)
        .bind(section.product_type_id)
        .execute(&self.pool)
        .await?;

        Ok(Section {
            id: result.last_insert_rowid(),
            ..section.clone()
        })
    }

    pub async fn update(&self, section: &Section) -> DbResult<()> {
        debug!(id = section.id, "Updating section");

        let result = sqlx::query(
            r#"
            UPDATE sections SET
                section_number = ?2,
                current_temperature = ?3,
                minimum_temperature = ?4,
                current_capacity = ?5,
                minimum_capacity = ?6,
                maximum_capacity = ?7,
                warehouse_id = ?8,
                product_type_id = ?9
            WHERE id = ?1
            "#,
        )
        .bind(section.id)
        .bind(section.section_number)
        .bind(section.current_temperature)
        .bind(section.minimum_temperature)
        .bind(section.current_capacity)
        .bind(section.minimum_capacity)
        .bind(section.maximum_capacity)
        .bind(section.warehouse_id)
        .bind(section.product_type_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Section", section.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting section");

        let result = sqlx::query("DELETE FROM sections WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Section", id));
        }

        Ok(())
    }
}
