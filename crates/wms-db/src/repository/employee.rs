//! # Employee Repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use wms_core::Employee;

#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, card_number_id, first_name, last_name, warehouse_id FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, card_number_id, first_name, last_name, warehouse_id FROM employees WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn get_by_card_number(&self, card_number_id: &str) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, card_number_id, first_name, last_name, warehouse_id
            FROM employees
            WHERE card_number_id = ?1
            "#,
        )
        .bind(card_number_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn insert(&self, employee: &Employee) -> DbResult<Employee> {
        debug!(card_number_id = %employee.card_number_id, "Inserting employee");

        let result = sqlx::query(
            r#"
            INSERT INTO employees (card_number_id, first_name, last_name, warehouse_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&employee.card_number_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.warehouse_id)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            ..employee.clone()
        })
    }

    pub async fn update(&self, employee: &Employee) -> DbResult<()> {
        debug!(id = employee.id, "Updating employee");

        let result = sqlx::query(
            r#"
            UPDATE employees SET
                card_number_id = ?2, first_name = ?3, last_name = ?4, warehouse_id = ?5
            WHERE id = ?1
            "#,
        )
        .bind(employee.id)
        .bind(&employee.card_number_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.warehouse_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Employee", employee.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting employee");

        let result = sqlx::query("DELETE FROM employees WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Employee", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;

    #[tokio::test]
    async fn test_employee_card_lookup() {
        let db = test_support::database().await;
        let warehouse = test_support::warehouse(&db, "WH-1").await;

        let created = db
            .employees()
            .insert(&Employee {
                id: 0,
                card_number_id: "E-100".to_string(),
                first_name: "Lucia".to_string(),
                last_name: "Gomez".to_string(),
                warehouse_id: warehouse.id,
            })
            .await
            .unwrap();

        assert_eq!(
            db.employees().get_by_card_number("E-100").await.unwrap(),
            Some(created)
        );
        assert!(db.employees().get_by_card_number("E-101").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_employee_needs_existing_warehouse() {
        let db = test_support::database().await;

        let err = db
            .employees()
            .insert(&Employee {
                id: 0,
                card_number_id: "E-1".to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                warehouse_id: 77,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
