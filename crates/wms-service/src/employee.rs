//! # Employee Service
//!
//! An employee belongs to a warehouse; a missing warehouse is reported as
//! [`ServiceError::WarehouseDoesNotExist`].

use std::sync::Arc;

use tracing::{debug, info};
use wms_core::validation::validate_employee;
use wms_core::{Employee, EmployeePatch};
use wms_db::EmployeeRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::WarehouseLookup;

pub struct EmployeeService {
    employees: EmployeeRepository,
    warehouses: Arc<dyn WarehouseLookup>,
}

impl EmployeeService {
    pub fn new(employees: EmployeeRepository, warehouses: Arc<dyn WarehouseLookup>) -> Self {
        EmployeeService {
            employees,
            warehouses,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.employees.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Employee> {
        self.employees
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Employee", id))
    }

    pub async fn save(&self, employee: Employee) -> ServiceResult<Employee> {
        self.validate(&employee, None).await?;

        let created = self.employees.insert(&employee).await?;
        info!(
            id = created.id,
            warehouse_id = created.warehouse_id,
            "Employee created"
        );
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: EmployeePatch) -> ServiceResult<Employee> {
        let mut employee = self.get_by_id(id).await?;
        patch.apply(&mut employee);

        self.validate(&employee, Some(id)).await?;

        self.employees.update(&employee).await?;
        debug!(id, "Employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.get_by_id(id).await?;
        self.employees.delete(id).await?;
        info!(id, "Employee deleted");
        Ok(())
    }

    async fn validate(&self, employee: &Employee, own_id: Option<i64>) -> ServiceResult<()> {
        validate_employee(employee)?;

        if let Some(existing) = self
            .employees
            .get_by_card_number(&employee.card_number_id)
            .await?
        {
            if Some(existing.id) != own_id {
                return Err(ServiceError::conflict(format!(
                    "employee card {} already exists",
                    employee.card_number_id
                )));
            }
        }

        if self
            .warehouses
            .find_warehouse(employee.warehouse_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::WarehouseDoesNotExist(employee.warehouse_id));
        }

        Ok(())
    }
}
