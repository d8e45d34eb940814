//! # Warehouse Service
//!
//! Warehouse codes are compared ignoring case (Unicode lowercase), so "DHM" and "dhm"
//! name the same warehouse.

use tracing::{debug, info};
use wms_core::validation::validate_warehouse;
use wms_core::{Warehouse, WarehousePatch};
use wms_db::WarehouseRepository;

use crate::error::{ServiceError, ServiceResult};

pub struct WarehouseService {
    warehouses: WarehouseRepository,
}

impl WarehouseService {
    pub fn new(warehouses: WarehouseRepository) -> Self {
        WarehouseService { warehouses }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Warehouse>> {
        Ok(self.warehouses.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Warehouse> {
        self.warehouses
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Warehouse", id))
    }

    pub async fn save(&self, warehouse: Warehouse) -> ServiceResult<Warehouse> {
        validate_warehouse(&warehouse)?;
        self.ensure_code_free(&warehouse.warehouse_code, None).await?;

        let created = self.warehouses.insert(&warehouse).await?;
        info!(id = created.id, code = %created.warehouse_code, "Warehouse created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: WarehousePatch) -> ServiceResult<Warehouse> {
        let mut warehouse = self.get_by_id(id).await?;
        patch.apply(&mut warehouse);

        validate_warehouse(&warehouse)?;
        self.ensure_code_free(&warehouse.warehouse_code, Some(id))
            .await?;

        self.warehouses.update(&warehouse).await?;
        debug!(id, "Warehouse updated");
        Ok(warehouse)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.get_by_id(id).await?;
        self.warehouses.delete(id).await?;
        info!(id, "Warehouse deleted");
        Ok(())
    }

    async fn ensure_code_free(&self, code: &str, own_id: Option<i64>) -> ServiceResult<()> {
        match self.warehouses.get_by_code(code).await? {
            Some(existing) if Some(existing.id) != own_id => Err(ServiceError::conflict(format!(
                "warehouse code {code} already exists"
            ))),
            _ => Ok(()),
        }
    }
}
