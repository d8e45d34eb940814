//! # Section Service
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save(section)                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_section ─────────────── fails ──► InvalidArguments           │
//! │       │   (ids set, min ≤ max capacity, temperatures ≥ -273.15)        │
//! │       ▼                                                                 │
//! │  warehouse exists? ────────────── no ─────► InvalidArguments           │
//! │  product type exists? ─────────── no ─────► InvalidArguments           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  section_number taken by another section? ─► Conflict                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sections.insert → Section with its new id                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `update` loads the stored section, applies the patch and runs the same
//! checks, ignoring the section itself in the duplicate check.

use std::sync::Arc;

use tracing::{debug, info};
use wms_core::validation::validate_section;
use wms_core::{Section, SectionPatch};
use wms_db::SectionRepository;

use crate::error::{ServiceError, ServiceResult};
use crate::lookup::{ProductTypeLookup, WarehouseLookup};

pub struct SectionService {
    sections: SectionRepository,
    warehouses: Arc<dyn WarehouseLookup>,
    product_types: Arc<dyn ProductTypeLookup>,
}

impl SectionService {
    pub fn new(
        sections: SectionRepository,
        warehouses: Arc<dyn WarehouseLookup>,
        product_types: Arc<dyn ProductTypeLookup>,
    ) -> Self {
        SectionService {
            sections,
            warehouses,
            product_types,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Section>> {
        Ok(self.sections.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Section> {
        self.sections
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Section", id))
    }

    pub async fn save(&self, section: Section) -> ServiceResult<Section> {
        self.validate(&section, None).await?;

        let created = self.sections.insert(&section).await?;
        info!(id = created.id, section_number = created.section_number, "Section created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: SectionPatch) -> ServiceResult<Section> {
        let mut section = self.get_by_id(id).await?;
        patch.apply(&mut section);

        self.validate(&section, Some(id)).await?;

        self.sections.update(&section).await?;
        debug!(id, "Section updated");
        Ok(section)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.get_by_id(id).await?;
        self.sections.delete(id).await?;
        info!(id, "Section deleted");
        Ok(())
    }

    async fn validate(&self, section: &Section, own_id: Option<i64>) -> ServiceResult<()> {
        validate_section(section)?;

        if self
            .warehouses
            .find_warehouse(section.warehouse_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::unknown_reference("warehouse", section.warehouse_id));
        }

        if self
            .product_types
            .find_product_type(section.product_type_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::unknown_reference(
                "product type",
                section.product_type_id,
            ));
        }

        if let Some(existing) = self.sections.get_by_number(section.section_number).await? {
            if Some(existing.id) != own_id {
                return Err(ServiceError::conflict(format!(
                    "section number {} already exists",
                    section.section_number
                )));
            }
        }

        Ok(())
    }
}
