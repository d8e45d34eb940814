//! Physical storage: warehouses, their sections and the staff working there.

use serde::{Deserialize, Serialize};

use super::merge;

// =============================================================================
// Warehouse
// =============================================================================

/// A warehouse. `warehouse_code` is unique ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Warehouse {
    pub id: i64,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
    pub minimum_capacity: i64,
    pub minimum_temperature: f64,
}

/// Partial update for [`Warehouse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarehousePatch {
    pub warehouse_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i64>,
    pub minimum_capacity: Option<i64>,
    pub minimum_temperature: Option<f64>,
}

impl WarehousePatch {
    pub fn apply(self, warehouse: &mut Warehouse) {
        merge(&mut warehouse.warehouse_code, self.warehouse_code);
        merge(&mut warehouse.address, self.address);
        merge(&mut warehouse.telephone, self.telephone);
        merge(&mut warehouse.locality_id, self.locality_id);
        merge(&mut warehouse.minimum_capacity, self.minimum_capacity);
        merge(&mut warehouse.minimum_temperature, self.minimum_temperature);
    }
}

// =============================================================================
// Product Type
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct ProductType {
    pub id: i64,
    pub description: String,
}

/// Partial update for [`ProductType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductTypePatch {
    pub description: Option<String>,
}

impl ProductTypePatch {
    pub fn apply(self, product_type: &mut ProductType) {
        merge(&mut product_type.description, self.description);
    }
}

// =============================================================================
// Section
// =============================================================================

/// A section of a warehouse dedicated to one product type.
///
/// ## Invariants
/// - `minimum_capacity <= maximum_capacity`
/// - both temperatures are at or above absolute zero
/// - `section_number` is unique across all sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Section {
    pub id: i64,
    pub section_number: i64,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i64,
    pub minimum_capacity: i64,
    pub maximum_capacity: i64,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

/// Partial update for [`Section`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionPatch {
    pub section_number: Option<i64>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub current_capacity: Option<i64>,
    pub minimum_capacity: Option<i64>,
    pub maximum_capacity: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub product_type_id: Option<i64>,
}

impl SectionPatch {
    pub fn apply(self, section: &mut Section) {
        merge(&mut section.section_number, self.section_number);
        merge(&mut section.current_temperature, self.current_temperature);
        merge(&mut section.minimum_temperature, self.minimum_temperature);
        merge(&mut section.current_capacity, self.current_capacity);
        merge(&mut section.minimum_capacity, self.minimum_capacity);
        merge(&mut section.maximum_capacity, self.maximum_capacity);
        merge(&mut section.warehouse_id, self.warehouse_id);
        merge(&mut section.product_type_id, self.product_type_id);
    }
}

// =============================================================================
// Employee
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Employee {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
}

/// Partial update for [`Employee`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i64>,
}

impl EmployeePatch {
    pub fn apply(self, employee: &mut Employee) {
        merge(&mut employee.card_number_id, self.card_number_id);
        merge(&mut employee.first_name, self.first_name);
        merge(&mut employee.last_name, self.last_name);
        merge(&mut employee.warehouse_id, self.warehouse_id);
    }
}
