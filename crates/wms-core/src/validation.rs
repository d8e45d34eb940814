//! # Validation Module
//!
//! Field-level rules for every entity.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Handler (axum extractor)                                     │
//! │  └── JSON shape (decode failure → 400)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── presence, bounds, formats of a single record (→ 422)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: wms-service                                                  │
//! │  └── uniqueness and references to other records (→ 409 / 422)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Database (SQLite)                                            │
//! │  └── UNIQUE / FOREIGN KEY constraints (authoritative)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each `validate_*` function reports the first rule broken, checking fields
//! in declaration order.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{
    Buyer, Carry, Country, Employee, InboundOrder, Locality, Product, ProductBatch,
    ProductRecord, ProductType, Province, PurchaseOrder, Section, Seller, Warehouse,
};
use crate::{ABSOLUTE_ZERO_CELSIUS, WAREHOUSE_MIN_TEMPERATURE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest text value accepted for any string column.
pub const MAX_TEXT_LEN: usize = 255;

/// Date format used by every date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Example
/// ```rust
/// use wms_core::validation::validate_text;
///
/// assert!(validate_text("address", "Av. Siempre Viva 742").is_ok());
/// assert!(validate_text("address", "   ").is_err());
/// ```
pub fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates a reference to another record. Zero means "not provided".
pub fn validate_id(field: &str, id: i64) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::required(field));
    }

    if id < 0 {
        return Err(ValidationError::must_be_positive(field));
    }

    Ok(())
}

/// Validates a `YYYY-MM-DD` date.
///
/// ## Example
/// ```rust
/// use wms_core::validation::validate_date;
///
/// assert!(validate_date("order_date", "2021-04-04").is_ok());
/// assert!(validate_date("order_date", "").is_err());
/// assert!(validate_date("order_date", "04/04/2021").is_err());
/// ```
pub fn validate_date(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a date formatted as YYYY-MM-DD".to_string(),
    })?;

    Ok(())
}

fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    if value <= 0.0 {
        return Err(ValidationError::must_be_positive(field));
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if value < 0.0 {
        return Err(ValidationError::negative(field));
    }
    Ok(())
}

fn validate_at_least(field: &str, value: f64, min: f64) -> ValidationResult<()> {
    if value < min {
        return Err(ValidationError::below_minimum(field, min));
    }
    Ok(())
}

// =============================================================================
// Geography
// =============================================================================

/// Validates the three parts of a locality create request.
///
/// ## Rules
/// - locality name is required, and so is its id (the postal code)
/// - province and country names are required
pub fn validate_locality(
    locality: &Locality,
    province: &Province,
    country: &Country,
) -> ValidationResult<()> {
    validate_text("locality_name", &locality.locality_name)?;
    validate_id("id", locality.id)?;
    validate_text("province_name", &province.province_name)?;
    validate_text("country_name", &country.country_name)?;
    Ok(())
}

// =============================================================================
// Partners
// =============================================================================

pub fn validate_seller(seller: &Seller) -> ValidationResult<()> {
    validate_id("cid", seller.cid)?;
    validate_text("company_name", &seller.company_name)?;
    validate_text("address", &seller.address)?;
    validate_text("telephone", &seller.telephone)?;
    validate_id("locality_id", seller.locality_id)?;
    Ok(())
}

pub fn validate_carry(carry: &Carry) -> ValidationResult<()> {
    validate_text("cid", &carry.cid)?;
    validate_text("company_name", &carry.company_name)?;
    validate_text("address", &carry.address)?;
    validate_text("telephone", &carry.telephone)?;
    validate_id("locality_id", carry.locality_id)?;
    Ok(())
}

pub fn validate_buyer(buyer: &Buyer) -> ValidationResult<()> {
    validate_text("card_number_id", &buyer.card_number_id)?;
    validate_text("first_name", &buyer.first_name)?;
    validate_text("last_name", &buyer.last_name)?;
    Ok(())
}

// =============================================================================
// Storage
// =============================================================================

/// Validates a warehouse.
///
/// ## Rules
/// - code, address and telephone are required
/// - `minimum_capacity > 0`
/// - `minimum_temperature >= -273`
pub fn validate_warehouse(warehouse: &Warehouse) -> ValidationResult<()> {
    validate_text("warehouse_code", &warehouse.warehouse_code)?;
    validate_text("address", &warehouse.address)?;
    validate_text("telephone", &warehouse.telephone)?;

    if warehouse.minimum_capacity <= 0 {
        return Err(ValidationError::must_be_positive("minimum_capacity"));
    }

    validate_at_least(
        "minimum_temperature",
        warehouse.minimum_temperature,
        WAREHOUSE_MIN_TEMPERATURE,
    )
}

pub fn validate_product_type(product_type: &ProductType) -> ValidationResult<()> {
    validate_text("description", &product_type.description)
}

/// Validates a section.
///
/// ## Rules
/// ```text
/// section_number      > 0
/// warehouse_id        required
/// product_type_id     required
/// minimum_capacity    <= maximum_capacity
/// minimum_temperature >= -273.15
/// current_temperature >= -273.15
/// ```
pub fn validate_section(section: &Section) -> ValidationResult<()> {
    if section.section_number <= 0 {
        return Err(ValidationError::must_be_positive("section_number"));
    }

    validate_id("warehouse_id", section.warehouse_id)?;
    validate_id("product_type_id", section.product_type_id)?;

    if section.minimum_capacity > section.maximum_capacity {
        return Err(ValidationError::CapacityRange {
            minimum: section.minimum_capacity,
            maximum: section.maximum_capacity,
        });
    }

    validate_at_least(
        "minimum_temperature",
        section.minimum_temperature,
        ABSOLUTE_ZERO_CELSIUS,
    )?;
    validate_at_least(
        "current_temperature",
        section.current_temperature,
        ABSOLUTE_ZERO_CELSIUS,
    )?;

    Ok(())
}

pub fn validate_employee(employee: &Employee) -> ValidationResult<()> {
    validate_text("card_number_id", &employee.card_number_id)?;
    validate_text("first_name", &employee.first_name)?;
    validate_text("last_name", &employee.last_name)?;
    validate_id("warehouse_id", employee.warehouse_id)?;
    Ok(())
}

// =============================================================================
// Products
// =============================================================================

pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_text("product_code", &product.product_code)?;
    validate_text("description", &product.description)?;
    validate_positive("width", product.width)?;
    validate_positive("height", product.height)?;
    validate_positive("length", product.length)?;
    validate_positive("net_weight", product.net_weight)?;
    validate_non_negative("expiration_rate", product.expiration_rate)?;
    validate_at_least(
        "recommended_freezing_temperature",
        product.recommended_freezing_temperature,
        ABSOLUTE_ZERO_CELSIUS,
    )?;
    validate_non_negative("freezing_rate", product.freezing_rate)?;
    validate_id("product_type_id", product.product_type_id)?;
    validate_id("seller_id", product.seller_id)?;
    Ok(())
}

/// Validates a product batch.
///
/// ## Rules
/// - `batch_number > 0`, `current_temperature > 0`
/// - quantities and `manufacturing_hour` are not negative
/// - both dates are present and well formed
/// - `product_id > 0`, `section_id > 0`
pub fn validate_product_batch(batch: &ProductBatch) -> ValidationResult<()> {
    if batch.batch_number <= 0 {
        return Err(ValidationError::must_be_positive("batch_number"));
    }
    if batch.current_quantity < 0 {
        return Err(ValidationError::negative("current_quantity"));
    }
    if batch.initial_quantity < 0 {
        return Err(ValidationError::negative("initial_quantity"));
    }

    validate_positive("current_temperature", batch.current_temperature)?;
    validate_at_least(
        "minimum_temperature",
        batch.minimum_temperature,
        ABSOLUTE_ZERO_CELSIUS,
    )?;
    validate_date("due_date", &batch.due_date)?;
    validate_date("manufacturing_date", &batch.manufacturing_date)?;

    if batch.manufacturing_hour < 0 {
        return Err(ValidationError::negative("manufacturing_hour"));
    }

    validate_id("product_id", batch.product_id)?;
    validate_id("section_id", batch.section_id)?;
    Ok(())
}

pub fn validate_product_record(record: &ProductRecord) -> ValidationResult<()> {
    validate_date("last_update_date", &record.last_update_date)?;
    validate_positive("purchase_price", record.purchase_price)?;
    validate_positive("sale_price", record.sale_price)?;
    validate_id("product_id", record.product_id)?;
    Ok(())
}

// =============================================================================
// Orders
// =============================================================================

pub fn validate_inbound_order(order: &InboundOrder) -> ValidationResult<()> {
    validate_date("order_date", &order.order_date)?;
    validate_text("order_number", &order.order_number)?;
    validate_id("employee_id", order.employee_id)?;
    validate_id("product_batch_id", order.product_batch_id)?;
    validate_id("warehouse_id", order.warehouse_id)?;
    Ok(())
}

/// Validates a purchase order.
///
/// Presence of order number, tracking code, buyer and product record is
/// checked before the order date format.
pub fn validate_purchase_order(order: &PurchaseOrder) -> ValidationResult<()> {
    validate_text("order_number", &order.order_number)?;
    validate_text("tracking_code", &order.tracking_code)?;
    validate_id("buyer_id", order.buyer_id)?;
    validate_id("product_record_id", order.product_record_id)?;
    validate_date("order_date", &order.order_date)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Section {
        Section {
            id: 0,
            section_number: 1,
            current_temperature: 1.0,
            minimum_temperature: 0.0,
            current_capacity: 0,
            minimum_capacity: 3,
            maximum_capacity: 4,
            warehouse_id: 1,
            product_type_id: 1,
        }
    }

    fn warehouse() -> Warehouse {
        Warehouse {
            id: 0,
            warehouse_code: "DHM".to_string(),
            address: "Av. Siempre Viva 742".to_string(),
            telephone: "4444-4444".to_string(),
            locality_id: 6700,
            minimum_capacity: 10,
            minimum_temperature: -10.0,
        }
    }

    fn batch() -> ProductBatch {
        ProductBatch {
            id: 0,
            batch_number: 111,
            current_quantity: 200,
            initial_quantity: 200,
            current_temperature: 20.0,
            minimum_temperature: -5.0,
            due_date: "2022-04-04".to_string(),
            manufacturing_date: "2020-04-04".to_string(),
            manufacturing_hour: 10,
            product_id: 1,
            section_id: 1,
        }
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("address", "Calle 1").is_ok());
        assert_eq!(
            validate_text("address", ""),
            Err(ValidationError::required("address"))
        );
        assert!(validate_text("address", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("warehouse_id", 1).is_ok());
        assert_eq!(
            validate_id("warehouse_id", 0),
            Err(ValidationError::required("warehouse_id"))
        );
        assert!(validate_id("warehouse_id", -1).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("due_date", "2022-02-28").is_ok());
        assert!(validate_date("due_date", "2022-02-30").is_err());
        assert!(validate_date("due_date", "").unwrap_err().is_missing_value());
    }

    #[test]
    fn test_valid_section() {
        assert!(validate_section(&section()).is_ok());
    }

    #[test]
    fn test_section_capacity_range() {
        let mut s = section();
        s.minimum_capacity = 5;
        s.maximum_capacity = 4;
        assert!(matches!(
            validate_section(&s),
            Err(ValidationError::CapacityRange {
                minimum: 5,
                maximum: 4
            })
        ));

        // Equal bounds are fine
        s.maximum_capacity = 5;
        assert!(validate_section(&s).is_ok());
    }

    #[test]
    fn test_section_temperatures() {
        let mut s = section();
        s.current_temperature = -273.16;
        assert!(validate_section(&s).is_err());

        s.current_temperature = -273.15;
        assert!(validate_section(&s).is_ok());

        s.minimum_temperature = -300.0;
        assert!(validate_section(&s).is_err());
    }

    #[test]
    fn test_section_requires_references() {
        let mut s = section();
        s.warehouse_id = 0;
        assert_eq!(
            validate_section(&s),
            Err(ValidationError::required("warehouse_id"))
        );

        let mut s = section();
        s.product_type_id = 0;
        assert_eq!(
            validate_section(&s),
            Err(ValidationError::required("product_type_id"))
        );
    }

    #[test]
    fn test_warehouse_rules() {
        assert!(validate_warehouse(&warehouse()).is_ok());

        let mut w = warehouse();
        w.warehouse_code = String::new();
        assert_eq!(
            validate_warehouse(&w),
            Err(ValidationError::required("warehouse_code"))
        );

        let mut w = warehouse();
        w.minimum_capacity = 0;
        assert!(validate_warehouse(&w).is_err());

        let mut w = warehouse();
        w.minimum_temperature = -273.0;
        assert!(validate_warehouse(&w).is_ok());
        w.minimum_temperature = -273.5;
        assert!(validate_warehouse(&w).is_err());
    }

    #[test]
    fn test_product_batch_rules() {
        assert!(validate_product_batch(&batch()).is_ok());

        let mut b = batch();
        b.current_temperature = 0.0;
        assert!(validate_product_batch(&b).is_err());

        let mut b = batch();
        b.current_quantity = 0;
        assert!(validate_product_batch(&b).is_ok());
        b.current_quantity = -1;
        assert!(validate_product_batch(&b).is_err());

        let mut b = batch();
        b.due_date = String::new();
        assert_eq!(
            validate_product_batch(&b),
            Err(ValidationError::required("due_date"))
        );

        let mut b = batch();
        b.section_id = 0;
        assert!(validate_product_batch(&b).is_err());
    }

    #[test]
    fn test_locality_rules() {
        let locality = Locality {
            id: 6700,
            locality_name: "Lujan".to_string(),
            province_id: 0,
        };
        let province = Province {
            province_name: "Buenos Aires".to_string(),
            ..Province::default()
        };
        let country = Country {
            country_name: "Argentina".to_string(),
            ..Country::default()
        };
        assert!(validate_locality(&locality, &province, &country).is_ok());

        let no_id = Locality { id: 0, ..locality.clone() };
        assert_eq!(
            validate_locality(&no_id, &province, &country),
            Err(ValidationError::required("id"))
        );

        assert!(validate_locality(&locality, &province, &Country::default()).is_err());
    }

    #[test]
    fn test_purchase_order_presence_before_date() {
        let order = PurchaseOrder {
            order_date: "not-a-date".to_string(),
            ..PurchaseOrder::default()
        };
        assert_eq!(
            validate_purchase_order(&order),
            Err(ValidationError::required("order_number"))
        );
    }

    #[test]
    fn test_inbound_order_rules() {
        let order = InboundOrder {
            id: 0,
            order_date: "2021-04-04".to_string(),
            order_number: "ORD-1".to_string(),
            employee_id: 1,
            product_batch_id: 1,
            warehouse_id: 1,
        };
        assert!(validate_inbound_order(&order).is_ok());

        let missing = InboundOrder {
            product_batch_id: 0,
            ..order
        };
        assert_eq!(
            validate_inbound_order(&missing),
            Err(ValidationError::required("product_batch_id"))
        );
    }
}
