//! Aggregated report rows returned by the `report-*` endpoints.

use serde::{Deserialize, Serialize};

/// Number of sellers registered in a locality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LocalitySellersReport {
    pub locality_id: i64,
    pub locality_name: String,
    pub sellers_count: i64,
}

/// Number of carriers registered in a locality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LocalityCarriesReport {
    pub locality_id: i64,
    pub locality_name: String,
    pub carries_count: i64,
}

/// An employee with the number of inbound orders they registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct EmployeeInboundOrdersReport {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
    pub inbound_orders_count: i64,
}

/// A buyer with a summary of their purchase orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerPurchaseOrdersReport {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
    /// Order numbers, sorted.
    pub order_codes: Vec<String>,
}

/// Total quantity of product currently stored in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SectionProductsReport {
    pub section_id: i64,
    pub section_number: i64,
    pub products_count: i64,
}

/// Number of price records kept for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductRecordsReport {
    pub product_id: i64,
    pub description: String,
    pub records_count: i64,
}
