//! Inbound (receiving) and purchase (outgoing) orders.

use serde::{Deserialize, Serialize};

/// Goods received into a warehouse by an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct InboundOrder {
    pub id: i64,
    pub order_date: String,
    pub order_number: String,
    pub employee_id: i64,
    pub product_batch_id: i64,
    pub warehouse_id: i64,
}

/// An order placed by a buyer against a product record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct PurchaseOrder {
    pub id: i64,
    pub order_number: String,
    pub order_date: String,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_record_id: i64,
}
