//! # Domain Types
//!
//! Entities managed by the warehouse API.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  geography   Country ◄── Province ◄── Locality                          │
//! │                                          ▲                              │
//! │  partner     Seller ─────────────────────┤   Buyer                      │
//! │              Carry  ─────────────────────┘                              │
//! │                                                                         │
//! │  storage     Warehouse ◄── Section ──► ProductType                      │
//! │                  ▲                                                      │
//! │              Employee                                                   │
//! │                                                                         │
//! │  product     Product ──► ProductType, Seller                            │
//! │              ProductBatch ──► Product, Section                          │
//! │              ProductRecord ──► Product                                  │
//! │                                                                         │
//! │  order       InboundOrder (employee, batch, warehouse)                  │
//! │              PurchaseOrder ──► Buyer, ProductRecord                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Create vs. Patch
//! Entity structs double as create payloads: every field defaults to its zero
//! value when absent from the JSON body so that missing fields reach the
//! validation layer instead of failing at decode time. Partial updates use
//! the matching `*Patch` type, whose `Option` fields are merged over the
//! stored record by `apply`.

pub mod geography;
pub mod order;
pub mod partner;
pub mod product;
pub mod report;
pub mod storage;

pub use geography::{Country, Locality, LocalityInput, Province};
pub use order::{InboundOrder, PurchaseOrder};
pub use partner::{Buyer, BuyerPatch, Carry, Seller, SellerPatch};
pub use product::{Product, ProductBatch, ProductPatch, ProductRecord};
pub use report::{
    BuyerPurchaseOrdersReport, EmployeeInboundOrdersReport, LocalityCarriesReport,
    LocalitySellersReport, ProductRecordsReport, SectionProductsReport,
};
pub use storage::{
    Employee, EmployeePatch, ProductType, ProductTypePatch, Section, SectionPatch, Warehouse,
    WarehousePatch,
};

/// Overwrites `slot` when the patch carries a value.
#[inline]
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_overwrites_present_values() {
        let mut value = 3;
        merge(&mut value, None);
        assert_eq!(value, 3);

        merge(&mut value, Some(7));
        assert_eq!(value, 7);
    }
}
