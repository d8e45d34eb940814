//! # wms-service: Business Rules for the Warehouse API
//!
//! One service per entity. Each service owns the repository for its table
//! and reads sibling tables only through the narrow traits in [`lookup`].
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  handler ──► XService::save(input)                                      │
//! │                 │                                                       │
//! │                 ├─ 1. wms_core::validation::validate_x   → 422          │
//! │                 ├─ 2. referenced rows exist (lookups)    → 422 / 409    │
//! │                 ├─ 3. business key not taken             → 409          │
//! │                 └─ 4. repository insert / update                        │
//! │                                                                         │
//! │  Updates load the stored row first (404), merge the patch, then run     │
//! │  the same four steps with the row itself excluded from step 3.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks are independent reads, not a transaction. Two racing creates can
//! both pass step 3; the UNIQUE constraint then rejects the loser and the
//! API reports it as a conflict.
//!
//! ## Wiring
//! ```rust,ignore
//! let db = wms_db::Database::new(DbConfig::new("wms.db")).await?;
//! let services = wms_service::Services::new(&db);
//! let section = services.sections.get_by_id(1).await?;
//! ```

pub mod error;
pub mod lookup;

pub mod buyer;
pub mod carry;
pub mod employee;
pub mod inbound_order;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod product_type;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

use std::sync::Arc;

use wms_db::Database;

pub use buyer::BuyerService;
pub use carry::CarryService;
pub use employee::EmployeeService;
pub use error::{ArgumentError, ServiceError, ServiceResult};
pub use inbound_order::InboundOrderService;
pub use locality::LocalityService;
pub use lookup::{
    BuyerLookup, LocalityLookup, ProductLookup, ProductRecordLookup, ProductTypeLookup,
    SectionLookup, SellerLookup, WarehouseLookup,
};
pub use product::ProductService;
pub use product_batch::ProductBatchService;
pub use product_record::ProductRecordService;
pub use product_type::ProductTypeService;
pub use purchase_order::PurchaseOrderService;
pub use section::SectionService;
pub use seller::SellerService;
pub use warehouse::WarehouseService;

/// Every service, wired against one database.
pub struct Services {
    pub localities: LocalityService,
    pub sellers: SellerService,
    pub carries: CarryService,
    pub buyers: BuyerService,
    pub warehouses: WarehouseService,
    pub product_types: ProductTypeService,
    pub sections: SectionService,
    pub employees: EmployeeService,
    pub products: ProductService,
    pub product_batches: ProductBatchService,
    pub product_records: ProductRecordService,
    pub inbound_orders: InboundOrderService,
    pub purchase_orders: PurchaseOrderService,
}

impl Services {
    pub fn new(db: &Database) -> Self {
        let warehouses: Arc<dyn WarehouseLookup> = Arc::new(db.warehouses());
        let product_types: Arc<dyn ProductTypeLookup> = Arc::new(db.product_types());
        let localities: Arc<dyn LocalityLookup> = Arc::new(db.localities());
        let buyers: Arc<dyn BuyerLookup> = Arc::new(db.buyers());
        let sellers: Arc<dyn SellerLookup> = Arc::new(db.sellers());
        let products: Arc<dyn ProductLookup> = Arc::new(db.products());
        let sections: Arc<dyn SectionLookup> = Arc::new(db.sections());
        let product_records: Arc<dyn ProductRecordLookup> = Arc::new(db.product_records());

        Services {
            localities: LocalityService::new(db.localities(), db.provinces(), db.countries()),
            sellers: SellerService::new(db.sellers(), localities.clone()),
            carries: CarryService::new(db.carries(), localities),
            buyers: BuyerService::new(db.buyers()),
            warehouses: WarehouseService::new(db.warehouses()),
            product_types: ProductTypeService::new(db.product_types()),
            sections: SectionService::new(db.sections(), warehouses.clone(), product_types.clone()),
            employees: EmployeeService::new(db.employees(), warehouses),
            products: ProductService::new(db.products(), product_types, sellers),
            product_batches: ProductBatchService::new(
                db.product_batches(),
                sections,
                products.clone(),
            ),
            product_records: ProductRecordService::new(db.product_records(), products),
            inbound_orders: InboundOrderService::new(db.inbound_orders()),
            purchase_orders: PurchaseOrderService::new(
                db.purchase_orders(),
                buyers,
                product_records,
            ),
        }
    }
}
