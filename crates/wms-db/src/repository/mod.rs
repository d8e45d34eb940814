//! # Repository Module
//!
//! One repository per table.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Service                                                               │
//! │       │                                                                 │
//! │       │  db.sections().get_by_id(4)                                    │
//! │       ▼                                                                 │
//! │  SectionRepository                                                     │
//! │  ├── list_all(&self)                → Vec<Section>                     │
//! │  ├── get_by_id(&self, id)           → Option<Section>                  │
//! │  ├── get_by_number(&self, number)   → Option<Section>                  │
//! │  ├── insert(&self, section)         → Section (with assigned id)       │
//! │  ├── update(&self, section)         → () | NotFound                    │
//! │  └── delete(&self, id)              → () | NotFound                    │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Reads return `Option` for a missing row, never a zero-valued struct
//! - `insert` ignores the incoming `id` (except for localities) and returns
//!   the row with the id SQLite assigned
//! - `update` / `delete` report [`DbError::NotFound`](crate::DbError::NotFound)
//!   when no row matched

pub mod buyer;
pub mod carry;
pub mod employee;
pub mod geography;
pub mod inbound_order;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod product_type;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

pub use buyer::BuyerRepository;
pub use carry::CarryRepository;
pub use employee::EmployeeRepository;
pub use geography::{CountryRepository, LocalityRepository, ProvinceRepository};
pub use inbound_order::InboundOrderRepository;
pub use product::ProductRepository;
pub use product_batch::ProductBatchRepository;
pub use product_record::ProductRecordRepository;
pub use product_type::ProductTypeRepository;
pub use purchase_order::PurchaseOrderRepository;
pub use section::SectionRepository;
pub use seller::SellerRepository;
pub use warehouse::WarehouseRepository;
