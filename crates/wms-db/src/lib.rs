//! # wms-db: Database Layer for the Warehouse API
//!
//! SQLite storage for warehouses, sections, products, partners, orders and
//! the geography they hang off, using sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Warehouse API Data Flow                          │
//! │                                                                         │
//! │  HTTP handler (POST /api/v1/sections)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SectionService (wms-service) ← rules, duplicate checks                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     wms-db (THIS CRATE)                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │ (repository/)  │   │  (embedded)  │   │   │
//! │  │   │               │    │                │   │              │   │   │
//! │  │   │ SqlitePool    │◄───│ SectionRepo    │   │ 001_initial  │   │   │
//! │  │   │ Connection    │    │ ProductRepo    │   │ _schema.sql  │   │   │
//! │  │   │ Management    │    │ BuyerRepo ...  │   │              │   │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or :memory: in tests)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - One repository per table, plus the report queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wms_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("wms.db")).await?;
//!
//! let sections = db.sections().list_all().await?;
//! let stock = db.product_batches().report_by_section(None).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::{
    BuyerRepository, CarryRepository, CountryRepository, EmployeeRepository,
    InboundOrderRepository, LocalityRepository, ProductBatchRepository, ProductRecordRepository,
    ProductRepository, ProductTypeRepository, ProvinceRepository, PurchaseOrderRepository,
    SectionRepository, SellerRepository, WarehouseRepository,
};
