//! # wms-core: Pure Domain Logic for the Warehouse API
//!
//! Entity types, partial-update patches, report rows and field-level
//! validation. Nothing in here touches storage or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         WMS Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/wms-api (axum handlers)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          wms-service (existence checks, uniqueness)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wms-core (THIS CRATE) ★                         │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │  patches  │  │ validation│                  │   │
//! │  │   │  Section  │  │  merge    │  │   rules   │                  │   │
//! │  │   │ Warehouse │  │  Option   │  │  bounds   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    wms-db (SQLite repositories)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities, patches and report rows
//! - [`error`] - [`ValidationError`]
//! - [`validation`] - Per-entity field rules
//!
//! ## Example Usage
//!
//! ```rust
//! use wms_core::types::Section;
//! use wms_core::validation::validate_section;
//!
//! let section = Section {
//!     section_number: 1,
//!     warehouse_id: 1,
//!     product_type_id: 1,
//!     minimum_capacity: 5,
//!     maximum_capacity: 4,
//!     ..Section::default()
//! };
//!
//! assert!(validate_section(&section).is_err());
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::*;

/// Lowest physically meaningful temperature in °C.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Lower bound accepted for a warehouse's minimum temperature.
///
/// Warehouses have always been registered with whole-degree limits, so the
/// bound is the integer part of absolute zero.
pub const WAREHOUSE_MIN_TEMPERATURE: f64 = -273.0;
