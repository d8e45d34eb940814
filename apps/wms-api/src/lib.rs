//! # wms-api: Warehouse Management REST Server
//!
//! ## Module Organization
//! ```text
//! wms_api/
//! ├── lib.rs          ◄─── You are here (router assembly)
//! ├── main.rs         ◄─── Logging, config, database, serve
//! ├── config.rs       ◄─── ApiConfig (defaults → wms.toml → WMS_* env)
//! ├── state.rs        ◄─── AppState shared by handlers
//! ├── extract.rs      ◄─── Extractors that reject with ApiError
//! ├── error.rs        ◄─── ApiError / ErrorCode and status mapping
//! └── handlers/       ◄─── One module per resource
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

use axum::Router;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use state::AppState;

/// Builds the full router: `/health` plus every `/api/v1` resource.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::localities::routes())
        .merge(handlers::sellers::routes())
        .merge(handlers::carries::routes())
        .merge(handlers::buyers::routes())
        .merge(handlers::warehouses::routes())
        .merge(handlers::product_types::routes())
        .merge(handlers::sections::routes())
        .merge(handlers::employees::routes())
        .merge(handlers::products::routes())
        .merge(handlers::product_batches::routes())
        .merge(handlers::product_records::routes())
        .merge(handlers::inbound_orders::routes())
        .merge(handlers::purchase_orders::routes())
        .with_state(state)
}
