//! Shared state handed to every handler.

use std::sync::Arc;

use wms_db::Database;
use wms_service::Services;

/// Cloned per request; both fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState {
            services: Arc::new(Services::new(&db)),
            db,
        }
    }
}
