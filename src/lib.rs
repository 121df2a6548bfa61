//! musea: read-only REST API over a museum paintings catalog.

pub mod catalog;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::{AppError, ErrorBody};
pub use routes::{api_routes, common_routes};
pub use service::CatalogService;
pub use sql::{Filter, OrderBy, QueryBuf};
pub use state::AppState;
pub use store::{CatalogStore, PgStore};
