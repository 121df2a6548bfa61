//! CatalogService: read-only queries composed from the SQL builders.

mod read;
pub use read::CatalogService;
