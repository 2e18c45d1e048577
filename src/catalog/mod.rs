//! Catalog layer: the fixed vehicle inventory.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait with embedded and file-backed loaders
//! - `store`: [`CatalogStore`], the validated, read-only record collection

pub mod source;
pub mod store;

pub use source::{CatalogDocument, CatalogSource, EmbeddedCatalog, FileCatalog};
pub use store::CatalogStore;
