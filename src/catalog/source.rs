//! Catalog sources: where the static vehicle data comes from.
//!
//! The [`CatalogSource`] trait abstracts over the static-data loader so the store
//! does not care whether records are compiled into the binary or read from a file
//! at startup. Each implementation returns the records in their declared order and
//! leaves validation to [`CatalogStore`](super::CatalogStore).
//!
//! # Document Format
//!
//! Both TOML and JSON documents share one shape:
//!
//! ```toml
//! version = 1
//!
//! [[vehicles]]
//! id = 1
//! brand = "Toyota"
//! model_name = "Fortuner Legender"
//! year = 2023
//! price = 7999000
//! fuel_type = "Diesel"
//! transmission = "Automatic"
//! ```

use crate::domain::error::{Result, ShowroomError};
use crate::domain::Vehicle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Built-in inventory compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.toml");

/// On-disk catalog container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Version of the document format.
    #[serde(default = "CatalogDocument::current_version")]
    pub version: u32,

    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl CatalogDocument {
    const fn current_version() -> u32 {
        1
    }

    /// Parses a TOML catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Parse`] if the text is not a valid catalog document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Parse`] if the text is not a valid catalog document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Supplies the vehicle records a catalog is built from.
///
/// # Examples
///
/// ```
/// use showroom::catalog::{CatalogSource, EmbeddedCatalog};
///
/// let vehicles = EmbeddedCatalog.load()?;
/// assert_eq!(vehicles.len(), 7);
/// # Ok::<(), showroom::ShowroomError>(())
/// ```
pub trait CatalogSource {
    /// Loads every record in declared order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read or parsed.
    fn load(&self) -> Result<Vec<Vehicle>>;
}

/// The inventory bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Vec<Vehicle>> {
        let _span = tracing::debug_span!("embedded_catalog_load").entered();

        let document = CatalogDocument::from_toml_str(EMBEDDED_CATALOG)?;
        tracing::debug!(
            version = document.version,
            count = document.vehicles.len(),
            "loaded embedded catalog"
        );
        Ok(document.vehicles)
    }
}

/// A catalog read from a `.toml` or `.json` file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Vec<Vehicle>> {
        let _span = tracing::debug_span!("file_catalog_load", path = ?self.path).entered();

        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = std::fs::read_to_string(&self.path)?;
        let document = match extension.as_deref() {
            Some("toml") => CatalogDocument::from_toml_str(&contents)?,
            Some("json") => CatalogDocument::from_json_str(&contents)?,
            other => {
                return Err(ShowroomError::Config(format!(
                    "unsupported catalog format {:?} for {}",
                    other.unwrap_or(""),
                    self.path.display()
                )))
            }
        };

        tracing::debug!(
            version = document.version,
            count = document.vehicles.len(),
            "loaded catalog file"
        );
        Ok(document.vehicles)
    }
}
