//! The immutable catalog store.
//!
//! A [`CatalogStore`] is built once from a [`CatalogSource`], validated, and then
//! only ever read. Records keep their declared order; that order is the "original
//! order" every query result and the favorites view are expressed in.

use super::source::CatalogSource;
use crate::domain::error::{Result, ShowroomError};
use crate::domain::{Vehicle, VehicleId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Model years accepted in a catalog. Fixed bounds, so a catalog that loads
/// once keeps loading regardless of the clock.
const EARLIEST_MODEL_YEAR: i32 = 1886;
const LATEST_MODEL_YEAR: i32 = 2100;

/// Source of catalog generation numbers.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Immutable, validated collection of vehicle records.
#[derive(Debug)]
pub struct CatalogStore {
    vehicles: Vec<Vehicle>,
    index: HashMap<VehicleId, usize>,
    generation: u64,
}

impl CatalogStore {
    /// Loads and validates a catalog from `source`.
    ///
    /// # Errors
    ///
    /// Returns the source's error if loading fails, or [`ShowroomError::Catalog`]
    /// if the records violate a catalog invariant.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        let vehicles = source.load()?;
        Self::from_vehicles(vehicles)
    }

    /// Validates `vehicles` and freezes them into a store.
    ///
    /// # Validation
    ///
    /// - ids are unique
    /// - brand and model name are non-blank
    /// - model year lies between 1886 and 2100
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Catalog`] naming the first offending record.
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_build", count = vehicles.len()).entered();

        let mut index = HashMap::with_capacity(vehicles.len());

        for (position, vehicle) in vehicles.iter().enumerate() {
            if index.insert(vehicle.id, position).is_some() {
                return Err(ShowroomError::Catalog(format!("duplicate vehicle id: {}", vehicle.id)));
            }
            if vehicle.brand.trim().is_empty() || vehicle.model_name.trim().is_empty() {
                return Err(ShowroomError::Catalog(format!(
                    "vehicle {} has a blank brand or model name",
                    vehicle.id
                )));
            }
            if !(EARLIEST_MODEL_YEAR..=LATEST_MODEL_YEAR).contains(&vehicle.year) {
                return Err(ShowroomError::Catalog(format!(
                    "vehicle {} has implausible model year {}",
                    vehicle.id, vehicle.year
                )));
            }
        }

        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(generation, "catalog ready");

        Ok(Self {
            vehicles,
            index,
            generation,
        })
    }

    /// Returns every record in declared order.
    ///
    /// The slice can be iterated any number of times.
    #[must_use]
    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Looks up a record by id. Unknown ids yield `None`.
    #[must_use]
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.index.get(&id).map(|&position| &self.vehicles[position])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Distinct brands in order of first appearance, for the brand chips.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for vehicle in &self.vehicles {
            if !seen.contains(&vehicle.brand.as_str()) {
                seen.push(vehicle.brand.as_str());
            }
        }
        seen
    }

    /// First `count` records in declared order, shown on the home screen.
    #[must_use]
    pub fn highlights(&self, count: usize) -> &[Vehicle] {
        &self.vehicles[..count.min(self.vehicles.len())]
    }

    /// Process-unique identity of this catalog, used to key cached query results.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;
    use crate::domain::{FuelType, Transmission};

    fn car(id: u32, brand: &str, year: i32) -> Vehicle {
        Vehicle::new(VehicleId(id), brand, "Model", year, 1_000_000, FuelType::Petrol, Transmission::Manual)
    }

    #[test]
    fn embedded_catalog_builds() {
        let store = CatalogStore::from_source(&EmbeddedCatalog).unwrap();
        assert_eq!(store.len(), 7);
        assert_eq!(store.brands(), vec!["Toyota", "Suzuki", "Honda"]);
        assert_eq!(store.get(VehicleId(5)).map(|v| v.model_name.as_str()), Some("APV GLX"));
        assert!(store.get(VehicleId(99)).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = CatalogStore::from_vehicles(vec![car(1, "A", 2020), car(1, "B", 2021)]).unwrap_err();
        assert!(matches!(err, ShowroomError::Catalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn blank_brand_is_rejected() {
        let err = CatalogStore::from_vehicles(vec![car(1, "  ", 2020)]).unwrap_err();
        assert!(matches!(err, ShowroomError::Catalog(_)));
    }

    #[test]
    fn model_year_bounds_are_fixed() {
        assert!(CatalogStore::from_vehicles(vec![car(1, "A", 2101)]).is_err());
        assert!(CatalogStore::from_vehicles(vec![car(1, "A", 1885)]).is_err());
        assert!(CatalogStore::from_vehicles(vec![car(1, "A", 2100), car(2, "B", 1886)]).is_ok());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let store = CatalogStore::from_vehicles(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.highlights(4).is_empty());
        assert!(store.brands().is_empty());
    }

    #[test]
    fn highlights_clamp_to_catalog_size() {
        let store = CatalogStore::from_vehicles(vec![car(1, "A", 2020), car(2, "B", 2021)]).unwrap();
        assert_eq!(store.highlights(4).len(), 2);
        assert_eq!(store.highlights(1)[0].id, VehicleId(1));
    }

    #[test]
    fn generations_are_distinct() {
        let a = CatalogStore::from_vehicles(Vec::new()).unwrap();
        let b = CatalogStore::from_vehicles(Vec::new()).unwrap();
        assert_ne!(a.generation(), b.generation());
    }
}
