//! The query engine: search, filter and sort over the catalog.
//!
//! [`evaluate`] is a pure function of the catalog slice and a [`FilterSpec`]. It
//! never creates or mutates records; the result is a list of borrows into the
//! catalog, so it is always a duplicate-free subset of it.
//!
//! # Pipeline
//!
//! Stages run in a fixed order and every active predicate must hold:
//!
//! 1. **Search**: lowercase substring of brand, model name or display name
//! 2. **Brand**: exact, case-sensitive brand match
//! 3. **Fuel**: exact fuel type match unless `All`
//! 4. **Transmission**: exact transmission match unless `All`
//! 5. **Sort**: stable sort by price or year; `Default` keeps catalog order

use super::filter::{FilterSpec, SortMode};
use crate::domain::Vehicle;
use std::cmp::Reverse;

/// Evaluates `spec` against `catalog`, returning matching records in result order.
///
/// # Examples
///
/// ```
/// use showroom::catalog::{CatalogStore, EmbeddedCatalog};
/// use showroom::query::{evaluate, FilterSpec};
///
/// let catalog = CatalogStore::from_source(&EmbeddedCatalog)?;
/// let spec = FilterSpec { search_text: "suzuki".into(), ..FilterSpec::default() };
/// let ids: Vec<u32> = evaluate(catalog.all(), &spec).iter().map(|v| v.id.0).collect();
/// assert_eq!(ids, vec![2, 3, 5, 6]);
/// # Ok::<(), showroom::ShowroomError>(())
/// ```
#[must_use]
pub fn evaluate<'a>(catalog: &'a [Vehicle], spec: &FilterSpec) -> Vec<&'a Vehicle> {
    evaluate_positions(catalog, spec)
        .into_iter()
        .map(|position| &catalog[position])
        .collect()
}

/// Same as [`evaluate`] but yields positions into `catalog`.
///
/// Positions are what the session cache stores, since they stay valid for the
/// lifetime of an immutable catalog.
#[must_use]
pub fn evaluate_positions(catalog: &[Vehicle], spec: &FilterSpec) -> Vec<usize> {
    let _span = tracing::debug_span!("evaluate",
        catalog_len = catalog.len(),
        query_len = spec.search_text.len(),
        active_filters = spec.active_filter_count(),
        sort = ?spec.sort_mode
    )
    .entered();

    let needle = spec.search_text.to_lowercase();

    let mut positions: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, vehicle)| matches_search(vehicle, &needle))
        .filter(|(_, vehicle)| {
            spec.selected_brand
                .as_ref()
                .map_or(true, |brand| vehicle.brand == *brand)
        })
        .filter(|(_, vehicle)| spec.selected_fuel.admits(&vehicle.fuel_type))
        .filter(|(_, vehicle)| spec.selected_transmission.admits(&vehicle.transmission))
        .map(|(position, _)| position)
        .collect();

    // sort_by_key is stable: equal keys keep their catalog order.
    match spec.sort_mode {
        SortMode::Default => {}
        SortMode::PriceAscending => positions.sort_by_key(|&p| catalog[p].price),
        SortMode::PriceDescending => positions.sort_by_key(|&p| Reverse(catalog[p].price)),
        SortMode::YearDescending => positions.sort_by_key(|&p| Reverse(catalog[p].year)),
        SortMode::YearAscending => positions.sort_by_key(|&p| catalog[p].year),
    }

    tracing::debug!(result_count = positions.len(), "query evaluated");
    positions
}

/// Search stage predicate. `needle` must already be lowercase; empty matches all.
fn matches_search(vehicle: &Vehicle, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let brand = vehicle.brand.to_lowercase();
    let model = vehicle.model_name.to_lowercase();

    brand.contains(needle)
        || model.contains(needle)
        || format!("{brand} {model}").contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FuelType, Transmission, VehicleId};
    use crate::query::Choice;

    fn car(id: u32, brand: &str, model: &str, year: i32, price: u64) -> Vehicle {
        Vehicle::new(VehicleId(id), brand, model, year, price, FuelType::Petrol, Transmission::Automatic)
    }

    fn ids(result: &[&Vehicle]) -> Vec<u32> {
        result.iter().map(|v| v.id.0).collect()
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            car(1, "Toyota", "Corolla", 2020, 500),
            car(2, "Honda", "Civic", 2022, 300),
            car(3, "Toyota", "Yaris", 2022, 300),
            car(4, "honda", "Jazz", 2020, 800),
        ]
    }

    #[test]
    fn empty_spec_is_identity() {
        let fleet = fleet();
        assert_eq!(ids(&evaluate(&fleet, &FilterSpec::default())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_spans_brand_and_model_boundary() {
        let fleet = fleet();
        let spec = FilterSpec {
            search_text: "TA YAR".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &spec)), vec![3]);
    }

    #[test]
    fn search_matches_model_only() {
        let fleet = fleet();
        let spec = FilterSpec {
            search_text: "civ".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &spec)), vec![2]);
    }

    #[test]
    fn brand_filter_is_case_sensitive() {
        let fleet = fleet();
        let spec = FilterSpec {
            selected_brand: Some("Honda".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &spec)), vec![2]);
    }

    #[test]
    fn unknown_brand_yields_empty_result() {
        let fleet = fleet();
        let spec = FilterSpec {
            selected_brand: Some("Lada".to_string()),
            ..FilterSpec::default()
        };
        assert!(evaluate(&fleet, &spec).is_empty());
    }

    #[test]
    fn price_sorts_are_stable() {
        let fleet = fleet();
        let asc = FilterSpec {
            sort_mode: SortMode::PriceAscending,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &asc)), vec![2, 3, 1, 4]);

        let desc = FilterSpec {
            sort_mode: SortMode::PriceDescending,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &desc)), vec![4, 1, 2, 3]);
    }

    #[test]
    fn year_sorts_are_stable() {
        let fleet = fleet();
        let newest = FilterSpec {
            sort_mode: SortMode::YearDescending,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &newest)), vec![2, 3, 1, 4]);

        let oldest = FilterSpec {
            sort_mode: SortMode::YearAscending,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &oldest)), vec![1, 4, 2, 3]);
    }

    #[test]
    fn fuel_and_transmission_filters_combine() {
        let mut fleet = fleet();
        fleet[1].fuel_type = FuelType::Hybrid;
        fleet[2].fuel_type = FuelType::Hybrid;
        fleet[2].transmission = Transmission::Cvt;

        let spec = FilterSpec {
            selected_fuel: Choice::Only(FuelType::Hybrid),
            selected_transmission: Choice::Only(Transmission::Cvt),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&evaluate(&fleet, &spec)), vec![3]);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let spec = FilterSpec {
            search_text: "anything".to_string(),
            sort_mode: SortMode::PriceAscending,
            ..FilterSpec::default()
        };
        assert!(evaluate(&[], &spec).is_empty());
    }
}
