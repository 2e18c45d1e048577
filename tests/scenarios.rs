//! End-to-end browsing scenarios against the built-in inventory.

use showroom::domain::{FuelType, Transmission, Vehicle, VehicleId};
use showroom::{
    evaluate, handle_event, initialize, CatalogStore, Choice, Config, EmbeddedCatalog, Event,
    FavoriteRegistry, FilterController, FilterSpec, Screen, Session, SortMode,
};

fn catalog() -> CatalogStore {
    CatalogStore::from_source(&EmbeddedCatalog).unwrap()
}

fn session() -> Session {
    initialize(&Config::default()).unwrap()
}

fn ids(vehicles: &[&Vehicle]) -> Vec<u32> {
    vehicles.iter().map(|v| v.id.0).collect()
}

fn sample_specs() -> Vec<FilterSpec> {
    let mut specs = Vec::new();
    for search in ["", "suzuki", "CITY", "a", "zzz"] {
        for brand in [None, Some("Suzuki"), Some("Toyota")] {
            for fuel in [Choice::All, Choice::Only(FuelType::Petrol)] {
                for transmission in [Choice::All, Choice::Only(Transmission::Automatic)] {
                    for sort_mode in SortMode::ALL {
                        specs.push(FilterSpec {
                            search_text: search.to_string(),
                            selected_brand: brand.map(String::from),
                            selected_fuel: fuel,
                            selected_transmission: transmission,
                            sort_mode,
                        });
                    }
                }
            }
        }
    }
    specs
}

#[test]
fn search_is_case_insensitive_and_keeps_catalog_order() {
    let catalog = catalog();
    let spec = FilterSpec {
        search_text: "SuZuKi".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&evaluate(catalog.all(), &spec)), vec![2, 3, 5, 6]);
}

#[test]
fn brand_and_transmission_combine() {
    let catalog = catalog();
    let spec = FilterSpec {
        selected_brand: Some("Suzuki".to_string()),
        selected_transmission: Choice::Only(Transmission::Manual),
        ..FilterSpec::default()
    };
    let result = evaluate(catalog.all(), &spec);
    assert_eq!(ids(&result), vec![5]);
    assert_eq!(result[0].display_name(), "Suzuki APV GLX");
}

#[test]
fn price_ascending_orders_full_catalog() {
    let catalog = catalog();
    let spec = FilterSpec {
        sort_mode: SortMode::PriceAscending,
        ..FilterSpec::default()
    };
    let result = evaluate(catalog.all(), &spec);
    let prices: Vec<u64> = result.iter().map(|v| v.price).collect();
    assert_eq!(
        prices,
        vec![1_150_000, 3_249_000, 3_299_000, 3_850_000, 4_599_000, 5_500_000, 7_999_000]
    );
    assert_eq!(ids(&result), vec![3, 6, 2, 4, 5, 7, 1]);
}

#[test]
fn double_toggle_restores_favorite_state() {
    let mut favorites = FavoriteRegistry::new();
    assert!(!favorites.is_favorite(VehicleId(3)));
    favorites.toggle(VehicleId(3));
    favorites.toggle(VehicleId(3));
    assert!(!favorites.is_favorite(VehicleId(3)));
}

#[test]
fn clear_restores_full_catalog() {
    let catalog = catalog();
    let mut filters = FilterController::new();
    filters.set_brand(Some("Suzuki".to_string()));
    filters.set_fuel(Choice::Only(FuelType::Petrol));
    assert_eq!(filters.active_filter_count(), 2);

    filters.clear();
    assert_eq!(filters.active_filter_count(), 0);
    assert_eq!(ids(&evaluate(catalog.all(), filters.spec())), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn unmatched_search_is_empty_not_an_error() {
    let mut session = session();
    handle_event(&mut session, &Event::SetSearch("zzz".to_string()));
    assert!(session.visible().is_empty());

    let viewmodel = session.compute_viewmodel(Screen::Inventory);
    assert_eq!(viewmodel.header.title, "Inventory (0 Cars)");
    assert_eq!(
        viewmodel.empty_state.map(|e| e.message).as_deref(),
        Some("No Cars Found")
    );
}

#[test]
fn results_are_subsets_satisfying_every_predicate() {
    let catalog = catalog();
    for spec in sample_specs() {
        let result = evaluate(catalog.all(), &spec);
        let mut seen = std::collections::HashSet::new();
        let needle = spec.search_text.to_lowercase();

        for vehicle in &result {
            assert!(seen.insert(vehicle.id), "duplicate {} for {spec:?}", vehicle.id);
            assert_eq!(catalog.get(vehicle.id), Some(*vehicle));

            if !needle.is_empty() {
                let brand = vehicle.brand.to_lowercase();
                let model = vehicle.model_name.to_lowercase();
                assert!(
                    brand.contains(&needle)
                        || model.contains(&needle)
                        || format!("{brand} {model}").contains(&needle)
                );
            }
            if let Some(brand) = &spec.selected_brand {
                assert_eq!(&vehicle.brand, brand);
            }
            assert!(spec.selected_fuel.admits(&vehicle.fuel_type));
            assert!(spec.selected_transmission.admits(&vehicle.transmission));
        }
    }
}

#[test]
fn equal_sort_keys_keep_catalog_order() {
    let catalog = catalog();
    let position = |id: VehicleId| catalog.all().iter().position(|v| v.id == id).unwrap();

    for mode in [SortMode::YearDescending, SortMode::YearAscending] {
        let spec = FilterSpec {
            sort_mode: mode,
            ..FilterSpec::default()
        };
        let result = evaluate(catalog.all(), &spec);
        for pair in result.windows(2) {
            if pair[0].year == pair[1].year {
                assert!(position(pair[0].id) < position(pair[1].id));
            }
        }
    }
}

#[test]
fn repeated_setters_are_idempotent() {
    let mut once = FilterController::new();
    once.set_brand(Some("Honda".to_string()));
    once.set_sort_mode(SortMode::YearDescending);

    let mut twice = FilterController::new();
    assert!(twice.set_brand(Some("Honda".to_string())));
    assert!(!twice.set_brand(Some("Honda".to_string())));
    assert!(twice.set_sort_mode(SortMode::YearDescending));
    assert!(!twice.set_sort_mode(SortMode::YearDescending));

    assert_eq!(once.spec(), twice.spec());
    assert_eq!(once.version(), twice.version());
}

#[test]
fn filter_count_ignores_search_text() {
    let mut filters = FilterController::new();
    filters.set_search_text("corolla");
    assert_eq!(filters.active_filter_count(), 0);

    filters.set_transmission(Choice::Only(Transmission::Cvt));
    filters.set_sort_mode(SortMode::PriceDescending);
    assert_eq!(filters.active_filter_count(), 2);
}

#[test]
fn favorites_are_shared_across_screens() {
    let mut session = session();
    handle_event(&mut session, &Event::ToggleFavorite(VehicleId(6)));
    handle_event(&mut session, &Event::ToggleFavorite(VehicleId(2)));

    let inventory = session.compute_viewmodel(Screen::Inventory);
    let favorited: Vec<u32> = inventory.cards.iter().filter(|c| c.is_favorite).map(|c| c.id).collect();
    assert_eq!(favorited, vec![2, 6]);

    let favorites = session.compute_viewmodel(Screen::Favorites);
    assert_eq!(favorites.header.title, "Favorites (2 Cars)");
    assert_eq!(favorites.cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 6]);
}

#[test]
fn unchanged_filters_reuse_memoized_results() {
    let mut session = session();
    session.visible();
    session.visible();
    assert_eq!(session.query_runs(), 1);

    handle_event(&mut session, &Event::SelectBrand(Some("Suzuki".to_string())));
    handle_event(&mut session, &Event::SelectBrand(Some("Suzuki".to_string())));
    session.visible();
    assert_eq!(session.query_runs(), 2);
}
