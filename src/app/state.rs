//! Session state and view model computation.
//!
//! [`Session`] is the single source of truth for one browsing session. It owns the
//! filter controller and the favorite registry, so a favorite marked on one screen
//! is visible on every other screen, and it memoizes the inventory query so
//! re-rendering an unchanged state does not re-run the pipeline.
//!
//! # State Components
//!
//! - **Catalog**: shared, immutable vehicle records
//! - **Filters**: the current [`FilterSpec`](crate::query::FilterSpec) with version and observers
//! - **Favorites**: ids marked by the user during this session
//! - **Screen**: which listing view models are computed for
//! - **Cache**: last evaluated `(catalog generation, spec version)` result
//!
//! # Example
//!
//! ```rust
//! use showroom::app::{Screen, Session};
//! use showroom::catalog::{CatalogStore, EmbeddedCatalog};
//! use showroom::ui::Theme;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(CatalogStore::from_source(&EmbeddedCatalog)?);
//! let mut session = Session::new(catalog, Theme::default());
//! session.filters_mut().set_search_text("toyota");
//! let viewmodel = session.compute_viewmodel(Screen::Inventory);
//! assert_eq!(viewmodel.header.title, "Inventory (2 Cars)");
//! # Ok::<(), showroom::ShowroomError>(())
//! ```

use super::controller::FilterController;
use super::modes::Screen;
use crate::catalog::CatalogStore;
use crate::domain::{format_mileage, format_price, Vehicle};
use crate::favorites::FavoriteRegistry;
use crate::query::QueryCache;
use crate::ui::viewmodel::{
    EmptyState, FilterBadge, HeaderInfo, ListingViewModel, SearchBarInfo, VehicleCard,
};
use crate::ui::Theme;
use std::sync::Arc;

/// Number of catalog records shown on the home screen by default.
pub const DEFAULT_HIGHLIGHT_COUNT: usize = 4;

#[derive(Debug)]
pub struct Session {
    catalog: Arc<CatalogStore>,
    filters: FilterController,
    favorites: FavoriteRegistry,
    theme: Theme,
    screen: Screen,
    highlight_count: usize,
    cache: QueryCache,
}

impl Session {
    /// Starts a session with default filters, no favorites, on the inventory screen.
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>, theme: Theme) -> Self {
        tracing::debug!(catalog_len = catalog.len(), theme = %theme.name, "session started");
        Self {
            catalog,
            filters: FilterController::new(),
            favorites: FavoriteRegistry::new(),
            theme,
            screen: Screen::default(),
            highlight_count: DEFAULT_HIGHLIGHT_COUNT,
            cache: QueryCache::new(),
        }
    }

    #[must_use]
    pub fn with_highlight_count(mut self, count: usize) -> Self {
        self.highlight_count = count;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterController {
        &self.filters
    }

    /// Mutable access for setters; the cache notices changes via the version counter.
    pub fn filters_mut(&mut self) -> &mut FilterController {
        &mut self.filters
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoriteRegistry {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoriteRegistry {
        &mut self.favorites
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) -> bool {
        if self.screen == screen {
            return false;
        }
        tracing::debug!(from = ?self.screen, to = ?screen, "screen changed");
        self.screen = screen;
        true
    }

    /// The inventory listing for the current filters, memoized.
    pub fn visible(&mut self) -> Vec<&Vehicle> {
        let positions = self
            .cache
            .positions(&self.catalog, self.filters.version(), self.filters.spec());
        let all = self.catalog.all();
        positions.iter().map(|&position| &all[position]).collect()
    }

    /// Favorited records in catalog order.
    #[must_use]
    pub fn favorites_listing(&self) -> Vec<&Vehicle> {
        self.favorites.favorites_view(&self.catalog)
    }

    /// Home screen highlights: the first few records in catalog order.
    #[must_use]
    pub fn highlights(&self) -> &[Vehicle] {
        self.catalog.highlights(self.highlight_count)
    }

    /// Number of times the inventory pipeline actually ran.
    #[must_use]
    pub const fn query_runs(&self) -> u64 {
        self.cache.misses()
    }

    /// Computes a display-ready view model for `screen`.
    ///
    /// - **Home**: highlight cards, no search bar or filter badge
    /// - **Inventory**: filtered cards with header count, search bar and filter badge
    /// - **Favorites**: favorited cards with header count
    ///
    /// Empty listings carry an [`EmptyState`] message instead of cards.
    pub fn compute_viewmodel(&mut self, screen: Screen) -> ListingViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", screen = ?screen).entered();

        let vehicles: Vec<Vehicle> = match screen {
            Screen::Home => self.highlights().to_vec(),
            Screen::Inventory => self.visible().into_iter().cloned().collect(),
            Screen::Favorites => self.favorites_listing().into_iter().cloned().collect(),
        };

        let cards: Vec<VehicleCard> = vehicles.iter().map(|v| self.compute_card(v)).collect();

        let header = match screen {
            Screen::Home => HeaderInfo {
                title: screen.title().to_string(),
            },
            Screen::Inventory | Screen::Favorites => HeaderInfo {
                title: format!("{} ({} Cars)", screen.title(), cards.len()),
            },
        };

        let (filter_badge, search_bar) = if screen == Screen::Inventory {
            (
                self.compute_filter_badge(),
                Some(SearchBarInfo {
                    query: self.filters.spec().search_text.clone(),
                }),
            )
        } else {
            (None, None)
        };

        let empty_state = if cards.is_empty() {
            Some(self.compute_empty_state(screen))
        } else {
            None
        };

        tracing::debug!(cards = cards.len(), "view model computed");

        ListingViewModel {
            header,
            filter_badge,
            search_bar,
            cards,
            empty_state,
        }
    }

    fn compute_card(&self, vehicle: &Vehicle) -> VehicleCard {
        VehicleCard {
            id: vehicle.id.0,
            title: vehicle.display_name(),
            brand: vehicle.brand.clone(),
            year: vehicle.year,
            price: format_price(vehicle.price),
            mileage: format_mileage(vehicle.mileage),
            fuel_type: vehicle.fuel_type.to_string(),
            transmission: vehicle.transmission.to_string(),
            status_label: vehicle.status.label().to_string(),
            status_color: self.theme.status_color(vehicle.status).to_string(),
            is_favorite: self.favorites.is_favorite(vehicle.id),
        }
    }

    fn compute_filter_badge(&self) -> Option<FilterBadge> {
        let active = self.filters.active_filter_count();
        if active == 0 {
            return None;
        }
        let plural = if active > 1 { "s" } else { "" };
        Some(FilterBadge {
            active,
            text: format!("{active} filter{plural} active"),
        })
    }

    fn compute_empty_state(&self, screen: Screen) -> EmptyState {
        match screen {
            Screen::Home => EmptyState {
                message: "No Cars Yet".to_string(),
                subtitle: "New stock arrives soon".to_string(),
            },
            Screen::Inventory if self.catalog.is_empty() => EmptyState {
                message: "No Cars Yet".to_string(),
                subtitle: "The inventory is empty".to_string(),
            },
            Screen::Inventory => EmptyState {
                message: "No Cars Found".to_string(),
                subtitle: "Try adjusting your filters or search".to_string(),
            },
            Screen::Favorites => EmptyState {
                message: "No Favorites Yet".to_string(),
                subtitle: "Start adding cars to your favorites by tapping the heart icon".to_string(),
            },
        }
    }
}
