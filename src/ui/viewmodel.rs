//! View model types representing renderable listing state.
//!
//! View models are computed by [`Session::compute_viewmodel`](crate::app::Session::compute_viewmodel)
//! and contain display-ready strings only: formatted prices, status labels and
//! colors, favorite flags. A renderer never needs to touch the catalog or the
//! filter state to draw one.

/// Everything needed to draw one listing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingViewModel {
    pub header: HeaderInfo,

    /// Present when at least one filter chip is active.
    pub filter_badge: Option<FilterBadge>,

    /// Present on screens that accept search input.
    pub search_bar: Option<SearchBarInfo>,

    pub cards: Vec<VehicleCard>,

    /// Present when `cards` is empty.
    pub empty_state: Option<EmptyState>,
}

/// One vehicle as it appears in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleCard {
    pub id: u32,
    /// Brand and model, e.g. "Suzuki APV GLX".
    pub title: String,
    pub brand: String,
    pub year: i32,
    /// Formatted price, e.g. "Rs. 46.0 Lac".
    pub price: String,
    pub mileage: String,
    pub fuel_type: String,
    pub transmission: String,
    pub status_label: String,
    /// Hex color of the status badge.
    pub status_color: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, e.g. "Inventory (4 Cars)".
    pub title: String,
}

/// Active-filter badge, e.g. "2 filters active".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBadge {
    pub active: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Message shown instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No Cars Found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
