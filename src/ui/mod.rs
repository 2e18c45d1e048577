//! Presentation support: view models and theme palettes.
//!
//! Layout and drawing belong to the embedding application. This module only
//! produces the display-ready data it needs:
//!
//! ```text
//! Session → compute_viewmodel(screen) → ListingViewModel → (host renderer)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types for listing screens
//! - [`theme`]: Color palettes and ANSI escape helpers

pub mod theme;
pub mod viewmodel;

pub use theme::{Theme, ThemeColors};
pub use viewmodel::{EmptyState, FilterBadge, HeaderInfo, ListingViewModel, SearchBarInfo, VehicleCard};
