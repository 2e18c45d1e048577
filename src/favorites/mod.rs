//! Favorite tracking for the current browsing session.

pub mod registry;

pub use registry::FavoriteRegistry;
