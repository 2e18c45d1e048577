//! Session-wide favorite membership.
//!
//! The registry is a plain set of vehicle ids. It is created empty, changed only by
//! [`FavoriteRegistry::toggle`], and never persisted. Ids are not checked against the
//! catalog: toggling an unknown id simply records it, and the favorites view drops it
//! when joining against the catalog.

use crate::catalog::CatalogStore;
use crate::domain::{Vehicle, VehicleId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteRegistry {
    ids: HashSet<VehicleId>,
}

impl FavoriteRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id` and returns the new state.
    ///
    /// Two toggles in a row restore the original state.
    ///
    /// # Examples
    ///
    /// ```
    /// use showroom::domain::VehicleId;
    /// use showroom::favorites::FavoriteRegistry;
    ///
    /// let mut favorites = FavoriteRegistry::new();
    /// assert!(favorites.toggle(VehicleId(3)));
    /// assert!(!favorites.toggle(VehicleId(3)));
    /// assert!(!favorites.is_favorite(VehicleId(3)));
    /// ```
    pub fn toggle(&mut self, id: VehicleId) -> bool {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        tracing::debug!(vehicle_id = %id, is_favorite = now_favorite, "favorite toggled");
        now_favorite
    }

    #[must_use]
    pub fn is_favorite(&self, id: VehicleId) -> bool {
        self.ids.contains(&id)
    }

    /// Snapshot of every favorited id, including ids with no catalog record.
    #[must_use]
    pub fn list_ids(&self) -> HashSet<VehicleId> {
        self.ids.clone()
    }

    /// Favorited records in catalog order.
    #[must_use]
    pub fn favorites_view<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Vehicle> {
        catalog
            .all()
            .iter()
            .filter(|vehicle| self.is_favorite(vehicle.id))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
