//! Change notifications emitted by the event handler.
//!
//! The host view layer receives a `Vec<Action>` after each event and uses it to
//! decide what to re-pull: the filtered listing and badge after a filter change,
//! a single heart icon (and the favorites screen) after a toggle.
//!
//! # Example
//!
//! ```rust
//! use showroom::app::Action;
//! use showroom::domain::VehicleId;
//!
//! let actions = vec![
//!     Action::FavoriteChanged { id: VehicleId(3), is_favorite: true },
//! ];
//! assert_eq!(actions.len(), 1);
//! ```

use super::modes::Screen;
use crate::domain::VehicleId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The filter spec changed; the inventory listing must be re-pulled.
    FiltersChanged {
        /// New spec version.
        version: u64,
        /// Value for the active-filter badge.
        active_filters: usize,
    },

    /// Membership of one vehicle flipped.
    FavoriteChanged {
        id: VehicleId,
        is_favorite: bool,
    },

    /// The session switched to another listing.
    ScreenChanged(Screen),
}
