//! Event handling and state transition logic.
//!
//! The view layer translates raw input (keystrokes, chip taps, heart taps) into
//! [`Event`]s and feeds them to [`handle_event`], which mutates the [`Session`] and
//! reports whether a re-render is needed together with the [`Action`]s describing
//! what changed.
//!
//! # Event Types
//!
//! - **Search input**: `SetSearch`, `Char`, `Backspace`
//! - **Filter chips**: `SelectBrand`, `SelectFuel`, `SelectTransmission`, `SelectSort`, `ClearFilters`
//! - **Favorites**: `ToggleFavorite`
//! - **Navigation**: `ShowScreen`
//!
//! # Example
//!
//! ```rust
//! use showroom::app::{handle_event, Event, Session};
//! use showroom::catalog::{CatalogStore, EmbeddedCatalog};
//! use showroom::ui::Theme;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(CatalogStore::from_source(&EmbeddedCatalog)?);
//! let mut session = Session::new(catalog, Theme::default());
//! let (render, actions) = handle_event(&mut session, &Event::Char('s'));
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), showroom::ShowroomError>(())
//! ```

use super::actions::Action;
use super::modes::Screen;
use super::state::Session;
use crate::domain::{FuelType, Transmission, VehicleId};
use crate::query::{Choice, SortMode};

/// Discrete user actions the session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the whole search text.
    SetSearch(String),
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character of the search text.
    Backspace,

    /// Selects a brand chip; `None` is the "All" chip.
    SelectBrand(Option<String>),
    SelectFuel(Choice<FuelType>),
    SelectTransmission(Choice<Transmission>),
    SelectSort(SortMode),
    /// Resets every filter and the search text.
    ClearFilters,

    /// Heart icon tapped.
    ToggleFavorite(VehicleId),

    ShowScreen(Screen),
}

/// Processes an event, mutates the session and returns `(needs_render, actions)`.
///
/// Events that leave the state unchanged (re-selecting the active chip, backspace
/// on empty search) report `false` and no actions.
pub fn handle_event(session: &mut Session, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let filters_changed = match event {
        Event::SetSearch(text) => session.filters_mut().set_search_text(text.as_str()),
        Event::Char(c) => {
            let mut text = session.filters().spec().search_text.clone();
            text.push(*c);
            tracing::trace!(query = %text, "search query updated");
            session.filters_mut().set_search_text(text)
        }
        Event::Backspace => {
            let mut text = session.filters().spec().search_text.clone();
            if text.pop().is_none() {
                return (false, vec![]);
            }
            session.filters_mut().set_search_text(text)
        }
        Event::SelectBrand(brand) => session.filters_mut().set_brand(brand.clone()),
        Event::SelectFuel(fuel) => session.filters_mut().set_fuel(*fuel),
        Event::SelectTransmission(transmission) => {
            session.filters_mut().set_transmission(*transmission)
        }
        Event::SelectSort(mode) => session.filters_mut().set_sort_mode(*mode),
        Event::ClearFilters => {
            tracing::debug!("clearing filters");
            session.filters_mut().clear()
        }
        Event::ToggleFavorite(id) => {
            if session.catalog().get(*id).is_none() {
                tracing::debug!(vehicle_id = %id, "toggling favorite for id not in catalog");
            }
            let is_favorite = session.favorites_mut().toggle(*id);
            return (true, vec![Action::FavoriteChanged { id: *id, is_favorite }]);
        }
        Event::ShowScreen(screen) => {
            if session.set_screen(*screen) {
                return (true, vec![Action::ScreenChanged(*screen)]);
            }
            return (false, vec![]);
        }
    };

    if filters_changed {
        let filters = session.filters();
        (
            true,
            vec![Action::FiltersChanged {
                version: filters.version(),
                active_filters: filters.active_filter_count(),
            }],
        )
    } else {
        tracing::debug!("filters unchanged, skipping render");
        (false, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, EmbeddedCatalog};
    use crate::ui::Theme;
    use std::sync::Arc;

    fn session() -> Session {
        let catalog = Arc::new(CatalogStore::from_source(&EmbeddedCatalog).unwrap());
        Session::new(catalog, Theme::default())
    }

    fn visible_ids(session: &mut Session) -> Vec<u32> {
        session.visible().iter().map(|v| v.id.0).collect()
    }

    #[test]
    fn typing_narrows_the_listing() {
        let mut session = session();
        for c in "apv".chars() {
            handle_event(&mut session, &Event::Char(c));
        }
        assert_eq!(visible_ids(&mut session), vec![5]);

        handle_event(&mut session, &Event::Backspace);
        assert_eq!(session.filters().spec().search_text, "ap");
    }

    #[test]
    fn backspace_on_empty_search_does_nothing() {
        let mut session = session();
        assert_eq!(handle_event(&mut session, &Event::Backspace), (false, vec![]));
    }

    #[test]
    fn reselecting_a_chip_skips_render() {
        let mut session = session();
        let event = Event::SelectSort(SortMode::YearDescending);

        let (render, actions) = handle_event(&mut session, &event);
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::FiltersChanged {
                version: 1,
                active_filters: 1
            }]
        );

        assert_eq!(handle_event(&mut session, &event), (false, vec![]));
    }

    #[test]
    fn toggle_reports_new_membership() {
        let mut session = session();
        let (_, first) = handle_event(&mut session, &Event::ToggleFavorite(VehicleId(3)));
        let (_, second) = handle_event(&mut session, &Event::ToggleFavorite(VehicleId(3)));

        assert_eq!(
            first,
            vec![Action::FavoriteChanged {
                id: VehicleId(3),
                is_favorite: true
            }]
        );
        assert_eq!(
            second,
            vec![Action::FavoriteChanged {
                id: VehicleId(3),
                is_favorite: false
            }]
        );
    }

    #[test]
    fn screen_switch_only_reports_real_changes() {
        let mut session = session();
        assert_eq!(
            handle_event(&mut session, &Event::ShowScreen(Screen::Favorites)),
            (true, vec![Action::ScreenChanged(Screen::Favorites)])
        );
        assert_eq!(
            handle_event(&mut session, &Event::ShowScreen(Screen::Favorites)),
            (false, vec![])
        );
    }

    #[test]
    fn clear_filters_restores_full_listing() {
        let mut session = session();
        handle_event(&mut session, &Event::SelectBrand(Some("Honda".to_string())));
        handle_event(&mut session, &Event::SetSearch("city".to_string()));
        assert_eq!(visible_ids(&mut session), vec![4]);

        let (render, _) = handle_event(&mut session, &Event::ClearFilters);
        assert!(render);
        assert_eq!(visible_ids(&mut session), vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
