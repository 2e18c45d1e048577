//! Filter state controller.
//!
//! [`FilterController`] owns the session's single [`FilterSpec`]. Each setter
//! replaces exactly one field; [`FilterController::clear`] replaces the whole spec
//! in one assignment. Every effective change bumps a version counter (the key the
//! query cache is invalidated by) and notifies subscribed observers with the new
//! spec. Setting a field to the value it already holds changes nothing: no version
//! bump, no notification.

use crate::domain::{FuelType, Transmission};
use crate::query::{Choice, FilterSpec, SortMode};
use std::fmt;

type Observer = Box<dyn FnMut(&FilterSpec)>;

#[derive(Default)]
pub struct FilterController {
    spec: FilterSpec,
    version: u64,
    observers: Vec<Observer>,
}

impl fmt::Debug for FilterController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterController")
            .field("spec", &self.spec)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Replaces `field` with `value`, reporting whether anything changed.
fn replace<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        false
    } else {
        *field = value;
        true
    }
}

impl FilterController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Monotonic counter bumped on every effective change.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.spec.active_filter_count()
    }

    /// Registers a callback invoked with the new spec after every change.
    ///
    /// # Example
    ///
    /// ```rust
    /// use showroom::app::FilterController;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let changes = Rc::new(Cell::new(0));
    /// let seen = Rc::clone(&changes);
    ///
    /// let mut filters = FilterController::new();
    /// filters.subscribe(move |_spec| seen.set(seen.get() + 1));
    /// filters.set_search_text("civic");
    /// filters.set_search_text("civic");
    /// assert_eq!(changes.get(), 1);
    /// ```
    pub fn subscribe(&mut self, observer: impl FnMut(&FilterSpec) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let changed = replace(&mut self.spec.search_text, text.into());
        self.commit(changed, "search_text")
    }

    /// Selects a brand; `None` shows every brand.
    pub fn set_brand(&mut self, brand: Option<String>) -> bool {
        let changed = replace(&mut self.spec.selected_brand, brand);
        self.commit(changed, "brand")
    }

    pub fn set_fuel(&mut self, fuel: Choice<FuelType>) -> bool {
        let changed = replace(&mut self.spec.selected_fuel, fuel);
        self.commit(changed, "fuel")
    }

    pub fn set_transmission(&mut self, transmission: Choice<Transmission>) -> bool {
        let changed = replace(&mut self.spec.selected_transmission, transmission);
        self.commit(changed, "transmission")
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) -> bool {
        let changed = replace(&mut self.spec.sort_mode, mode);
        self.commit(changed, "sort_mode")
    }

    /// Resets every field, search text included, in a single step.
    pub fn clear(&mut self) -> bool {
        let changed = !self.spec.is_default();
        self.spec = FilterSpec::default();
        self.commit(changed, "all")
    }

    fn commit(&mut self, changed: bool, field: &'static str) -> bool {
        if !changed {
            tracing::trace!(field, "filter unchanged");
            return false;
        }

        self.version += 1;
        tracing::debug!(
            field,
            version = self.version,
            active_filters = self.spec.active_filter_count(),
            "filter spec changed"
        );

        for observer in &mut self.observers {
            observer(&self.spec);
        }
        true
    }
}
