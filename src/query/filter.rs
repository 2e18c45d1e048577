//! Filter specification types.
//!
//! A [`FilterSpec`] is the complete description of what the inventory listing
//! should show: free-text search, brand, fuel type, transmission and sort order.
//! Every dimension has a default that means "no constraint"; parsing helpers map
//! anything outside the fixed vocabulary to that default instead of failing, so a
//! corrupted value in one dimension never blanks out the others.

use crate::domain::{FuelType, Transmission};
use std::fmt;
use std::str::FromStr;

/// A selection from a closed vocabulary, or no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Choice<T> {
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true when `value` satisfies this choice.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> Choice<T> {
    /// Parses a chip label such as `"All"` or `"Diesel"`.
    ///
    /// Unrecognized input falls back to [`Choice::All`] with a debug log.
    ///
    /// # Examples
    ///
    /// ```
    /// use showroom::domain::FuelType;
    /// use showroom::query::Choice;
    ///
    /// assert_eq!(Choice::<FuelType>::parse_lenient("Diesel"), Choice::Only(FuelType::Diesel));
    /// assert_eq!(Choice::<FuelType>::parse_lenient("All"), Choice::All);
    /// assert_eq!(Choice::<FuelType>::parse_lenient("coal"), Choice::All);
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        trimmed.parse::<T>().map_or_else(
            |_| {
                tracing::debug!(value = %input, "unrecognized filter value, treating as All");
                Self::All
            },
            Self::Only,
        )
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Catalog order.
    #[default]
    Default,
    PriceAscending,
    PriceDescending,
    YearDescending,
    YearAscending,
}

impl SortMode {
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::PriceAscending,
        Self::PriceDescending,
        Self::YearDescending,
        Self::YearAscending,
    ];

    /// Stable short id used by the sort chips.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAscending => "price_low",
            Self::PriceDescending => "price_high",
            Self::YearDescending => "year_new",
            Self::YearAscending => "year_old",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
            Self::YearDescending => "Year: Newest First",
            Self::YearAscending => "Year: Oldest First",
        }
    }

    /// Parses a sort id or label; anything unrecognized is [`SortMode::Default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use showroom::query::SortMode;
    ///
    /// assert_eq!(SortMode::parse_lenient("price_low"), SortMode::PriceAscending);
    /// assert_eq!(SortMode::parse_lenient("Year: Oldest First"), SortMode::YearAscending);
    /// assert_eq!(SortMode::parse_lenient("cheapest"), SortMode::Default);
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let wanted = input.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(wanted) || mode.label().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| {
                tracing::debug!(value = %input, "unrecognized sort mode, using default order");
                Self::Default
            })
    }
}

/// The current combination of search text and filter selections.
///
/// `Default` is the "nothing selected" state a browsing session starts in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterSpec {
    pub search_text: String,
    /// `None` means every brand.
    pub selected_brand: Option<String>,
    pub selected_fuel: Choice<FuelType>,
    pub selected_transmission: Choice<Transmission>,
    pub sort_mode: SortMode,
}

impl FilterSpec {
    /// Number of filter chips holding a non-default value.
    ///
    /// Counts brand, fuel, transmission and sort order. Search text is a query,
    /// not a chip, and is never counted.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        [
            self.selected_brand.is_some(),
            !self.selected_fuel.is_all(),
            !self.selected_transmission.is_all(),
            self.sort_mode != SortMode::Default,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
