//! Screen selection for the session.
//!
//! The same query state feeds three listings. [`Screen`] picks which one a view
//! model is computed for:
//! - **Home**: the first few catalog records as highlights
//! - **Inventory**: the filtered, sorted listing
//! - **Favorites**: favorited records in catalog order
//!
//! # Example
//!
//! ```rust
//! use showroom::app::Screen;
//!
//! assert_eq!(Screen::default(), Screen::Inventory);
//! assert_eq!("favorites".parse::<Screen>().ok(), Some(Screen::Favorites));
//! ```

use crate::domain::ShowroomError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Highlights only; filters and search do not apply.
    Home,

    /// Full listing with search, filters and sorting applied.
    #[default]
    Inventory,

    /// Favorited records, unaffected by filters.
    Favorites,
}

impl Screen {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Available Cars",
            Self::Inventory => "Inventory",
            Self::Favorites => "Favorites",
        }
    }
}

impl FromStr for Screen {
    type Err = ShowroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "inventory" | "list" => Ok(Self::Inventory),
            "favorites" | "favourites" => Ok(Self::Favorites),
            other => Err(ShowroomError::Parse(format!("unknown screen: {other:?}"))),
        }
    }
}
