//! Showroom: the inventory query engine behind a vehicle dealership app.
//!
//! The crate provides everything a listing screen needs except drawing it:
//! - A fixed, validated vehicle catalog loaded once at startup
//! - Case-insensitive free-text search over brand and model
//! - Brand, fuel type and transmission filters combined with AND
//! - Stable price and year sorting
//! - Active-filter accounting for the filter badge
//! - Session-wide favorites shared by every screen
//! - Memoized results keyed by a filter version counter

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host view layer / demo binary (main.rs)            │  ← Input, drawing
//! └─────────────────────────────────────────────────────┘
//!                        │ Events
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Session (single source of truth)                 │
//! │  - Filter controller (version + observers)          │
//! │  - Event handling, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ Favorites     │   │ UI support    │
//! │ (query/)      │   │ (favorites/)  │   │ (ui/)         │
//! │ - FilterSpec  │   │ - Registry    │   │ - View models │
//! │ - evaluate    │   │ - Join view   │   │ - Themes      │
//! │ - Cache       │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/) and Domain (domain/)            │
//! │  - Catalog sources and the immutable store          │
//! │  - Vehicle model, vocabularies, errors, formatting  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state, filter controller and event handling
//! - [`catalog`]: Catalog sources and the immutable store
//! - [`domain`]: Core domain types (Vehicle, errors, formatting)
//! - [`favorites`]: Favorite registry
//! - [`infrastructure`]: Path helpers
//! - [`query`]: Filter specification, evaluation pipeline and cache
//! - [`ui`]: View models and themes
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/showroom/config.toml
//! catalog_file = "~/showroom/catalog.toml"
//! theme = "luxury-dark"
//! trace_level = "debug"
//! log_file = "~/.local/share/showroom/showroom.log"
//! highlight_count = 4
//! initial_brand = "Suzuki"
//! ```
//!
//! # Example
//!
//! ```rust
//! use showroom::{handle_event, initialize, Config, Event, Screen};
//!
//! let mut session = initialize(&Config::default())?;
//!
//! handle_event(&mut session, &Event::SetSearch("suzuki".to_string()));
//! let viewmodel = session.compute_viewmodel(Screen::Inventory);
//! assert_eq!(viewmodel.cards.len(), 4);
//! # Ok::<(), showroom::ShowroomError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod favorites;
pub mod infrastructure;
pub mod query;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, FilterController, Screen, Session};
pub use catalog::{CatalogSource, CatalogStore, EmbeddedCatalog, FileCatalog};
pub use domain::{Result, ShowroomError, Vehicle, VehicleId};
pub use favorites::FavoriteRegistry;
pub use query::{evaluate, Choice, FilterSpec, SortMode};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Application configuration.
///
/// Can be parsed from a TOML file ([`Config::from_file`]) or from a flat string
/// map such as an embedding host's key/value settings ([`Config::from_map`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog document (`.toml` or `.json`); the built-in inventory when unset.
    ///
    /// A leading `~` is expanded to the home directory.
    pub catalog_file: Option<String>,

    /// Built-in theme name: `luxury-dark` or `daylight`. Ignored if `theme_file` is set.
    #[serde(alias = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,

    /// Log file path; logs go to stderr when unset.
    pub log_file: Option<String>,

    /// Number of catalog records shown on the home screen. Default: 4
    pub highlight_count: usize,

    /// Brand pre-selected when the session starts.
    pub initial_brand: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
            highlight_count: app::DEFAULT_HIGHLIGHT_COUNT,
            initial_brand: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `highlight_count`: String → `usize` (falls back to 4 on parse error)
    /// - `theme`: built-in theme name
    /// - other keys map one-to-one; blank values count as unset
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use showroom::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("highlight_count".to_string(), "6".to_string());
    /// map.insert("initial_brand".to_string(), "Suzuki".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.highlight_count, 6);
    /// assert_eq!(config.initial_brand.as_deref(), Some("Suzuki"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let highlight_count = config
            .get("highlight_count")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(app::DEFAULT_HIGHLIGHT_COUNT);

        Self {
            catalog_file: text("catalog_file"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            log_file: text("log_file"),
            highlight_count,
            initial_brand: text("initial_brand"),
        }
    }

    /// Parses a TOML configuration document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Config`] if the document is not valid TOML or has
    /// mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ShowroomError::Config(format!("invalid configuration: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Io`] if the file cannot be read, or
    /// [`ShowroomError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "reading configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Starts a browsing session from configuration.
///
/// Resolves the theme (file, then name, then default; theme problems fall back to
/// the default), loads and validates the catalog, and applies `initial_brand`.
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be read, parsed or validated.
pub fn initialize(config: &Config) -> Result<Session> {
    tracing::debug!("initializing showroom session");

    let theme = config.resolve_theme();

    let catalog = match &config.catalog_file {
        Some(path) => CatalogStore::from_source(&FileCatalog::new(infrastructure::expand_tilde(path)))?,
        None => CatalogStore::from_source(&EmbeddedCatalog)?,
    };

    if let Some(brand) = &config.initial_brand {
        if !catalog.brands().contains(&brand.as_str()) {
            tracing::debug!(brand = %brand, "initial brand has no vehicles in the catalog");
        }
    }

    let mut session = Session::new(Arc::new(catalog), theme).with_highlight_count(config.highlight_count);
    if let Some(brand) = &config.initial_brand {
        session.filters_mut().set_brand(Some(brand.clone()));
    }

    Ok(session)
}
