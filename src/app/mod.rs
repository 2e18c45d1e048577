//! Application layer coordinating filter state, favorites and listings.
//!
//! This module sits between the host view layer and the catalog/query layers.
//! Input flows in one direction:
//!
//! ```text
//! User Input → Events → Event Handler → Session Mutations → Actions → View re-pull
//!                                             │
//!                                 Query Engine (memoized)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Change notifications emitted by the event handler
//! - [`controller`]: Filter state controller with version counter and observers
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen selection
//! - [`state`]: Session state and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::FilterController;
pub use handler::{handle_event, Event};
pub use modes::Screen;
pub use state::{Session, DEFAULT_HIGHLIGHT_COUNT};
