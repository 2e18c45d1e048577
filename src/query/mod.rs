//! Query layer: filter specification, evaluation pipeline and result memo.
//!
//! # Modules
//!
//! - `filter`: [`FilterSpec`], [`Choice`] and [`SortMode`]
//! - `engine`: the pure [`evaluate`] pipeline
//! - `cache`: [`QueryCache`], keyed by catalog generation and spec version

pub mod cache;
pub mod engine;
pub mod filter;

pub use cache::QueryCache;
pub use engine::{evaluate, evaluate_positions};
pub use filter::{Choice, FilterSpec, SortMode};
