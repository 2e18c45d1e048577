//! Domain layer for the showroom.
//!
//! This module contains the core domain types, independent of how catalogs are
//! loaded or how results are displayed.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`vehicle`]: Vehicle record, id and the closed vocabularies (fuel, transmission, status)
//! - [`format`]: Price and mileage display formatting
//!
//! # Examples
//!
//! ```
//! use showroom::domain::{format_price, FuelType, Transmission, Vehicle, VehicleId};
//!
//! let v = Vehicle::new(VehicleId(3), "Suzuki", "Alto VXL AGS", 2022, 1_150_000, FuelType::Petrol, Transmission::Automatic);
//! assert_eq!(format_price(v.price), "Rs. 11.5 Lac");
//! ```

pub mod error;
pub mod format;
pub mod vehicle;

pub use error::{Result, ShowroomError};
pub use format::{format_mileage, format_price};
pub use vehicle::{FuelType, StatusTone, Transmission, Vehicle, VehicleId, VehicleStatus};
