//! Vehicle domain model and its closed vocabularies.
//!
//! A [`Vehicle`] is an immutable catalog record. The query-relevant attributes are
//! `brand`, `model_name`, `year`, `price`, `fuel_type` and `transmission`; the rest
//! are carried for display only. Fuel types, transmissions and statuses come from
//! fixed vocabularies and are modelled as enums so the query engine can compare them
//! exactly.

use crate::domain::error::ShowroomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a catalog record.
///
/// Ids are unique within a catalog and never reused or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VehicleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for VehicleId {
    type Err = ShowroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| ShowroomError::Parse(format!("invalid vehicle id {s:?}: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [Self; 4] = [Self::Petrol, Self::Diesel, Self::Hybrid, Self::Electric];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
    #[serde(rename = "CVT")]
    Cvt,
}

impl Transmission {
    pub const ALL: [Self; 3] = [Self::Automatic, Self::Manual, Self::Cvt];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
            Self::Cvt => "CVT",
        }
    }
}

macro_rules! vocabulary_parse {
    ($ty:ty, $what:literal) => {
        impl FromStr for $ty {
            type Err = ShowroomError;

            /// Parses a vocabulary term, ignoring ASCII case and surrounding whitespace.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ShowroomError::Parse(format!("unknown {}: {s:?}", $what)))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary_parse!(FuelType, "fuel type");
vocabulary_parse!(Transmission, "transmission");

/// Visual tone a status badge is drawn with.
///
/// Tones are resolved to concrete colors by [`crate::ui::Theme::tone_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Accent,
    Warning,
    Muted,
}

/// Sales status of a vehicle.
///
/// Unrecognized values in catalog documents deserialize to [`VehicleStatus::Unknown`]
/// so a single odd record never prevents the catalog from loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Available,
    Sold,
    Reserved,
    #[serde(other)]
    Unknown,
}

/// Label and tone for every status, consulted by every view.
const STATUS_TABLE: [(VehicleStatus, &str, StatusTone); 4] = [
    (VehicleStatus::Available, "Available", StatusTone::Success),
    (VehicleStatus::Sold, "Sold", StatusTone::Accent),
    (VehicleStatus::Reserved, "Reserved", StatusTone::Warning),
    (VehicleStatus::Unknown, "Unknown", StatusTone::Muted),
];

impl VehicleStatus {
    fn entry(self) -> (&'static str, StatusTone) {
        STATUS_TABLE
            .iter()
            .find(|(status, _, _)| *status == self)
            .map_or(("Unknown", StatusTone::Muted), |&(_, label, tone)| (label, tone))
    }

    /// Human-readable badge label, e.g. `"Reserved"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().0
    }

    #[must_use]
    pub fn tone(self) -> StatusTone {
        self.entry().1
    }
}

/// An immutable vehicle record from the catalog.
///
/// # Fields
///
/// - `id`: unique identifier within the catalog
/// - `brand`, `model_name`: used by free-text search and the brand filter
/// - `year`: model year
/// - `price`: amount in the smallest currency unit
/// - `mileage`: odometer reading in kilometers, zero for unused stock
/// - `fuel_type`, `transmission`: fixed vocabularies used by the filters
/// - `status`: sales status shown as a badge
/// - `image`, `color`, `engine`, `features`, `description`: display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    #[serde(alias = "model")]
    pub model_name: String,
    pub year: i32,
    pub price: u64,
    #[serde(default)]
    pub mileage: u32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Vehicle {
    /// Returns the name shown on cards: brand followed by model.
    ///
    /// # Examples
    ///
    /// ```
    /// use showroom::domain::{FuelType, Transmission, Vehicle, VehicleId};
    ///
    /// let v = Vehicle::new(VehicleId(5), "Suzuki", "APV GLX", 2021, 4_599_000, FuelType::Petrol, Transmission::Manual);
    /// assert_eq!(v.display_name(), "Suzuki APV GLX");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model_name)
    }

    /// Creates a record with the query-relevant fields set and display fields empty.
    ///
    /// Catalog documents are normally deserialized; this constructor is for code
    /// that assembles catalogs programmatically.
    #[must_use]
    pub fn new(
        id: VehicleId,
        brand: impl Into<String>,
        model_name: impl Into<String>,
        year: i32,
        price: u64,
        fuel_type: FuelType,
        transmission: Transmission,
    ) -> Self {
        Self {
            id,
            brand: brand.into(),
            model_name: model_name.into(),
            year,
            price,
            mileage: 0,
            fuel_type,
            transmission,
            status: VehicleStatus::Available,
            image: String::new(),
            color: String::new(),
            engine: String::new(),
            features: Vec::new(),
            description: String::new(),
        }
    }
}
