//! Core types for the vehicle model library
//!
//! This module defines the manufacturer enumeration, the error taxonomy and the
//! serializable snapshot that the rest of the library (and the CLI) share.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for vehicle operations
pub type Result<T> = std::result::Result<T, VehicleError>;

/// Errors returned by vehicle operations
///
/// Every failure is a synchronous validation failure. The vehicle state is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VehicleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot fuel more than tank capacity: {capacity} L (requested {requested} L, {remaining} L free)")]
    CapacityExceeded {
        /// Liters the caller tried to add
        requested: i32,
        /// Liters still free in the tank
        remaining: i64,
        /// Tank capacity in liters
        capacity: i32,
    },

    #[error("Car ran out of fuel: {distance_km} km requested, range is {range_km:.1} km")]
    OutOfFuel {
        /// Requested distance in kilometers
        distance_km: u32,
        /// Range available on the current fuel level
        range_km: f64,
    },
}

/// Vehicle manufacturers known to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarMake {
    Audi,
    Bmw,
    Fiat,
    Ford,
    Honda,
    Hyundai,
    Mercedes,
    Opel,
    Peugeot,
    Renault,
    Skoda,
    Toyota,
    Volkswagen,
    Volvo,
}

impl CarMake {
    /// All manufacturers, in declaration order
    pub const ALL: [CarMake; 14] = [
        CarMake::Audi,
        CarMake::Bmw,
        CarMake::Fiat,
        CarMake::Ford,
        CarMake::Honda,
        CarMake::Hyundai,
        CarMake::Mercedes,
        CarMake::Opel,
        CarMake::Peugeot,
        CarMake::Renault,
        CarMake::Skoda,
        CarMake::Toyota,
        CarMake::Volkswagen,
        CarMake::Volvo,
    ];

    /// Lowercase identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            CarMake::Audi => "audi",
            CarMake::Bmw => "bmw",
            CarMake::Fiat => "fiat",
            CarMake::Ford => "ford",
            CarMake::Honda => "honda",
            CarMake::Hyundai => "hyundai",
            CarMake::Mercedes => "mercedes",
            CarMake::Opel => "opel",
            CarMake::Peugeot => "peugeot",
            CarMake::Renault => "renault",
            CarMake::Skoda => "skoda",
            CarMake::Toyota => "toyota",
            CarMake::Volkswagen => "volkswagen",
            CarMake::Volvo => "volvo",
        }
    }
}

impl fmt::Display for CarMake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarMake::Audi => write!(f, "Audi"),
            CarMake::Bmw => write!(f, "BMW"),
            CarMake::Fiat => write!(f, "Fiat"),
            CarMake::Ford => write!(f, "Ford"),
            CarMake::Honda => write!(f, "Honda"),
            CarMake::Hyundai => write!(f, "Hyundai"),
            CarMake::Mercedes => write!(f, "Mercedes-Benz"),
            CarMake::Opel => write!(f, "Opel"),
            CarMake::Peugeot => write!(f, "Peugeot"),
            CarMake::Renault => write!(f, "Renault"),
            CarMake::Skoda => write!(f, "Škoda"),
            CarMake::Toyota => write!(f, "Toyota"),
            CarMake::Volkswagen => write!(f, "Volkswagen"),
            CarMake::Volvo => write!(f, "Volvo"),
        }
    }
}

impl FromStr for CarMake {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        CarMake::ALL
            .iter()
            .copied()
            .find(|make| make.id() == wanted)
            .ok_or_else(|| VehicleError::InvalidArgument(format!("Unknown car make: {:?}", s)))
    }
}

/// Point-in-time copy of every vehicle attribute
///
/// Used by reports and log output; it carries no behavior of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub color: String,
    pub make: CarMake,
    pub fuel_consumption_per_100km: f64,
    pub tank_capacity: i32,
    pub fuel_level: i32,
    pub odometer: i64,
    pub daily_odometer: i64,
}

impl fmt::Display for VehicleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} L/100km, {} L tank): fuel {} L, odometer {} km, daily {} km",
            self.color,
            self.make,
            self.fuel_consumption_per_100km,
            self.tank_capacity,
            self.fuel_level,
            self.odometer,
            self.daily_odometer
        )
    }
}
