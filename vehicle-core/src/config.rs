//! Vehicle construction record
//!
//! `VehicleSpec` carries the four immutable inputs of a vehicle in a form that
//! can be embedded in configuration files. Building a vehicle from it is the
//! same as calling `Vehicle::new` with its fields.

use crate::types::CarMake;
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// Construction parameters for a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Display color (usually a hex string such as "#FF0000")
    #[serde(default = "default_color")]
    pub color: String,

    /// Manufacturer
    pub make: CarMake,

    /// Liters consumed per 100 km
    pub fuel_consumption_per_100km: f64,

    /// Maximum liters the tank holds
    pub tank_capacity: i32,
}

fn default_color() -> String {
    "#FFFFFF".to_string()
}

impl VehicleSpec {
    /// Create a new spec with the default color
    pub fn new(make: CarMake, fuel_consumption_per_100km: f64, tank_capacity: i32) -> Self {
        Self {
            color: default_color(),
            make,
            fuel_consumption_per_100km,
            tank_capacity,
        }
    }

    /// Builder method: set the display color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builder method: set the manufacturer
    pub fn with_make(mut self, make: CarMake) -> Self {
        self.make = make;
        self
    }

    /// Builder method: set the consumption rate
    pub fn with_fuel_consumption(mut self, liters_per_100km: f64) -> Self {
        self.fuel_consumption_per_100km = liters_per_100km;
        self
    }

    /// Builder method: set the tank capacity
    pub fn with_tank_capacity(mut self, liters: i32) -> Self {
        self.tank_capacity = liters;
        self
    }

    /// Build a fresh vehicle (empty tank, both odometers at zero)
    pub fn build(&self) -> Vehicle {
        Vehicle::from_spec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_spec_builder() {
        let spec = VehicleSpec::new(CarMake::Audi, 5.5, 50)
            .with_color("#FF0000")
            .with_make(CarMake::Volvo)
            .with_fuel_consumption(7.2)
            .with_tank_capacity(60);

        assert_eq!(spec.color, "#FF0000");
        assert_eq!(spec.make, CarMake::Volvo);
        assert_eq!(spec.fuel_consumption_per_100km, 7.2);
        assert_eq!(spec.tank_capacity, 60);
    }

    #[test]
    fn test_build_starts_empty() {
        let vehicle = VehicleSpec::new(CarMake::Fiat, 4.8, 35).build();

        assert_eq!(vehicle.color(), "#FFFFFF");
        assert_eq!(vehicle.make(), CarMake::Fiat);
        assert_eq!(vehicle.tank_capacity(), 35);
        assert_eq!(vehicle.fuel_level(), 0);
        assert_eq!(vehicle.odometer(), 0);
        assert_eq!(vehicle.daily_odometer(), 0);
    }

    #[test]
    fn test_spec_deserializes_with_default_color() {
        let json = r#"{"make": "skoda", "fuel_consumption_per_100km": 6.1, "tank_capacity": 55}"#;
        let spec: VehicleSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.color, "#FFFFFF");
        assert_eq!(spec.make, CarMake::Skoda);
        assert_eq!(spec.tank_capacity, 55);
    }
}
