//! Main vehicle API
//!
//! The `Vehicle` struct holds one car's immutable description together with its
//! fuel level and both odometers. All state changes go through `refuel`,
//! `drive` and `reset_daily_odometer`; a failed call leaves the state untouched.

use crate::config::VehicleSpec;
use crate::odometer::{self, DAILY_ODOMETER_CAPACITY, ODOMETER_CAPACITY};
use crate::types::{CarMake, Result, VehicleError, VehicleSnapshot};

/// A single vehicle's fuel and distance state
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    color: String,
    make: CarMake,
    fuel_consumption_per_100km: f64,
    tank_capacity: i32,
    fuel_level: i32,
    odometer: i64,
    daily_odometer: i64,
}

impl Vehicle {
    /// Create a new vehicle with an empty tank and both odometers at zero
    ///
    /// Inputs are taken as given: a zero or negative capacity or consumption
    /// rate is not rejected.
    ///
    /// # Example
    /// ```
    /// use vehicle_core::{CarMake, Vehicle};
    ///
    /// let car = Vehicle::new("#FFFFFF", CarMake::Audi, 5.5, 50);
    /// assert_eq!(car.fuel_level(), 0);
    /// assert_eq!(car.odometer(), 0);
    /// ```
    pub fn new(
        color: impl Into<String>,
        make: CarMake,
        fuel_consumption_per_100km: f64,
        tank_capacity: i32,
    ) -> Self {
        Self {
            color: color.into(),
            make,
            fuel_consumption_per_100km,
            tank_capacity,
            fuel_level: 0,
            odometer: 0,
            daily_odometer: 0,
        }
    }

    /// Create a new vehicle from a construction record
    pub fn from_spec(spec: &VehicleSpec) -> Self {
        Self::new(
            spec.color.clone(),
            spec.make,
            spec.fuel_consumption_per_100km,
            spec.tank_capacity,
        )
    }

    /// Display color given at construction
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Manufacturer
    pub fn make(&self) -> CarMake {
        self.make
    }

    /// Liters consumed per 100 km
    pub fn fuel_consumption_per_100km(&self) -> f64 {
        self.fuel_consumption_per_100km
    }

    /// Maximum liters the tank holds
    pub fn tank_capacity(&self) -> i32 {
        self.tank_capacity
    }

    /// Current liters in the tank
    pub fn fuel_level(&self) -> i32 {
        self.fuel_level
    }

    /// Total distance counter (wraps at `ODOMETER_CAPACITY`)
    pub fn odometer(&self) -> i64 {
        self.odometer
    }

    /// Trip distance counter (wraps at `DAILY_ODOMETER_CAPACITY`)
    pub fn daily_odometer(&self) -> i64 {
        self.daily_odometer
    }

    /// Rollover capacity of the total odometer
    pub fn odometer_capacity(&self) -> i64 {
        ODOMETER_CAPACITY
    }

    /// Rollover capacity of the daily odometer
    pub fn daily_odometer_capacity(&self) -> i64 {
        DAILY_ODOMETER_CAPACITY
    }

    /// Liters that can still be added before the tank is full
    pub fn remaining_capacity(&self) -> i64 {
        i64::from(self.tank_capacity) - i64::from(self.fuel_level)
    }

    /// Maximum distance drivable on the current fuel level, in kilometers
    pub fn range_km(&self) -> f64 {
        f64::from(self.fuel_level) / self.fuel_consumption_per_100km * 100.0
    }

    /// Add fuel to the tank
    ///
    /// # Arguments
    /// * `liters` - Amount to add; must be positive and fit in the free volume
    ///
    /// # Returns
    /// * `Err(VehicleError::InvalidArgument)` if `liters <= 0`
    /// * `Err(VehicleError::CapacityExceeded)` if the tank cannot take `liters`
    ///
    /// # Example
    /// ```
    /// use vehicle_core::{CarMake, Vehicle, VehicleError};
    ///
    /// let mut car = Vehicle::new("#FFFFFF", CarMake::Audi, 5.5, 50);
    /// car.refuel(50).unwrap();
    /// assert!(matches!(car.refuel(1), Err(VehicleError::CapacityExceeded { .. })));
    /// assert_eq!(car.fuel_level(), 50);
    /// ```
    pub fn refuel(&mut self, liters: i32) -> Result<()> {
        if liters <= 0 {
            log::debug!("Refuel rejected: {} L is not a positive amount", liters);
            return Err(VehicleError::InvalidArgument(format!(
                "Cannot refuel less than or equal to 0 liters (got {})",
                liters
            )));
        }

        let remaining = self.remaining_capacity();
        if i64::from(liters) > remaining {
            log::debug!(
                "Refuel rejected: {} L requested, {} L free of {} L",
                liters,
                remaining,
                self.tank_capacity
            );
            return Err(VehicleError::CapacityExceeded {
                requested: liters,
                remaining,
                capacity: self.tank_capacity,
            });
        }

        self.fuel_level += liters;
        log::debug!(
            "Refueled {} L, fuel level now {}/{} L",
            liters,
            self.fuel_level,
            self.tank_capacity
        );
        Ok(())
    }

    /// Drive a distance, advancing both odometers
    ///
    /// The distance is checked against `range_km()`; driving exactly the range
    /// is allowed. Driving does not consume fuel.
    ///
    /// # Arguments
    /// * `distance_km` - Distance to add to both odometers
    ///
    /// # Returns
    /// * `Err(VehicleError::OutOfFuel)` if `distance_km` exceeds the range
    pub fn drive(&mut self, distance_km: u32) -> Result<()> {
        let range_km = self.range_km();
        if f64::from(distance_km) > range_km {
            log::debug!(
                "Drive rejected: {} km requested, range is {:.1} km",
                distance_km,
                range_km
            );
            return Err(VehicleError::OutOfFuel {
                distance_km,
                range_km,
            });
        }

        self.odometer = odometer::advance(self.odometer, ODOMETER_CAPACITY, distance_km);
        self.daily_odometer =
            odometer::advance(self.daily_odometer, DAILY_ODOMETER_CAPACITY, distance_km);

        log::debug!(
            "Drove {} km, odometer {} km, daily {} km",
            distance_km,
            self.odometer,
            self.daily_odometer
        );
        Ok(())
    }

    /// Set the daily odometer back to zero
    pub fn reset_daily_odometer(&mut self) {
        log::debug!("Daily odometer reset (was {} km)", self.daily_odometer);
        self.daily_odometer = 0;
    }

    /// Copy the current state into a serializable snapshot
    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            color: self.color.clone(),
            make: self.make,
            fuel_consumption_per_100km: self.fuel_consumption_per_100km,
            tank_capacity: self.tank_capacity,
            fuel_level: self.fuel_level,
            odometer: self.odometer,
            daily_odometer: self.daily_odometer,
        }
    }
}
