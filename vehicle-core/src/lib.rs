//! Vehicle Model Library
//!
//! A small, self-contained model of one vehicle's fuel and distance state:
//! refueling, driving against the available fuel range, and bookkeeping of two
//! bounded odometers (total and daily) that roll over at fixed capacities.
//!
//! # Architecture
//!
//! The library holds in-memory state only:
//! - `Vehicle` owns its immutable description and its mutable counters
//! - `odometer::advance` implements the rollover arithmetic
//! - `VehicleSpec` describes a vehicle in config files
//!
//! The library does NOT:
//! - Persist vehicle state
//! - Coordinate several vehicles
//! - Convert units
//!
//! Trip replay and reporting live in the application layer (vehicle-cli).
//!
//! # Example Usage
//!
//! ```
//! use vehicle_core::{CarMake, Vehicle, VehicleError};
//!
//! let mut car = Vehicle::new("#FF0000", CarMake::Audi, 5.5, 50);
//! car.refuel(50).unwrap();
//! car.drive(120).unwrap();
//!
//! assert_eq!(car.odometer(), 120);
//! assert_eq!(car.daily_odometer(), 120);
//!
//! match car.drive(5000) {
//!     Err(VehicleError::OutOfFuel { range_km, .. }) => {
//!         println!("Only {:.0} km left in the tank", range_km)
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

// Public modules
pub mod config;
pub mod odometer;
pub mod types;
pub mod vehicle;

// Re-export main types for convenience
pub use config::VehicleSpec;
pub use odometer::{DAILY_ODOMETER_CAPACITY, ODOMETER_CAPACITY};
pub use types::{CarMake, Result, VehicleError, VehicleSnapshot};
pub use vehicle::Vehicle;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
