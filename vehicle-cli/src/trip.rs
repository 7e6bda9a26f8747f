//! Trip replay
//!
//! A trip is an ordered list of steps applied to one freshly built vehicle.
//! Failing steps are recorded with their error and do not change the vehicle;
//! the replay either carries on or stops, depending on `stop_on_error`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use vehicle_core::{Vehicle, VehicleSnapshot, VehicleSpec};

/// One operation in a trip script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Refuel { liters: i32 },
    Drive { distance_km: u32 },
    ResetDailyOdometer,
}

impl Step {
    /// Apply this step to a vehicle
    pub fn apply(&self, vehicle: &mut Vehicle) -> vehicle_core::Result<()> {
        match *self {
            Step::Refuel { liters } => vehicle.refuel(liters),
            Step::Drive { distance_km } => vehicle.drive(distance_km),
            Step::ResetDailyOdometer => {
                vehicle.reset_daily_odometer();
                Ok(())
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Refuel { liters } => write!(f, "refuel {} L", liters),
            Step::Drive { distance_km } => write!(f, "drive {} km", distance_km),
            Step::ResetDailyOdometer => write!(f, "reset daily odometer"),
        }
    }
}

/// Errors from parsing inline `--step` arguments
#[derive(Debug, thiserror::Error)]
pub enum StepParseError {
    #[error("Unknown step {0:?} (expected refuel:<liters>, drive:<km> or reset)")]
    UnknownAction(String),

    #[error("Step {0:?} needs an amount, e.g. {0}:50")]
    MissingAmount(String),

    #[error("Invalid amount in step {step:?}: {source}")]
    InvalidAmount {
        step: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Step {
    type Err = StepParseError;

    /// Parse `refuel:<liters>`, `drive:<km>` or `reset`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (action, amount) = match s.split_once(':') {
            Some((action, amount)) => (action.trim().to_ascii_lowercase(), Some(amount.trim())),
            None => (s.to_ascii_lowercase(), None),
        };

        let invalid = |source| StepParseError::InvalidAmount {
            step: s.to_string(),
            source,
        };

        match (action.as_str(), amount) {
            ("refuel", Some(amount)) => Ok(Step::Refuel {
                liters: amount.parse().map_err(invalid)?,
            }),
            ("drive", Some(amount)) => Ok(Step::Drive {
                distance_km: amount.parse().map_err(invalid)?,
            }),
            ("refuel" | "drive", None) => Err(StepParseError::MissingAmount(s.to_string())),
            ("reset" | "reset_daily_odometer", None) => Ok(Step::ResetDailyOdometer),
            _ => Err(StepParseError::UnknownAction(s.to_string())),
        }
    }
}

/// Outcome of one replayed step
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// 1-based position in the trip
    pub index: usize,
    pub step: Step,
    /// Error message if the step was rejected
    pub error: Option<String>,
    /// Vehicle state right after the step
    pub state: VehicleSnapshot,
}

impl StepRecord {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Full result of a trip replay
#[derive(Debug, Clone, Serialize)]
pub struct TripReport {
    pub vehicle: VehicleSpec,
    pub steps: Vec<StepRecord>,
    pub final_state: VehicleSnapshot,
    pub range_km: f64,
    pub succeeded: usize,
    pub failed: usize,
    /// Steps not executed because the replay stopped early
    pub skipped: usize,
}

/// Replay `steps` against a vehicle built from `spec`
pub fn run_trip(spec: &VehicleSpec, steps: &[Step], stop_on_error: bool) -> TripReport {
    let mut vehicle = spec.build();
    let mut records = Vec::with_capacity(steps.len());
    let mut failed = 0;

    log::info!(
        "Starting trip: {} {} with {} step(s)",
        spec.color,
        spec.make,
        steps.len()
    );

    for (i, step) in steps.iter().enumerate() {
        let error = match step.apply(&mut vehicle) {
            Ok(()) => {
                log::debug!("Step {}: {} ok", i + 1, step);
                None
            }
            Err(e) => {
                log::warn!("Step {}: {} failed: {}", i + 1, step, e);
                failed += 1;
                Some(e.to_string())
            }
        };

        let stop = error.is_some() && stop_on_error;
        records.push(StepRecord {
            index: i + 1,
            step: *step,
            error,
            state: vehicle.snapshot(),
        });

        if stop {
            log::info!("Stopping after failed step {}", i + 1);
            break;
        }
    }

    let skipped = steps.len() - records.len();
    log::info!(
        "Trip finished: {} ok, {} failed, {} skipped",
        records.len() - failed,
        failed,
        skipped
    );

    TripReport {
        vehicle: spec.clone(),
        succeeded: records.len() - failed,
        failed,
        skipped,
        steps: records,
        final_state: vehicle.snapshot(),
        range_km: vehicle.range_km(),
    }
}
