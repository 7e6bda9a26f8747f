//! Report generation
//!
//! Renders a trip report as an aligned TXT table or as pretty-printed JSON.

use crate::config::OutputFormat;
use crate::trip::TripReport;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Render a report in the requested format
pub fn render(report: &TripReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Txt => Ok(render_txt(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
        }
    }
}

/// Render a report as an ASCII table followed by a summary
pub fn render_txt(report: &TripReport) -> String {
    TxtReport(report).to_string()
}

/// TXT layout of a trip report
struct TxtReport<'a>(&'a TripReport);

impl fmt::Display for TxtReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let spec = &report.vehicle;

        writeln!(f, "Vehicle: {} {}", spec.color, spec.make)?;
        writeln!(
            f,
            "  Consumption: {} L/100km, tank: {} L",
            spec.fuel_consumption_per_100km, spec.tank_capacity
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:>3}  {:<22}  {:>6}  {:>8}  {:>5}  {}",
            "#", "Step", "Fuel", "Odometer", "Daily", "Result"
        )?;
        writeln!(f, "{}", "-".repeat(64))?;
        for record in &report.steps {
            writeln!(
                f,
                "{:>3}  {:<22}  {:>6}  {:>8}  {:>5}  {}",
                record.index,
                record.step.to_string(),
                record.state.fuel_level,
                record.state.odometer,
                record.state.daily_odometer,
                record.error.as_deref().unwrap_or("ok")
            )?;
        }
        if report.steps.is_empty() {
            writeln!(f, "  (no steps)")?;
        }

        let state = &report.final_state;
        writeln!(f)?;
        writeln!(f, "Final state:")?;
        writeln!(f, "  Fuel level:     {} / {} L", state.fuel_level, state.tank_capacity)?;
        writeln!(f, "  Range:          {:.1} km", report.range_km)?;
        writeln!(f, "  Odometer:       {} km", state.odometer)?;
        writeln!(f, "  Daily odometer: {} km", state.daily_odometer)?;
        writeln!(
            f,
            "Steps: {} ok, {} failed, {} skipped",
            report.succeeded, report.failed, report.skipped
        )
    }
}

/// Write a rendered report to a file, or to stdout when no path is given
pub fn write_report(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{run_trip, Step};
    use vehicle_core::{CarMake, VehicleSpec};

    fn sample_report() -> TripReport {
        let spec = VehicleSpec::new(CarMake::Audi, 5.5, 50).with_color("#FF0000");
        run_trip(
            &spec,
            &[
                Step::Refuel { liters: 50 },
                Step::Refuel { liters: 1 },
                Step::Drive { distance_km: 2600 },
                Step::Drive { distance_km: 120 },
            ],
            false,
        )
    }

    #[test]
    fn test_txt_report() {
        let txt = render_txt(&sample_report());

        assert!(txt.starts_with("Vehicle: #FF0000 Audi\n"));
        assert!(txt.contains("refuel 50 L"));
        assert!(txt.contains("Cannot fuel more than tank capacity"));
        assert!(txt.contains("Car ran out of fuel: 2600 km requested"));
        assert!(txt.contains("  Odometer:       120 km"));
        assert!(txt.contains("  Fuel level:     50 / 50 L"));
        assert!(txt.contains("Steps: 2 ok, 2 failed, 0 skipped"));
    }

    #[test]
    fn test_txt_report_shows_negative_daily_odometer() {
        let spec = VehicleSpec::new(CarMake::Audi, 5.5, i32::MAX);
        let report = run_trip(
            &spec,
            &[
                Step::Refuel { liters: i32::MAX },
                Step::Drive { distance_km: 1998 },
            ],
            false,
        );
        let txt = render_txt(&report);

        assert!(txt.contains("  Odometer:       1998 km"));
        assert!(txt.contains("  Daily odometer: -2 km"));
        assert!(txt.ends_with("Steps: 2 ok, 0 failed, 0 skipped\n"));
    }

    #[test]
    fn test_txt_report_without_steps() {
        let report = run_trip(&VehicleSpec::new(CarMake::Fiat, 5.0, 40), &[], false);
        let txt = render_txt(&report);

        assert!(txt.contains("(no steps)"));
        assert!(txt.contains("Range:          0.0 km"));
    }

    #[test]
    fn test_json_report() {
        let json = render(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["vehicle"]["make"], "audi");
        assert_eq!(value["steps"].as_array().unwrap().len(), 4);
        assert_eq!(value["steps"][0]["step"]["action"], "refuel");
        assert_eq!(value["steps"][0]["error"], serde_json::Value::Null);
        assert_eq!(value["final_state"]["odometer"], 120);
        assert_eq!(value["failed"], 2);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_report("hello\n", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
