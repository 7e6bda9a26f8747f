//! Vehicle Trip CLI Application
//!
//! Command-line front end for the vehicle-core library. It adds:
//! - Trip scripts (TOML) describing a vehicle and an ordered list of steps
//! - Inline steps for quick experiments (`--step refuel:50 --step drive:120`)
//! - TXT/JSON trip reports

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use vehicle_core::{CarMake, VehicleSpec};

mod config;
mod report;
mod trip;

use config::OutputFormat;
use trip::Step;

const DEFAULT_CONSUMPTION: f64 = 5.5;
const DEFAULT_TANK_CAPACITY: i32 = 50;

/// Vehicle Trip CLI - Replay refuel/drive steps against a vehicle model
#[derive(Parser, Debug)]
#[command(name = "vehicle-cli")]
#[command(about = "Replay refuel and drive steps against a vehicle and report odometer state", long_about = None)]
#[command(version)]
struct Args {
    /// Path to trip script (trip.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Vehicle color (default: #FFFFFF)
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    /// Vehicle make, e.g. audi, bmw, volvo (default: audi)
    #[arg(long, value_name = "MAKE")]
    make: Option<CarMake>,

    /// Fuel consumption in liters per 100 km (default: 5.5)
    #[arg(long, value_name = "LITERS", allow_negative_numbers = true)]
    consumption: Option<f64>,

    /// Tank capacity in liters (default: 50)
    #[arg(long, value_name = "LITERS", allow_negative_numbers = true)]
    tank: Option<i32>,

    /// Step to replay: refuel:<liters>, drive:<km> or reset (can be repeated)
    #[arg(short, long = "step", value_name = "STEP")]
    steps: Vec<Step>,

    /// Report format (overrides the trip script)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Stop replaying after the first failed step
    #[arg(long)]
    stop_on_error: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Everything needed to replay one trip
struct TripPlan {
    vehicle: VehicleSpec,
    steps: Vec<Step>,
    format: OutputFormat,
    stop_on_error: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Vehicle Trip CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using vehicle library v{}", vehicle_core::VERSION);

    let plan = if let Some(config_path) = &args.config {
        config_mode(config_path, &args)?
    } else if !args.steps.is_empty() {
        simple_mode(&args)
    } else {
        // No input - show help
        println!("Vehicle Trip CLI - No input specified");
        println!("\nQuick Start:");
        println!("  vehicle-cli --step refuel:50 --step drive:120 --step reset");
        println!("  vehicle-cli --make volvo --tank 60 --consumption 7.2 --step refuel:60 --step drive:800");
        println!("\nTrip scripts:");
        println!("  vehicle-cli --config trip.toml");
        println!("\nUse --help for more options");
        return Ok(());
    };

    let trip_report = trip::run_trip(&plan.vehicle, &plan.steps, plan.stop_on_error);
    let rendered = report::render(&trip_report, plan.format)?;
    report::write_report(&rendered, args.output.as_deref())?;

    if trip_report.failed > 0 {
        anyhow::bail!(
            "{} of {} step(s) failed",
            trip_report.failed,
            plan.steps.len()
        );
    }

    Ok(())
}

/// Simple mode - vehicle from flags, steps from `--step`
fn simple_mode(args: &Args) -> TripPlan {
    let vehicle = apply_vehicle_overrides(
        VehicleSpec::new(CarMake::Audi, DEFAULT_CONSUMPTION, DEFAULT_TANK_CAPACITY),
        args,
    );
    log::debug!("Simple mode vehicle: {:?}", vehicle);

    TripPlan {
        vehicle,
        steps: args.steps.clone(),
        format: args.format.unwrap_or_default(),
        stop_on_error: args.stop_on_error,
    }
}

/// Config mode - trip script, with command-line flags taking precedence
fn config_mode(config_path: &Path, args: &Args) -> Result<TripPlan> {
    log::info!("Loading trip script from: {:?}", config_path);
    let config = config::load_config(config_path)?;
    log::debug!("Trip script loaded: {} step(s)", config.steps.len());

    let mut steps = config.steps;
    steps.extend(args.steps.iter().copied());

    Ok(TripPlan {
        vehicle: apply_vehicle_overrides(config.vehicle, args),
        steps,
        format: args.format.unwrap_or(config.output.format),
        stop_on_error: args.stop_on_error || config.output.stop_on_error,
    })
}

fn apply_vehicle_overrides(mut spec: VehicleSpec, args: &Args) -> VehicleSpec {
    if let Some(color) = &args.color {
        spec = spec.with_color(color.clone());
    }
    if let Some(make) = args.make {
        spec = spec.with_make(make);
    }
    if let Some(consumption) = args.consumption {
        spec = spec.with_fuel_consumption(consumption);
    }
    if let Some(tank) = args.tank {
        spec = spec.with_tank_capacity(tank);
    }
    spec
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_inline_steps() {
        let args = Args::try_parse_from([
            "vehicle-cli",
            "--make",
            "bmw",
            "--tank",
            "60",
            "--step",
            "refuel:60",
            "-s",
            "drive:300",
            "--step",
            "reset",
        ])
        .unwrap();

        let plan = simple_mode(&args);
        assert_eq!(plan.vehicle.make, CarMake::Bmw);
        assert_eq!(plan.vehicle.tank_capacity, 60);
        assert_eq!(plan.vehicle.fuel_consumption_per_100km, DEFAULT_CONSUMPTION);
        assert_eq!(plan.vehicle.color, "#FFFFFF");
        assert_eq!(
            plan.steps,
            vec![
                Step::Refuel { liters: 60 },
                Step::Drive { distance_km: 300 },
                Step::ResetDailyOdometer,
            ]
        );
        assert_eq!(plan.format, OutputFormat::Txt);
        assert!(!plan.stop_on_error);
    }

    #[test]
    fn test_args_accept_negative_refuel_step() {
        let args = Args::try_parse_from(["vehicle-cli", "--step", "refuel:-1"]).unwrap();
        assert_eq!(args.steps, vec![Step::Refuel { liters: -1 }]);
    }

    #[test]
    fn test_args_reject_bad_step() {
        assert!(Args::try_parse_from(["vehicle-cli", "--step", "fly:10"]).is_err());
        assert!(Args::try_parse_from(["vehicle-cli", "--make", "trabant"]).is_err());
    }

    #[test]
    fn test_config_mode_flags_take_precedence() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [vehicle]
            make = "ford"
            fuel_consumption_per_100km = 8.0
            tank_capacity = 70

            [output]
            format = "json"

            [[steps]]
            action = "refuel"
            liters = 70
            "#
        )
        .unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let args = Args::try_parse_from([
            "vehicle-cli",
            "--config",
            &path,
            "--tank",
            "80",
            "--format",
            "txt",
            "--step",
            "drive:100",
        ])
        .unwrap();

        let plan = config_mode(args.config.as_ref().unwrap(), &args).unwrap();
        assert_eq!(plan.vehicle.make, CarMake::Ford);
        assert_eq!(plan.vehicle.tank_capacity, 80);
        assert_eq!(plan.format, OutputFormat::Txt);
        assert_eq!(
            plan.steps,
            vec![Step::Refuel { liters: 70 }, Step::Drive { distance_km: 100 }]
        );
    }
}
