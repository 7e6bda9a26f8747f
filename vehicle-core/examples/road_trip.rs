// Drive a car through a short road trip, printing state after each leg.
//
// Run with: RUST_LOG=debug cargo run -p vehicle-core --example road_trip
use vehicle_core::{CarMake, VehicleSpec};

fn main() {
    env_logger::init();

    let mut car = VehicleSpec::new(CarMake::Volkswagen, 6.2, 55)
        .with_color("#1E90FF")
        .build();

    println!("=== Road trip ===");
    println!("Vehicle: {} {}", car.color(), car.make());

    if let Err(e) = car.refuel(55) {
        eprintln!("Refuel failed: {}", e);
        return;
    }
    println!("Range on a full tank: {:.1} km", car.range_km());

    for leg in [320, 410, 260, 900] {
        match car.drive(leg) {
            Ok(()) => println!(
                "  drove {:>4} km -> odometer {:>6} km, daily {:>3} km",
                leg,
                car.odometer(),
                car.daily_odometer()
            ),
            Err(e) => println!("  could not drive {} km: {}", leg, e),
        }
    }

    car.reset_daily_odometer();
    println!("\nAfter overnight stop: {}", car.snapshot());
}
