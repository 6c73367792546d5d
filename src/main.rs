/* 3rd party libraries */
use clap::Arg;
use clap::Command;
use log::error;
use log::info;
use log::warn;

/* Custom libraries */
use elevator::Elevator;
use shared::ElevatorEvent;
use shared::ElevatorState;

/* Modules */
mod config;
mod elevator;
mod shared;

/* Main */
fn main() {
    env_logger::init();

    // Parse command line arguments
    let matches = Command::new("elevator-fsm")
        .about("Single-elevator state machine demo")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .get_matches();
    let config_path = matches.value_of("config").unwrap_or("config.toml");

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(config_path));
    let mut elevator = Elevator::new(&config.elevator);
    info!(
        "Elevator servicing floors {} to {}",
        elevator.min_floor(),
        elevator.max_floor()
    );

    // Fixed request sequence; the last request is out of range on purpose.
    // The state machine moves one floor per step, so each target is driven
    // to arrival by stepping until the elevator is idle again.
    for &floor in [5, 3, 10, 1, 15].iter() {
        info!("Requesting floor {}", floor);
        report(&elevator.request_floor(floor));
        while elevator.state() != ElevatorState::Idle {
            report(&elevator.step());
        }
    }

    // Stop mid-flight
    info!("Requesting floor {} and stopping underway", 10);
    report(&elevator.request_floor(10));
    report(&elevator.step());
    report(&elevator.stop());
    info!("Elevator parked at floor {}", elevator.current_floor());
}

fn report(event: &ElevatorEvent) {
    match event {
        ElevatorEvent::InvalidRequest { .. } => warn!("{}", event),
        _ => info!("{}", event),
    }
}
