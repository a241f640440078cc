//! Quick hardware test - drive a short arc, poll sensors, dock
//!
//! Test sequence:
//! 1. Open the OI link and enter full mode
//! 2. Play a two-note song
//! 3. Drive an arc for ~2s, then spin in place
//! 4. Query the basic sensor group and the stored script
//! 5. Stop and seek the dock
//!
//! Run:
//! ```sh
//! RUST_LOG=info cargo run --example drive_and_query -- /dev/ttyUSB0
//! ```

use std::thread;
use std::time::Duration;
use vahana_oi::Config;
use vahana_oi::devices::create_device;
use vahana_oi::devices::roomba::constants::{PACKET_GROUP_BASIC, PACKET_GROUP_BASIC_LEN};

/// Drive radius meaning "turn in place, clockwise"
const SPIN_CLOCKWISE: i16 = -1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = Config::default();
    if let Some(port) = std::env::args().nth(1) {
        config.serial.port = port;
    }

    log::info!("=== VahanaOI Quick Hardware Test ===");

    log::info!("1. Starting OI on {}...", config.serial.port);
    let mut robot = create_device(&config)?;
    robot.start()?;
    robot.full_mode()?;

    log::info!("2. Playing song...");
    robot.song(0, &[72, 16, 76, 16])?;
    robot.play_song(0)?;

    log::info!("3. Driving...");
    robot.drive(200, 500)?;
    thread::sleep(Duration::from_secs(2));
    robot.drive(100, SPIN_CLOCKWISE)?;
    thread::sleep(Duration::from_secs(1));
    robot.drive(0, 0)?;

    log::info!("4. Querying sensors...");
    let mut sensors = [0u8; PACKET_GROUP_BASIC_LEN];
    if robot.get_sensors(PACKET_GROUP_BASIC, &mut sensors)? {
        log::info!("   Basic group: {:02X?}", sensors);
    } else {
        log::warn!("   Sensor query timed out, resynchronising");
        robot.discard_input()?;
    }

    let mut script = [0u8; 100];
    let len = robot.get_script(&mut script)? as usize;
    log::info!("   Stored script ({} bytes): {:02X?}", len, &script[..len]);

    log::info!("5. Seeking dock...");
    robot.dock()?;

    log::info!("=== Test complete ===");
    Ok(())
}
