//! VahanaOI - sensor stream logger for Roomba / Create robots
//!
//! Opens the OI serial link, puts the robot in safe mode, starts a sensor
//! stream of the configured packet IDs and logs every decoded frame.
//!
//! Usage:
//!   vahana-oi [config.toml]
//!   vahana-oi --config <path>

use std::env;
use vahana_oi::Config;
use vahana_oi::devices::create_device;
use vahana_oi::devices::roomba::StreamCommand;
use vahana_oi::error::Result;

/// Largest stream payload (the LEN byte is a u8)
const MAX_FRAME_PAYLOAD: usize = 255;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `vahana-oi <path>` (positional)
/// - `vahana-oi --config <path>` (flag-based)
/// - `vahana-oi -c <path>` (short flag)
///
/// Defaults to `/etc/vahana-oi.toml` if not specified.
fn parse_config_path() -> String {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return args[1].clone();
    }

    "/etc/vahana-oi.toml".to_string()
}

fn main() -> Result<()> {
    let config_path = parse_config_path();
    let config = Config::load(&config_path)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("VahanaOI v{} starting...", env!("CARGO_PKG_VERSION"));
    log::info!("Using config: {}", config_path);

    let mut robot = create_device(&config)?;
    robot.start()?;
    robot.safe_mode()?;
    robot.discard_input()?;

    log::info!("Streaming sensor packets {:?}", config.stream.packet_ids);
    robot.stream(&config.stream.packet_ids)?;

    let mut payload = [0u8; MAX_FRAME_PAYLOAD];
    let mut frames: u64 = 0;
    let mut bad_frames: u64 = 0;

    while config.stream.max_frames == 0 || frames < config.stream.max_frames {
        match robot.poll_sensors(&mut payload)? {
            Some(true) => {
                frames += 1;
                let len = robot.stream_state().expected_len() as usize;
                log::info!("Frame {}: {:02X?}", frames, &payload[..len]);
            }
            Some(false) => {
                bad_frames += 1;
            }
            None => std::thread::sleep(std::time::Duration::from_millis(2)),
        }
    }

    robot.stream_command(StreamCommand::Pause)?;
    log::info!(
        "Stream paused after {} frames ({} with bad checksum)",
        frames,
        bad_frames
    );

    Ok(())
}
