//! Configuration for VahanaOI
//!
//! Loads configuration from a TOML file. Every section has defaults, so a
//! file only needs the values that differ.

use crate::devices::roomba::constants::{
    DEFAULT_PACING_DELAY_MS, DEFAULT_READ_TIMEOUT_MS, PACKET_BUMPS_WHEEL_DROPS,
};
use crate::devices::roomba::{Baud, DriverConfig};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub serial: SerialConfig,
    pub timing: TimingConfig,
    pub stream: StreamConfig,
    pub logging: LoggingConfig,
}

/// Serial link to the robot
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Serial port path
    pub port: String,
    /// OI baud code the robot is running at (e.g. `Baud115200`)
    pub baud: Baud,
}

/// Protocol timing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Longest wait for any single byte of a blocking read
    pub read_timeout_ms: u64,
    /// Pause after every command byte
    pub pacing_delay_ms: u64,
}

/// Sensor stream started by the daemon
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Sensor packet IDs to stream
    pub packet_ids: Vec<u8>,
    /// Stop after this many frames (0 = run forever)
    pub max_frames: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: "/dev/ttyUSB0".to_string(),
            baud: Baud::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            pacing_delay_ms: DEFAULT_PACING_DELAY_MS,
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            packet_ids: vec![PACKET_BUMPS_WHEEL_DROPS],
            max_frames: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    ///
    /// # Example
    /// ```no_run
    /// use vahana_oi::config::Config;
    ///
    /// let config = Config::load("vahana-oi.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Session timing for the driver
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            read_timeout: Duration::from_millis(self.timing.read_timeout_ms),
            pacing_delay: Duration::from_millis(self.timing.pacing_delay_ms),
        }
    }
}
