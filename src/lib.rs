//! VahanaOI - Open Interface driver for Roomba / Create robots
//!
//! This library encodes OI commands, performs timed request/response sensor
//! reads and decodes the checksummed sensor stream, over any byte
//! [`transport::Transport`].
//!
//! ## Features
//!
//! - `serial` (default): real serial port transport via `serialport`

pub mod config;
pub mod devices;
pub mod error;
pub mod transport;

// Re-export commonly used types
pub use config::Config;
pub use devices::roomba::{Baud, DriverConfig, Roomba};
pub use error::{Error, Result};
