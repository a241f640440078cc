//! Device implementations

pub mod roomba;

#[cfg(feature = "serial")]
use crate::config::Config;
#[cfg(feature = "serial")]
use crate::error::Result;
#[cfg(feature = "serial")]
use crate::transport::SerialTransport;
#[cfg(feature = "serial")]
use roomba::Roomba;

/// Open the configured serial port and wrap it in an OI session
///
/// The port is opened at the configured baud rate; nothing is sent yet.
#[cfg(feature = "serial")]
pub fn create_device(config: &Config) -> Result<Roomba<SerialTransport>> {
    let transport = SerialTransport::open(&config.serial.port, config.serial.baud.rate())?;
    Ok(Roomba::new(
        transport,
        config.serial.baud,
        config.driver_config(),
    ))
}
