//! Transport layer for I/O abstraction
//!
//! The OI driver never touches a serial port directly. Everything goes through
//! [`Transport`], so the same driver code runs against real hardware
//! ([`SerialTransport`]) or an in-memory byte queue ([`MockTransport`]).

use crate::error::Result;
use std::time::Duration;

mod mock;
#[cfg(feature = "serial")]
mod serial;

pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;

/// Transport trait for device communication
pub trait Transport: Send {
    /// Read data into buffer, returns number of bytes read
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Write data from buffer, returns number of bytes written
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Flush any pending writes (blocking until complete)
    fn flush(&mut self) -> Result<()>;

    /// Number of bytes waiting to be read
    fn available(&mut self) -> Result<usize>;

    /// Reconfigure the link to a new baud rate
    fn set_baud_rate(&mut self, baud_rate: u32) -> Result<()>;

    /// Monotonic time since an arbitrary, fixed epoch
    fn now(&self) -> Duration;

    /// Block for the given duration (inter-byte pacing)
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Read a single byte, `None` if nothing is buffered
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}
