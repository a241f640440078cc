//! Roomba / Create Open Interface driver
//!
//! The OI is a half-duplex byte protocol: the host sends `[OPCODE] [PARAMS]`
//! commands and reads sensor data either on request or from a continuous
//! stream of checksummed frames.
//!
//! # Session Model
//!
//! [`Roomba`] exclusively owns its [`Transport`]. Every call is synchronous:
//!
//! - **Commands** are emitted byte-by-byte with a pacing pause after each
//!   byte, so the robot's UART handler keeps up. Nothing is queued.
//! - **Blocking reads** (`get_sensors`, `get_sensors_list`, `get_script`)
//!   wait at most `read_timeout` for each byte. A timeout aborts the read and
//!   leaves the link mid-frame.
//! - **Stream polling** (`poll_sensors`) never blocks. It consumes whatever
//!   is buffered and keeps partial-frame state in the session between calls.
//!
//! ## Resynchronisation
//!
//! Request/response reads have no framing, so after a timeout the next
//! response may be misaligned. Call [`Roomba::discard_input`] before the next
//! blocking read, or use the stream, which skips to the next header on its
//! own.
//!
//! All methods take `&mut self`; sharing a session across threads is the
//! caller's job.

mod baud;
mod commands;
pub mod constants;
pub mod packet;
mod reader;
pub mod stream;
mod types;

pub use baud::{Baud, FALLBACK_BAUD_RATE, baud_code_to_rate};
pub use stream::{StreamDecoder, StreamPhase, frame_checksum};
pub use types::{Demo, EventType, StreamCommand, WaitEvent};

use crate::error::Result;
use crate::transport::Transport;
use constants::{DEFAULT_PACING_DELAY_MS, DEFAULT_READ_TIMEOUT_MS};
use packet::TxPacket;
use std::time::Duration;

/// Per-session timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Longest wait for any single byte of a blocking read
    pub read_timeout: Duration,
    /// Pause after every byte written
    pub pacing_delay: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            pacing_delay: Duration::from_millis(DEFAULT_PACING_DELAY_MS),
        }
    }
}

/// OI driver session
pub struct Roomba<T: Transport> {
    transport: T,
    config: DriverConfig,
    /// Current link rate, applied on `start` and changed by `set_baud`
    baud: Baud,
    /// Reusable command buffer
    tx: TxPacket,
    /// Sensor stream parse state, persists across `poll_sensors` calls
    stream: StreamDecoder,
}

impl<T: Transport> Roomba<T> {
    /// Create a driver over an open transport
    ///
    /// Nothing is sent until [`Roomba::start`].
    pub fn new(transport: T, baud: Baud, config: DriverConfig) -> Self {
        Self {
            transport,
            config,
            baud,
            tx: TxPacket::new(),
            stream: StreamDecoder::new(),
        }
    }

    /// Configured baud code
    pub fn baud(&self) -> Baud {
        self.baud
    }

    /// Numeric rate of the configured baud code
    pub fn baud_rate(&self) -> u32 {
        self.baud.rate()
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Stream decoder state
    pub fn stream_state(&self) -> &StreamDecoder {
        &self.stream
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Emit the encoded command in `self.tx`
    fn send_tx(&mut self) -> Result<()> {
        log::debug!("TX: {:02X?}", self.tx.as_bytes());
        let Self {
            transport,
            config,
            tx,
            ..
        } = self;
        write_paced(transport, tx.as_bytes(), config.pacing_delay)
    }
}

/// Write bytes one at a time, pausing after each
///
/// Bytes reach the transport strictly in order; the call returns after the
/// last pause.
fn write_paced<T: Transport>(transport: &mut T, bytes: &[u8], pacing: Duration) -> Result<()> {
    for byte in bytes {
        transport.write(std::slice::from_ref(byte))?;
        transport.flush()?;
        if !pacing.is_zero() {
            transport.pause(pacing);
        }
    }
    Ok(())
}
