//! Sensor input for the OI driver
//!
//! Two ways to get sensor data:
//!
//! - **Request/response**: `get_sensors` / `get_sensors_list` / `get_script`
//!   send a query and block for the reply, at most `read_timeout` per byte.
//!   Replies are raw bytes with no framing; the caller knows the length.
//! - **Stream**: `poll_sensors` decodes frames from a stream started with
//!   [`Roomba::stream`], consuming only bytes that are already buffered.

use super::Roomba;
use super::constants::MAX_SCRIPT_LEN;
use crate::error::{Error, Result};
use crate::transport::Transport;

impl<T: Transport> Roomba<T> {
    /// Wait for one byte, `Error::Timeout` if none arrives in time
    fn read_byte_timed(&mut self) -> Result<u8> {
        let start = self.transport.now();
        while self.transport.available()? == 0 {
            if self.transport.now().saturating_sub(start) > self.config.read_timeout {
                return Err(Error::Timeout);
            }
        }
        self.transport.read_byte()?.ok_or(Error::Timeout)
    }

    /// Fill `dest` completely, one timed byte at a time
    fn read_exact_timed(&mut self, dest: &mut [u8]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = self.read_byte_timed()?;
        }
        Ok(())
    }

    /// Map a timeout to `Ok(false)`, pass other errors through
    fn timed_out_as_false(&self, result: Result<()>, what: &str) -> Result<bool> {
        match result {
            Ok(()) => Ok(true),
            Err(Error::Timeout) => {
                log::warn!(
                    "{}: timed out after {:?} waiting for a byte",
                    what,
                    self.config.read_timeout
                );
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Read exactly `dest.len()` bytes with the per-byte timeout
    ///
    /// Returns `Ok(false)` on timeout. Bytes already stored in `dest` are then
    /// meaningless, and the link may be left mid-response.
    pub fn get_data(&mut self, dest: &mut [u8]) -> Result<bool> {
        let result = self.read_exact_timed(dest);
        self.timed_out_as_false(result, "get_data")
    }

    /// Query one sensor packet and read its `dest.len()`-byte reply
    pub fn get_sensors(&mut self, packet_id: u8, dest: &mut [u8]) -> Result<bool> {
        self.tx.set_sensors(packet_id);
        self.send_tx()?;
        let result = self.read_exact_timed(dest);
        self.timed_out_as_false(result, "get_sensors")
    }

    /// Query several sensor packets and read their concatenated reply
    ///
    /// `dest.len()` must be the sum of the packets' sizes.
    pub fn get_sensors_list(&mut self, packet_ids: &[u8], dest: &mut [u8]) -> Result<bool> {
        self.tx.set_query_list(packet_ids);
        self.send_tx()?;
        let result = self.read_exact_timed(dest);
        self.timed_out_as_false(result, "get_sensors_list")
    }

    /// Read back the stored script
    ///
    /// Returns the script length, or 0 on timeout or an impossible length.
    /// At most `dest.len()` bytes are stored but the full script is always
    /// consumed from the link; pass an empty `dest` to only ask the length.
    pub fn get_script(&mut self, dest: &mut [u8]) -> Result<u8> {
        self.tx.set_show_script();
        self.send_tx()?;

        let count = match self.read_byte_timed() {
            Ok(count) => count,
            Err(Error::Timeout) => {
                log::warn!("get_script: timed out waiting for length");
                return Ok(0);
            }
            Err(e) => return Err(e),
        };
        if count > MAX_SCRIPT_LEN {
            log::warn!("get_script: impossible script length {}", count);
            return Ok(0);
        }

        for i in 0..count as usize {
            let byte = match self.read_byte_timed() {
                Ok(byte) => byte,
                Err(Error::Timeout) => {
                    log::warn!("get_script: timed out at byte {} of {}", i, count);
                    return Ok(0);
                }
                Err(e) => return Err(e),
            };
            if let Some(slot) = dest.get_mut(i) {
                *slot = byte;
            }
        }

        Ok(count)
    }

    /// Decode the sensor stream without blocking
    ///
    /// Consumes buffered bytes until a frame completes or the buffer runs
    /// dry. Returns `Some(true)` for a valid frame, `Some(false)` for a frame
    /// with a bad checksum, `None` if no frame finished. Partial frames are
    /// kept for the next call. Payload beyond `dest.len()` is dropped.
    pub fn poll_sensors(&mut self, dest: &mut [u8]) -> Result<Option<bool>> {
        while self.transport.available()? > 0 {
            let Some(byte) = self.transport.read_byte()? else {
                break;
            };
            if let Some(valid) = self.stream.feed(byte, dest) {
                return Ok(Some(valid));
            }
        }
        Ok(None)
    }

    /// Drop everything buffered on the link and any partial stream frame
    ///
    /// Use after a blocking read timed out, before trusting the next reply.
    /// Returns the number of bytes discarded.
    pub fn discard_input(&mut self) -> Result<usize> {
        let mut scratch = [0u8; 64];
        let mut discarded = 0;
        while self.transport.available()? > 0 {
            let n = self.transport.read(&mut scratch)?;
            if n == 0 {
                break;
            }
            discarded += n;
        }
        self.stream.reset();
        if discarded > 0 {
            log::debug!("Discarded {} stale bytes", discarded);
        }
        Ok(discarded)
    }
}
