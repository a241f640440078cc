//! Mock transport for testing
//!
//! Bytes injected with [`MockTransport::inject_read`] are served to the driver;
//! everything the driver writes is captured. Time is virtual: it only moves
//! when the driver pauses or polls an empty queue, so timeout paths run
//! instantly and deterministically.

use super::Transport;
use crate::error::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Virtual time that passes on each `available()` poll that finds no data
const DEFAULT_POLL_TICK: Duration = Duration::from_millis(1);

/// Mock transport for unit testing
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

struct MockTransportInner {
    read_buffer: VecDeque<u8>,
    write_buffer: Vec<u8>,
    baud_changes: Vec<u32>,
    pauses: Vec<Duration>,
    clock: Duration,
    poll_tick: Duration,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        MockTransport {
            inner: Arc::new(Mutex::new(MockTransportInner {
                read_buffer: VecDeque::new(),
                write_buffer: Vec::new(),
                baud_changes: Vec::new(),
                pauses: Vec::new(),
                clock: Duration::ZERO,
                poll_tick: DEFAULT_POLL_TICK,
            })),
        }
    }

    // A panicking test thread must not hide the data from the others.
    fn lock(&self) -> MutexGuard<'_, MockTransportInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Inject data to be read
    pub fn inject_read(&self, data: &[u8]) {
        self.lock().read_buffer.extend(data);
    }

    /// Number of injected bytes not yet consumed
    pub fn pending_read(&self) -> usize {
        self.lock().read_buffer.len()
    }

    /// Get all written data
    pub fn get_written(&self) -> Vec<u8> {
        self.lock().write_buffer.clone()
    }

    /// Clear written data
    pub fn clear_written(&self) {
        self.lock().write_buffer.clear();
    }

    /// Clear read buffer
    pub fn clear_read(&self) {
        self.lock().read_buffer.clear();
    }

    /// Every baud rate the link was switched to, in order
    pub fn baud_changes(&self) -> Vec<u32> {
        self.lock().baud_changes.clone()
    }

    /// Every pacing pause requested, in order
    pub fn pauses(&self) -> Vec<Duration> {
        self.lock().pauses.clone()
    }

    /// Current virtual time
    pub fn elapsed(&self) -> Duration {
        self.lock().clock
    }

    /// Set how far the virtual clock moves per empty `available()` poll
    pub fn set_poll_tick(&self, tick: Duration) {
        self.lock().poll_tick = tick;
    }
}

impl Transport for MockTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut inner = self.lock();
        let mut count = 0;
        for slot in buffer.iter_mut() {
            let Some(byte) = inner.read_buffer.pop_front() else {
                break;
            };
            *slot = byte;
            count += 1;
        }
        Ok(count)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.lock().write_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn available(&mut self) -> Result<usize> {
        let mut inner = self.lock();
        let available = inner.read_buffer.len();
        if available == 0 {
            let tick = inner.poll_tick;
            inner.clock += tick;
        }
        Ok(available)
    }

    fn set_baud_rate(&mut self, baud_rate: u32) -> Result<()> {
        self.lock().baud_changes.push(baud_rate);
        Ok(())
    }

    fn now(&self) -> Duration {
        self.lock().clock
    }

    fn pause(&mut self, duration: Duration) {
        let mut inner = self.lock();
        inner.pauses.push(duration);
        inner.clock += duration;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}
