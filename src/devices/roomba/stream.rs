//! Sensor stream frame decoder
//!
//! Frame format: [0x13] [LEN] [PAYLOAD (LEN bytes)] [CHECKSUM]
//!
//! The checksum byte makes the 8-bit sum of every byte in the frame, header
//! through checksum, equal to zero.
//!
//! ```text
//!          0x13                LEN                     last payload byte
//! ┌──────┐ ───▶ ┌───────────┐ ───▶ ┌───────────┐ ──────────▶ ┌──────────────┐
//! │ Idle │      │ WaitCount │      │ WaitBytes │             │ WaitChecksum │
//! └──────┘      └───────────┘      └───────────┘             └──────────────┘
//!    ▲                  │ LEN == 0                                   │
//!    │                  └──────────────────────────────────▶─────────┤
//!    └───────────────────────── checksum byte (report) ◀─────────────┘
//! ```
//!
//! The decoder holds no bytes of its own: payload goes straight into the
//! caller's buffer, truncated to its capacity. Truncated bytes still count
//! toward the length and checksum, so the parse stays aligned.

use super::constants::STREAM_HEADER;

/// Decoder phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamPhase {
    /// Discarding bytes until a header
    #[default]
    Idle,
    /// Header seen, next byte is the payload length
    WaitCount,
    /// Collecting payload bytes
    WaitBytes,
    /// Next byte is the checksum
    WaitChecksum,
}

/// Persistent stream decoder state
#[derive(Debug, Clone, Default)]
pub struct StreamDecoder {
    phase: StreamPhase,
    checksum: u8,
    expected_len: u8,
    received: u8,
}

impl StreamDecoder {
    pub const fn new() -> Self {
        Self {
            phase: StreamPhase::Idle,
            checksum: 0,
            expected_len: 0,
            received: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// Declared payload length of the frame in progress (or last finished)
    #[inline]
    pub fn expected_len(&self) -> u8 {
        self.expected_len
    }

    /// Payload bytes consumed so far in the current frame
    #[inline]
    pub fn received(&self) -> u8 {
        self.received
    }

    /// Drop any partial frame and hunt for the next header
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the state machine by one byte
    ///
    /// Returns `Some(true)` when a frame with a valid checksum completes,
    /// `Some(false)` when a frame completes with a bad checksum, `None`
    /// otherwise. Payload bytes beyond `dest.len()` are dropped.
    pub fn feed(&mut self, byte: u8, dest: &mut [u8]) -> Option<bool> {
        match self.phase {
            StreamPhase::Idle => {
                if byte == STREAM_HEADER {
                    self.checksum = byte;
                    self.phase = StreamPhase::WaitCount;
                }
                None
            }
            StreamPhase::WaitCount => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.expected_len = byte;
                self.received = 0;
                // A zero-length frame has no payload: checksum follows directly
                self.phase = if byte == 0 {
                    StreamPhase::WaitChecksum
                } else {
                    StreamPhase::WaitBytes
                };
                None
            }
            StreamPhase::WaitBytes => {
                self.checksum = self.checksum.wrapping_add(byte);
                if let Some(slot) = dest.get_mut(self.received as usize) {
                    *slot = byte;
                }
                self.received += 1;
                if self.received >= self.expected_len {
                    self.phase = StreamPhase::WaitChecksum;
                }
                None
            }
            StreamPhase::WaitChecksum => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.phase = StreamPhase::Idle;
                let valid = self.checksum == 0;
                if !valid {
                    log::warn!(
                        "Stream checksum mismatch: len={}, residue=0x{:02X}",
                        self.expected_len,
                        self.checksum
                    );
                }
                Some(valid)
            }
        }
    }
}

/// Checksum byte that completes a frame with the given payload
pub fn frame_checksum(payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .fold(STREAM_HEADER.wrapping_add(payload.len() as u8), |acc, &b| {
            acc.wrapping_add(b)
        });
    sum.wrapping_neg()
}
