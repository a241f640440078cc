//! OI baud codes
//!
//! The `baud` opcode takes a code (0-11), not a rate. The table below is the
//! only place codes and numeric rates meet.

use serde::{Deserialize, Serialize};

/// Rate used for any code outside the table, and the OI power-on default
pub const FALLBACK_BAUD_RATE: u32 = 57600;

/// Baud codes accepted by the `baud` opcode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Baud {
    Baud300 = 0,
    Baud600 = 1,
    Baud1200 = 2,
    Baud2400 = 3,
    Baud4800 = 4,
    Baud9600 = 5,
    Baud14400 = 6,
    Baud19200 = 7,
    Baud28800 = 8,
    Baud38400 = 9,
    #[default]
    Baud57600 = 10,
    Baud115200 = 11,
}

impl Baud {
    /// All codes in wire order
    pub const ALL: [Baud; 12] = [
        Baud::Baud300,
        Baud::Baud600,
        Baud::Baud1200,
        Baud::Baud2400,
        Baud::Baud4800,
        Baud::Baud9600,
        Baud::Baud14400,
        Baud::Baud19200,
        Baud::Baud28800,
        Baud::Baud38400,
        Baud::Baud57600,
        Baud::Baud115200,
    ];

    /// Wire code
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Numeric rate in bits per second
    #[inline]
    pub fn rate(self) -> u32 {
        baud_code_to_rate(self.code())
    }

    /// Look up a code, `None` if it is not in the table
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

/// Map a raw baud code to its rate
///
/// Total: unknown codes resolve to [`FALLBACK_BAUD_RATE`].
pub const fn baud_code_to_rate(code: u8) -> u32 {
    match code {
        0 => 300,
        1 => 600,
        2 => 1200,
        3 => 2400,
        4 => 4800,
        5 => 9600,
        6 => 14400,
        7 => 19200,
        8 => 28800,
        9 => 38400,
        10 => 57600,
        11 => 115200,
        _ => FALLBACK_BAUD_RATE,
    }
}
