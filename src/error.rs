//! Error types for VahanaOI

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// VahanaOI error types
///
/// Protocol-level failures (read timeouts, bad script lengths, checksum
/// mismatches) are reported through return values at the driver surface.
/// This enum carries transport and configuration faults.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Serial port error
    #[cfg(feature = "serial")]
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No byte arrived within the per-byte read timeout
    #[error("Communication timeout")]
    Timeout,

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}
