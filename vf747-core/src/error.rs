//! Error types for vf747-core

/// Result type alias for core protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Frame starts with a byte that is not a reader boot code
    #[error("Wrong boot code: 0x{0:02X} (expected 0xF0 or 0xF4)")]
    WrongBootCode(u8),

    /// Declared effective length cannot cover the command byte
    #[error("Malformed effective length: {0} (minimum is 2)")]
    MalformedLength(u8),

    /// Buffer is too short for the frame it declares
    #[error("Frame too short: expected {expected} bytes, got {actual} bytes")]
    FrameTooShort { expected: usize, actual: usize },

    /// Payload does not fit the one-byte effective length field
    #[error("Payload too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    /// Unknown command code
    #[error("Unknown command code: 0x{0:02X}")]
    UnknownCommand(u8),

    /// Hex string could not be parsed
    #[error("Invalid hex string: {0}")]
    Hex(#[from] hex::FromHexError),
}
