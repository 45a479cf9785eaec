//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] vf747_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] vf747_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] vf747_types::Error),

    #[error("Reader not connected")]
    NotConnected,

    /// Response frame carries a different command code than the request
    #[error("Unexpected response: expected command 0x{expected:02X}, received 0x{received:02X}")]
    UnexpectedResponse { expected: u8, received: u8 },

    /// Response payload has the wrong length for the command
    #[error("Invalid response payload: expected {expected} bytes, got {actual} bytes")]
    InvalidResponsePayload { expected: usize, actual: usize },

    /// Antenna index outside the reader's port range
    #[error("Invalid antenna index: {0} (reader has 8 ports)")]
    InvalidAntenna(u8),

    /// Command the reader defines but this library does not implement
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}
