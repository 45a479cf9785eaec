//! Error types for vf747-types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Baud rate is not in the reader's fixed rate table
    #[error("Unsupported baud rate: {0}")]
    InvalidBaudRate(u32),
}
