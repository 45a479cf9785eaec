//! Transport layer for the VF747 protocol
//!
//! The reader speaks over an RS232 line; deployments typically reach it
//! through a serial device server, which is what [`TcpTransport`] targets.
//! [`MockTransport`] stands in for hardware in tests.

pub mod error;
pub mod mock;
pub mod tcp;

pub use error::{Error, Result};
pub use mock::MockTransport;
pub use tcp::TcpTransport;

use async_trait::async_trait;
use bytes::BytesMut;

/// Duplex byte-stream transport to a reader
///
/// `read_exact` blocks until the requested byte count is available or the
/// transport fails; timeouts are the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Open the transport
    async fn connect(&mut self) -> Result<()>;

    /// Close the transport
    async fn disconnect(&mut self) -> Result<()>;

    /// Check if the transport is open
    fn is_connected(&self) -> bool;

    /// Write all bytes
    async fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Read exactly `n` bytes
    async fn read_exact(&mut self, n: usize) -> Result<BytesMut>;

    /// Human-readable endpoint description
    fn endpoint(&self) -> String;
}
