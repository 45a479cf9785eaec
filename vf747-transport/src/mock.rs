//! Mock transport
//!
//! Serves scripted response bytes and records every written frame so
//! protocol logic can be exercised without a reader attached. When the
//! script runs dry, reads are zero-filled, matching a dead serial line.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::BytesMut;
use tracing::trace;

use crate::{error::*, Transport};

#[derive(Debug, Default)]
struct Inner {
    reads: VecDeque<u8>,
    writes: Vec<Vec<u8>>,
    connected: bool,
}

/// Scripted in-memory transport
///
/// Cloning yields a handle to the same script and write log, so a test can
/// keep one handle while the session owns the other.
///
/// # Examples
///
/// ```
/// use vf747_transport::MockTransport;
///
/// let mock = MockTransport::new();
/// mock.queue_read(&[0xF0, 0x02, 0x01, 0x0D]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    /// Create a new mock with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the read script
    pub fn queue_read(&self, data: &[u8]) {
        let mut inner = self.inner.lock().unwrap();
        inner.reads.extend(data.iter().copied());
    }

    /// Frames written so far, in order
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().writes.clone()
    }

    /// Number of unread script bytes
    pub fn remaining_reads(&self) -> usize {
        self.inner.lock().unwrap().reads.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn connect(&mut self) -> Result<()> {
        self.inner.lock().unwrap().connected = true;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.inner.lock().unwrap().connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.inner.lock().unwrap().connected
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        trace!("Mock write of {} bytes", data.len());
        self.inner.lock().unwrap().writes.push(data.to_vec());
        Ok(())
    }

    async fn read_exact(&mut self, n: usize) -> Result<BytesMut> {
        let mut inner = self.inner.lock().unwrap();
        let mut buf = BytesMut::zeroed(n);

        for slot in buf.iter_mut() {
            match inner.reads.pop_front() {
                Some(b) => *slot = b,
                // Script exhausted: remaining bytes stay zero
                None => break,
            }
        }

        trace!("Mock read of {} bytes", n);
        Ok(buf)
    }

    fn endpoint(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_writes() {
        let mock = MockTransport::new();
        let mut handle = mock.clone();

        handle.write_all(&[0x40, 0x02, 0x02, 0xBC]).await.unwrap();

        assert_eq!(mock.written(), vec![vec![0x40, 0x02, 0x02, 0xBC]]);
    }

    #[tokio::test]
    async fn test_mock_serves_scripted_reads() {
        let mock = MockTransport::new();
        mock.queue_read(&[0xF0, 0x02, 0x01]);

        let mut handle = mock.clone();
        assert_eq!(handle.read_exact(2).await.unwrap().as_ref(), &[0xF0, 0x02]);
        assert_eq!(handle.read_exact(1).await.unwrap().as_ref(), &[0x01]);
    }

    #[tokio::test]
    async fn test_mock_zero_fills_when_exhausted() {
        let mock = MockTransport::new();
        mock.queue_read(&[0xAA]);

        let mut handle = mock.clone();
        assert_eq!(handle.read_exact(3).await.unwrap().as_ref(), &[0xAA, 0, 0]);
    }

    #[tokio::test]
    async fn test_mock_connect_lifecycle() {
        let mut mock = MockTransport::new();
        assert!(!mock.is_connected());

        mock.connect().await.unwrap();
        assert!(mock.is_connected());

        mock.disconnect().await.unwrap();
        assert!(!mock.is_connected());
    }
}
