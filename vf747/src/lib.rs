//! # vf747
//!
//! Rust implementation of the VF747 UHF RFID reader serial protocol.
//!
//! ## Features
//!
//! - Type-safe command catalog over the checksummed binary framing
//! - Async API using Tokio, with a mock transport for hardware-free tests
//! - Truncation-tolerant tag inventory decoding
//!
//! ## Quick Start
//!
//! ```no_run
//! use vf747::{MemoryBank, Reader};
//!
//! #[tokio::main]
//! async fn main() -> vf747::Result<()> {
//!     // Reach the reader through a serial device server
//!     let mut reader = Reader::tcp("192.168.1.190", 6000);
//!     reader.connect().await?;
//!
//!     let inventory = reader.list_tag_id(MemoryBank::Epc, 0, 0, &[]).await?;
//!     for tag in &inventory.tags {
//!         println!("tag: {tag}");
//!     }
//!
//!     reader.disconnect().await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod reader;

// Re-exports
pub use error::{Error, Result};
pub use reader::Reader;

// Re-export protocol and transport types
pub use vf747_core::{status::describe as describe_status, Command, Packet};
pub use vf747_transport::{MockTransport, TcpTransport, Transport};
pub use vf747_types::{BaudRate, MemoryBank, ReaderVersion, RelayState, TagInventory};
