//! # vf747-core
//!
//! Core protocol implementation for VF747 UHF RFID readers.
//!
//! This crate provides the low-level protocol primitives:
//! - Packet structure and encoding/decoding
//! - Checksum calculation
//! - Command definitions
//! - Tag inventory decoding
//! - Device status code descriptions

pub mod checksum;
pub mod command;
pub mod constants;
pub mod error;
pub mod hexstr;
pub mod inventory;
pub mod packet;
pub mod status;

pub use command::Command;
pub use error::{Error, Result};
pub use packet::Packet;

/// Protocol version information
pub const PROTOCOL_VERSION: &str = "1.0";

/// Maximum payload size (one-byte effective length field)
pub const MAX_PAYLOAD_SIZE: usize = constants::MAX_PAYLOAD_SIZE;

/// Frame overhead: boot code + length + command + checksum
pub const FRAME_OVERHEAD: usize = 4;
