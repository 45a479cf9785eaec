//! Data types returned by the VF747 reader API

pub mod bank;
pub mod baud;
pub mod error;
pub mod inventory;
pub mod relay;
pub mod version;

pub use bank::MemoryBank;
pub use baud::BaudRate;
pub use error::{Error, Result};
pub use inventory::TagInventory;
pub use relay::RelayState;
pub use version::ReaderVersion;
