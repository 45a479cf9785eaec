//! Protocol constants

/// Boot code for every host-to-reader frame
pub const BOOT_REQUEST: u8 = 0x40;

/// Boot code of a normal reader-to-host response
pub const BOOT_RESPONSE: u8 = 0xF0;

/// Boot code of a reader-to-host failure frame (payload carries a status code)
pub const BOOT_FAILURE: u8 = 0xF4;

/// Maximum payload size so the effective length `2 + len` fits one byte
pub const MAX_PAYLOAD_SIZE: usize = 253;

/// Size of the reader settings block moved by read_param/set_param
pub const PARAM_BLOCK_SIZE: usize = 32;

/// Number of antenna ports selectable by select_antenna
pub const ANTENNA_PORTS: u8 = 8;

/// Default connection timeout (seconds)
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Default read timeout (seconds)
pub const DEFAULT_READ_TIMEOUT: u64 = 5;
