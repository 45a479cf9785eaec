//! Reader status code descriptions
//!
//! Failure frames (boot code 0xF4) carry a one-byte status code in the
//! payload. [`describe`] maps the known codes to readable text.

/// Describe a reader status code
///
/// Total over all byte values: known codes map to their manual text,
/// everything else to a generic fallback.
///
/// # Examples
///
/// ```
/// use vf747_core::status;
///
/// assert_eq!(status::describe(0x02), "No tag detected");
/// assert_eq!(status::describe(0xEE), "Unknown error");
/// ```
pub fn describe(code: u8) -> &'static str {
    match code {
        0x00 => "No error",
        0x01 => "Antenna connection failed",
        0x02 => "No tag detected",
        0x03 => "Illegal tag",
        0x04 => "Read/write power unsuitable",
        0x05 => "Region code not supported",
        0x06 => "Access password error",
        0x07 => "Invalid frequency range",
        0x08 => "Reader busy",
        0x09 => "Invalid parameter",
        0x0A => "Nonexistent memory bank",
        0x0B => "Command not supported by firmware",
        0x0C => "Tag memory overrun",
        0x0D => "Tag memory locked",
        0x0E => "Insufficient power for write",
        0x0F => "Write protection violation",
        0x10 => "Kill password error",
        0x11 => "Tag kill failed",
        0x12 => "Lock operation failed",
        0x13 => "Flash write failed",
        0x14 => "Internal communication timeout",
        0x15 => "Report buffer overflow",
        0x16 => "Antenna port out of range",
        0x17 => "Auto mode active, command rejected",
        _ => "Unknown error",
    }
}
