//! VF747 checksum algorithm
//!
//! The checksum covers everything before it on the wire:
//! 1. Sum `[boot_code, effective_length, command]` and the payload bytes,
//!    wrapping at one byte
//! 2. XOR the sum with 0xFF and add 1 (two's-complement negation mod 256)
//!
//! A full frame including the checksum therefore sums to 0 mod 256.

use tracing::trace;

/// Calculate the checksum for a frame header and payload
///
/// # Examples
///
/// ```
/// use vf747_core::checksum;
///
/// // set_baud_rate(9600): 40 03 01 04 -> checksum B8
/// assert_eq!(checksum::calculate(0x40, 0x03, 0x01, &[0x04]), 0xB8);
/// ```
pub fn calculate(boot_code: u8, effective_length: u8, command: u8, payload: &[u8]) -> u8 {
    let mut sum = boot_code
        .wrapping_add(effective_length)
        .wrapping_add(command);

    for &b in payload {
        sum = sum.wrapping_add(b);
    }

    let checksum = (sum ^ 0xFF).wrapping_add(1);

    trace!(
        boot_code = format!("0x{boot_code:02X}"),
        effective_length,
        command = format!("0x{command:02X}"),
        payload_len = payload.len(),
        checksum = format!("0x{checksum:02X}"),
        "Calculated checksum"
    );

    checksum
}

/// Verify a received checksum
pub fn verify(
    boot_code: u8,
    effective_length: u8,
    command: u8,
    payload: &[u8],
    expected: u8,
) -> bool {
    calculate(boot_code, effective_length, command, payload) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_baud_rate_frame() {
        // Worked example: 0x40 + 0x03 + 0x01 + 0x04 = 0x48,
        // (0x48 ^ 0xFF) + 1 = 0xB8
        assert_eq!(calculate(0x40, 0x03, 0x01, &[0x04]), 0xB8);
    }

    #[test]
    fn test_checksum_empty_payload() {
        let checksum = calculate(0x40, 0x02, 0x02, &[]);
        assert_eq!(checksum, calculate(0x40, 0x02, 0x02, &[]));
    }

    #[test]
    fn test_frame_sums_to_zero() {
        let payload = [0xDE, 0xAD, 0xBE, 0xEF];
        let checksum = calculate(0x40, 0x06, 0x25, &payload);

        let mut sum: u8 = 0x40u8.wrapping_add(0x06).wrapping_add(0x25);
        for b in payload {
            sum = sum.wrapping_add(b);
        }
        assert_eq!(sum.wrapping_add(checksum), 0);
    }

    #[test]
    fn test_checksum_verify() {
        let payload = [0xAB, 0xCD];
        let checksum = calculate(0xF0, 0x04, 0x10, &payload);

        assert!(verify(0xF0, 0x04, 0x10, &payload, checksum));
        assert!(!verify(0xF0, 0x04, 0x10, &payload, checksum.wrapping_add(1)));
    }

    #[test]
    fn test_checksum_wraps() {
        // Large payload pushes the running sum past 0xFF many times
        let payload = vec![0xFF; 200];
        let checksum = calculate(0x40, 0xCA, 0x11, &payload);
        assert_eq!(checksum, calculate(0x40, 0xCA, 0x11, &payload));
    }
}
