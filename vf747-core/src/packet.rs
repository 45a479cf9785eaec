//! VF747 protocol packet structure and encoding/decoding

use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::fmt;
use tracing::warn;

use crate::{
    checksum,
    command::Command,
    constants::{BOOT_FAILURE, BOOT_REQUEST, BOOT_RESPONSE},
    error::{Error, Result},
};

/// VF747 protocol packet
///
/// # Frame Structure
///
/// ```text
/// ┌─────────────┬─────────────┬─────────────┬─────────────┬─────────────┐
/// │  BootCode   │  EffLength  │   Command   │   Payload   │  Checksum   │
/// │   1 byte    │   1 byte    │   1 byte    │   N bytes   │   1 byte    │
/// └─────────────┴─────────────┴─────────────┴─────────────┴─────────────┘
/// ```
///
/// The effective length is `2 + N` and covers the command byte and the
/// payload. The boot code is `0x40` for every host-to-reader frame and
/// `0xF0`/`0xF4` for reader-to-host frames.
///
/// # Examples
///
/// ```
/// use vf747_core::{Command, Packet};
///
/// // set_baud_rate(9600)
/// let packet = Packet::request(Command::SetBaudRate, vec![0x04]);
/// assert_eq!(packet.encode().as_ref(), &[0x40, 0x03, 0x01, 0x04, 0xB8]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Packet {
    /// Boot code (frame type marker)
    pub boot_code: u8,

    /// Command code
    pub command: u8,

    /// Packet payload (command-specific data)
    pub payload: Bytes,
}

impl Packet {
    /// Create a new packet
    pub fn new(boot_code: u8, command: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            boot_code,
            command,
            payload: payload.into(),
        }
    }

    /// Create a host-to-reader request packet (boot code 0x40)
    ///
    /// # Examples
    ///
    /// ```
    /// use vf747_core::{Command, Packet};
    ///
    /// let packet = Packet::request(Command::GetReaderVersion, vec![]);
    /// assert_eq!(packet.boot_code, 0x40);
    /// ```
    pub fn request(command: Command, payload: impl Into<Bytes>) -> Self {
        Self::new(BOOT_REQUEST, command.code(), payload)
    }

    /// Effective length field: command byte plus payload
    pub fn effective_length(&self) -> u8 {
        (2 + self.payload.len()) as u8
    }

    /// Calculate the checksum for this packet
    ///
    /// Always recomputed from the current fields, never cached.
    pub fn checksum(&self) -> u8 {
        checksum::calculate(
            self.boot_code,
            self.effective_length(),
            self.command,
            &self.payload,
        )
    }

    /// Encode packet to wire bytes
    pub fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(crate::FRAME_OVERHEAD + self.payload.len());

        buf.put_u8(self.boot_code);
        buf.put_u8(self.effective_length());
        buf.put_u8(self.command);
        buf.put_slice(&self.payload);
        buf.put_u8(self.checksum());

        buf
    }

    /// Decode a reader-to-host packet from a complete frame buffer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The boot code is neither 0xF0 nor 0xF4
    /// - The effective length is below 2
    /// - The buffer is shorter than the frame it declares
    ///
    /// A checksum mismatch is *not* an error: the frame is still returned
    /// and a warning is logged, leaving the trust decision to the caller.
    pub fn decode(mut buf: BytesMut) -> Result<Self> {
        let total = buf.len();
        if total < crate::FRAME_OVERHEAD {
            return Err(Error::FrameTooShort {
                expected: crate::FRAME_OVERHEAD,
                actual: total,
            });
        }

        let boot_code = buf.get_u8();
        if boot_code != BOOT_RESPONSE && boot_code != BOOT_FAILURE {
            return Err(Error::WrongBootCode(boot_code));
        }

        let effective_length = buf.get_u8();
        if effective_length < 2 {
            return Err(Error::MalformedLength(effective_length));
        }

        let command = buf.get_u8();

        let payload_len = effective_length as usize - 2;
        if buf.len() < payload_len + 1 {
            return Err(Error::FrameTooShort {
                expected: payload_len + crate::FRAME_OVERHEAD,
                actual: total,
            });
        }

        let payload = buf.split_to(payload_len).freeze();
        let checksum_received = buf.get_u8();

        Ok(Self::from_wire(boot_code, command, payload, checksum_received))
    }

    /// Assemble a packet from wire fields, verifying the received checksum
    ///
    /// Used by transports that read the frame field by field. A mismatch is
    /// logged as a warning; the packet is returned either way.
    pub fn from_wire(boot_code: u8, command: u8, payload: Bytes, checksum_received: u8) -> Self {
        let packet = Self {
            boot_code,
            command,
            payload,
        };

        let expected = packet.checksum();
        if expected != checksum_received {
            warn!(
                expected = format!("0x{expected:02X}"),
                received = format!("0x{checksum_received:02X}"),
                "Received wrong checksum, frame data may be inconsistent"
            );
        }

        packet
    }

    /// Check whether the received checksum matches the computed one
    pub fn verify_checksum(&self, received: u8) -> bool {
        self.checksum() == received
    }

    /// Check if this is a reader failure frame (boot code 0xF4)
    ///
    /// Failure frames carry a one-byte status code in the payload; see
    /// [`crate::status::describe`].
    pub fn is_failure(&self) -> bool {
        self.boot_code == BOOT_FAILURE
    }

    /// Get total frame size on the wire
    pub fn size(&self) -> usize {
        crate::FRAME_OVERHEAD + self.payload.len()
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("boot_code", &format!("0x{:02X}", self.boot_code))
            .field("command", &format!("0x{:02X}", self.command))
            .field("checksum", &format!("0x{:02X}", self.checksum()))
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Space-separated hex dump of the whole frame
        let frame = self.encode();
        let mut first = true;
        for b in frame.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{b:02x}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_packet_request() {
        let packet = Packet::request(Command::SetBaudRate, vec![0x04]);
        assert_eq!(packet.boot_code, 0x40);
        assert_eq!(packet.command, 0x01);
        assert_eq!(packet.effective_length(), 3);
    }

    #[test]
    fn test_encode_baud_rate_frame() {
        let packet = Packet::request(Command::SetBaudRate, vec![0x04]);
        assert_eq!(packet.encode().as_ref(), &[0x40, 0x03, 0x01, 0x04, 0xB8]);
    }

    #[test]
    fn test_encoded_frame_sums_to_zero() {
        let packet = Packet::request(Command::ListTagId, vec![0x01, 0x00, 0x20, 0x04]);
        let sum = packet
            .encode()
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_decode_round_trip() {
        let original = Packet::new(0xF0, 0x25, vec![1, 2, 3, 4]);
        let decoded = Packet::decode(original.encode()).unwrap();

        assert_eq!(original, decoded);
        assert!(decoded.verify_checksum(original.checksum()));
    }

    #[test]
    fn test_decode_wrong_boot_code() {
        // Host boot code is not valid on the receive side
        let buf = Packet::new(0x40, 0x02, vec![]).encode();
        let result = Packet::decode(buf);

        assert!(matches!(result, Err(Error::WrongBootCode(0x40))));
    }

    #[test]
    fn test_decode_malformed_length() {
        let mut buf = Packet::new(0xF0, 0x02, vec![]).encode();
        buf[1] = 0x01;

        let result = Packet::decode(buf);
        assert!(matches!(result, Err(Error::MalformedLength(0x01))));
    }

    #[test]
    fn test_decode_too_short() {
        let buf = BytesMut::from(&[0xF0, 0x02][..]);
        let result = Packet::decode(buf);

        assert!(matches!(result, Err(Error::FrameTooShort { .. })));
    }

    #[test]
    fn test_decode_truncated_payload() {
        let mut buf = Packet::new(0xF0, 0x10, vec![0xAA; 32]).encode();
        buf.truncate(10);

        let result = Packet::decode(buf);
        assert!(matches!(result, Err(Error::FrameTooShort { .. })));
    }

    #[test]
    fn test_decode_bad_checksum_still_returns() {
        let original = Packet::new(0xF0, 0x02, vec![1, 0, 2, 7]);
        let mut encoded = original.encode();
        let last = encoded.len() - 1;
        encoded[last] ^= 0xFF;

        // Deliberately tolerated: the frame comes back despite the mismatch
        let decoded = Packet::decode(encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_is_failure() {
        assert!(Packet::new(0xF4, 0x02, vec![0x01]).is_failure());
        assert!(!Packet::new(0xF0, 0x02, vec![]).is_failure());
    }

    #[test]
    fn test_display_hex_dump() {
        let packet = Packet::request(Command::SetBaudRate, vec![0x04]);
        assert_eq!(packet.to_string(), "40 03 01 04 b8");
    }

    proptest! {
        #[test]
        fn prop_encode_decode_round_trip(
            boot in prop_oneof![Just(0xF0u8), Just(0xF4u8)],
            command in any::<u8>(),
            payload in proptest::collection::vec(any::<u8>(), 0..=253),
        ) {
            let original = Packet::new(boot, command, payload);
            let decoded = Packet::decode(original.encode()).unwrap();
            prop_assert_eq!(original, decoded);
        }

        #[test]
        fn prop_frame_sums_to_zero(
            command in any::<u8>(),
            payload in proptest::collection::vec(any::<u8>(), 0..=253),
        ) {
            let packet = Packet::new(0x40, command, payload);
            let sum = packet.encode().iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
            prop_assert_eq!(sum, 0);
        }
    }
}
