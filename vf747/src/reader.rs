//! High-level reader interface
//!
//! [`Reader`] owns one transport for its lifetime and drives the
//! write-request / read-one-response cycle for every command. Calls are
//! strictly sequential; there is no pipelining and no shared state beyond
//! the transport handle.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, info, warn};

use vf747_core::{
    constants::{ANTENNA_PORTS, BOOT_FAILURE, BOOT_RESPONSE, PARAM_BLOCK_SIZE},
    inventory, Command, Packet, MAX_PAYLOAD_SIZE,
};
use vf747_transport::{TcpTransport, Transport};
use vf747_types::{BaudRate, MemoryBank, ReaderVersion, RelayState, TagInventory};

use crate::error::{Error, Result};

/// VF747 RFID reader
///
/// High-level interface for commanding a VF747 reader over a byte-stream
/// transport.
///
/// # Examples
///
/// ```no_run
/// use vf747::Reader;
///
/// #[tokio::main]
/// async fn main() -> vf747::Result<()> {
///     let mut reader = Reader::tcp("192.168.1.190", 6000);
///
///     reader.connect().await?;
///     let version = reader.get_reader_version().await?;
///     println!("Reader version: {}", version);
///
///     reader.disconnect().await?;
///     Ok(())
/// }
/// ```
pub struct Reader {
    transport: Box<dyn Transport>,
}

impl Reader {
    /// Create a reader over an arbitrary transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Create a reader behind a serial device server
    pub fn tcp(addr: impl Into<String>, port: u16) -> Self {
        Self::new(TcpTransport::new(addr, port))
    }

    /// Check if the transport is open
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Open the transport
    pub async fn connect(&mut self) -> Result<()> {
        info!("Connecting to {}...", self.transport.endpoint());
        self.transport.connect().await?;
        Ok(())
    }

    /// Close the transport
    pub async fn disconnect(&mut self) -> Result<()> {
        if !self.is_connected() {
            return Ok(());
        }

        info!("Disconnecting from {}...", self.transport.endpoint());
        self.transport.disconnect().await?;
        Ok(())
    }

    // Framing

    /// Encode and write one request frame; no response handling
    async fn send_command(&mut self, command: Command, payload: impl Into<Bytes>) -> Result<()> {
        self.ensure_connected()?;

        let payload = payload.into();
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(vf747_core::Error::PayloadTooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            }
            .into());
        }

        let packet = Packet::request(command, payload);
        debug!("Write packet: {packet}");
        self.transport.write_all(&packet.encode()).await?;

        Ok(())
    }

    /// Read and validate one response frame
    ///
    /// A checksum mismatch is logged but tolerated; wrong boot codes and
    /// malformed lengths are fatal to the call, and the transport should be
    /// considered out of sync afterwards.
    async fn read_return_packet(&mut self) -> Result<Packet> {
        self.ensure_connected()?;

        let boot_code = self.transport.read_exact(1).await?[0];
        if boot_code != BOOT_RESPONSE && boot_code != BOOT_FAILURE {
            return Err(vf747_core::Error::WrongBootCode(boot_code).into());
        }

        let effective_length = self.transport.read_exact(1).await?[0];
        if effective_length < 2 {
            return Err(vf747_core::Error::MalformedLength(effective_length).into());
        }

        let command = self.transport.read_exact(1).await?[0];
        let payload = self
            .transport
            .read_exact(effective_length as usize - 2)
            .await?
            .freeze();
        let checksum = self.transport.read_exact(1).await?[0];

        let packet = Packet::from_wire(boot_code, command, payload, checksum);
        debug!("Read packet: {packet}");

        Ok(packet)
    }

    /// One full request/response transaction
    async fn transact(&mut self, command: Command, payload: impl Into<Bytes>) -> Result<Packet> {
        self.send_command(command, payload).await?;

        let response = self.read_return_packet().await?;
        if response.command != command.response_code() {
            return Err(Error::UnexpectedResponse {
                expected: command.response_code(),
                received: response.command,
            });
        }

        if response.is_failure() {
            warn!(
                status = response.payload.first().map(|&c| vf747_core::status::describe(c)),
                "Reader answered {} with a failure frame",
                command
            );
        }

        Ok(response)
    }

    // Command catalog

    /// Change the serial line baud rate
    ///
    /// Only the rates in the reader's fixed table are accepted; anything
    /// else fails before any I/O.
    pub async fn set_baud_rate(&mut self, rate: u32) -> Result<()> {
        let baud = BaudRate::try_from(rate)?;
        self.transact(Command::SetBaudRate, vec![baud.code()]).await?;
        Ok(())
    }

    /// Query hardware and software version
    pub async fn get_reader_version(&mut self) -> Result<ReaderVersion> {
        let response = self.transact(Command::GetReaderVersion, vec![]).await?;

        let payload = &response.payload;
        if payload.len() < 4 {
            return Err(Error::InvalidResponsePayload {
                expected: 4,
                actual: payload.len(),
            });
        }

        Ok(ReaderVersion {
            hardware_major: payload[0],
            hardware_minor: payload[1],
            software_major: payload[2],
            software_minor: payload[3],
        })
    }

    /// Switch the relay outputs
    ///
    /// The request bitfield puts relay 1 at bit 0 and relay 2 at bit 2,
    /// skipping bit 1. That layout is a hardware quirk, kept verbatim.
    pub async fn set_relay(&mut self, relay1: bool, relay2: bool) -> Result<()> {
        let bits = (relay1 as u8) | ((relay2 as u8) << 2);
        self.transact(Command::SetRelay, vec![bits]).await?;
        Ok(())
    }

    /// Query the relay outputs
    ///
    /// The response byte uses bit 0 / bit 1, unlike the set_relay request.
    pub async fn get_relay(&mut self) -> Result<RelayState> {
        let response = self.transact(Command::GetRelay, vec![]).await?;

        let byte = *response.payload.first().ok_or(Error::InvalidResponsePayload {
            expected: 1,
            actual: 0,
        })?;

        Ok(RelayState::from_bits_truncate(byte))
    }

    /// Read the 32-byte settings block
    pub async fn read_param(&mut self) -> Result<[u8; PARAM_BLOCK_SIZE]> {
        let response = self.transact(Command::ReadParam, vec![]).await?;

        let payload = &response.payload;
        if payload.len() != PARAM_BLOCK_SIZE {
            return Err(Error::InvalidResponsePayload {
                expected: PARAM_BLOCK_SIZE,
                actual: payload.len(),
            });
        }

        let mut block = [0u8; PARAM_BLOCK_SIZE];
        block.copy_from_slice(payload);
        Ok(block)
    }

    /// Write the 32-byte settings block
    pub async fn set_param(&mut self, block: [u8; PARAM_BLOCK_SIZE]) -> Result<()> {
        self.transact(Command::SetParam, block.to_vec()).await?;
        Ok(())
    }

    /// Select one of the 8 antenna ports
    pub async fn select_antenna(&mut self, antenna: u8) -> Result<()> {
        if antenna >= ANTENNA_PORTS {
            return Err(Error::InvalidAntenna(antenna));
        }

        self.transact(Command::SelectAntenna, vec![0x01 << antenna])
            .await?;
        Ok(())
    }

    /// Reset the reader configuration to factory defaults
    pub async fn restore_factory_settings(&mut self) -> Result<()> {
        self.transact(Command::RestoreFactorySettings, vec![]).await?;
        Ok(())
    }

    /// Enable or disable autonomous inventory mode
    pub async fn set_auto_mode(&mut self, on: bool) -> Result<()> {
        self.transact(Command::SetAutoMode, vec![on as u8]).await?;
        Ok(())
    }

    /// Clear the reader's tag memory
    pub async fn clear_memory(&mut self) -> Result<()> {
        self.transact(Command::ClearMemory, vec![]).await?;
        Ok(())
    }

    /// Enumerate tags in the field
    ///
    /// `mask_start`/`mask_size`/`mask` restrict the inventory to tags whose
    /// selected memory bank matches the mask. The returned inventory may be
    /// partial: the reader reports the total it detected, and IDs that did
    /// not fit in the response frame must be paged out of reader memory.
    pub async fn list_tag_id(
        &mut self,
        bank: MemoryBank,
        mask_start: u16,
        mask_size: u8,
        mask: &[u8],
    ) -> Result<TagInventory> {
        let mut payload = BytesMut::with_capacity(4 + mask.len());
        payload.put_u8(bank.code());
        payload.put_u16(mask_start);
        payload.put_u8(mask_size);
        payload.put_slice(mask);

        let response = self.transact(Command::ListTagId, payload.freeze()).await?;

        let (total, tags) = inventory::decode_tag_list(&response.payload);
        debug!(total, decoded = tags.len(), "Tag inventory");

        Ok(TagInventory { total, tags })
    }

    // Commands the reader firmware defines but this library leaves
    // unimplemented. Each fails before any I/O.

    pub async fn set_output_power(&mut self) -> Result<()> {
        Err(Error::Unsupported("set_output_power"))
    }

    pub async fn set_frequency(&mut self) -> Result<()> {
        Err(Error::Unsupported("set_frequency"))
    }

    pub async fn read_auto_param(&mut self) -> Result<()> {
        Err(Error::Unsupported("read_auto_param"))
    }

    pub async fn set_auto_param(&mut self) -> Result<()> {
        Err(Error::Unsupported("set_auto_param"))
    }

    pub async fn reboot(&mut self) -> Result<()> {
        Err(Error::Unsupported("reboot"))
    }

    pub async fn set_reader_time(&mut self) -> Result<()> {
        Err(Error::Unsupported("set_reader_time"))
    }

    pub async fn get_reader_time(&mut self) -> Result<()> {
        Err(Error::Unsupported("get_reader_time"))
    }

    pub async fn set_report_filter(&mut self) -> Result<()> {
        Err(Error::Unsupported("set_report_filter"))
    }

    pub async fn get_report_filter(&mut self) -> Result<()> {
        Err(Error::Unsupported("get_report_filter"))
    }

    pub async fn set_reader_network_address(&mut self) -> Result<()> {
        Err(Error::Unsupported("set_reader_network_address"))
    }

    pub async fn get_reader_network_address(&mut self) -> Result<()> {
        Err(Error::Unsupported("get_reader_network_address"))
    }

    pub async fn set_reader_mac(&mut self) -> Result<()> {
        Err(Error::Unsupported("set_reader_mac"))
    }

    pub async fn get_reader_mac(&mut self) -> Result<()> {
        Err(Error::Unsupported("get_reader_mac"))
    }

    pub async fn report_now(&mut self) -> Result<()> {
        Err(Error::Unsupported("report_now"))
    }

    pub async fn get_tag_info(&mut self) -> Result<()> {
        Err(Error::Unsupported("get_tag_info"))
    }

    pub async fn get_reader_id(&mut self) -> Result<()> {
        Err(Error::Unsupported("get_reader_id"))
    }

    // Helpers

    fn ensure_connected(&self) -> Result<()> {
        if !self.is_connected() {
            return Err(Error::NotConnected);
        }
        Ok(())
    }
}
