//! VF747 protocol command definitions

use std::fmt;

use crate::error::{Error, Result};

/// Protocol command codes
///
/// Responses normally echo the request command code; the one exception is
/// [`Command::GetRelay`], whose response arrives under code `0x08`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    // Serial line & reader identity
    SetBaudRate = 0x01,
    GetReaderVersion = 0x02,
    SetOutputPower = 0x03,
    SetFrequency = 0x04,

    // Relay control
    SetRelay = 0x06,
    RelayStatus = 0x08,
    GetRelay = 0x0B,

    // Configuration blocks
    ReadParam = 0x10,
    SetParam = 0x11,
    ReadAutoParam = 0x12,
    SetAutoParam = 0x13,

    // Reader control
    SelectAntenna = 0x14,
    Reboot = 0x15,
    RestoreFactorySettings = 0x16,

    // Clock & reporting
    SetReaderTime = 0x17,
    GetReaderTime = 0x18,
    SetReportFilter = 0x19,
    GetReportFilter = 0x1A,

    // Network identity
    SetReaderNetworkAddress = 0x1B,
    GetReaderNetworkAddress = 0x1C,
    SetReaderMac = 0x1D,
    GetReaderMac = 0x1E,

    // Tag memory & inventory
    SetAutoMode = 0x20,
    ClearMemory = 0x21,
    ReportNow = 0x22,
    GetTagInfo = 0x23,
    ListTagId = 0x25,
    GetReaderId = 0x26,
}

impl Command {
    /// Wire code of the request frame
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Command code the reader answers with
    ///
    /// The reader answers `GetRelay` (0x0B) under `RelayStatus` (0x08), a
    /// quirk of the device protocol mapping. Every other command is echoed.
    pub fn response_code(self) -> u8 {
        match self {
            Self::GetRelay => Self::RelayStatus.code(),
            _ => self.code(),
        }
    }

    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::SetBaudRate => "SET_BAUD_RATE",
            Self::GetReaderVersion => "GET_READER_VERSION",
            Self::SetOutputPower => "SET_OUTPUT_POWER",
            Self::SetFrequency => "SET_FREQUENCY",
            Self::SetRelay => "SET_RELAY",
            Self::RelayStatus => "RELAY_STATUS",
            Self::GetRelay => "GET_RELAY",
            Self::ReadParam => "READ_PARAM",
            Self::SetParam => "SET_PARAM",
            Self::ReadAutoParam => "READ_AUTO_PARAM",
            Self::SetAutoParam => "SET_AUTO_PARAM",
            Self::SelectAntenna => "SELECT_ANTENNA",
            Self::Reboot => "REBOOT",
            Self::RestoreFactorySettings => "RESTORE_FACTORY_SETTINGS",
            Self::SetReaderTime => "SET_READER_TIME",
            Self::GetReaderTime => "GET_READER_TIME",
            Self::SetReportFilter => "SET_REPORT_FILTER",
            Self::GetReportFilter => "GET_REPORT_FILTER",
            Self::SetReaderNetworkAddress => "SET_READER_NETWORK_ADDRESS",
            Self::GetReaderNetworkAddress => "GET_READER_NETWORK_ADDRESS",
            Self::SetReaderMac => "SET_READER_MAC",
            Self::GetReaderMac => "GET_READER_MAC",
            Self::SetAutoMode => "SET_AUTO_MODE",
            Self::ClearMemory => "CLEAR_MEMORY",
            Self::ReportNow => "REPORT_NOW",
            Self::GetTagInfo => "GET_TAG_INFO",
            Self::ListTagId => "LIST_TAG_ID",
            Self::GetReaderId => "GET_READER_ID",
        }
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x01 => Ok(Self::SetBaudRate),
            0x02 => Ok(Self::GetReaderVersion),
            0x03 => Ok(Self::SetOutputPower),
            0x04 => Ok(Self::SetFrequency),
            0x06 => Ok(Self::SetRelay),
            0x08 => Ok(Self::RelayStatus),
            0x0B => Ok(Self::GetRelay),
            0x10 => Ok(Self::ReadParam),
            0x11 => Ok(Self::SetParam),
            0x12 => Ok(Self::ReadAutoParam),
            0x13 => Ok(Self::SetAutoParam),
            0x14 => Ok(Self::SelectAntenna),
            0x15 => Ok(Self::Reboot),
            0x16 => Ok(Self::RestoreFactorySettings),
            0x17 => Ok(Self::SetReaderTime),
            0x18 => Ok(Self::GetReaderTime),
            0x19 => Ok(Self::SetReportFilter),
            0x1A => Ok(Self::GetReportFilter),
            0x1B => Ok(Self::SetReaderNetworkAddress),
            0x1C => Ok(Self::GetReaderNetworkAddress),
            0x1D => Ok(Self::SetReaderMac),
            0x1E => Ok(Self::GetReaderMac),
            0x20 => Ok(Self::SetAutoMode),
            0x21 => Ok(Self::ClearMemory),
            0x22 => Ok(Self::ReportNow),
            0x23 => Ok(Self::GetTagInfo),
            0x25 => Ok(Self::ListTagId),
            0x26 => Ok(Self::GetReaderId),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}
