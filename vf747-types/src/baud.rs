//! Serial baud rate table

use std::fmt;

use crate::error::{Error, Result};

/// Baud rates supported by the reader's serial line
///
/// The discriminant is the wire code sent with `set_baud_rate`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BaudRate {
    B600 = 0x00,
    B1200 = 0x01,
    B2400 = 0x02,
    B4800 = 0x03,
    B9600 = 0x04,
    B19200 = 0x05,
    B38400 = 0x06,
    B57600 = 0x07,
    B115200 = 0x08,
}

impl BaudRate {
    /// Wire code for the set_baud_rate payload
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Rate in bits per second
    pub fn bits_per_second(self) -> u32 {
        match self {
            Self::B600 => 600,
            Self::B1200 => 1200,
            Self::B2400 => 2400,
            Self::B4800 => 4800,
            Self::B9600 => 9600,
            Self::B19200 => 19200,
            Self::B38400 => 38400,
            Self::B57600 => 57600,
            Self::B115200 => 115200,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = Error;

    fn try_from(rate: u32) -> Result<Self> {
        match rate {
            600 => Ok(Self::B600),
            1200 => Ok(Self::B1200),
            2400 => Ok(Self::B2400),
            4800 => Ok(Self::B4800),
            9600 => Ok(Self::B9600),
            19200 => Ok(Self::B19200),
            38400 => Ok(Self::B38400),
            57600 => Ok(Self::B57600),
            115200 => Ok(Self::B115200),
            _ => Err(Error::InvalidBaudRate(rate)),
        }
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} baud", self.bits_per_second())
    }
}
