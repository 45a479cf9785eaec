//! Tag memory bank selector

use std::fmt;

/// Tag memory region addressed by inventory and access commands
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MemoryBank {
    /// Reserved bank (kill and access passwords)
    Password = 0x00,
    /// EPC identifier bank
    Epc = 0x01,
    /// Tag identification bank
    Tid = 0x02,
    /// User data bank
    User = 0x03,
}

impl MemoryBank {
    /// Wire code for request payloads
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MemoryBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Password => "password",
            Self::Epc => "EPC",
            Self::Tid => "TID",
            Self::User => "user",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_codes() {
        assert_eq!(MemoryBank::Password.code(), 0x00);
        assert_eq!(MemoryBank::Epc.code(), 0x01);
        assert_eq!(MemoryBank::Tid.code(), 0x02);
        assert_eq!(MemoryBank::User.code(), 0x03);
    }
}
