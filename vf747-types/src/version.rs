//! Reader hardware and software version

use std::fmt;

/// Version information reported by `get_reader_version`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderVersion {
    pub hardware_major: u8,
    pub hardware_minor: u8,
    pub software_major: u8,
    pub software_minor: u8,
}

impl fmt::Display for ReaderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hw {}.{}, sw {}.{}",
            self.hardware_major, self.hardware_minor, self.software_major, self.software_minor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let version = ReaderVersion {
            hardware_major: 2,
            hardware_minor: 1,
            software_major: 3,
            software_minor: 14,
        };
        assert_eq!(version.to_string(), "hw 2.1, sw 3.14");
    }
}
