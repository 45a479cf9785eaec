//! Tag inventory results

use std::fmt;

/// Result of a `list_tag_id` call
///
/// `total` is the number of tags the reader detected; `tags` holds the IDs
/// that fit in the response frame, as uppercase hex strings. When
/// `total` exceeds `tags.len()` the remainder must be paged out of reader
/// memory separately.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagInventory {
    pub total: u8,
    pub tags: Vec<String>,
}

impl TagInventory {
    /// Whether every detected tag made it into this frame
    pub fn is_complete(&self) -> bool {
        self.tags.len() >= self.total as usize
    }
}

impl fmt::Display for TagInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tags detected, {} decoded", self.total, self.tags.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        let inventory = TagInventory {
            total: 2,
            tags: vec!["AABB".into(), "CCDD".into()],
        };
        assert!(inventory.is_complete());

        let partial = TagInventory {
            total: 5,
            tags: vec!["AABB".into()],
        };
        assert!(!partial.is_complete());
    }
}
