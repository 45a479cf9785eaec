//! Tag inventory response decoding
//!
//! A `list_tag_id` response starts with the total number of tags the reader
//! detected, followed by variable-length records:
//!
//! ```text
//! ┌───────────┬──────────┬─────────────┬──────────┬─────────────┬────
//! │   Total   │  Words   │   Tag ID    │  Words   │   Tag ID    │ ...
//! │  1 byte   │  1 byte  │ 2*W bytes   │  1 byte  │ 2*W bytes   │
//! └───────────┴──────────┴─────────────┴──────────┴─────────────┴────
//! ```
//!
//! The total may exceed what fits in one frame. Records are scanned until
//! one would run past the end of the payload; the scan then stops and the
//! tags decoded so far are returned, leaving the caller to page through
//! reader memory for the rest.

use tracing::debug;

use crate::hexstr;

/// Decode a tag inventory payload
///
/// Returns the reader-reported total and the tag IDs fully contained in
/// this frame, rendered as uppercase hex strings. Truncation is not an
/// error.
///
/// # Examples
///
/// ```
/// use vf747_core::inventory;
///
/// let payload = [0x02, 0x02, 0xE2, 0x00, 0x10, 0x55, 0x01, 0xBE, 0xEF];
/// let (total, tags) = inventory::decode_tag_list(&payload);
/// assert_eq!(total, 2);
/// assert_eq!(tags, vec!["E2001055", "BEEF"]);
/// ```
pub fn decode_tag_list(payload: &[u8]) -> (u8, Vec<String>) {
    let Some((&total, records)) = payload.split_first() else {
        return (0, Vec::new());
    };

    let mut tags = Vec::new();
    let mut pos = 0;

    while pos < records.len() {
        let words = records[pos] as usize;
        let end = pos + 1 + 2 * words;

        if end > records.len() {
            // Record runs past the frame: the rest lives in reader memory
            debug!(
                total,
                decoded = tags.len(),
                "Tag list truncated mid-record, stopping scan"
            );
            break;
        }

        tags.push(hexstr::encode(&records[pos + 1..end]));
        pos = end;
    }

    (total, tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_payload() {
        assert_eq!(decode_tag_list(&[]), (0, vec![]));
    }

    #[test]
    fn test_no_records() {
        assert_eq!(decode_tag_list(&[3]), (3, vec![]));
    }

    #[test]
    fn test_single_tag() {
        // One tag of two words
        let payload = [0x01, 0x02, 0xE2, 0x00, 0x68, 0x94];
        let (total, tags) = decode_tag_list(&payload);

        assert_eq!(total, 1);
        assert_eq!(tags, vec!["E2006894".to_string()]);
    }

    #[test]
    fn test_multiple_tags_mixed_lengths() {
        let payload = [
            0x03, // total
            0x01, 0xAA, 0xBB, // tag 1: 1 word
            0x02, 0x11, 0x22, 0x33, 0x44, // tag 2: 2 words
            0x01, 0xCD, 0xEF, // tag 3: 1 word
        ];
        let (total, tags) = decode_tag_list(&payload);

        assert_eq!(total, 3);
        assert_eq!(tags, vec!["AABB", "11223344", "CDEF"]);
    }

    #[test]
    fn test_truncated_record_stops_scan() {
        // Total claims 5 tags but the third record declares 4 words with
        // only 2 bytes left in the frame
        let payload = [
            0x05, // total
            0x01, 0xAA, 0xBB, // tag 1
            0x01, 0xCC, 0xDD, // tag 2
            0x04, 0x01, 0x02, // truncated record
        ];
        let (total, tags) = decode_tag_list(&payload);

        assert_eq!(total, 5);
        assert_eq!(tags, vec!["AABB", "CCDD"]);
    }

    #[test]
    fn test_zero_word_record() {
        // A zero-length record decodes to an empty ID and the scan moves on
        let payload = [0x02, 0x00, 0x01, 0xAB, 0xCD];
        let (total, tags) = decode_tag_list(&payload);

        assert_eq!(total, 2);
        assert_eq!(tags, vec!["", "ABCD"]);
    }

    #[test]
    fn test_ids_are_uppercase() {
        let payload = [0x01, 0x01, 0xab, 0xcd];
        let (_, tags) = decode_tag_list(&payload);
        assert_eq!(tags[0], "ABCD");
    }
}
