pub mod encoding;
pub mod layout;

pub use encoding::repair_encoding;
pub use layout::repair_layout;

/// Comment opening the tab block that was appended to the template in error.
pub const BLOCK_MARKER: &str = "<!-- ONGLET 3: FACTURATION -->";

/// Shorter prefix used for the byte-level scan; the corrupted tail may carry
/// the rest of the comment in a different encoding.
pub const BLOCK_MARKER_PREFIX: &str = "<!-- ONGLET 3";

/// Closing tag the relocated block is inserted in front of.
pub const ANCHOR_TAG: &str = "</form>";

/// Byte offset of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Byte offset of the last occurrence of `needle` in `haystack`.
pub(crate) fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// UTF-16LE byte form of a literal: each ASCII char followed by a NUL.
pub(crate) fn utf16le_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_and_rfind_pick_first_and_last_occurrence() {
        let haystack = b"ab</form>cd</form>ef";
        assert_eq!(find(haystack, b"</form>"), Some(2));
        assert_eq!(rfind(haystack, b"</form>"), Some(11));
        assert_eq!(find(haystack, b"<table>"), None);
        assert_eq!(rfind(haystack, b"<table>"), None);
    }

    #[test]
    fn empty_needle_never_matches() {
        assert_eq!(find(b"abc", b""), None);
        assert_eq!(rfind(b"abc", b""), None);
    }

    #[test]
    fn utf16le_bytes_interleaves_nuls() {
        assert_eq!(utf16le_bytes("<!"), vec![b'<', 0, b'!', 0]);
        assert_eq!(
            utf16le_bytes(BLOCK_MARKER_PREFIX).len(),
            BLOCK_MARKER_PREFIX.len() * 2
        );
    }
}
