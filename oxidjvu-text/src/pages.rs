//! Splitting an extracted text stream back into pages.

use oxidjvu_core::PAGE_SEPARATOR;

/// Split an extraction stream on `0x1F`.
///
/// Every separator terminates one page, so the empty tail after the final
/// separator is not a page. Text after the last separator (a stream cut
/// short) is returned as a final page. Empty pages in the middle are kept.
///
/// ```rust
/// use oxidjvu_text::split_pages;
///
/// assert_eq!(split_pages(b"Hi\x1f\x1fX\x1f"), vec![&b"Hi"[..], b"", b"X"]);
/// assert!(split_pages(b"").is_empty());
/// ```
pub fn split_pages(stream: &[u8]) -> Vec<&[u8]> {
    let mut pages: Vec<&[u8]> = stream.split(|&b| b == PAGE_SEPARATOR).collect();
    if pages.last().is_some_and(|tail| tail.is_empty()) {
        pages.pop();
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scenario_output() {
        assert_eq!(split_pages(b"Hi\x1fX\x1f"), vec![&b"Hi"[..], b"X"]);
    }

    #[test]
    fn test_split_empty_and_blank() {
        assert!(split_pages(b"").is_empty());
        assert_eq!(split_pages(b"\x1f"), vec![&b""[..]]);
        assert_eq!(split_pages(b"\x1f\x1f"), vec![&b""[..], b""]);
    }

    #[test]
    fn test_unterminated_tail() {
        assert_eq!(split_pages(b"one\x1ftwo"), vec![&b"one"[..], b"two"]);
    }

    #[test]
    fn test_page_count_matches_separators() {
        let stream = b"a\x1fbb\x1f\x1fccc\x1f";
        let separators = stream.iter().filter(|&&b| b == PAGE_SEPARATOR).count();
        assert_eq!(split_pages(stream).len(), separators);
    }
}
