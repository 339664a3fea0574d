//! Text block decoding.

use crate::LENGTH_PREFIX_SIZE;
use oxidjvu_core::error::{DjvuError, Result};
use oxidjvu_core::{BzzDecoder, PAGE_SEPARATOR};
use oxidjvu_iff::{Chunk, ChunkKind, HEADER_SIZE};
use std::borrow::Cow;
use std::io::Write;

/// Extracts text from the chunks of one parsed document.
///
/// Holds a borrowed BZZ decoder for `TXTz` chunks. The decoder is called
/// once per compressed chunk and never sees two chunks in one call.
pub struct TextExtractor<'b, B: ?Sized> {
    bzz: &'b B,
}

impl<B: ?Sized> Clone for TextExtractor<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for TextExtractor<'_, B> {}

impl<'b, B: BzzDecoder + ?Sized> TextExtractor<'b, B> {
    /// Create an extractor using `bzz` for compressed chunks.
    pub fn new(bzz: &'b B) -> Self {
        Self { bzz }
    }

    /// Text bytes of `chunk`, without the length prefix or separator.
    pub fn decode<'s>(&self, chunk: &Chunk, source: &'s [u8]) -> Result<Cow<'s, [u8]>> {
        decode_text(chunk, source, self.bzz)
    }

    /// Write the text of `chunk` followed by the page separator.
    pub fn emit<W: Write + ?Sized>(
        &self,
        chunk: &Chunk,
        source: &[u8],
        writer: &mut W,
    ) -> Result<usize> {
        emit_text(chunk, source, writer, self.bzz)
    }

    /// Emit every text chunk under `root` in pre-order.
    ///
    /// Returns the total number of bytes written. Stops at the first error;
    /// whatever was already written stays written.
    pub fn extract<W: Write + ?Sized>(
        &self,
        root: &Chunk,
        source: &[u8],
        writer: &mut W,
    ) -> Result<u64> {
        let mut total = 0u64;
        for (_, chunk) in root.walk().filter(|(_, c)| c.is_text()) {
            total += self.emit(chunk, source, writer)? as u64;
        }
        Ok(total)
    }
}

/// Write the text of a `TXTa`/`TXTz` chunk followed by `0x1F`.
///
/// Returns the number of bytes written: the declared text length plus one.
pub fn emit_text<W, B>(chunk: &Chunk, source: &[u8], writer: &mut W, bzz: &B) -> Result<usize>
where
    W: Write + ?Sized,
    B: BzzDecoder + ?Sized,
{
    let text = decode_text(chunk, source, bzz)?;
    writer.write_all(&text)?;
    writer.write_all(&[PAGE_SEPARATOR])?;
    Ok(text.len() + 1)
}

/// Decode the text of a `TXTa`/`TXTz` chunk.
///
/// `TXTa` text is borrowed from `source`; `TXTz` text is owned. Zone data
/// after the text is dropped. A chunk that does not fit in `source` (one
/// parsed from another buffer) fails with `TruncatedChunk`.
pub fn decode_text<'s, B>(chunk: &Chunk, source: &'s [u8], bzz: &B) -> Result<Cow<'s, [u8]>>
where
    B: BzzDecoder + ?Sized,
{
    let compressed = match chunk.kind() {
        ChunkKind::Text { compressed } => *compressed,
        _ => return Err(DjvuError::not_text_chunk(chunk.id())),
    };

    let payload = source.get(chunk.offset()..chunk.end()).ok_or_else(|| {
        let header = chunk.offset().saturating_sub(HEADER_SIZE);
        DjvuError::truncated_chunk(
            header,
            HEADER_SIZE as u64 + u64::from(chunk.size()),
            source.len().saturating_sub(header),
        )
    })?;
    if !compressed {
        let len = text_len(payload, chunk.offset())?;
        return Ok(Cow::Borrowed(
            &payload[LENGTH_PREFIX_SIZE..LENGTH_PREFIX_SIZE + len],
        ));
    }

    let mut block = bzz.decompress(payload).map_err(|e| match e {
        DjvuError::BzzFailure { .. } => e,
        other => DjvuError::bzz_failure(other.to_string()),
    })?;
    if !block.is_empty() && block.iter().all(|&b| b == 0) {
        return Err(DjvuError::null_text_block(chunk.offset(), block.len()));
    }

    let len = text_len(&block, chunk.offset())?;
    block.truncate(LENGTH_PREFIX_SIZE + len);
    block.drain(..LENGTH_PREFIX_SIZE);
    Ok(Cow::Owned(block))
}

/// Read the 24-bit length prefix and check it against the block.
fn text_len(block: &[u8], offset: usize) -> Result<usize> {
    if block.len() < LENGTH_PREFIX_SIZE {
        return Err(DjvuError::truncated_text(
            offset,
            LENGTH_PREFIX_SIZE,
            block.len(),
        ));
    }

    let len = usize::from(block[0]) << 16 | usize::from(block[1]) << 8 | usize::from(block[2]);
    if LENGTH_PREFIX_SIZE + len > block.len() {
        return Err(DjvuError::truncated_text(
            offset,
            LENGTH_PREFIX_SIZE + len,
            block.len(),
        ));
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxidjvu_core::{ChunkId, ErrorKind, NoBzz};
    use oxidjvu_iff::{ChunkWriter, parse};

    fn identity(data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn page(chunks: &[(ChunkId, &[u8])]) -> Vec<u8> {
        let mut writer = ChunkWriter::new();
        writer.open_container(ChunkId::FORM, ChunkId::DJVU).unwrap();
        for (id, data) in chunks {
            writer.write_chunk(*id, data).unwrap();
        }
        writer.close_container().unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn test_emit_txta() {
        let data = page(&[(ChunkId::TXTA, b"\x00\x00\x05Hello")]);
        let root = parse(&data).unwrap();
        let mut out = Vec::new();
        let written = emit_text(&root.children()[0], &data, &mut out, &NoBzz).unwrap();
        assert_eq!(written, 6);
        assert_eq!(out, b"Hello\x1f");
    }

    #[test]
    fn test_zone_data_ignored() {
        let data = page(&[(ChunkId::TXTA, b"\x00\x00\x02Hi\x01\x02\x03")]);
        let root = parse(&data).unwrap();
        let text = decode_text(&root.children()[0], &data, &NoBzz).unwrap();
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(&*text, b"Hi");
    }

    #[test]
    fn test_empty_text_still_separated() {
        let data = page(&[(ChunkId::TXTA, b"\x00\x00\x00")]);
        let root = parse(&data).unwrap();
        let mut out = Vec::new();
        assert_eq!(emit_text(&root.children()[0], &data, &mut out, &NoBzz).unwrap(), 1);
        assert_eq!(out, [PAGE_SEPARATOR]);
    }

    #[test]
    fn test_truncated_text() {
        for payload in [b"\x00\x00".as_slice(), b"".as_slice(), b"\x00\x00\x09short".as_slice()] {
            let data = page(&[(ChunkId::TXTA, payload)]);
            let root = parse(&data).unwrap();
            let mut out = Vec::new();
            let err = emit_text(&root.children()[0], &data, &mut out, &NoBzz).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TruncatedTextChunk);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_txtz_identity_matches_txta() {
        let plain = page(&[(ChunkId::TXTA, b"\x00\x00\x03abc")]);
        let packed = page(&[(ChunkId::TXTZ, b"\x00\x00\x03abc")]);

        let mut a = Vec::new();
        let mut z = Vec::new();
        let root = parse(&plain).unwrap();
        emit_text(&root.children()[0], &plain, &mut a, &identity).unwrap();
        let root = parse(&packed).unwrap();
        emit_text(&root.children()[0], &packed, &mut z, &identity).unwrap();

        assert_eq!(z, b"abc\x1f");
        assert_eq!(a, z);
    }

    #[test]
    fn test_txtz_null_block() {
        let data = page(&[(ChunkId::TXTZ, &[0u8; 4])]);
        let root = parse(&data).unwrap();
        let mut out = Vec::new();
        let err = emit_text(&root.children()[0], &data, &mut out, &identity).unwrap_err();
        assert!(matches!(err, DjvuError::NullTextBlock { offset: 24, len: 4 }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_txtz_empty_output_is_truncated_not_null() {
        let data = page(&[(ChunkId::TXTZ, b"xyz")]);
        let root = parse(&data).unwrap();
        let empty = |_: &[u8]| -> Result<Vec<u8>> { Ok(Vec::new()) };
        let err = decode_text(&root.children()[0], &data, &empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedTextChunk);
    }

    #[test]
    fn test_decoder_errors_become_bzz_failure() {
        let data = page(&[(ChunkId::TXTZ, b"xyz")]);
        let root = parse(&data).unwrap();
        let chunk = &root.children()[0];

        let err = decode_text(chunk, &data, &NoBzz).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BzzFailure);

        let io_fail = |_: &[u8]| -> Result<Vec<u8>> {
            Err(std::io::Error::other("pipe closed").into())
        };
        let err = decode_text(chunk, &data, &io_fail).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BzzFailure);
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_not_text_chunk() {
        let data = page(&[(ChunkId::INFO, &[0u8; 10])]);
        let root = parse(&data).unwrap();
        let err = decode_text(&root.children()[0], &data, &NoBzz).unwrap_err();
        assert!(matches!(err, DjvuError::NotTextChunk { id } if id == ChunkId::INFO));
        assert_eq!(decode_text(&root, &data, &NoBzz).unwrap_err().kind(), ErrorKind::NotTextChunk);
    }

    #[test]
    fn test_extract_in_document_order() {
        let data = page(&[
            (ChunkId::TXTA, b"\x00\x00\x02Hi"),
            (ChunkId::INFO, &[0u8; 10]),
            (ChunkId::TXTZ, b"\x00\x00\x01X"),
        ]);
        let root = parse(&data).unwrap();
        let mut out = Vec::new();
        let total = TextExtractor::new(&identity).extract(&root, &data, &mut out).unwrap();
        assert_eq!(out, b"Hi\x1fX\x1f");
        assert_eq!(total, out.len() as u64);
    }

    #[test]
    fn test_extract_stops_at_first_error() {
        let data = page(&[
            (ChunkId::TXTA, b"\x00\x00\x02Hi"),
            (ChunkId::TXTZ, b"\x00\x00\x01X"),
            (ChunkId::TXTA, b"\x00\x00\x01Y"),
        ]);
        let root = parse(&data).unwrap();
        let mut out = Vec::new();
        let extractor = TextExtractor::new(&NoBzz);
        assert!(extractor.extract(&root, &data, &mut out).is_err());
        assert_eq!(out, b"Hi\x1f");
    }

    #[test]
    fn test_chunk_outside_source() {
        let long = page(&[(ChunkId::INFO, &[0u8; 32]), (ChunkId::TXTA, b"\x00\x00\x02Hi")]);
        let short = page(&[(ChunkId::TXTA, b"\x00\x00\x01X")]);
        let root = parse(&long).unwrap();
        let chunk = root.find(ChunkId::TXTA).unwrap();

        let err = decode_text(chunk, &short, &NoBzz).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedChunk);

        let mut out = Vec::new();
        let err = TextExtractor::new(&NoBzz)
            .extract(&root, &short, &mut out)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedChunk);
        assert!(out.is_empty());
    }
}
