//! The [`Document`] façade.

use crate::source::Source;
use crate::summary::Summary;
use oxidjvu_core::error::Result;
use oxidjvu_core::{BzzDecoder, ChunkId};
use oxidjvu_iff::{Chunk, ChunkParser, ParseOptions, Walk, write_tree};
use oxidjvu_text::TextExtractor;
use std::borrow::Cow;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

#[cfg(feature = "async-io")]
use tokio::io::{AsyncRead, AsyncReadExt};

/// A parsed DjVu document.
///
/// Owns its source bytes and the chunk tree parsed from them. A document is
/// only ever constructed from a successful parse, and nothing reads the
/// source again after construction except through the tree. Dropping the
/// document, or consuming it with [`into_bytes`](Self::into_bytes), ends
/// every borrow of its chunks.
#[derive(Debug)]
pub struct Document {
    source: Source,
    root: Chunk,
}

impl Document {
    /// Read `reader` to the end and parse it with default options.
    ///
    /// # Errors
    ///
    /// [`DjvuError::Io`](oxidjvu_core::DjvuError::Io) if reading fails, or
    /// any parse error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oxidjvu_document::Document;
    ///
    /// let bytes = b"AT&TFORM\x00\x00\x00\x04DJVU";
    /// let doc = Document::open(&bytes[..]).unwrap();
    /// assert_eq!(doc.root().full_id(), "FORM:DJVU");
    /// ```
    pub fn open<R: Read>(reader: R) -> Result<Self> {
        Self::open_with(reader, ParseOptions::default())
    }

    /// Read `reader` to the end and parse it with `options`.
    pub fn open_with<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes_with(bytes, options)
    }

    /// Open the file at `path`.
    pub fn open_path<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::open_with(file, options)
    }

    /// Parse an in-memory buffer with default options.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with(bytes, ParseOptions::default())
    }

    /// Parse an in-memory buffer with `options`.
    pub fn from_bytes_with(bytes: Vec<u8>, options: ParseOptions) -> Result<Self> {
        Self::from_source(Source::Owned(bytes), options)
    }

    /// Map the file at `path` read-only and parse the mapping.
    ///
    /// The file must not be modified while the document is alive.
    #[cfg(feature = "mmap")]
    pub fn open_path_mmap<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        // SAFETY: the mapping is read-only; the caller guarantees the file is
        // not modified while mapped.
        let map = unsafe { Mmap::map(&file)? };
        Self::from_source(Source::Mapped(map), options)
    }

    /// Read an async stream to the end and parse it with `options`.
    #[cfg(feature = "async-io")]
    pub async fn open_async<R>(mut reader: R, options: ParseOptions) -> Result<Self>
    where
        R: AsyncRead + Unpin,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        Self::from_bytes_with(bytes, options)
    }

    fn from_source(source: Source, options: ParseOptions) -> Result<Self> {
        let root = ChunkParser::new(options).parse(source.as_bytes())?;
        Ok(Self { source, root })
    }

    /// The root `FORM` chunk.
    pub fn root(&self) -> &Chunk {
        &self.root
    }

    /// The bytes the document was parsed from.
    pub fn source(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// Whether the source is a memory map.
    pub fn is_mapped(&self) -> bool {
        self.source.is_mapped()
    }

    /// Pre-order walk over all chunks with their depth (root is 0).
    pub fn chunks(&self) -> Walk<'_> {
        self.root.walk()
    }

    /// `FORM:DJVU` pages in document order; a single-page document yields
    /// its root.
    pub fn pages(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks()
            .map(|(_, c)| c)
            .filter(|c| c.is_form(ChunkId::DJVU))
    }

    /// Number of `FORM:DJVU` pages.
    pub fn page_count(&self) -> usize {
        self.pages().count()
    }

    /// All `TXTa` and `TXTz` chunks in document order.
    pub fn text_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks().map(|(_, c)| c).filter(|c| c.is_text())
    }

    /// Write the indented structure dump, one line per chunk.
    ///
    /// Chunks deeper than `max_depth` are left out. Returns the number of
    /// lines written.
    pub fn dump_structure<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        max_depth: Option<usize>,
    ) -> Result<usize> {
        write_tree(&self.root, writer, max_depth)
    }

    /// Write the text of every text chunk, each followed by `0x1F`.
    ///
    /// `bzz` decodes `TXTz` chunks. Returns the number of bytes written.
    /// Stops at the first error; bytes already written are not retracted.
    pub fn extract_text<W, B>(&self, writer: &mut W, bzz: &B) -> Result<u64>
    where
        W: Write + ?Sized,
        B: BzzDecoder + ?Sized,
    {
        TextExtractor::new(bzz).extract(&self.root, self.source(), writer)
    }

    /// Text of a single `TXTa`/`TXTz` chunk of this document, without the
    /// length prefix or separator.
    ///
    /// A chunk from another document fails with `TruncatedChunk` when it
    /// lies beyond the end of this one.
    pub fn decode_text<B>(&self, chunk: &Chunk, bzz: &B) -> Result<Cow<'_, [u8]>>
    where
        B: BzzDecoder + ?Sized,
    {
        TextExtractor::new(bzz).decode(chunk, self.source())
    }

    /// Snapshot of the whole chunk tree.
    pub fn summary(&self) -> Summary {
        self.summary_to_depth(None)
    }

    /// Snapshot of the chunk tree down to `max_depth`.
    pub fn summary_to_depth(&self, max_depth: Option<usize>) -> Summary {
        Summary::new(&self.root, self.source.len(), max_depth)
    }

    /// Release the document, returning its source bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.source.into_vec()
    }
}
