//! DjVu chunk tree parser.

use crate::chunk::{Chunk, ChunkKind};
use crate::config::ParseOptions;
use crate::{HEADER_SIZE, SUBTYPE_SIZE};
use oxidjvu_core::error::{DjvuError, Result};
use oxidjvu_core::{ChunkId, DJVU_MAGIC};

/// Parses a DjVu byte buffer into a [`Chunk`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkParser {
    options: ParseOptions,
}

/// Header fields of one chunk, already checked against its bound.
struct Header {
    id: ChunkId,
    size: u32,
    start: usize,
    end: usize,
}

impl ChunkParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse `source` and return the root `FORM` chunk.
    ///
    /// All errors are fatal: on failure no part of the tree is returned.
    pub fn parse(&self, source: &[u8]) -> Result<Chunk> {
        if source.len() < DJVU_MAGIC.len() || source[..DJVU_MAGIC.len()] != DJVU_MAGIC {
            return Err(DjvuError::bad_signature(source));
        }

        let cursor = DJVU_MAGIC.len();
        let header = read_header(source, cursor, source.len())?;
        if header.id != ChunkId::FORM {
            return Err(DjvuError::bad_root(format!(
                "expected FORM, found {}",
                header.id
            )));
        }

        let root = self.read_body(source, cursor, header, 0)?;

        if self.options.strict {
            let subtype = root.subtype().unwrap_or(ChunkId::FORM);
            if !matches!(subtype, ChunkId::DJVU | ChunkId::DJVM | ChunkId::DJVI) {
                return Err(DjvuError::bad_root(format!(
                    "unexpected root form FORM:{}",
                    subtype
                )));
            }

            let trailing = source.len() - root.end();
            let allowed = if root.is_odd() { 1 } else { 0 };
            if trailing > allowed {
                return Err(DjvuError::trailing_data(root.end(), trailing));
            }
        }

        Ok(root)
    }

    fn read_chunk(&self, source: &[u8], cursor: usize, limit: usize, depth: usize) -> Result<Chunk> {
        let header = read_header(source, cursor, limit)?;
        self.read_body(source, cursor, header, depth)
    }

    fn read_body(&self, source: &[u8], cursor: usize, header: Header, depth: usize) -> Result<Chunk> {
        let Header {
            id,
            size,
            start,
            end,
        } = header;

        let kind = if id.is_container() {
            if depth > self.options.max_depth {
                return Err(DjvuError::nesting_too_deep(cursor, self.options.max_depth));
            }
            if (size as usize) < SUBTYPE_SIZE {
                return Err(DjvuError::truncated_chunk(
                    start,
                    SUBTYPE_SIZE as u64,
                    size as usize,
                ));
            }

            let subtype = read_id(source, start);
            let mut children = Vec::new();
            let mut child_cursor = start + SUBTYPE_SIZE;

            while child_cursor < end {
                let child = self.read_chunk(source, child_cursor, end, depth + 1)?;
                child_cursor = child.end();
                // The pad byte may be missing after the last child.
                if child.is_odd() && child_cursor < end {
                    child_cursor += 1;
                }
                children.push(child);
            }

            ChunkKind::Container { subtype, children }
        } else if id.is_text() {
            ChunkKind::Text {
                compressed: id == ChunkId::TXTZ,
            }
        } else {
            ChunkKind::Opaque
        };

        Ok(Chunk::new(id, start, size, kind))
    }
}

/// Parse `source` with default options.
pub fn parse(source: &[u8]) -> Result<Chunk> {
    ChunkParser::default().parse(source)
}

fn read_header(source: &[u8], cursor: usize, limit: usize) -> Result<Header> {
    let available = limit - cursor;
    if available < HEADER_SIZE {
        return Err(DjvuError::truncated_chunk(
            cursor,
            HEADER_SIZE as u64,
            available,
        ));
    }

    let id = read_id(source, cursor);
    let size = u32::from_be_bytes([
        source[cursor + 4],
        source[cursor + 5],
        source[cursor + 6],
        source[cursor + 7],
    ]);

    let start = cursor + HEADER_SIZE;
    let end = payload_end(cursor, start, size)?;
    if end > limit {
        return Err(DjvuError::truncated_chunk(
            cursor,
            HEADER_SIZE as u64 + u64::from(size),
            available,
        ));
    }

    Ok(Header {
        id,
        size,
        start,
        end,
    })
}

/// End of a payload of `size` bytes starting at `start`.
///
/// Overflow needs a 32-bit `usize` in practice: on 64-bit hosts no buffer
/// offset plus a `u32` size can exceed the address space.
fn payload_end(cursor: usize, start: usize, size: u32) -> Result<usize> {
    usize::try_from(size)
        .ok()
        .and_then(|size| start.checked_add(size))
        .ok_or_else(|| DjvuError::size_overflow(cursor, size))
}

fn read_id(source: &[u8], at: usize) -> ChunkId {
    ChunkId::from_bytes([source[at], source[at + 1], source[at + 2], source[at + 3]])
}
