//! Chunk writing.
//!
//! [`ChunkWriter`] builds a DjVu byte stream chunk by chunk, patching
//! container sizes when they are closed. [`serialize`] re-emits a parsed
//! tree from its source buffer, byte for byte.

use crate::chunk::Chunk;
use oxidjvu_core::error::{DjvuError, Result};
use oxidjvu_core::{ChunkId, DJVU_MAGIC};

/// Incremental builder for a DjVu byte stream.
///
/// Pad bytes are written in front of a chunk header whenever the previous
/// sibling ended on an odd offset, so a pad never trails the last child of a
/// container or the end of the file.
#[derive(Debug)]
pub struct ChunkWriter {
    buf: Vec<u8>,
    /// Offsets of the size fields of open containers.
    open: Vec<usize>,
    pending_pad: bool,
}

impl ChunkWriter {
    /// Create a writer; the `AT&T` signature is written immediately.
    pub fn new() -> Self {
        Self {
            buf: DJVU_MAGIC.to_vec(),
            open: Vec::new(),
            pending_pad: false,
        }
    }

    /// Open a container chunk. Children are written until
    /// [`close_container`](Self::close_container).
    pub fn open_container(&mut self, id: ChunkId, subtype: ChunkId) -> Result<()> {
        if !id.is_container() {
            return Err(DjvuError::invalid_chunk_id(format!(
                "{} is not a container type",
                id
            )));
        }
        self.write_header(id, 0);
        self.open.push(self.buf.len() - 4);
        self.buf.extend_from_slice(&subtype.to_bytes());
        Ok(())
    }

    /// Close the innermost open container and patch its size.
    pub fn close_container(&mut self) -> Result<()> {
        let size_pos = self
            .open
            .pop()
            .ok_or_else(|| DjvuError::invalid_chunk_id("no container is open"))?;

        let size = self.buf.len() - (size_pos + 4);
        let size = u32::try_from(size).map_err(|_| DjvuError::size_overflow(size_pos - 4, u32::MAX))?;
        self.buf[size_pos..size_pos + 4].copy_from_slice(&size.to_be_bytes());
        self.pending_pad = size % 2 == 1;
        Ok(())
    }

    /// Write a complete leaf chunk.
    pub fn write_chunk(&mut self, id: ChunkId, data: &[u8]) -> Result<()> {
        if id.is_container() {
            return Err(DjvuError::invalid_chunk_id(format!(
                "{} must be written with open_container",
                id
            )));
        }
        let size = u32::try_from(data.len())
            .map_err(|_| DjvuError::size_overflow(self.buf.len(), u32::MAX))?;
        self.write_header(id, size);
        self.buf.extend_from_slice(data);
        self.pending_pad = size % 2 == 1;
        Ok(())
    }

    /// Number of containers currently open.
    pub fn nesting_level(&self) -> usize {
        self.open.len()
    }

    /// Finish the stream. Fails if a container is still open.
    pub fn finish(self) -> Result<Vec<u8>> {
        if !self.open.is_empty() {
            return Err(DjvuError::invalid_chunk_id(format!(
                "{} container(s) left open",
                self.open.len()
            )));
        }
        Ok(self.buf)
    }

    fn write_header(&mut self, id: ChunkId, size: u32) {
        if self.pending_pad {
            self.buf.push(0);
            self.pending_pad = false;
        }
        self.buf.extend_from_slice(&id.to_bytes());
        self.buf.extend_from_slice(&size.to_be_bytes());
    }
}

impl Default for ChunkWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-emit `root` (parsed from `source`) as bytes.
///
/// Pad bytes are copied from `source` wherever the parser skipped one, so for
/// any buffer that parses successfully the result equals the buffer up to the
/// end of the root chunk.
pub fn serialize(root: &Chunk, source: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(root.end());
    out.extend_from_slice(&DJVU_MAGIC);
    emit(root, source, &mut out);
    out
}

fn emit(chunk: &Chunk, source: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(&chunk.id().to_bytes());
    out.extend_from_slice(&chunk.size().to_be_bytes());

    match chunk.subtype() {
        Some(subtype) => {
            out.extend_from_slice(&subtype.to_bytes());
            for child in chunk.children() {
                emit(child, source, out);
                if child.is_odd() && child.end() < chunk.end() {
                    out.push(source[child.end()]);
                }
            }
        }
        None => out.extend_from_slice(chunk.payload(source)),
    }

    debug_assert_eq!(out.len(), chunk.end());
}
