//! The parsed chunk tree.

use crate::{HEADER_SIZE, SUBTYPE_SIZE};
use oxidjvu_core::ChunkId;

/// Type-specific state of a chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkKind {
    /// `FORM`, `LIST`, `PROP` or `CAT `: a subtype and ordered children.
    Container {
        /// The 4-byte subtype at the start of the payload.
        subtype: ChunkId,
        /// Child chunks in file order.
        children: Vec<Chunk>,
    },
    /// `TXTa` or `TXTz`: a length-prefixed text blob.
    Text {
        /// `true` for BZZ-compressed `TXTz`.
        compressed: bool,
    },
    /// Any other chunk; the payload is kept as an uninterpreted byte range.
    Opaque,
}

/// One chunk of a DjVu file.
///
/// A chunk does not own its payload. It records where the payload lives in
/// the source buffer it was parsed from; use [`Chunk::payload`] with that same
/// buffer to get at the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    id: ChunkId,
    offset: usize,
    size: u32,
    kind: ChunkKind,
}

impl Chunk {
    pub(crate) fn new(id: ChunkId, offset: usize, size: u32, kind: ChunkKind) -> Self {
        Self {
            id,
            offset,
            size,
            kind,
        }
    }

    /// The chunk type.
    pub fn id(&self) -> ChunkId {
        self.id
    }

    /// Absolute offset of the first payload byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Absolute offset of the chunk header.
    pub fn header_offset(&self) -> usize {
        self.offset - HEADER_SIZE
    }

    /// Declared payload size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Absolute offset one past the last payload byte (pad byte excluded).
    pub fn end(&self) -> usize {
        self.offset + self.size as usize
    }

    /// Whether a pad byte is expected after this chunk.
    pub fn is_odd(&self) -> bool {
        self.size % 2 == 1
    }

    /// Type-specific state.
    pub fn kind(&self) -> &ChunkKind {
        &self.kind
    }

    /// Subtype of a container, `None` for leaves.
    pub fn subtype(&self) -> Option<ChunkId> {
        match &self.kind {
            ChunkKind::Container { subtype, .. } => Some(*subtype),
            _ => None,
        }
    }

    /// Children of a container; empty for leaves.
    pub fn children(&self) -> &[Chunk] {
        match &self.kind {
            ChunkKind::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Whether this chunk is a container.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, ChunkKind::Container { .. })
    }

    /// Whether this chunk is `TXTa` or `TXTz`.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ChunkKind::Text { .. })
    }

    /// Whether this chunk is a `FORM` of the given subtype.
    pub fn is_form(&self, subtype: ChunkId) -> bool {
        self.id == ChunkId::FORM && self.subtype() == Some(subtype)
    }

    /// The full payload in `source`, including a container's subtype.
    ///
    /// # Panics
    ///
    /// If `source` is shorter than the buffer this chunk was parsed from.
    pub fn payload<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.offset..self.end()]
    }

    /// The payload after a container's subtype; the whole payload for leaves.
    pub fn body<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        let skip = if self.is_container() { SUBTYPE_SIZE } else { 0 };
        &source[self.offset + skip..self.end()]
    }

    /// `TYPE` for leaves, `TYPE:SUBTYPE` for containers.
    pub fn full_id(&self) -> String {
        match self.subtype() {
            Some(subtype) => format!("{}:{}", self.id, subtype),
            None => self.id.to_string(),
        }
    }

    /// Pre-order walk over this chunk and all its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// First chunk in pre-order with the given type.
    pub fn find(&self, id: ChunkId) -> Option<&Chunk> {
        self.walk().map(|(_, c)| c).find(|c| c.id == id)
    }
}

/// Pre-order iterator yielding `(depth, chunk)`; the starting chunk has depth 0.
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Chunk)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Chunk);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, chunk) = self.stack.pop()?;
        self.stack
            .extend(chunk.children().iter().rev().map(|c| (depth + 1, c)));
        Some((depth, chunk))
    }
}
