//! Structure summaries.
//!
//! A [`Summary`] is a plain-data snapshot of a document's chunk tree with
//! identifiers rendered as strings. With the `serde` feature (on by default)
//! it serializes to JSON or any other serde format.

use oxidjvu_core::ChunkId;
use oxidjvu_iff::Chunk;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Overview of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    /// Root form, e.g. `FORM:DJVM`.
    pub form: String,
    /// Size of the source in bytes.
    pub file_size: usize,
    /// Number of `FORM:DJVU` pages.
    pub pages: usize,
    /// Number of `TXTa` chunks.
    pub text_chunks: usize,
    /// Number of `TXTz` chunks.
    pub compressed_text_chunks: usize,
    /// The chunk tree.
    pub root: ChunkSummary,
}

/// One chunk of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChunkSummary {
    /// Four-character type, e.g. `TXTz` or `CAT `.
    pub id: String,
    /// Container subtype.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub subtype: Option<String>,
    /// Absolute offset of the payload.
    pub offset: usize,
    /// Declared payload size.
    pub size: u32,
    /// Children, empty for leaves and for containers below the depth limit.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<ChunkSummary>,
}

impl Summary {
    pub(crate) fn new(root: &Chunk, file_size: usize, max_depth: Option<usize>) -> Self {
        let mut pages = 0;
        let mut text_chunks = 0;
        let mut compressed_text_chunks = 0;
        for (_, chunk) in root.walk() {
            match chunk.id() {
                ChunkId::TXTA => text_chunks += 1,
                ChunkId::TXTZ => compressed_text_chunks += 1,
                _ if chunk.is_form(ChunkId::DJVU) => pages += 1,
                _ => {}
            }
        }

        Self {
            form: root.full_id(),
            file_size,
            pages,
            text_chunks,
            compressed_text_chunks,
            root: ChunkSummary::new(root, max_depth),
        }
    }
}

impl ChunkSummary {
    /// Summarize `chunk` and its descendants down to `max_depth` levels
    /// below it; `None` keeps the whole subtree.
    pub fn new(chunk: &Chunk, max_depth: Option<usize>) -> Self {
        let children = match max_depth {
            Some(0) => Vec::new(),
            _ => {
                let below = max_depth.map(|d| d - 1);
                chunk
                    .children()
                    .iter()
                    .map(|child| Self::new(child, below))
                    .collect()
            }
        };

        Self {
            id: chunk.id().to_string(),
            subtype: chunk.subtype().map(|s| s.to_string()),
            offset: chunk.offset(),
            size: chunk.size(),
            children,
        }
    }
}
