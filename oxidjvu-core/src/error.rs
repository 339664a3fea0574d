//! Error types for OxiDjVu operations.
//!
//! Every failure of the parser, the text extractor or the document façade is
//! a [`DjvuError`]. Callers that only care about the category of a failure
//! match on [`DjvuError::kind`].

use crate::chunk_id::ChunkId;
use std::io;
use thiserror::Error;

/// Category of a [`DjvuError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not begin with `AT&T`.
    BadSignature,
    /// A chunk header or payload extends beyond its bound.
    TruncatedChunk,
    /// The first chunk is not a usable `FORM`.
    BadRootChunk,
    /// Chunk offset/size arithmetic overflowed.
    ChunkSizeOverflow,
    /// A text chunk's internal length exceeds its payload.
    TruncatedTextChunk,
    /// A decompressed `TXTz` payload is entirely zero.
    NullTextBlock,
    /// The BZZ decoder signalled an error.
    BzzFailure,
    /// Reading the source or writing the output failed.
    Io,
    /// Containers are nested deeper than the configured limit.
    NestingTooDeep,
    /// Bytes follow the root chunk (strict mode only).
    TrailingData,
    /// A text operation was given a chunk that is not `TXTa`/`TXTz`.
    NotTextChunk,
    /// A textual chunk identifier is not 1-4 ASCII bytes.
    InvalidChunkId,
}

/// The main error type for OxiDjVu operations.
#[derive(Debug, Error)]
pub enum DjvuError {
    /// I/O error from the source stream or the output writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or wrong file signature.
    #[error("Bad signature: expected \"AT&T\", found {found:02x?}")]
    BadSignature {
        /// The leading bytes actually found (at most four).
        found: Vec<u8>,
    },

    /// A chunk header or payload does not fit in its parent.
    #[error("Truncated chunk at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedChunk {
        /// Offset of the chunk header.
        offset: u64,
        /// Bytes required by the header or declared size.
        needed: u64,
        /// Bytes left before the parent bound.
        available: u64,
    },

    /// The root chunk is not an acceptable `FORM`.
    #[error("Bad root chunk: {found}")]
    BadRootChunk {
        /// Description of what was found instead.
        found: String,
    },

    /// Declared size arithmetic overflowed the address space.
    ///
    /// Only occurs where `usize` is 32 bits wide.
    #[error("Chunk size overflow at offset {offset}: declared size {size}")]
    ChunkSizeOverflow {
        /// Offset of the chunk header.
        offset: u64,
        /// Declared payload size.
        size: u32,
    },

    /// A text chunk declares more text than its payload holds.
    #[error("Truncated text chunk at offset {offset}: declared {declared} bytes, {available} available")]
    TruncatedTextChunk {
        /// Payload offset of the text chunk.
        offset: u64,
        /// Declared text length plus the 3-byte prefix.
        declared: usize,
        /// Bytes in the (decompressed) payload.
        available: usize,
    },

    /// A `TXTz` chunk decompressed to nothing but zero bytes.
    #[error("Null text block at offset {offset} ({len} zero bytes)")]
    NullTextBlock {
        /// Payload offset of the text chunk.
        offset: u64,
        /// Length of the decompressed buffer.
        len: usize,
    },

    /// The BZZ decoder failed.
    #[error("BZZ decoder failure: {message}")]
    BzzFailure {
        /// Decoder-provided description.
        message: String,
    },

    /// Containers nest deeper than allowed.
    #[error("Chunk nesting deeper than {max_depth} at offset {offset}")]
    NestingTooDeep {
        /// Offset of the container that exceeded the limit.
        offset: u64,
        /// Configured maximum depth.
        max_depth: usize,
    },

    /// Bytes follow the root chunk.
    #[error("Trailing data: {len} bytes after root chunk at offset {offset}")]
    TrailingData {
        /// Offset of the first trailing byte.
        offset: u64,
        /// Number of trailing bytes.
        len: usize,
    },

    /// Text operation on a non-text chunk.
    #[error("Not a text chunk: {id}")]
    NotTextChunk {
        /// Identifier of the offending chunk.
        id: ChunkId,
    },

    /// Textual chunk identifier is malformed.
    #[error("Invalid chunk id: {id:?}")]
    InvalidChunkId {
        /// The rejected identifier text.
        id: String,
    },
}

/// Result type alias for OxiDjVu operations.
pub type Result<T> = std::result::Result<T, DjvuError>;

impl DjvuError {
    /// Create a bad signature error from the leading bytes of the input.
    pub fn bad_signature(found: &[u8]) -> Self {
        Self::BadSignature {
            found: found[..found.len().min(4)].to_vec(),
        }
    }

    /// Create a truncated chunk error.
    pub fn truncated_chunk(offset: usize, needed: u64, available: usize) -> Self {
        Self::TruncatedChunk {
            offset: offset as u64,
            needed,
            available: available as u64,
        }
    }

    /// Create a bad root chunk error.
    pub fn bad_root(found: impl Into<String>) -> Self {
        Self::BadRootChunk {
            found: found.into(),
        }
    }

    /// Create a chunk size overflow error.
    pub fn size_overflow(offset: usize, size: u32) -> Self {
        Self::ChunkSizeOverflow {
            offset: offset as u64,
            size,
        }
    }

    /// Create a truncated text chunk error.
    pub fn truncated_text(offset: usize, declared: usize, available: usize) -> Self {
        Self::TruncatedTextChunk {
            offset: offset as u64,
            declared,
            available,
        }
    }

    /// Create a null text block error.
    pub fn null_text_block(offset: usize, len: usize) -> Self {
        Self::NullTextBlock {
            offset: offset as u64,
            len,
        }
    }

    /// Create a BZZ failure error.
    pub fn bzz_failure(message: impl Into<String>) -> Self {
        Self::BzzFailure {
            message: message.into(),
        }
    }

    /// Create a nesting depth error.
    pub fn nesting_too_deep(offset: usize, max_depth: usize) -> Self {
        Self::NestingTooDeep {
            offset: offset as u64,
            max_depth,
        }
    }

    /// Create a trailing data error.
    pub fn trailing_data(offset: usize, len: usize) -> Self {
        Self::TrailingData {
            offset: offset as u64,
            len,
        }
    }

    /// Create a not-a-text-chunk error.
    pub fn not_text_chunk(id: ChunkId) -> Self {
        Self::NotTextChunk { id }
    }

    /// Create an invalid chunk id error.
    pub fn invalid_chunk_id(id: impl Into<String>) -> Self {
        Self::InvalidChunkId { id: id.into() }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::BadSignature { .. } => ErrorKind::BadSignature,
            Self::TruncatedChunk { .. } => ErrorKind::TruncatedChunk,
            Self::BadRootChunk { .. } => ErrorKind::BadRootChunk,
            Self::ChunkSizeOverflow { .. } => ErrorKind::ChunkSizeOverflow,
            Self::TruncatedTextChunk { .. } => ErrorKind::TruncatedTextChunk,
            Self::NullTextBlock { .. } => ErrorKind::NullTextBlock,
            Self::BzzFailure { .. } => ErrorKind::BzzFailure,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            Self::TrailingData { .. } => ErrorKind::TrailingData,
            Self::NotTextChunk { .. } => ErrorKind::NotTextChunk,
            Self::InvalidChunkId { .. } => ErrorKind::InvalidChunkId,
        }
    }
}
