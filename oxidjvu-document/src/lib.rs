//! # OxiDjVu Document
//!
//! High-level access to DjVu files: open a document once, then dump its
//! chunk structure or extract its hidden OCR text.
//!
//! ## Example
//!
//! ```rust
//! use oxidjvu_document::{Document, NoBzz};
//!
//! let bytes: &[u8] = b"AT&TFORM\x00\x00\x00\x14DJVUTXTa\x00\x00\x00\x08\x00\x00\x05Hello";
//! let doc = Document::open(bytes).unwrap();
//!
//! let mut dump = Vec::new();
//! doc.dump_structure(&mut dump, None).unwrap();
//! assert_eq!(dump, b"+FORM:DJVU [20]\n  -TXTa [8]\n");
//!
//! let mut text = Vec::new();
//! doc.extract_text(&mut text, &NoBzz).unwrap();
//! assert_eq!(text, b"Hello\x1f");
//! ```
//!
//! ## Features
//!
//! - `serde` (default): [`Summary`] derives `Serialize`
//! - `mmap`: [`Document::open_path_mmap`] maps files instead of reading them
//! - `async-io`: [`Document::open_async`] reads from a tokio `AsyncRead`
//!
//! The whole file is always held in memory (or mapped). Chunk sizes and the
//! pad-byte rule need random access, and DjVu files are small enough that a
//! streaming reader would gain nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod source;
pub mod summary;

pub use document::Document;
pub use source::Source;
pub use summary::{ChunkSummary, Summary};

// Re-exports for convenience
pub use oxidjvu_core::{BzzDecoder, ChunkId, DjvuError, ErrorKind, NoBzz, PAGE_SEPARATOR, Result};
pub use oxidjvu_iff::{Chunk, ChunkKind, ParseOptions};
pub use oxidjvu_text::{CommandBzz, split_pages};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::document::Document;
    pub use crate::summary::{ChunkSummary, Summary};
    pub use oxidjvu_core::prelude::*;
    pub use oxidjvu_iff::{Chunk, ChunkKind, ParseOptions};
    pub use oxidjvu_text::{CommandBzz, split_pages};
}
