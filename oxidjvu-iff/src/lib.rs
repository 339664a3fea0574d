//! # OxiDjVu IFF
//!
//! Reading and writing of the IFF-style chunk container used by DjVu files.
//!
//! A DjVu file is the 4-byte signature `AT&T` followed by a single `FORM`
//! chunk. Every chunk is a 4-byte type, a 32-bit big-endian payload size and
//! the payload itself. Container chunks (`FORM`, `LIST`, `PROP`, `CAT `) start
//! their payload with a 4-byte subtype followed by child chunks. A chunk with
//! an odd payload size is followed by one pad byte before its next sibling.
//!
//! - [`parser`]: [`ChunkParser`] turns a byte buffer into a [`Chunk`] tree
//! - [`chunk`]: the immutable tree model and its pre-order walker
//! - [`writer`]: [`ChunkWriter`] builds containers and re-serializes trees
//! - [`dump`]: the line-oriented structure dump
//! - [`config`]: [`ParseOptions`]
//!
//! ## Example
//!
//! ```rust
//! use oxidjvu_core::ChunkId;
//! use oxidjvu_iff::{ChunkWriter, parse};
//!
//! let mut writer = ChunkWriter::new();
//! writer.open_container(ChunkId::FORM, ChunkId::DJVU).unwrap();
//! writer.write_chunk(ChunkId::TXTA, b"\x00\x00\x02Hi").unwrap();
//! writer.close_container().unwrap();
//! let bytes = writer.finish().unwrap();
//!
//! let root = parse(&bytes).unwrap();
//! assert_eq!(root.subtype(), Some(ChunkId::DJVU));
//! assert_eq!(root.children().len(), 1);
//! ```
//!
//! Parsing works on an in-memory buffer. DjVu files are small enough that a
//! streaming parser buys nothing, and the pad-byte rule is simpler to honour
//! with random access.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod chunk;
pub mod config;
pub mod dump;
pub mod parser;
pub mod writer;

pub use chunk::{Chunk, ChunkKind, Walk};
pub use config::ParseOptions;
pub use dump::{format_line, write_tree};
pub use parser::{ChunkParser, parse};
pub use writer::{ChunkWriter, serialize};

/// Size of a chunk header (type + size).
pub const HEADER_SIZE: usize = 8;

/// Size of a container subtype.
pub const SUBTYPE_SIZE: usize = 4;
