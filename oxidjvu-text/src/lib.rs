//! # OxiDjVu Text
//!
//! Extraction of the hidden OCR text layer stored in `TXTa` and `TXTz`
//! chunks.
//!
//! Both chunk types carry the same block layout:
//!
//! ```text
//! ┌──────────────┬───────────────────┬─────────────────────┐
//! │ L (u24, BE)  │ text (L bytes)    │ zones (ignored)     │
//! └──────────────┴───────────────────┴─────────────────────┘
//! ```
//!
//! `TXTa` stores the block as is; `TXTz` stores it BZZ-compressed. The BZZ
//! codec is supplied by the caller through [`BzzDecoder`](oxidjvu_core::BzzDecoder).
//!
//! Every extracted block is followed by [`PAGE_SEPARATOR`](oxidjvu_core::PAGE_SEPARATOR)
//! (`0x1F`). Pages carry at most one text chunk, so the separators delimit
//! pages and [`split_pages`] recovers them.
//!
//! ## Example
//!
//! ```rust
//! use oxidjvu_core::{ChunkId, NoBzz};
//! use oxidjvu_iff::{ChunkWriter, parse};
//! use oxidjvu_text::{TextExtractor, split_pages};
//!
//! let mut writer = ChunkWriter::new();
//! writer.open_container(ChunkId::FORM, ChunkId::DJVU).unwrap();
//! writer.write_chunk(ChunkId::TXTA, b"\x00\x00\x05Hello").unwrap();
//! writer.close_container().unwrap();
//! let bytes = writer.finish().unwrap();
//!
//! let root = parse(&bytes).unwrap();
//! let mut out = Vec::new();
//! TextExtractor::new(&NoBzz).extract(&root, &bytes, &mut out).unwrap();
//! assert_eq!(out, b"Hello\x1f");
//! assert_eq!(split_pages(&out), vec![b"Hello".as_slice()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod external;
pub mod extractor;
pub mod pages;

pub use external::CommandBzz;
pub use extractor::{TextExtractor, decode_text, emit_text};
pub use pages::split_pages;

/// Size of the big-endian length prefix of a text block.
pub const LENGTH_PREFIX_SIZE: usize = 3;
