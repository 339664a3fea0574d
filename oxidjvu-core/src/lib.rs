//! # OxiDjVu Core
//!
//! Core components for the OxiDjVu document library.
//!
//! This crate provides the building blocks shared by every layer:
//!
//! - [`chunk_id`]: Four-character chunk identifiers packed into a `u32`
//! - [`traits`]: The [`BzzDecoder`] capability used for `TXTz` chunks
//! - [`error`]: Error types and [`ErrorKind`] classification
//!
//! ## Architecture
//!
//! OxiDjVu is designed as a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Unified API                                         │
//! │     Document façade, CLI                                │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Content                                             │
//! │     TXTa / TXTz text extraction, page splitting         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Container                                           │
//! │     IFF chunk tree parsing and writing                  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     ChunkId, DjvuError, BzzDecoder                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxidjvu_core::ChunkId;
//!
//! let id: ChunkId = "TXTz".parse().unwrap();
//! assert_eq!(id, ChunkId::TXTZ);
//! assert!(id.is_text());
//! assert!(ChunkId::FORM.is_container());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod chunk_id;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use chunk_id::ChunkId;
pub use error::{DjvuError, ErrorKind, Result};
pub use traits::{BzzDecoder, NoBzz};

/// DjVu file signature ("AT&T").
pub const DJVU_MAGIC: [u8; 4] = *b"AT&T";

/// Separator written after the text of every text chunk (ASCII Unit Separator).
pub const PAGE_SEPARATOR: u8 = 0x1F;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::chunk_id::ChunkId;
    pub use crate::error::{DjvuError, ErrorKind, Result};
    pub use crate::traits::{BzzDecoder, NoBzz};
    pub use crate::{DJVU_MAGIC, PAGE_SEPARATOR};
}
