//! Four-character chunk identifiers.
//!
//! Every IFF chunk starts with a 4-byte ASCII type such as `FORM` or `TXTz`.
//! [`ChunkId`] packs those bytes big-endian into a `u32` so that dispatch on
//! chunk types is an integer comparison. Trailing spaces are significant:
//! `CAT ` is a different identifier from `CAT?`.

use crate::error::{DjvuError, Result};
use std::fmt;
use std::str::FromStr;

/// A four-character chunk identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(u32);

impl ChunkId {
    /// Generic container chunk.
    pub const FORM: Self = Self::from_bytes(*b"FORM");
    /// List container chunk.
    pub const LIST: Self = Self::from_bytes(*b"LIST");
    /// Property container chunk.
    pub const PROP: Self = Self::from_bytes(*b"PROP");
    /// Concatenation container chunk.
    pub const CAT: Self = Self::from_bytes(*b"CAT ");

    /// Uncompressed OCR text.
    pub const TXTA: Self = Self::from_bytes(*b"TXTa");
    /// BZZ-compressed OCR text.
    pub const TXTZ: Self = Self::from_bytes(*b"TXTz");

    /// Single-page document form.
    pub const DJVU: Self = Self::from_bytes(*b"DJVU");
    /// Multi-page document form.
    pub const DJVM: Self = Self::from_bytes(*b"DJVM");
    /// Shared include form.
    pub const DJVI: Self = Self::from_bytes(*b"DJVI");
    /// Thumbnail form.
    pub const THUM: Self = Self::from_bytes(*b"THUM");

    /// Page information chunk.
    pub const INFO: Self = Self::from_bytes(*b"INFO");
    /// Multi-page directory chunk.
    pub const DIRM: Self = Self::from_bytes(*b"DIRM");
    /// Reference to an external file by name.
    pub const INCL: Self = Self::from_bytes(*b"INCL");

    /// Build an identifier from its four bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Build an identifier from its packed big-endian value.
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// The four bytes of the identifier, in file order.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The packed big-endian value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Whether chunks of this type carry a subtype and children.
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::FORM | Self::LIST | Self::PROP | Self::CAT
        )
    }

    /// Whether chunks of this type carry OCR text.
    pub const fn is_text(self) -> bool {
        matches!(self, Self::TXTA | Self::TXTZ)
    }

    /// Whether every byte is printable ASCII (space included).
    pub fn is_printable(self) -> bool {
        self.to_bytes().iter().all(|b| (0x20..0x7F).contains(b))
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.to_bytes() {
            let c = if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                '?'
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkId(\"{}\")", self)
    }
}

impl From<[u8; 4]> for ChunkId {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<ChunkId> for [u8; 4] {
    fn from(id: ChunkId) -> Self {
        id.to_bytes()
    }
}

impl FromStr for ChunkId {
    type Err = DjvuError;

    /// Parse a textual identifier. Identifiers shorter than four bytes are
    /// padded with spaces, so `"CAT"` parses as `CAT `.
    fn from_str(s: &str) -> Result<Self> {
        let raw = s.as_bytes();
        if raw.is_empty() || raw.len() > 4 || !s.is_ascii() {
            return Err(DjvuError::invalid_chunk_id(s));
        }
        let mut bytes = [b' '; 4];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_is_big_endian() {
        assert_eq!(ChunkId::FORM.as_u32(), 0x464F_524D);
        assert_eq!(ChunkId::from_u32(0x5458_5461), ChunkId::TXTA);
        assert_eq!(ChunkId::TXTZ.to_bytes(), *b"TXTz");
    }

    #[test]
    fn test_classification() {
        assert!(ChunkId::FORM.is_container());
        assert!(ChunkId::LIST.is_container());
        assert!(ChunkId::PROP.is_container());
        assert!(ChunkId::CAT.is_container());
        assert!(!ChunkId::from_bytes(*b"CAT?").is_container());
        assert!(!ChunkId::INFO.is_container());

        assert!(ChunkId::TXTA.is_text());
        assert!(ChunkId::TXTZ.is_text());
        assert!(!ChunkId::from_bytes(*b"TXTA").is_text());
    }

    #[test]
    fn test_display_keeps_trailing_space() {
        assert_eq!(ChunkId::CAT.to_string(), "CAT ");
        assert_eq!(ChunkId::from_bytes([b'A', 0, 0xFF, b'Z']).to_string(), "A??Z");
        assert_eq!(format!("{:?}", ChunkId::DJVU), "ChunkId(\"DJVU\")");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("FORM".parse::<ChunkId>().unwrap(), ChunkId::FORM);
        assert_eq!("CAT".parse::<ChunkId>().unwrap(), ChunkId::CAT);
        assert!("".parse::<ChunkId>().is_err());
        assert!("FORMS".parse::<ChunkId>().is_err());
        assert!("FÖR".parse::<ChunkId>().is_err());
    }

    #[test]
    fn test_printable() {
        assert!(ChunkId::CAT.is_printable());
        assert!(!ChunkId::from_bytes([0, 0, 0, 0]).is_printable());
    }
}
