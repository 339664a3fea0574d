//! Backing storage of a document.

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// The bytes a [`Document`](crate::Document) was parsed from.
///
/// Either an owned buffer or, with the `mmap` feature, a read-only memory
/// map. Both are immutable for the lifetime of the document.
#[derive(Debug)]
pub enum Source {
    /// Bytes read into memory.
    Owned(Vec<u8>),
    /// A read-only mapping of a file.
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
}

impl Source {
    /// The source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Source::Owned(bytes) => bytes,
            #[cfg(feature = "mmap")]
            Source::Mapped(map) => map,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the source is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the bytes come from a memory map.
    pub fn is_mapped(&self) -> bool {
        !matches!(self, Source::Owned(_))
    }

    /// Take the bytes, copying them out of a memory map if needed.
    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Source::Owned(bytes) => bytes,
            #[cfg(feature = "mmap")]
            Source::Mapped(map) => map.to_vec(),
        }
    }
}

impl AsRef<[u8]> for Source {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Owned(bytes)
    }
}
