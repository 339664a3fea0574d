//! Core traits.
//!
//! The BZZ codec used by `TXTz` chunks is not implemented here; it is an
//! injected capability. Anything that turns a compressed buffer into a
//! decompressed buffer can be used, including a plain closure.

use crate::error::{DjvuError, Result};

/// A BZZ block decompressor.
///
/// Implementations must be stateless between calls: every call decodes one
/// complete, independent compressed buffer. An implementation that reuses
/// scratch space across calls must fully reset it.
///
/// # Example
///
/// ```rust
/// use oxidjvu_core::{BzzDecoder, Result};
///
/// let identity = |data: &[u8]| -> Result<Vec<u8>> { Ok(data.to_vec()) };
/// assert_eq!(identity.decompress(b"abc").unwrap(), b"abc");
/// ```
pub trait BzzDecoder {
    /// Decompress one BZZ stream.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

impl<F> BzzDecoder for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>>,
{
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self(input)
    }
}

/// A decoder that refuses every input.
///
/// Useful for documents that are expected to carry only `TXTa` chunks: any
/// `TXTz` chunk then fails with [`DjvuError::BzzFailure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBzz;

impl BzzDecoder for NoBzz {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Err(DjvuError::bzz_failure(format!(
            "no BZZ decoder configured ({} compressed bytes)",
            input.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn run<B: BzzDecoder + ?Sized>(bzz: &B, input: &[u8]) -> Result<Vec<u8>> {
        bzz.decompress(input)
    }

    #[test]
    fn test_closure_decoder() {
        let upper = |data: &[u8]| -> Result<Vec<u8>> { Ok(data.to_ascii_uppercase()) };
        assert_eq!(run(&upper, b"abc").unwrap(), b"ABC");
    }

    #[test]
    fn test_dyn_decoder() {
        let bzz: &dyn BzzDecoder = &NoBzz;
        let err = run(bzz, &[1, 2, 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BzzFailure);
        assert!(err.to_string().contains("3 compressed bytes"));
    }
}
