//! Line-oriented dump of a chunk tree.
//!
//! One line per chunk, in pre-order:
//!
//! ```text
//! +FORM:DJVM [1234]
//!   -DIRM [23]
//!   +FORM:DJVU [600]
//!     -INFO [10]
//!     -TXTz [87]
//! ```
//!
//! Two spaces of indentation per level, `+` for containers, `-` for leaves,
//! and the declared payload size in brackets. Identifiers are printed
//! verbatim (so `CAT ` keeps its space) with non-printable bytes as `?`.

use crate::chunk::Chunk;
use oxidjvu_core::error::Result;
use std::io::Write;

/// Format the dump line for `chunk` at `depth`, without the newline.
pub fn format_line(depth: usize, chunk: &Chunk) -> String {
    let marker = if chunk.is_container() { '+' } else { '-' };
    format!(
        "{:indent$}{}{} [{}]",
        "",
        marker,
        chunk.full_id(),
        chunk.size(),
        indent = depth * 2
    )
}

/// Write the dump of `root` to `writer`.
///
/// Chunks deeper than `max_depth` are skipped; `None` dumps the whole tree.
/// Returns the number of lines written.
pub fn write_tree<W: Write + ?Sized>(
    root: &Chunk,
    writer: &mut W,
    max_depth: Option<usize>,
) -> Result<usize> {
    let mut lines = 0;
    for (depth, chunk) in root.walk() {
        if max_depth.is_some_and(|max| depth > max) {
            continue;
        }
        writeln!(writer, "{}", format_line(depth, chunk))?;
        lines += 1;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::writer::ChunkWriter;
    use oxidjvu_core::ChunkId;

    fn sample() -> Vec<u8> {
        let mut writer = ChunkWriter::new();
        writer.open_container(ChunkId::FORM, ChunkId::DJVM).unwrap();
        writer.open_container(ChunkId::FORM, ChunkId::DJVU).unwrap();
        writer.write_chunk(ChunkId::INFO, &[0u8; 10]).unwrap();
        writer.write_chunk(ChunkId::TXTA, b"\x00\x00\x02Hi").unwrap();
        writer.close_container().unwrap();
        writer.open_container(ChunkId::CAT, ChunkId::from_bytes(*b"ABC ")).unwrap();
        writer.close_container().unwrap();
        writer.close_container().unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn test_full_dump() {
        let data = sample();
        let root = parse(&data).unwrap();
        let mut out = Vec::new();
        let lines = write_tree(&root, &mut out, None).unwrap();

        assert_eq!(lines, 5);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "+FORM:DJVM [60]\n\
             \x20\x20+FORM:DJVU [35]\n\
             \x20\x20\x20\x20-INFO [10]\n\
             \x20\x20\x20\x20-TXTa [5]\n\
             \x20\x20+CAT :ABC  [4]\n"
        );
    }

    #[test]
    fn test_depth_limit() {
        let data = sample();
        let root = parse(&data).unwrap();

        let mut out = Vec::new();
        assert_eq!(write_tree(&root, &mut out, Some(0)).unwrap(), 1);
        assert_eq!(out, b"+FORM:DJVM [60]\n");

        let mut out = Vec::new();
        assert_eq!(write_tree(&root, &mut out, Some(1)).unwrap(), 3);
    }

    #[test]
    fn test_deterministic() {
        let data = sample();
        let root = parse(&data).unwrap();
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_tree(&root, &mut first, None).unwrap();
        write_tree(&root, &mut second, None).unwrap();
        assert_eq!(first, second);
    }
}
