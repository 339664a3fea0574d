//! Text extraction over multi-page bundles.

use oxidjvu_core::{ChunkId, ErrorKind, NoBzz, Result};
use oxidjvu_iff::{ChunkWriter, parse};
use oxidjvu_text::{TextExtractor, split_pages};

/// Reverses its input; stands in for a real codec in these tests.
fn reversing_bzz(data: &[u8]) -> Result<Vec<u8>> {
    Ok(data.iter().rev().copied().collect())
}

fn txt_block(text: &str) -> Vec<u8> {
    let mut block = (text.len() as u32).to_be_bytes()[1..].to_vec();
    block.extend_from_slice(text.as_bytes());
    block
}

fn bundle(pages: &[(&str, bool)]) -> Vec<u8> {
    let mut writer = ChunkWriter::new();
    writer.open_container(ChunkId::FORM, ChunkId::DJVM).unwrap();
    writer.write_chunk(ChunkId::DIRM, b"\x81\x00").unwrap();
    for (text, compressed) in pages {
        writer.open_container(ChunkId::FORM, ChunkId::DJVU).unwrap();
        writer.write_chunk(ChunkId::INFO, &[0u8; 10]).unwrap();
        if *compressed {
            let mut packed = txt_block(text);
            packed.reverse();
            writer.write_chunk(ChunkId::TXTZ, &packed).unwrap();
        } else {
            writer.write_chunk(ChunkId::TXTA, &txt_block(text)).unwrap();
        }
        writer.close_container().unwrap();
    }
    writer.close_container().unwrap();
    writer.finish().unwrap()
}

#[test]
fn test_pages_recovered_in_order() {
    let pages = [
        ("Chapter one", false),
        ("odd", true),
        ("", false),
        ("Schluß", true),
    ];
    let data = bundle(&pages);
    let root = parse(&data).unwrap();

    let mut out = Vec::new();
    let written = TextExtractor::new(&reversing_bzz)
        .extract(&root, &data, &mut out)
        .unwrap();
    assert_eq!(written, out.len() as u64);

    let split = split_pages(&out);
    assert_eq!(split.len(), pages.len());
    for (page, (text, _)) in split.iter().zip(pages) {
        assert_eq!(*page, text.as_bytes());
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let data = bundle(&[("a", false), ("bc", true)]);
    let root = parse(&data).unwrap();
    let bzz = reversing_bzz;
    let extractor = TextExtractor::new(&bzz);

    let mut first = Vec::new();
    let mut second = Vec::new();
    extractor.extract(&root, &data, &mut first).unwrap();
    extractor.extract(&root, &data, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_decoder_fails_on_first_compressed_page() {
    let data = bundle(&[("plain", false), ("packed", true)]);
    let root = parse(&data).unwrap();

    let mut out = Vec::new();
    let err = TextExtractor::new(&NoBzz)
        .extract(&root, &data, &mut out)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BzzFailure);
    assert_eq!(out, b"plain\x1f");
}

#[test]
fn test_decode_single_chunk() {
    let data = bundle(&[("first", false), ("second", true)]);
    let root = parse(&data).unwrap();
    let bzz = reversing_bzz;
    let extractor = TextExtractor::new(&bzz);

    let texts: Vec<Vec<u8>> = root
        .walk()
        .filter(|(_, c)| c.is_text())
        .map(|(_, c)| extractor.decode(c, &data).unwrap().into_owned())
        .collect();
    assert_eq!(texts, [b"first".to_vec(), b"second".to_vec()]);
}
