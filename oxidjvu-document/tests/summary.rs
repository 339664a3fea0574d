//! Structure summaries and their JSON form.

use oxidjvu_document::{ChunkId, Document, Summary};
use oxidjvu_iff::ChunkWriter;

fn bundle() -> Vec<u8> {
    let mut writer = ChunkWriter::new();
    writer.open_container(ChunkId::FORM, ChunkId::DJVM).unwrap();
    writer.write_chunk(ChunkId::DIRM, b"\x81\x00\x02").unwrap();
    writer.open_container(ChunkId::FORM, ChunkId::DJVU).unwrap();
    writer.write_chunk(ChunkId::TXTA, b"\x00\x00\x01a").unwrap();
    writer.close_container().unwrap();
    writer.open_container(ChunkId::FORM, ChunkId::DJVU).unwrap();
    writer.write_chunk(ChunkId::TXTZ, b"packed").unwrap();
    writer.close_container().unwrap();
    writer.close_container().unwrap();
    writer.finish().unwrap()
}

#[test]
fn test_summary_counts() {
    let bytes = bundle();
    let doc = Document::from_bytes(bytes.clone()).unwrap();
    let summary: Summary = doc.summary();

    assert_eq!(summary.form, "FORM:DJVM");
    assert_eq!(summary.file_size, bytes.len());
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.text_chunks, 1);
    assert_eq!(summary.compressed_text_chunks, 1);

    let root = &summary.root;
    assert_eq!(root.id, "FORM");
    assert_eq!(root.subtype.as_deref(), Some("DJVM"));
    assert_eq!(root.offset, 12);
    assert_eq!(root.children.len(), 3);
    assert_eq!(root.children[2].children[0].id, "TXTz");
}

#[test]
fn test_summary_depth_limit() {
    let doc = Document::from_bytes(bundle()).unwrap();
    let summary = doc.summary_to_depth(Some(1));
    assert_eq!(summary.root.children.len(), 3);
    assert!(summary.root.children.iter().all(|c| c.children.is_empty()));
    // Counters always cover the whole tree.
    assert_eq!(summary.text_chunks, 1);

    assert!(doc.summary_to_depth(Some(0)).root.children.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_summary_json() {
    let doc = Document::from_bytes(bundle()).unwrap();
    let json = serde_json::to_value(doc.summary()).unwrap();

    assert_eq!(json["form"], "FORM:DJVM");
    assert_eq!(json["pages"], 2);
    assert_eq!(json["root"]["subtype"], "DJVM");

    let dirm = &json["root"]["children"][0];
    assert_eq!(dirm["id"], "DIRM");
    assert_eq!(dirm["size"], 3);
    // Leaves omit the subtype and children keys.
    assert!(dirm.get("subtype").is_none());
    assert!(dirm.get("children").is_none());
}
