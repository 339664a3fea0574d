//! Info command implementation.

use crate::utils::{LoadOptions, load_document};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct InfoOutput {
    file: String,
    size: usize,
    form: String,
    pages: usize,
    text_chunks: usize,
    compressed_text_chunks: usize,
    chunks: usize,
    max_depth: usize,
    mapped: bool,
}

pub fn cmd_info(file: &Path, json: bool, load: LoadOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(file, load)?;
    let summary = doc.summary_to_depth(Some(0));

    let info = InfoOutput {
        file: file.display().to_string(),
        size: summary.file_size,
        form: summary.form,
        pages: summary.pages,
        text_chunks: summary.text_chunks,
        compressed_text_chunks: summary.compressed_text_chunks,
        chunks: doc.chunks().count(),
        max_depth: doc.chunks().map(|(depth, _)| depth).max().unwrap_or(0),
        mapped: doc.is_mapped(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Document Information");
    println!("====================");
    println!("File: {}", info.file);
    println!("Size: {} bytes", info.size);
    println!("Form: {}", info.form);
    println!("Pages: {}", info.pages);
    println!("Chunks: {} (nesting depth {})", info.chunks, info.max_depth);
    println!();
    println!("Text layer:");
    println!("  TXTa chunks: {}", info.text_chunks);
    println!("  TXTz chunks: {}", info.compressed_text_chunks);
    if info.text_chunks + info.compressed_text_chunks == 0 {
        println!("  (no OCR text)");
    }

    Ok(())
}
