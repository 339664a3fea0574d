//! Dump command implementation.

use crate::utils::{LoadOptions, load_document};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn cmd_dump(
    file: &Path,
    depth: Option<usize>,
    json: bool,
    load: LoadOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(file, load)?;

    if json {
        let summary = doc.summary_to_depth(depth);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    doc.dump_structure(&mut out, depth)?;
    out.flush()?;
    Ok(())
}
