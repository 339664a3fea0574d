//! Pages command implementation.

use crate::utils::{LoadOptions, load_document, make_decoder};
use log::debug;
use std::path::Path;

pub fn cmd_pages(
    file: &Path,
    bzz_command: Option<&str>,
    load: LoadOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(file, load)?;
    let bzz = make_decoder(bzz_command)?;

    for (index, page) in doc.pages().enumerate() {
        println!("--- Page {} ---", index + 1);

        let mut found = false;
        for (_, chunk) in page.walk().filter(|(_, c)| c.is_text()) {
            let text = doc.decode_text(chunk, &bzz)?;
            debug!("page {}: {} {} bytes", index + 1, chunk.id(), text.len());
            println!("{}", String::from_utf8_lossy(&text));
            found = true;
        }
        if !found {
            println!("(no text layer)");
        }
    }

    Ok(())
}
