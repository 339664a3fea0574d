//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use oxidjvu_document::{CommandBzz, Document, ParseOptions, Result};
use std::path::Path;

/// How input files are opened.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub strict: bool,
    pub mmap: bool,
}

impl LoadOptions {
    fn parse_options(self) -> ParseOptions {
        ParseOptions::new().with_strict(self.strict)
    }
}

/// Open and parse `path`.
pub fn load_document(path: &Path, options: LoadOptions) -> Result<Document> {
    let doc = if options.mmap {
        Document::open_path_mmap(path, options.parse_options())?
    } else {
        Document::open_path(path, options.parse_options())?
    };
    debug!(
        "{}: {} bytes, root {}, {} page(s)",
        path.display(),
        doc.source().len(),
        doc.root().full_id(),
        doc.page_count()
    );
    Ok(doc)
}

/// BZZ decoder for `--bzz-command`, DjVuLibre's `bzz` when not given.
pub fn make_decoder(command: Option<&str>) -> Result<CommandBzz> {
    let bzz = match command {
        Some(line) => CommandBzz::from_command_line(line)?,
        None => CommandBzz::default(),
    };
    debug!("BZZ decoder: {:?} {:?}", bzz.program(), bzz.args());
    Ok(bzz)
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}
