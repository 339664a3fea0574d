//! Text command implementation.

use crate::utils::{LoadOptions, create_progress_bar, load_document, make_decoder};
use log::{debug, error, info};
use oxidjvu_document::{CommandBzz, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn cmd_text(
    files: &[PathBuf],
    output: Option<&Path>,
    bzz_command: Option<&str>,
    progress: bool,
    load: LoadOptions,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let bzz = make_decoder(bzz_command)?;

    if let ([file], None) = (files, output) {
        let doc = load_document(file, load)?;
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let written = doc.extract_text(&mut out, &bzz)?;
        out.flush()?;
        debug!("{}: {} bytes of text", file.display(), written);
        return Ok(());
    }

    let out_dir = output.unwrap_or(Path::new("."));
    let targets = output_paths(files, out_dir)?;
    fs::create_dir_all(out_dir)?;

    let pb = create_progress_bar(files.len() as u64, progress);
    let failed = files
        .par_iter()
        .zip(&targets)
        .filter(|(file, target)| {
            let result = extract_to_file(file, target, &bzz, load);
            pb.inc(1);
            match result {
                Ok(()) => {
                    info!("{} -> {}", file.display(), target.display());
                    false
                }
                Err(e) => {
                    error!("{}: {}", file.display(), e);
                    true
                }
            }
        })
        .count();
    pb.finish_and_clear();

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, files.len()).into());
    }
    Ok(())
}

/// `<out_dir>/<stem>.txt` for each input, in input order.
///
/// Fails if two inputs share an output name.
fn output_paths(files: &[PathBuf], out_dir: &Path) -> std::result::Result<Vec<PathBuf>, String> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(files.len());
    for file in files {
        let mut name = file
            .file_stem()
            .unwrap_or_else(|| OsStr::new("document"))
            .to_os_string();
        name.push(".txt");
        let target = out_dir.join(name);
        if let Some(previous) = seen.insert(target.clone(), file) {
            return Err(format!(
                "{} and {} would both write {}",
                previous.display(),
                file.display(),
                target.display()
            ));
        }
        targets.push(target);
    }
    Ok(targets)
}

/// Extract the text of `file` into `target`.
///
/// Nothing is written when extraction fails.
fn extract_to_file(
    file: &Path,
    target: &Path,
    bzz: &CommandBzz,
    load: LoadOptions,
) -> Result<()> {
    let doc = load_document(file, load)?;
    let mut text = Vec::new();
    doc.extract_text(&mut text, bzz)?;
    fs::write(target, &text)?;
    Ok(())
}
