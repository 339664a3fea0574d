//! OxiDjVu CLI - structure dumps and OCR text extraction for DjVu files.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_dump, cmd_info, cmd_pages, cmd_text};
use std::path::PathBuf;
use utils::LoadOptions;

#[derive(Parser)]
#[command(name = "oxidjvu")]
#[command(author, version, about = "DjVu structure dumps and OCR text extraction")]
#[command(long_about = "
OxiDjVu reads DjVu documents and extracts their hidden OCR text layer.

Compressed text (TXTz) is decoded with an external BZZ program, by default
DjVuLibre's `bzz -d - -`.

Examples:
  oxidjvu dump book.djvu
  oxidjvu dump book.djvu --depth 1 --json
  oxidjvu text book.djvu > book.txt
  oxidjvu text *.djvu -o texts/
  oxidjvu pages book.djvu
  oxidjvu info book.djvu

Set RUST_LOG=debug for diagnostic output.
")]
struct Cli {
    /// Reject unexpected root forms and bytes after the root chunk
    #[arg(long, global = true)]
    strict: bool,

    /// Memory-map input files instead of reading them
    #[arg(long, global = true)]
    mmap: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the chunk tree
    #[command(alias = "d")]
    Dump {
        /// DjVu file
        file: PathBuf,

        /// Deepest level to print (root is 0)
        #[arg(short, long)]
        depth: Option<usize>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Extract the OCR text layer
    #[command(alias = "t")]
    Text {
        /// DjVu files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory for `<name>.txt` files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// BZZ decoder command line for compressed text
        #[arg(long, value_name = "CMD")]
        bzz_command: Option<String>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Print the text of each page
    #[command(alias = "p")]
    Pages {
        /// DjVu file
        file: PathBuf,

        /// BZZ decoder command line for compressed text
        #[arg(long, value_name = "CMD")]
        bzz_command: Option<String>,
    },

    /// Show document information
    #[command(alias = "i")]
    Info {
        /// DjVu file
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let load = LoadOptions {
        strict: cli.strict,
        mmap: cli.mmap,
    };

    let result = match cli.command {
        Commands::Dump { file, depth, json } => cmd_dump(&file, depth, json, load),
        Commands::Text {
            files,
            output,
            bzz_command,
            no_progress,
        } => cmd_text(
            &files,
            output.as_deref(),
            bzz_command.as_deref(),
            !no_progress,
            load,
        ),
        Commands::Pages { file, bzz_command } => cmd_pages(&file, bzz_command.as_deref(), load),
        Commands::Info { file, json } => cmd_info(&file, json, load),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
