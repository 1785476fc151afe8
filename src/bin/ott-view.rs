//! CLI tool to view an uploaded CSV metadata file as a table.
//!
//! Usage:
//!   ott-view                     # show the upload page
//!   ott-view <titles.csv>
//!   ott-view - --format json < titles.csv

use clap::{Parser, ValueEnum};
use ott_tagger::{
    Effect, JsonPresenter, Page, PageConfig, ParseOptions, TextPresenter, UploadedFile,
    present_all,
};
use std::fs::File;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Upload a CSV metadata file and view its contents as a table.
#[derive(Parser)]
#[command(name = "ott-view")]
struct Cli {
    /// CSV file to upload (`-` reads stdin). Omit to show the upload page.
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Trim whitespace around headers and fields
    #[arg(long)]
    trim: bool,

    /// Truncate printed cells to this many characters
    #[arg(long, default_value_t = ott_tagger::render::DEFAULT_MAX_CELL_WIDTH)]
    max_cell_width: usize,

    /// Largest accepted file, in bytes
    #[arg(long, default_value_t = ott_tagger::DEFAULT_MAX_BYTES)]
    max_bytes: usize,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Log pipeline activity on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.delimiter.is_ascii() {
        eprintln!("Delimiter must be a single ASCII character, got '{}'", cli.delimiter);
        process::exit(2);
    }

    let mut config = PageConfig::default();
    if let Some(title) = &cli.title {
        config = config.with_title(title.as_str());
    }
    let options = ParseOptions::new()
        .with_delimiter(cli.delimiter as u8)
        .with_trim(cli.trim)
        .with_max_bytes(cli.max_bytes);
    let page = Page::new(config, options);

    let effects = match cli.file.as_deref() {
        None => page.handle_upload(None),
        Some("-") => page.handle_stream("stdin.csv", io::stdin().lock()),
        Some(path) => {
            let candidate = UploadedFile::new(path, Vec::new());
            if !candidate.is_accepted(&page.config.accept_list()) {
                eprintln!(
                    "Refusing '{path}': only {} files can be uploaded",
                    page.config.accept_attr()
                );
                process::exit(2);
            }
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Error opening file '{path}': {e}");
                    process::exit(1);
                }
            };
            page.handle_stream(path, file)
        }
    };

    let failed = effects.iter().any(|e| matches!(e, Effect::Error(_)));

    let stdout = io::stdout().lock();
    let result = match cli.format {
        Format::Text => {
            let mut presenter = TextPresenter::new(stdout).with_max_cell_width(cli.max_cell_width);
            present_all(&effects, &mut presenter);
            presenter.finish()
        }
        Format::Json => {
            let mut presenter = JsonPresenter::new(stdout);
            present_all(&effects, &mut presenter);
            presenter.finish()
        }
    };

    if let Err(e) = result.and_then(|mut out| out.flush()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if failed {
        process::exit(1);
    }
}
