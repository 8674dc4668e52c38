//! Unflow - strips extra hard line breaks from reflowed text

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use unflow_core::{report, Document, ProcessingOptions};

/// Strips extra hard line breaks from reflowed text
#[derive(Parser, Debug)]
#[command(name = "unflow")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a text file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(long, requires = "file")]
    in_place: bool,

    /// Region start byte offset (enables region restriction)
    #[arg(long)]
    start: Option<usize>,

    /// Region end byte offset (enables region restriction)
    #[arg(long)]
    end: Option<usize>,

    /// Comma-separated list markers, e.g. "-,*,[outline])"
    #[arg(long)]
    markers: Option<String>,

    /// Lines shorter than this keep their hard return
    #[arg(long, value_name = "LEN")]
    min_line_length: Option<usize>,

    /// Do not insert reply-boundary markers around quoted blocks
    #[arg(long)]
    no_email_markers: bool,

    /// Options file (TOML); flags override its values
    #[arg(long, value_name = "PATH")]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut options = match &args.options {
        Some(path) => ProcessingOptions::load_from(path)?,
        None => ProcessingOptions::default(),
    };
    if let Some(markers) = &args.markers {
        options.list_markers = markers.split(',').map(str::to_string).collect();
    }
    if let Some(min) = args.min_line_length {
        options.min_line_length = min;
    }
    if args.no_email_markers {
        options.email_markers_enabled = false;
    }

    let region = if args.start.is_some() || args.end.is_some() {
        options.restrict_to_region = true;
        Some((args.start.unwrap_or(0), args.end.unwrap_or(usize::MAX)))
    } else {
        None
    };

    let mut doc = match &args.file {
        Some(path) => Document::load(path)
            .with_context(|| format!("Failed to load document: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Document::from_text(&buf)
        }
    };

    let removed = doc.apply(region, &options);
    log::info!("{}", report::summary(removed));

    if args.in_place {
        doc.save().context("Failed to write document")?;
    } else {
        print!("{}", doc.text());
    }

    Ok(())
}
