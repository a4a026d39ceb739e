//! Analyze one saved HTML page and print its report.
//!
//! Reads the page from a file, or from stdin when no file is given, and
//! prints the report as JSON or CSV to stdout. Log output goes to stderr and
//! is controlled by `RUST_LOG` (default `warn`).

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use page_signals::export;
use page_signals::{assemble, Options, PageReport, PageSnapshot, StatusCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "page_report")]
#[command(about = "Render type, SEO metadata, text metrics and JSON-LD for one HTML page")]
#[command(version)]
struct Args {
    /// HTML file to analyze (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Page URL, reported verbatim and used to resolve relative links
    #[arg(short, long, default_value = "")]
    url: String,

    /// HTTP status observed for the page (a number or N/A)
    #[arg(short, long, default_value = "N/A")]
    status: StatusCode,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Also write each JSON-LD block to its own file in this directory
    #[arg(long)]
    json_ld_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("page_report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let html = read_input(args.file.as_deref())?;
    let snapshot = PageSnapshot::from_bytes(&html, &args.url);
    let report = assemble(&args.url, args.status, Some(&snapshot), &Options::default())?;

    let output = match args.format {
        Format::Json => report.to_json(args.pretty)?,
        Format::Csv => export::to_csv(&report)?,
    };
    println!("{output}");

    if let Some(dir) = &args.json_ld_dir {
        write_json_ld(dir, &report)?;
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut html = Vec::new();
            io::stdin().read_to_end(&mut html)?;
            Ok(html)
        }
    }
}

fn write_json_ld(dir: &Path, report: &PageReport) -> Result<(), Box<dyn Error>> {
    let exports = export::json_ld_exports(report);
    if exports.is_empty() {
        info!("no JSON-LD blocks to export");
        return Ok(());
    }

    fs::create_dir_all(dir)?;
    for item in exports {
        let path = dir.join(&item.file_name);
        fs::write(&path, serde_json::to_string_pretty(&item.document)?)?;
        info!(path = %path.display(), "wrote JSON-LD block");
    }
    Ok(())
}
