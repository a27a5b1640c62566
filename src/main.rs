use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xml2rdf::{
    config::ConvertOptions,
    enums::OutputFormat,
    error::{ConvertError, ConvertErrorKind, IOError, Result},
    utils::{document_id, output_path},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input directory scanned for *.xml files
    #[arg(long, default_value = "./in")]
    in_dir: PathBuf,

    /// Output directory for serialized graphs
    #[arg(long, default_value = "./out")]
    out_dir: PathBuf,

    /// Conversion options as a JSON document, e.g.
    /// '{"instanceNamespace":"https://ex.org/text/","ignoreWhitespace":true}'
    #[arg(long)]
    options: Option<String>,

    /// Output format (turtle/ntriples)
    #[arg(long, default_value = "turtle")]
    format: String,

    /// Resume the batch at the first file whose name contains this marker
    #[arg(long)]
    start_file: Option<String>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let options = match &args.options {
        Some(json) => ConvertOptions::from_json(json)?,
        None => ConvertOptions::default(),
    };
    let format: OutputFormat = args.format.parse()?;

    let mut paths = collect_xml_files(&args.in_dir)?;
    paths.sort();

    // A missing start-file marker is reported, not fatal: the batch
    // proceeds from the beginning.
    if let Some(marker) = &args.start_file {
        let position = paths.iter().position(|p| {
            p.file_name()
                .is_some_and(|n| n.to_string_lossy().contains(marker.as_str()))
        });
        match position {
            Some(idx) => paths = paths.split_off(idx),
            None => warn!(
                "'{}' is not present in {}, starting from the beginning",
                marker,
                args.in_dir.display()
            ),
        }
    }

    for path in &paths {
        let doc_id = document_id(path);
        info!("Converting {}", doc_id);
        let output = output_path(&args.out_dir, &doc_id, format.extension());
        xml2rdf::convert_file(path, &output, &options, format)?;
    }

    Ok(())
}

fn collect_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        ConvertError::new(ConvertErrorKind::IO(IOError::ReadError(format!(
            "{}: {}",
            dir.display(),
            e
        ))))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            ConvertError::new(ConvertErrorKind::IO(IOError::ReadError(e.to_string())))
        })?;
        let path = entry.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        {
            paths.push(path);
        }
    }
    Ok(paths)
}
