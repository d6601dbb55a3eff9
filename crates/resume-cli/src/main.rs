use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use resume_core::{OracleSettings, build_oracle};
use resume_parsing::ResumeExtractor;
use resume_pdf_mupdf::MupdfBackend;

mod output;

/// Resume Field Extractor - Pull name, phone, address and role out of a PDF resume
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the PDF resume
    pdf_path: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut stdout = std::io::stdout().lock();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!(error = %e, "bad invocation");
            output::print_error(&mut stdout, output::USAGE_ERROR)?;
            return Ok(ExitCode::from(1));
        }
    };

    // Oracle and configuration failures are not part of the JSON error
    // surface; they propagate to the runtime's `Error: ...` report.
    let settings = OracleSettings::load()?;
    let oracle = build_oracle(&settings)?;

    let extractor = ResumeExtractor::new();
    let text = match extractor.extract_text(&cli.pdf_path, &MupdfBackend::new()) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path = %cli.pdf_path.display(), error = %e, "PDF extraction failed");
            output::print_error(&mut stdout, &e.to_string())?;
            return Ok(ExitCode::from(1));
        }
    };

    let fields = extractor.extract_from_text(&text, oracle.as_ref()).await?;
    output::print_fields(&mut stdout, &fields)?;
    Ok(ExitCode::SUCCESS)
}

/// Log to stderr so stdout carries nothing but the JSON line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
