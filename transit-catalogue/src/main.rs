use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_catalogue::document::{
    DocumentError, process, read_document, read_document_from_path, write_responses,
};

/// Answer bus, stop and route queries for a transit network document.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Request document to read. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Answer statistics requests on all cores.
    #[arg(long)]
    parallel: bool,
}

fn run(args: &Args) -> Result<usize, DocumentError> {
    let document = match &args.input {
        Some(path) => read_document_from_path(path)?,
        None => read_document(io::stdin().lock())?,
    };

    let responses = process(document, args.parallel)?;
    write_responses(io::stdout().lock(), &responses)?;
    Ok(responses.len())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(count) => {
            info!(responses = count, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
