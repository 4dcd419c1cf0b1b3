use std::path::Path;

use anyhow::Result;
use clap::Parser;
use sift_core::corpus::index_corpus;
use sift_core::persist::{self, Format};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a term-frequency index from an XML/XHTML corpus", long_about = None)]
struct Args {
    /// Input directory or file to index
    #[arg(long)]
    input: String,
    /// Output index format: json, bin
    #[arg(long, default_value = "json")]
    format: String,
    /// Report skipped file names
    #[arg(long, default_value_t = false)]
    report_skipped: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let format: Format = args.format.parse()?;
    let corpus = index_corpus(&args.input, args.report_skipped)?;
    if args.report_skipped {
        tracing::info!(skipped = corpus.skipped, "skipped files");
    }

    let output = persist::save(&corpus.index, format, Path::new("."))?;
    tracing::info!(
        docs = corpus.index.len(),
        input = %args.input,
        output = %output.display(),
        "index build complete"
    );
    Ok(())
}
