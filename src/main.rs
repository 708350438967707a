use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use donations::{campaigns::Percentile, donations::run};

/// Identify repeat donors in an FEC contribution stream and report a
/// running percentile/sum/count per campaign.
#[derive(Parser)]
struct Cli {
    /// Pipe-delimited individual-contribution input file
    #[clap(short, long)]
    input: PathBuf,
    /// Output file for the repeat-donation summaries
    #[clap(short, long)]
    output: PathBuf,
    /// File whose first line holds the percentile to report, in [1, 100]
    #[clap(short, long)]
    percentile: PathBuf,
    /// Number of output lines to buffer before writing to disk
    #[clap(short, long, default_value_t = 1000)]
    buffer_size: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let percentile: Percentile = std::fs::read_to_string(&cli.percentile)?.parse()?;
    let input = File::open(&cli.input)?;
    let output = BufWriter::new(File::create(&cli.output)?);

    run(input, output, percentile, cli.buffer_size)
}
