use std::error::Error;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use log::info;

use catsounds::{Format, Generator, DEFAULT_COUNT};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    format: FormatCommand,
}

#[derive(Subcommand)]
enum FormatCommand {
    /// Write a single JSON array of records
    Array(GenerateArgs),
    /// Write one JSON record per line (JSON Lines)
    Lines(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// The output file, overwritten if it already exists
    #[clap(short, long)]
    pub(crate) output: Option<String>,
    /// The number of records to generate
    #[clap(short, long, default_value_t = DEFAULT_COUNT)]
    pub(crate) count: u64,
    /// Seed the random source for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let (format, args) = match cli.format {
        FormatCommand::Array(args) => (Format::Array, args),
        FormatCommand::Lines(args) => (Format::Lines, args),
    };
    let output = args
        .output
        .unwrap_or_else(|| format.default_file_name().to_string());

    let mut generator = match args.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };
    let start = Instant::now();
    generator.generate_file(&output, format, args.count)?;
    info!("Generation took: {:.2?}", start.elapsed());

    Ok(())
}
