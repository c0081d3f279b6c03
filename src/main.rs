use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use abo_drift::{run, SimParams};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

/// Simulate ABO phenotype frequencies over generations of random
/// mating and print one row per generation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    params: SimParams,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Add allele frequency columns (CSV only).
    #[arg(long)]
    alleles: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = std::io::stdout().lock();
    let result = run(args.params).and_then(|trace| match args.format {
        OutputFormat::Csv => trace.write_csv(stdout, args.alleles),
        OutputFormat::Json => trace.write_json(stdout),
    });
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
