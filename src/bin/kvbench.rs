//! kvbench Binary
//!
//! Runs the latency benchmark against a sled store, or against the
//! in-memory baseline with `--store memory`.
//!
//! Workload size comes from the `ITERATIONS`, `KEY_LENGTH` and `VALUE_LENGTH`
//! environment variables. Statistics go to stdout, logs to stderr.

use std::io;

use clap::{Parser, ValueEnum};
use kvbench::{app, Config, MemoryStore, SledStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Store under test
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StoreKind {
    /// On-disk sled database
    Sled,
    /// In-process map, for measuring harness overhead
    Memory,
}

/// kvbench
#[derive(Parser, Debug)]
#[command(name = "kvbench")]
#[command(about = "Write/read latency benchmark for an embedded key-value store")]
#[command(version)]
struct Args {
    /// Seed for key/value generation (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Store to benchmark
    #[arg(long, value_enum, default_value = "sled")]
    store: StoreKind,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kvbench=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env();
    config.seed = args.seed;

    tracing::info!("kvbench v{}", kvbench::VERSION);
    tracing::info!("Data directory: {}", config.data_dir.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match args.store {
        StoreKind::Sled => app::run::<SledStore, _>(config, &mut out),
        StoreKind::Memory => app::run::<MemoryStore, _>(config, &mut out),
    };

    std::process::exit(code);
}
