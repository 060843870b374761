//! Benchmark run as the binary performs it
//!
//! Header, open, phases, close and total time, written to one output.
//! Returns the process exit code instead of exiting so the whole flow can
//! run inside tests.

use std::io::{self, Write};
use std::time::Instant;

use tracing::error;

use crate::config::Config;
use crate::driver::{Driver, Phase};
use crate::report;
use crate::store::KvStore;

/// Exit code of a completed run
pub const EXIT_OK: i32 = 0;

/// Exit code when the store cannot be opened or the report cannot be written
pub const EXIT_FAILURE: i32 = 1;

/// Run the full benchmark against store type `S`, printing to `out`
///
/// The header goes out before the store is opened, so a failed open still
/// shows what was attempted.
pub fn run<S: KvStore, W: Write>(config: Config, out: &mut W) -> i32 {
    let start = Instant::now();

    if let Err(e) = report::write_header(out, S::NAME, &config).and_then(|_| out.flush()) {
        error!("Failed to write report: {}", e);
        return EXIT_FAILURE;
    }

    let mut driver: Driver<S> = match Driver::open(config) {
        Ok(d) => d,
        Err(e) => {
            error!("Error opening store: {}", e);
            return EXIT_FAILURE;
        }
    };

    if let Err(e) = run_phases(&mut driver, out) {
        error!("Failed to write report: {}", e);
        return EXIT_FAILURE;
    }

    if let Err(e) = driver.close() {
        error!("Error closing store: {}", e);
    }

    if let Err(e) = report::write_total(out, start.elapsed()).and_then(|_| out.flush()) {
        error!("Failed to write report: {}", e);
        return EXIT_FAILURE;
    }

    EXIT_OK
}

/// Run every phase, printing each result block as soon as it is available
fn run_phases<S: KvStore, W: Write>(driver: &mut Driver<S>, out: &mut W) -> io::Result<()> {
    for phase in Phase::ALL {
        report::write_phase_start(out, phase)?;
        let result = driver.run_phase(phase);
        report::write_phase(out, &result)?;
    }
    Ok(())
}
