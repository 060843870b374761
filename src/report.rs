//! Human-readable report rendering
//!
//! Everything is written to a caller-supplied `Write` so the binary can
//! target stdout and tests can capture into a `Vec<u8>`.

use std::io::{self, Write};
use std::time::Duration;

use crate::config::Config;
use crate::driver::{BenchReport, Phase, PhaseResult, SampleSeries};
use crate::stats::LatencySummary;

/// Print the run header: store name and workload knobs
pub fn write_header<W: Write>(out: &mut W, store_name: &str, config: &Config) -> io::Result<()> {
    writeln!(out, "Starting {} benchmark...", store_name)?;
    writeln!(out, "Iterations: {}", config.iterations)?;
    writeln!(out, "Key Length: {}", config.key_length)?;
    writeln!(out, "Value Length: {}", config.value_length)?;
    Ok(())
}

/// Print the progress line announcing `phase`
pub fn write_phase_start<W: Write>(out: &mut W, phase: Phase) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", phase.start_message())?;
    out.flush()
}

/// Print the result block of one phase
///
/// Averages come first, then P90s, then the phase time.
pub fn write_phase<W: Write>(out: &mut W, result: &PhaseResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", result.phase.title())?;

    let summaries: Vec<(&SampleSeries, Option<LatencySummary>)> = result
        .series
        .iter()
        .map(|s| (s, LatencySummary::from_samples(&s.samples)))
        .collect();

    for (series, summary) in &summaries {
        writeln!(
            out,
            "  Average {} latency: {} mus",
            series.op.label(),
            format_micros(summary.map(|s| s.mean))
        )?;
    }
    for (series, summary) in &summaries {
        writeln!(
            out,
            "  P90 {} latency: {} mus",
            series.op.label(),
            format_micros(summary.map(|s| s.p90))
        )?;
    }
    for (series, _) in &summaries {
        if series.failures > 0 {
            writeln!(
                out,
                "  Failed {}s: {} of {} (included above)",
                series.op.label(),
                series.failures,
                series.len()
            )?;
        }
    }

    writeln!(out, "  Total time: {}", format_duration(result.elapsed))?;
    Ok(())
}

/// Print the total run time
pub fn write_total<W: Write>(out: &mut W, total: Duration) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total time: {}", format_duration(total))?;
    out.flush()
}

/// Print every phase of a finished run followed by its total time
pub fn write_report<W: Write>(out: &mut W, report: &BenchReport) -> io::Result<()> {
    for phase in Phase::ALL {
        if let Some(result) = report.phase(phase) {
            write_phase_start(out, phase)?;
            write_phase(out, result)?;
        }
    }
    write_total(out, report.total)
}

fn format_micros(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    }
}

fn format_duration(d: Duration) -> String {
    format!("{:.3} seconds", d.as_secs_f64())
}
