//! Console summaries and per-run text logs.
//!
//! A run log holds one block per trial: start square, every step of the
//! path, a success label with the achieved length, and the final board.
//! Blocks are separated by [`TRIAL_DELIMITER`].

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Mode;
use crate::constants::{LOG_FILE_PREFIX, TRIAL_DELIMITER};
use crate::trial::{TrialResult, TrialSummary};

/// One-line summary: threshold, successes, trials and probability.
pub fn format_summary(summary: &TrialSummary) -> String {
    format!(
        "Threshold {:.2}: {} successful out of {} trials, success probability {:.5}",
        summary.threshold,
        summary.successes,
        summary.trials,
        summary.probability()
    )
}

/// Log file name for a run, embedding mode and threshold.
pub fn log_file_name(mode: Mode, threshold: f64) -> String {
    format!("{LOG_FILE_PREFIX}_{}_{threshold:.2}.txt", mode.name())
}

/// Write one trial block.
pub fn write_trial<W: Write>(out: &mut W, index: usize, result: &TrialResult) -> std::io::Result<()> {
    writeln!(out, "Trial {}", index + 1)?;
    writeln!(out, "Start position: {}", result.start)?;
    for (step, pos) in result.path.iter().enumerate() {
        writeln!(out, "Step {step}: {pos}")?;
    }
    let label = if result.success { "Success" } else { "Failure" };
    writeln!(out, "{label}: tour length {}", result.length())?;
    writeln!(out, "Board:")?;
    write!(out, "{}", result.board)?;
    writeln!(out, "{TRIAL_DELIMITER}")?;
    Ok(())
}

/// Write every trial of `summary` to `out`, followed by the summary line.
pub fn write_run<W: Write>(out: &mut W, summary: &TrialSummary) -> std::io::Result<()> {
    for (i, result) in summary.results.iter().enumerate() {
        write_trial(out, i, result)?;
    }
    writeln!(out, "{}", format_summary(summary))
}

/// Write the run log for `summary` into `dir`, returning the file path.
pub fn write_log(dir: &Path, summary: &TrialSummary) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let path = dir.join(log_file_name(summary.strategy.mode(), summary.threshold));
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write_run(&mut out, summary)
        .and_then(|_| out.flush())
        .with_context(|| format!("failed to write log file {}", path.display()))?;

    info!(path = %path.display(), trials = summary.results.len(), "wrote run log");
    Ok(path)
}
