//! Console report for a finished run.
//!
//! Passing fixtures go to `out`; failures, their expected and actual
//! values, and fixtures without expected output go to `err`.

use std::io::{self, Write};

use crate::{canonical_json, FixtureOutcome, RunSummary};

/// Write the per-fixture lines, then the totals line when `verbose` is set
/// or something failed.
pub fn write_report(
    summary: &RunSummary,
    verbose: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    for result in &summary.results {
        let name = &result.fixture.name;
        match &result.outcome {
            FixtureOutcome::Passed => writeln!(out, "Test passed for {name}")?,
            FixtureOutcome::MissingExpected => writeln!(err, "Missing JSON file for {name}")?,
            FixtureOutcome::Failed { expected, actual } => {
                writeln!(err, "Test failed for {name}")?;
                writeln!(err, "Expected: {}", canonical_json(expected))?;
                writeln!(err, "Got: {}", canonical_json(actual))?;
            }
        }
    }

    if verbose || summary.has_failures() {
        writeln!(
            out,
            "\n{} passed, {} failed, {} skipped",
            summary.passed, summary.failed, summary.skipped
        )?;
    }
    Ok(())
}
