//! Fixture execution.
//!
//! Each fixture's source is lexed, the result serialized to a JSON value,
//! and compared structurally against the expected file. Object key order
//! never matters; array order does.

use std::fs;

use gql_lexer::{lex, LexOutput};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::discovery::{discover_fixtures, Fixture};
use crate::result::{FixtureOutcome, FixtureResult, RunSummary};
use crate::{FixtureConfig, FixtureError};

/// Render a JSON value with object keys sorted and no whitespace.
///
/// Used to print expected and actual values so two runs over the same
/// data produce byte-identical reports.
pub fn canonical_json(value: &Value) -> String {
    // `serde_json::Map` is ordered by key unless `preserve_order` is on,
    // which this workspace never enables.
    value.to_string()
}

/// Lex one source text into its JSON rendering.
pub fn lex_to_json(source: &str) -> Result<Value, serde_json::Error> {
    let result = lex(source);
    serde_json::to_value(LexOutput(&result))
}

/// Run one fixture.
#[tracing::instrument(level = "debug", skip_all, fields(fixture = %fixture.name))]
pub fn run_fixture(fixture: &Fixture) -> Result<FixtureOutcome, FixtureError> {
    if !fixture.expected_path.is_file() {
        error!("Missing JSON file for {}", fixture.name);
        return Ok(FixtureOutcome::MissingExpected);
    }

    let source = fs::read_to_string(&fixture.source_path)
        .map_err(|e| FixtureError::io(&fixture.source_path, e))?;
    let expected_text = fs::read_to_string(&fixture.expected_path)
        .map_err(|e| FixtureError::io(&fixture.expected_path, e))?;
    let expected: Value =
        serde_json::from_str(&expected_text).map_err(|source| FixtureError::InvalidExpected {
            path: fixture.expected_path.clone(),
            source,
        })?;

    let actual = lex_to_json(&source).map_err(|source| FixtureError::Serialize {
        path: fixture.source_path.clone(),
        source,
    })?;

    if actual == expected {
        debug!("passed");
        Ok(FixtureOutcome::Passed)
    } else {
        debug!("failed");
        Ok(FixtureOutcome::Failed { expected, actual })
    }
}

/// Discover and run every fixture selected by `config`.
///
/// With `fail_fast` set, the run stops after the first failing fixture.
pub fn run_all(config: &FixtureConfig) -> Result<RunSummary, FixtureError> {
    let fixtures = discover_fixtures(&config.dir)?;
    info!(dir = %config.dir.display(), count = fixtures.len(), "discovered fixtures");

    let mut summary = RunSummary::new();
    for fixture in fixtures {
        if !config.matches(&fixture.name) {
            continue;
        }
        let outcome = run_fixture(&fixture)?;
        let stop = config.fail_fast && outcome.is_failed();
        summary.add_result(FixtureResult { fixture, outcome });
        if stop {
            break;
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests;
