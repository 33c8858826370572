//! Fixture outcomes and run summaries.

use serde_json::Value;

use crate::Fixture;

/// Outcome of a single fixture.
#[derive(Clone, Debug, PartialEq)]
pub enum FixtureOutcome {
    /// Lexer output matched the expected JSON.
    Passed,
    /// Lexer output differed from the expected JSON.
    Failed { expected: Value, actual: Value },
    /// No `.json` file sits next to the `.gql` file.
    MissingExpected,
}

impl FixtureOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, FixtureOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FixtureOutcome::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FixtureOutcome::MissingExpected)
    }
}

/// A fixture paired with its outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureResult {
    pub fixture: Fixture,
    pub outcome: FixtureOutcome,
}

/// Summary of a fixture run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Individual results, in run order.
    pub results: Vec<FixtureResult>,
    pub passed: usize,
    pub failed: usize,
    /// Fixtures without an expected-output file.
    pub skipped: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        RunSummary::default()
    }

    pub fn add_result(&mut self, result: FixtureResult) {
        match &result.outcome {
            FixtureOutcome::Passed => self.passed += 1,
            FixtureOutcome::Failed { .. } => self.failed += 1,
            FixtureOutcome::MissingExpected => self.skipped += 1,
        }
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// 0 when nothing failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }
}
