//! Fixture runner errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to run a fixture at all (as opposed to a fixture that runs and
/// does not match, which is a [`FixtureOutcome::Failed`](crate::FixtureOutcome::Failed)).
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("expected output {} is not valid JSON: {source}", path.display())]
    InvalidExpected {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot serialize lex result for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
