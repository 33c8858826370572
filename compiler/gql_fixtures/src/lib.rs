//! Fixture runner for `gql_lexer`.
//!
//! A fixture directory holds pairs of files: `NN-name.gql` with lexer
//! input and `NN-name.json` with the expected serialized result (a token
//! array or an error object). [`run_all`] lexes every source, compares
//! the result structurally against its expectation, and returns a
//! [`RunSummary`].
//!
//! ```text
//! FixtureConfig ──► discover_fixtures ──► run_fixture (per file) ──► RunSummary
//!                    (NN-*.gql, sorted)    lex ─► JSON ─► compare
//! ```

mod config;
mod discovery;
mod error;
mod report;
mod result;
mod runner;

use std::sync::Once;

pub use config::{FixtureConfig, DEFAULT_FIXTURE_DIR, FIXTURE_DIR_ENV};
pub use discovery::{discover_fixtures, is_fixture_name, Fixture};
pub use error::FixtureError;
pub use report::write_report;
pub use result::{FixtureOutcome, FixtureResult, RunSummary};
pub use runner::{canonical_json, lex_to_json, run_all, run_fixture};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
