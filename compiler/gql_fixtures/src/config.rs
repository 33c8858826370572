//! Fixture runner configuration.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the default fixture directory.
pub const FIXTURE_DIR_ENV: &str = "GQL_FIXTURE_DIR";

/// Fixture directory used when neither an argument nor the environment names one.
pub const DEFAULT_FIXTURE_DIR: &str = "test/data";

/// Configuration for a fixture run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Directory searched for `NN-*.gql` fixtures.
    pub dir: PathBuf,
    /// Only run fixtures whose file name contains this substring.
    pub filter: Option<String>,
    /// Print the pass/fail/skip summary even when everything passed.
    pub verbose: bool,
    /// Stop at the first failing fixture.
    pub fail_fast: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        let dir = env::var_os(FIXTURE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_FIXTURE_DIR), PathBuf::from);
        FixtureConfig {
            dir,
            filter: None,
            verbose: false,
            fail_fast: true,
        }
    }
}

impl FixtureConfig {
    /// Build a configuration from command-line arguments (program name excluded).
    ///
    /// Accepts `[DIR] [--filter=SUBSTR] [-v|--verbose] [--no-fail-fast]`.
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = FixtureConfig::default();
        let mut dir_seen = false;

        for arg in args {
            let arg = arg.as_ref();
            if let Some(filter) = arg.strip_prefix("--filter=") {
                config.filter = Some(filter.to_owned());
            } else if arg == "--verbose" || arg == "-v" {
                config.verbose = true;
            } else if arg == "--no-fail-fast" {
                config.fail_fast = false;
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else if dir_seen {
                return Err(format!("unexpected argument '{arg}'"));
            } else {
                config.dir = PathBuf::from(arg);
                dir_seen = true;
            }
        }
        Ok(config)
    }

    /// Whether a fixture with this file name passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|f| name.contains(f))
    }
}

#[cfg(test)]
mod tests;
