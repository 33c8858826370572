//! `gql-fixtures`: run lexer fixtures and report mismatches.

use gql_fixtures::{init_tracing, run_all, write_report, FixtureConfig};

fn main() {
    init_tracing();

    let config = match FixtureConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            print_usage();
            std::process::exit(1);
        }
    };

    let summary = match run_all(&config) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let report = write_report(
        &summary,
        config.verbose,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    if let Err(err) = report {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    std::process::exit(summary.exit_code());
}

fn print_usage() {
    eprintln!("Usage: gql-fixtures [DIR] [--filter=SUBSTR] [-v|--verbose] [--no-fail-fast]");
    eprintln!();
    eprintln!("DIR defaults to $GQL_FIXTURE_DIR, then test/data.");
}
