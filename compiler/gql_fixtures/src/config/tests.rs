use super::*;
use pretty_assertions::assert_eq;

#[test]
fn positional_dir_and_flags() {
    let config =
        FixtureConfig::from_args(["fixtures", "--filter=string", "-v", "--no-fail-fast"]).unwrap();
    assert_eq!(config.dir, PathBuf::from("fixtures"));
    assert_eq!(config.filter.as_deref(), Some("string"));
    assert!(config.verbose);
    assert!(!config.fail_fast);
}

#[test]
fn flags_may_precede_dir() {
    let config = FixtureConfig::from_args(["--verbose", "data"]).unwrap();
    assert_eq!(config.dir, PathBuf::from("data"));
    assert!(config.verbose);
    assert!(config.fail_fast);
}

#[test]
fn no_args_keeps_defaults() {
    let config = FixtureConfig::from_args(Vec::<String>::new()).unwrap();
    assert_eq!(config, FixtureConfig::default());
}

#[test]
fn unknown_option_is_rejected() {
    assert_eq!(
        FixtureConfig::from_args(["--parallel"]),
        Err("unknown option '--parallel'".to_owned())
    );
}

#[test]
fn second_dir_is_rejected() {
    assert_eq!(
        FixtureConfig::from_args(["a", "b"]),
        Err("unexpected argument 'b'".to_owned())
    );
}

#[test]
fn filter_matches_substring() {
    let mut config = FixtureConfig::from_args(["d"]).unwrap();
    assert!(config.matches("01-anything.gql"));
    config.filter = Some("block".to_owned());
    assert!(config.matches("05-block-string.gql"));
    assert!(!config.matches("04-strings.gql"));
}
