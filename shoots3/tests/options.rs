use clap::Parser;
use serial_test::serial;
use shoots3::cli::Cli;
use std::env;
use std::path::PathBuf;

#[test]
fn short_flags_map_onto_options() {
    let cli = Cli::try_parse_from([
        "shoot", "-k", "abc", "-l", "9", "-b", "bkt", "-r", "eu-west-1", "-f", "-e",
        "http://localhost:9000", "pic.png",
    ])
    .expect("flags should parse");

    assert_eq!(cli.files, vec![PathBuf::from("pic.png")]);

    let options = cli.options();
    assert_eq!(options.key.as_deref(), Some("abc"));
    assert_eq!(options.length, 9);
    assert_eq!(options.bucket.as_deref(), Some("bkt"));
    assert_eq!(options.region.as_deref(), Some("eu-west-1"));
    assert_eq!(options.endpoint.as_deref(), Some("http://localhost:9000"));
    assert!(options.force);
}

#[test]
fn defaults_match_the_documented_surface() {
    let cli = Cli::try_parse_from(["shoot", "file.txt"]).expect("should parse");

    assert_eq!(cli.key, None);
    assert_eq!(cli.length, 6);
    assert_eq!(cli.bucket, None);
    assert_eq!(cli.region, None);
    assert_eq!(cli.endpoint, None);
    assert!(!cli.force);
}

#[test]
fn empty_bucket_flag_falls_back_to_env() {
    let cli = Cli::try_parse_from(["shoot", "-b", "", "file.txt"]).expect("should parse");
    let config = cli
        .options()
        .resolve_with(|name| match name {
            "SHOOTS3_DEFAULT_BUCKET" => Some("from-env".to_string()),
            "AWS_REGION" => Some("us-east-1".to_string()),
            _ => None,
        })
        .expect("should resolve");
    assert_eq!(config.bucket, "from-env");
}

#[test]
fn flags_after_the_filename_are_not_parsed() {
    let cli = Cli::try_parse_from(["shoot", "pic.png", "-b", "bkt"]).expect("should parse");

    assert_eq!(
        cli.files,
        vec![PathBuf::from("pic.png"), PathBuf::from("-b"), PathBuf::from("bkt")]
    );
    assert_eq!(cli.bucket, None);
}

#[test]
fn non_numeric_length_is_a_parse_error() {
    assert!(Cli::try_parse_from(["shoot", "-l", "six", "file.txt"]).is_err());
}

/// Resolution reads bucket and region from the process environment when flags are empty.
#[test]
#[serial]
fn resolves_bucket_and_region_from_process_env() {
    env::set_var("SHOOTS3_DEFAULT_BUCKET", "env-bucket");
    env::set_var("AWS_REGION", "ap-southeast-2");

    let cli = Cli::try_parse_from(["shoot", "-l", "4", "file.txt"]).unwrap();
    let config = cli.options().resolve().expect("config should resolve");

    assert_eq!(config.bucket, "env-bucket");
    assert_eq!(config.region, "ap-southeast-2");
    assert_eq!(config.key.len(), 4);

    env::remove_var("SHOOTS3_DEFAULT_BUCKET");
    env::remove_var("AWS_REGION");
}

#[test]
#[serial]
fn missing_env_makes_resolution_fail() {
    env::remove_var("SHOOTS3_DEFAULT_BUCKET");
    env::remove_var("AWS_REGION");

    let cli = Cli::try_parse_from(["shoot", "file.txt"]).unwrap();
    let err = cli.options().resolve().unwrap_err();
    let msg = err.to_string();

    assert!(
        msg.contains("SHOOTS3_DEFAULT_BUCKET"),
        "Must error for missing env var, got: {msg}"
    );
}
