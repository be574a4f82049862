use crate::cli::Args;
use clap::{CommandFactory, Parser};
use pretty_assertions::assert_eq;
use promotion_core::TrackerConfig;
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_valid() {
  Args::command().debug_assert();
}

#[test]
fn test_codes_are_positional() {
  let args = Args::try_parse_from(["promotion-report", "TICK-1", "TICK-2"]).unwrap();

  assert_eq!(args.codes, vec!["TICK-1".to_string(), "TICK-2".to_string()]);
}

#[test]
fn test_no_codes_is_accepted() {
  let args = Args::try_parse_from(["promotion-report"]).unwrap();

  assert!(args.codes.is_empty());
}

#[test]
fn test_branch_options_build_config() {
  let args = Args::try_parse_from([
    "promotion-report",
    "--staging-branch",
    "develop",
    "--prod-branch",
    "main",
    "--remote",
    "upstream",
    "-o",
    "out/report.csv",
    "OPS-7",
  ])
  .unwrap();

  assert_eq!(
    args.tracker_config(),
    TrackerConfig {
      staging_branch: "develop".to_string(),
      prod_branch: "main".to_string(),
      remote: "upstream".to_string(),
      output: PathBuf::from("out/report.csv"),
    }
  );
  assert_eq!(args.codes, vec!["OPS-7".to_string()]);
}
