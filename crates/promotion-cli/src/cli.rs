use clap::Parser;
use promotion_core::TrackerConfig;
use promotion_core::config::{DEFAULT_OUTPUT, DEFAULT_PROD_BRANCH, DEFAULT_REMOTE, DEFAULT_STAGING_BRANCH};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Report which task-tagged staging commits are already on production",
  long_about = "Searches the staging and production branches of a remote for commits whose message \
contains any of the given task codes, prints which staging commits are missing from production \
(matched by subject line) and writes a CSV with the cherry-pick command for each of them."
)]
pub struct Args {
  /// Task codes to track, e.g. TICK-1 TICK-2
  pub codes: Vec<String>,

  /// Pre-production branch
  #[arg(long, env = "PROMOTION_STAGING_BRANCH", default_value = DEFAULT_STAGING_BRANCH)]
  pub staging_branch: String,

  /// Production branch
  #[arg(long, env = "PROMOTION_PROD_BRANCH", default_value = DEFAULT_PROD_BRANCH)]
  pub prod_branch: String,

  /// Remote whose tracking branches are compared
  #[arg(long, env = "PROMOTION_REMOTE", default_value = DEFAULT_REMOTE)]
  pub remote: String,

  /// CSV report path, overwritten on every run
  #[arg(short, long, env = "PROMOTION_OUTPUT", default_value = DEFAULT_OUTPUT)]
  pub output: PathBuf,

  /// Repository to inspect
  #[arg(long, env = "PROMOTION_REPO", default_value = ".")]
  pub repo: String,
}

impl Args {
  pub fn tracker_config(&self) -> TrackerConfig {
    TrackerConfig {
      staging_branch: self.staging_branch.clone(),
      prod_branch: self.prod_branch.clone(),
      remote: self.remote.clone(),
      output: self.output.clone(),
    }
  }
}
