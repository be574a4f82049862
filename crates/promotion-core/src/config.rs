use std::path::PathBuf;

pub const DEFAULT_STAGING_BRANCH: &str = "staging";
pub const DEFAULT_PROD_BRANCH: &str = "production";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_OUTPUT: &str = "commits.csv";

/// Branches to compare and where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
  /// Pre-production branch whose commits are candidates for promotion
  pub staging_branch: String,
  /// Released branch
  pub prod_branch: String,
  /// Remote whose tracking refs are queried
  pub remote: String,
  /// CSV report path, overwritten on every run
  pub output: PathBuf,
}

impl Default for TrackerConfig {
  fn default() -> Self {
    Self {
      staging_branch: DEFAULT_STAGING_BRANCH.to_string(),
      prod_branch: DEFAULT_PROD_BRANCH.to_string(),
      remote: DEFAULT_REMOTE.to_string(),
      output: PathBuf::from(DEFAULT_OUTPUT),
    }
  }
}

impl TrackerConfig {
  /// Remote-tracking reference for a branch, e.g. `origin/staging`
  pub fn remote_ref(&self, branch: &str) -> String {
    format!("{}/{}", self.remote.trim_end_matches('/'), branch)
  }

  pub fn staging_ref(&self) -> String {
    self.remote_ref(&self.staging_branch)
  }

  pub fn prod_ref(&self) -> String {
    self.remote_ref(&self.prod_branch)
  }
}
