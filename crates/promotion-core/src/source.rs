use crate::log_line::LOG_FORMAT;
use anyhow::Result;
use git_executor::git_command_executor::GitCommandExecutor;
use tracing::instrument;

/// Where commit logs come from. The git implementation shells out; tests supply canned lines.
pub trait CommitSource {
  /// Refresh every remote-tracking ref before querying
  fn fetch_all_remotes(&self) -> Result<()>;

  /// Lines of `hash|author|date|subject` for commits reachable from `branch_ref`
  /// whose message contains `filter` as a literal substring
  fn query_log(&self, branch_ref: &str, filter: &str) -> Result<Vec<String>>;
}

/// [`CommitSource`] backed by the `git` binary in a repository directory
#[derive(Clone, Debug)]
pub struct GitCliSource {
  git_executor: GitCommandExecutor,
  repo_path: String,
}

impl GitCliSource {
  pub fn new(git_executor: GitCommandExecutor, repo_path: impl Into<String>) -> Self {
    Self {
      git_executor,
      repo_path: repo_path.into(),
    }
  }
}

impl CommitSource for GitCliSource {
  #[instrument(skip(self), fields(repo_path = %self.repo_path))]
  fn fetch_all_remotes(&self) -> Result<()> {
    self.git_executor.execute_command(&["fetch", "--all"], &self.repo_path)?;
    Ok(())
  }

  #[instrument(skip(self), fields(repo_path = %self.repo_path))]
  fn query_log(&self, branch_ref: &str, filter: &str) -> Result<Vec<String>> {
    let grep = format!("--grep={filter}");
    let pretty = format!("--pretty=format:{LOG_FORMAT}");
    let args = ["--no-pager", "log", grep.as_str(), "--fixed-strings", "--date=iso", pretty.as_str(), branch_ref, "--"];
    self.git_executor.execute_command_lines(&args, &self.repo_path)
  }
}
