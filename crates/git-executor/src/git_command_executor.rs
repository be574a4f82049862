use crate::git_info::GitInfo;
use anyhow::{Result, anyhow};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use tracing::instrument;

/// Runs `git` subcommands against a repository directory, one blocking process at a time.
#[derive(Clone, Debug)]
pub struct GitCommandExecutor {
  info: Arc<Mutex<Option<GitInfo>>>,
}

impl Default for GitCommandExecutor {
  fn default() -> Self {
    Self::new()
  }
}

impl GitCommandExecutor {
  #[must_use]
  pub fn new() -> Self {
    Self { info: Arc::new(Mutex::new(None)) }
  }

  #[instrument(skip(self))]
  pub fn get_info(&self) -> Result<GitInfo> {
    let mut guard = self.info.lock().map_err(|e| anyhow!("Failed to acquire lock: {}", e))?;
    if guard.is_none() {
      let info = GitInfo::discover().map_err(|e| anyhow!(e))?;
      tracing::debug!(git_version = %info.version, git_path = %info.path, "discovered git info");
      *guard = Some(info);
    }

    guard.as_ref().ok_or_else(|| anyhow!("Git info should be initialized")).cloned()
  }

  fn validate_path(repository_path: &str) -> Result<()> {
    if repository_path.is_empty() {
      Err(anyhow!("repository path cannot be blank"))
    } else {
      Ok(())
    }
  }

  // The first line of the error names the command and exit code, followed by stderr
  fn handle_error<T>(output: &Output, args: &[&str]) -> Result<T> {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let exit_code = output.status.code().unwrap_or(-1);
    tracing::Span::current().record("success", false);
    tracing::debug!(stderr = %stderr, exit_code, "git command failed");
    Err(anyhow!("git {} failed with exit code {exit_code}: {stderr}", args.join(" ")))
  }

  fn handle_success(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    tracing::Span::current().record("success", true);
    stdout
  }

  /// Split process output into lines, dropping blank ones.
  pub fn parse_lines(output: &[u8]) -> Vec<String> {
    output
      .split(|&b| b == b'\n')
      .filter_map(|line| {
        let line_str = String::from_utf8_lossy(line);
        let trimmed = line_str.trim();
        if !trimmed.is_empty() { Some(trimmed.to_string()) } else { None }
      })
      .collect()
  }

  fn execute(&self, args: &[&str], repository_path: &str, env_vars: &[(&str, &str)]) -> Result<Output> {
    Self::validate_path(repository_path)?;
    let git_info = self.get_info()?;

    let mut cmd = Command::new(&git_info.path);
    cmd.args(args).current_dir(repository_path);
    for (key, value) in env_vars {
      cmd.env(key, value);
    }

    cmd.output().map_err(|e| anyhow!("Failed to execute git {}: {e}", args.join(" ")))
  }

  #[instrument(
    skip(self),
    fields(
      git_command = args.join(" "),
      repository_path = repository_path,
      success = tracing::field::Empty,
    )
  )]
  pub fn execute_command(&self, args: &[&str], repository_path: &str) -> Result<String> {
    let output = self.execute(args, repository_path, &[])?;
    if output.status.success() {
      Ok(Self::handle_success(&output))
    } else {
      Self::handle_error(&output, args)
    }
  }

  #[instrument(
    skip(self),
    fields(
      git_command = args.join(" "),
      repository_path = repository_path,
      success = tracing::field::Empty,
    )
  )]
  pub fn execute_command_with_env(&self, args: &[&str], repository_path: &str, env_vars: &[(&str, &str)]) -> Result<String> {
    let output = self.execute(args, repository_path, env_vars)?;
    if output.status.success() {
      Ok(Self::handle_success(&output))
    } else {
      Self::handle_error(&output, args)
    }
  }

  /// Execute a git command and return output as lines, filtering empty lines
  #[instrument(
    skip(self),
    fields(
      git_command = args.join(" "),
      repository_path = repository_path,
      success = tracing::field::Empty,
    )
  )]
  pub fn execute_command_lines(&self, args: &[&str], repository_path: &str) -> Result<Vec<String>> {
    let output = self.execute(args, repository_path, &[])?;
    if output.status.success() {
      tracing::Span::current().record("success", true);
      Ok(Self::parse_lines(&output.stdout))
    } else {
      Self::handle_error(&output, args)
    }
  }
}
