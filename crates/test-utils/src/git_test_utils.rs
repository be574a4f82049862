use git_executor::git_command_executor::GitCommandExecutor;
use std::path::Path;
use tempfile::TempDir;

const TEST_USER_NAME: &str = "Test User";
const TEST_USER_EMAIL: &str = "test@example.com";

/// Git test repository wrapper with helper methods
pub struct TestRepo {
  dir: TempDir,
  git_executor: GitCommandExecutor,
}

impl Default for TestRepo {
  fn default() -> Self {
    Self::new()
  }
}

impl TestRepo {
  /// Creates a new working repository on branch `main`
  pub fn new() -> Self {
    let repo = Self::with_init(&["init", "--initial-branch=main"]);
    repo.configure_git_user().unwrap();
    repo
  }

  /// Creates a bare repository, used as the `origin` of a working repository
  pub fn new_bare() -> Self {
    Self::with_init(&["init", "--bare", "--initial-branch=main"])
  }

  fn with_init(args: &[&str]) -> Self {
    let dir = tempfile::tempdir().unwrap();
    let git_executor = GitCommandExecutor::new();
    git_executor
      .execute_command(args, dir.path().to_str().unwrap())
      .unwrap_or_else(|e| panic!("Git init failed: {}", e));
    Self { dir, git_executor }
  }

  pub fn path(&self) -> &Path {
    self.dir.path()
  }

  pub fn path_str(&self) -> &str {
    self.dir.path().to_str().unwrap()
  }

  fn configure_git_user(&self) -> anyhow::Result<()> {
    self.git_executor.execute_command(&["config", "user.name", TEST_USER_NAME], self.path_str())?;
    self.git_executor.execute_command(&["config", "user.email", TEST_USER_EMAIL], self.path_str())?;
    Ok(())
  }

  fn dated_env(timestamp: i64) -> String {
    format!("{timestamp} +0000")
  }

  /// Creates a commit touching `filename`, authored and committed at `timestamp` (unix seconds)
  pub fn create_commit_at(&self, message: &str, filename: &str, content: &str, timestamp: i64) -> String {
    let file_path = self.path().join(filename);
    if let Some(parent) = file_path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&file_path, content).unwrap();

    self
      .git_executor
      .execute_command(&["add", filename], self.path_str())
      .unwrap_or_else(|e| panic!("Git add failed: {}", e));

    let date_str = Self::dated_env(timestamp);
    let env_vars = [("GIT_AUTHOR_DATE", date_str.as_str()), ("GIT_COMMITTER_DATE", date_str.as_str())];
    self
      .git_executor
      .execute_command_with_env(&["commit", "-m", message], self.path_str(), &env_vars)
      .unwrap_or_else(|e| panic!("Git commit failed: {}", e));

    self.head()
  }

  /// Get the current HEAD commit hash
  pub fn head(&self) -> String {
    self.git_executor.execute_command(&["rev-parse", "HEAD"], self.path_str()).unwrap().trim().to_string()
  }

  /// Create and checkout a new branch at the current HEAD
  pub fn checkout_new_branch(&self, branch_name: &str) -> Result<(), String> {
    self
      .git_executor
      .execute_command(&["checkout", "-b", branch_name], self.path_str())
      .map(|_| ())
      .map_err(|e| e.to_string())
  }

  /// Checkout a branch or commit
  pub fn checkout(&self, ref_name: &str) -> Result<(), String> {
    self
      .git_executor
      .execute_command(&["checkout", ref_name], self.path_str())
      .map(|_| ())
      .map_err(|e| e.to_string())
  }

  /// Cherry-pick a commit keeping its author date; the new commit is committed at `timestamp`
  pub fn cherry_pick_at(&self, commit: &str, timestamp: i64) -> Result<String, String> {
    let date_str = Self::dated_env(timestamp);
    let env_vars = [("GIT_COMMITTER_DATE", date_str.as_str())];

    self
      .git_executor
      .execute_command_with_env(&["cherry-pick", commit], self.path_str(), &env_vars)
      .map(|_| self.head())
      .map_err(|e| e.to_string())
  }

  /// Merge a branch with --no-ff, authored at `timestamp`
  pub fn merge_no_ff_at(&self, branch: &str, message: &str, timestamp: i64) -> Result<String, String> {
    let date_str = Self::dated_env(timestamp);
    let env_vars = [("GIT_AUTHOR_DATE", date_str.as_str()), ("GIT_COMMITTER_DATE", date_str.as_str())];

    self
      .git_executor
      .execute_command_with_env(&["merge", "--no-ff", branch, "-m", message], self.path_str(), &env_vars)
      .map(|_| self.head())
      .map_err(|e| e.to_string())
  }

  pub fn add_remote(&self, name: &str, remote: &TestRepo) -> Result<(), String> {
    self
      .git_executor
      .execute_command(&["remote", "add", name, remote.path_str()], self.path_str())
      .map(|_| ())
      .map_err(|e| e.to_string())
  }

  /// Push branches to a remote
  pub fn push(&self, remote: &str, branches: &[&str]) -> Result<(), String> {
    let mut args = vec!["push", remote];
    args.extend_from_slice(branches);
    self.git_executor.execute_command(&args, self.path_str()).map(|_| ()).map_err(|e| e.to_string())
  }
}

/// A working repository whose `origin` remote is a bare repository on disk
pub struct RepoWithOrigin {
  pub origin: TestRepo,
  pub work: TestRepo,
}

impl Default for RepoWithOrigin {
  fn default() -> Self {
    Self::new()
  }
}

impl RepoWithOrigin {
  pub fn new() -> Self {
    let origin = TestRepo::new_bare();
    let work = TestRepo::new();
    work.add_remote("origin", &origin).unwrap();
    Self { origin, work }
  }

  /// Push the given branches so that `git fetch --all` creates `origin/<branch>` refs
  pub fn publish(&self, branches: &[&str]) {
    self.work.push("origin", branches).unwrap_or_else(|e| panic!("Git push failed: {}", e));
  }
}
