use crate::log_line::{LineOutcome, parse_log_line};
use crate::model::CommitRecord;
use crate::source::CommitSource;
use indexmap::IndexMap;
use tracing::{debug, error, info, instrument};

/// Collect the commits on `branch_ref` whose message contains any of `codes`.
///
/// A failed query is logged and counts as "no commits" for that code; the caller always
/// gets a list. Each hash appears once and the list is ordered newest first.
#[instrument(skip(source, codes), fields(code_count = codes.len()))]
pub fn fetch_commits_by_codes(source: &dyn CommitSource, codes: &[String], branch_ref: &str) -> Vec<CommitRecord> {
  let commits = codes.iter().fold(IndexMap::new(), |mut commits, code| {
    collect_code(source, code, branch_ref, &mut commits);
    commits
  });

  let commits = into_sorted(commits);
  debug!(branch = %branch_ref, commits_count = commits.len(), "collected branch commits");
  commits
}

fn collect_code(source: &dyn CommitSource, code: &str, branch_ref: &str, commits: &mut IndexMap<String, CommitRecord>) {
  info!(code = %code, branch = %branch_ref, "searching commits");

  let lines = match source.query_log(branch_ref, code) {
    Ok(lines) => lines,
    Err(e) => {
      let message = e.to_string();
      let first_line = message.lines().next().unwrap_or_default();
      error!(code = %code, branch = %branch_ref, error = %first_line, "git log failed");
      return;
    }
  };

  for line in lines.iter().filter(|line| !line.trim().is_empty()) {
    if let LineOutcome::Commit(commit) = parse_log_line(line) {
      commits.insert(commit.hash.clone(), commit);
    }
  }
}

/// Newest first; undated commits go last. Ties keep first-seen order.
pub fn into_sorted(commits: IndexMap<String, CommitRecord>) -> Vec<CommitRecord> {
  let mut commits: Vec<CommitRecord> = commits.into_values().collect();
  commits.sort_by(|a, b| b.date.cmp(&a.date));
  commits
}
