use crate::config::TrackerConfig;
use crate::diff::{pending_against, production_messages};
use crate::fetcher::fetch_commits_by_codes;
use crate::model::CommitRecord;
use crate::report::{render_summary, render_table, write_csv};
use crate::source::CommitSource;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::instrument;

/// Outcome of one report run
#[derive(Debug, Clone)]
pub struct PromotionReport {
  /// Staging commits, newest first
  pub staging: Vec<CommitRecord>,
  pub production: Vec<CommitRecord>,
  /// Staging commits missing from production, newest first
  pub pending: Vec<CommitRecord>,
  pub csv_path: PathBuf,
}

impl PromotionReport {
  /// Oldest staging commit that has not reached production
  pub fn first_pending(&self) -> Option<&CommitRecord> {
    self.pending.last()
  }
}

/// Fetch, compare, and report the promotion state of `codes`.
///
/// Returns `Ok(None)` without touching git when no codes are given. A failure to fetch
/// remotes aborts the run before any query and before the CSV is written.
#[instrument(skip(source, config, out), fields(staging = %config.staging_branch, production = %config.prod_branch))]
pub fn run_report(source: &dyn CommitSource, config: &TrackerConfig, codes: &[String], out: &mut dyn Write) -> Result<Option<PromotionReport>> {
  if codes.is_empty() {
    writeln!(out, "⚠️ No task codes were provided on the command line.")?;
    return Ok(None);
  }
  writeln!(out, "🛠️ Task codes to track: {}", codes.join(", "))?;

  source.fetch_all_remotes().context("failed to fetch remotes")?;

  let staging = fetch_commits_by_codes(source, codes, &config.staging_ref());
  let production = fetch_commits_by_codes(source, codes, &config.prod_ref());

  let prod_messages = production_messages(&production);
  let pending: Vec<CommitRecord> = pending_against(&staging, &prod_messages).into_iter().cloned().collect();

  render_table(out, codes, &staging, &prod_messages)?;
  write_csv(&config.output, &staging, &prod_messages)?;
  let pending_refs: Vec<&CommitRecord> = pending.iter().collect();
  render_summary(out, &pending_refs, &config.output)?;

  Ok(Some(PromotionReport {
    staging,
    production,
    pending,
    csv_path: config.output.clone(),
  }))
}
