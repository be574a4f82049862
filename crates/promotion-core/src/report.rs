use crate::model::CommitRecord;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

pub const CSV_HEADER: &str = "hash,author,date,message,in_production,cherry_pick_command";
pub const ALREADY_IN_PRODUCTION: &str = "N/A - Already in Production";

const BANNER: &str = "==========================================";
const SEPARATOR: &str = "------------------------------------------";
const AUTHOR_WIDTH: usize = 15;
const STATUS_WIDTH: usize = 8;

pub fn cherry_pick_command(hash: &str) -> String {
  format!("git cherry-pick {hash}")
}

fn in_production_label(in_production: bool) -> &'static str {
  if in_production { "✅ Yes" } else { "❌ No" }
}

fn fit_author(author: &str) -> String {
  let truncated: String = author.chars().take(AUTHOR_WIDTH).collect();
  format!("{truncated:<AUTHOR_WIDTH$}")
}

/// Console table with one row per staging commit
pub fn render_table(out: &mut dyn Write, codes: &[String], staging: &[CommitRecord], prod_messages: &HashSet<&str>) -> Result<()> {
  writeln!(out)?;
  writeln!(out, "{BANNER}")?;
  writeln!(out, "📦 Tracked commits summary ({}):", codes.join(", "))?;
  writeln!(out, "{BANNER}")?;
  writeln!(out, "HASH | Author | Date | In Prod | Message")?;
  writeln!(out, "{SEPARATOR}")?;

  for commit in staging {
    let status = in_production_label(prod_messages.contains(commit.message.as_str()));
    writeln!(
      out,
      "{} | {} | {} | {status:<STATUS_WIDTH$} | {}",
      commit.short_hash(),
      fit_author(&commit.author),
      commit.display_date(),
      commit.message
    )?;
  }

  Ok(())
}

// Quoted CSV field with embedded quotes doubled
fn quoted(value: &str) -> String {
  format!("\"{}\"", value.replace('"', "\"\""))
}

/// CSV document for the staging commits, header first, newline terminated
pub fn render_csv(staging: &[CommitRecord], prod_messages: &HashSet<&str>) -> String {
  let mut csv = String::from(CSV_HEADER);
  csv.push('\n');

  for commit in staging {
    let in_production = prod_messages.contains(commit.message.as_str());
    let command = if in_production {
      ALREADY_IN_PRODUCTION.to_string()
    } else {
      cherry_pick_command(&commit.hash)
    };

    csv.push_str(&format!(
      "{},{},{},{},{in_production},{}\n",
      quoted(&commit.hash),
      quoted(&commit.author),
      quoted(&commit.iso_timestamp().unwrap_or_default()),
      quoted(&commit.message),
      quoted(&command)
    ));
  }

  csv
}

/// Overwrite `path` with the CSV report
#[instrument(skip(staging, prod_messages), fields(rows = staging.len()))]
pub fn write_csv(path: &Path, staging: &[CommitRecord], prod_messages: &HashSet<&str>) -> Result<()> {
  let csv = render_csv(staging, prod_messages);
  std::fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))?;
  info!(path = %path.display(), "wrote commit report");
  Ok(())
}

/// Closing summary: pending count and the oldest pending commit, or an all-clear line
pub fn render_summary(out: &mut dyn Write, pending: &[&CommitRecord], csv_path: &Path) -> Result<()> {
  writeln!(out)?;
  writeln!(out, "{BANNER}")?;
  match pending.last() {
    Some(oldest) => {
      writeln!(out, "🚀 {} commit(s) ready to deploy to production.", pending.len())?;
      writeln!(out, "First commit not in production (oldest): {}", oldest.short_hash())?;
      writeln!(out, "👉 Generated file: {} (contains cherry-pick commands).", csv_path.display())?;
    }
    None => writeln!(out, "🎉 All staging commits are already present in production.")?,
  }
  writeln!(out, "{BANNER}")?;
  Ok(())
}
