use crate::model::CommitRecord;
use crate::task_tag::strip_task_tag;
use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::warn;

/// `git log --pretty` format producing `hash|author|date|subject` lines
pub const LOG_FORMAT: &str = "%H|%an|%ad|%s";

const FIELD_DELIMITER: char = '|';

/// Subjects with these prefixes are merge noise and never become records
const MERGE_PREFIXES: [&str; 2] = ["Merge branch", "Merged"];

// `--date=iso` renders as `2024-02-01 10:15:00 +0100`
const GIT_ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Result of normalizing a single log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
  Commit(CommitRecord),
  /// Merge commit subject, skipped
  Merge,
  /// Fewer than four fields, skipped
  Malformed,
}

pub fn is_merge_subject(subject: &str) -> bool {
  MERGE_PREFIXES.iter().any(|prefix| subject.starts_with(prefix))
}

/// Parse one `hash|author|date|subject` line.
///
/// Only the first three delimiters split fields, so a subject containing `|` is kept whole.
/// An author name containing `|` still shifts the remaining fields.
pub fn parse_log_line(line: &str) -> LineOutcome {
  let mut fields = line.splitn(4, FIELD_DELIMITER);
  let (Some(hash), Some(author), Some(date_field), Some(message)) = (fields.next(), fields.next(), fields.next(), fields.next()) else {
    warn!(line = %line, "skipping malformed log line");
    return LineOutcome::Malformed;
  };

  if is_merge_subject(message) {
    return LineOutcome::Merge;
  }

  let date = parse_git_date(date_field);
  if date.is_none() {
    warn!(hash = %hash, date = %date_field, "unrecognized commit date");
  }

  LineOutcome::Commit(CommitRecord {
    hash: hash.to_string(),
    author: author.to_string(),
    date,
    message: message.to_string(),
    clean_message: strip_task_tag(message),
  })
}

/// Git ISO dates, RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC
pub fn parse_git_date(value: &str) -> Option<DateTime<FixedOffset>> {
  let value = value.trim();
  if let Ok(date) = DateTime::parse_from_str(value, GIT_ISO_FORMAT) {
    return Some(date);
  }
  if let Ok(date) = DateTime::parse_from_rfc3339(value) {
    return Some(date);
  }
  NaiveDate::parse_from_str(value, "%Y-%m-%d")
    .ok()
    .and_then(|day| day.and_hms_opt(0, 0, 0))
    .map(|midnight| midnight.and_utc().fixed_offset())
}
