use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Placeholder shown in the date column when git reported a date we could not parse
pub const UNKNOWN_DATE: &str = "unknown";

/// One commit found on a branch by a task code query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
  pub hash: String,
  pub author: String,
  /// Author date; `None` when the log field was not a recognizable date
  pub date: Option<DateTime<FixedOffset>>,
  /// Subject line exactly as git reported it, used for matching across branches
  pub message: String,
  /// Subject without the leading `[CODE-123]:` tag
  pub clean_message: String,
}

impl CommitRecord {
  pub fn short_hash(&self) -> &str {
    self.hash.get(..7).unwrap_or(&self.hash)
  }

  /// `YYYY-MM-DD` of the commit date in UTC
  pub fn display_date(&self) -> String {
    match self.date {
      Some(date) => date.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
      None => UNKNOWN_DATE.to_string(),
    }
  }

  /// ISO-8601 UTC timestamp with milliseconds, e.g. `2024-02-01T09:00:00.000Z`
  pub fn iso_timestamp(&self) -> Option<String> {
    self.date.map(|date| date.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
  }
}
