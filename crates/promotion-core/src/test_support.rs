use crate::model::CommitRecord;
use crate::source::CommitSource;
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory [`CommitSource`] returning canned log lines per (branch ref, code)
#[derive(Default)]
pub struct FakeSource {
  lines: HashMap<(String, String), Vec<String>>,
  failing: HashMap<(String, String), String>,
  fetch_error: Option<String>,
  pub queries: RefCell<Vec<(String, String)>>,
  pub fetch_calls: RefCell<usize>,
}

impl FakeSource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_lines<I, S>(mut self, branch_ref: &str, code: &str, lines: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .lines
      .insert((branch_ref.to_string(), code.to_string()), lines.into_iter().map(Into::into).collect());
    self
  }

  pub fn with_failure(mut self, branch_ref: &str, code: &str, error: &str) -> Self {
    self.failing.insert((branch_ref.to_string(), code.to_string()), error.to_string());
    self
  }

  pub fn with_fetch_error(mut self, error: &str) -> Self {
    self.fetch_error = Some(error.to_string());
    self
  }
}

impl CommitSource for FakeSource {
  fn fetch_all_remotes(&self) -> Result<()> {
    *self.fetch_calls.borrow_mut() += 1;
    match &self.fetch_error {
      Some(error) => Err(anyhow!("{error}")),
      None => Ok(()),
    }
  }

  fn query_log(&self, branch_ref: &str, filter: &str) -> Result<Vec<String>> {
    let key = (branch_ref.to_string(), filter.to_string());
    self.queries.borrow_mut().push(key.clone());
    if let Some(error) = self.failing.get(&key) {
      return Err(anyhow!("{error}"));
    }
    Ok(self.lines.get(&key).cloned().unwrap_or_default())
  }
}

/// Build a `hash|author|date|subject` line
pub fn log_line(hash: &str, author: &str, date: &str, subject: &str) -> String {
  format!("{hash}|{author}|{date}|{subject}")
}

pub fn codes(values: &[&str]) -> Vec<String> {
  values.iter().map(|value| value.to_string()).collect()
}

/// Record with a `YYYY-MM-DD` date at midnight UTC
pub fn record(hash: &str, date: &str, message: &str) -> CommitRecord {
  CommitRecord {
    hash: hash.to_string(),
    author: "Test Author".to_string(),
    date: crate::log_line::parse_git_date(date),
    message: message.to_string(),
    clean_message: crate::task_tag::strip_task_tag(message),
  }
}
