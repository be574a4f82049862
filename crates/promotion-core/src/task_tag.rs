use regex::Regex;
use std::sync::OnceLock;

// `[ABC-123]:` plus any whitespace after the colon
static TASK_TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn task_tag_pattern() -> &'static Regex {
  TASK_TAG_PATTERN.get_or_init(|| Regex::new(r"\[[A-Za-z0-9_]+-[0-9]+\]:\s*").unwrap())
}

/// Remove the first bracketed task tag from a subject line and trim the result.
///
/// The tag does not have to be at the start of the subject: `fix [OPS-7]: typo` becomes `fix typo`.
pub fn strip_task_tag(subject: &str) -> String {
  task_tag_pattern().replacen(subject.trim(), 1, "").trim().to_string()
}
