use crate::log_line::{LineOutcome, is_merge_subject, parse_git_date, parse_log_line};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use test_log::test;

#[test]
fn test_parse_log_line_fields() {
  let LineOutcome::Commit(commit) = parse_log_line("abc1234def|Jane Doe|2024-02-01 10:15:00 +0100|[TICK-1]: add X") else {
    panic!("expected a commit");
  };

  assert_eq!(commit.hash, "abc1234def");
  assert_eq!(commit.author, "Jane Doe");
  assert_eq!(commit.message, "[TICK-1]: add X");
  assert_eq!(commit.clean_message, "add X");
  assert_eq!(commit.date.map(|d| d.with_timezone(&Utc)), Some(Utc.with_ymd_and_hms(2024, 2, 1, 9, 15, 0).unwrap()));
}

#[test]
fn test_subject_with_pipes_is_kept_whole() {
  let LineOutcome::Commit(commit) = parse_log_line("abc|Jane|2024-02-01|[TICK-1]: a | b | c") else {
    panic!("expected a commit");
  };

  assert_eq!(commit.message, "[TICK-1]: a | b | c");
  assert_eq!(commit.clean_message, "a | b | c");
}

#[test]
fn test_merge_subjects_are_skipped() {
  assert_eq!(parse_log_line("abc|Jane|2024-02-01|Merge branch 'feature' into staging"), LineOutcome::Merge);
  assert_eq!(parse_log_line("abc|Jane|2024-02-01|Merged PR 12: TICK-1"), LineOutcome::Merge);

  assert!(is_merge_subject("Merge branch 'x'"));
  assert!(is_merge_subject("Merged in feature"));
  assert!(!is_merge_subject("merge branch lowercase"));
  assert!(!is_merge_subject("[TICK-1]: Merge branch helper"));
  assert!(!is_merge_subject("Merge pull request #1"));
}

#[test]
fn test_short_lines_are_malformed() {
  assert_eq!(parse_log_line("abc|Jane|2024-02-01"), LineOutcome::Malformed);
  assert_eq!(parse_log_line("just text"), LineOutcome::Malformed);
}

#[test]
fn test_unparseable_date_is_none() {
  let LineOutcome::Commit(commit) = parse_log_line("abc|Jane|yesterday-ish|[TICK-1]: add X") else {
    panic!("expected a commit");
  };

  assert_eq!(commit.date, None);
  assert_eq!(commit.display_date(), "unknown");
  assert_eq!(commit.iso_timestamp(), None);
}

#[test]
fn test_parse_git_date_formats() {
  let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

  for value in ["2024-03-01 00:00:00 +0000", "2024-03-01T02:00:00+02:00", "2024-03-01", " 2024-03-01 "] {
    assert_eq!(parse_git_date(value).map(|d| d.with_timezone(&Utc)), Some(expected), "value: {value:?}");
  }

  assert_eq!(parse_git_date(""), None);
  assert_eq!(parse_git_date("2024-13-01"), None);
}
