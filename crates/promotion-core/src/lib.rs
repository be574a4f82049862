//! Tracks which task-tagged staging commits have reached the production branch.

pub mod config;
pub mod diff;
pub mod fetcher;
pub mod log_line;
pub mod model;
pub mod report;
pub mod run;
pub mod source;
pub mod task_tag;

pub use config::TrackerConfig;
pub use model::CommitRecord;
pub use run::{PromotionReport, run_report};
pub use source::{CommitSource, GitCliSource};

#[cfg(test)]
mod test_support;




#[cfg(test)]
mod log_line_test;
