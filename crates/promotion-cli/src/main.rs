mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use git_executor::GitCommandExecutor;
use promotion_core::{GitCliSource, run_report};

fn main() -> Result<()> {
  logging::init_logging();
  let args = cli::Args::parse();

  let config = args.tracker_config();
  tracing::debug!(repo = %args.repo, staging = %config.staging_ref(), production = %config.prod_ref(), "comparing branches");
  let source = GitCliSource::new(GitCommandExecutor::new(), args.repo.clone());
  let mut stdout = std::io::stdout().lock();

  run_report(&source, &config, &args.codes, &mut stdout)?;
  Ok(())
}

#[cfg(test)]
mod cli_test;
