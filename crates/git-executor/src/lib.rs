pub mod git_command_executor;
pub mod git_info;

pub use git_command_executor::GitCommandExecutor;
