use crate::git_info::GitInfo;
use anyhow::{Result, anyhow};
use std::process::Command;
use std::sync::{Arc, Mutex};
use tracing::instrument;

/// Runs git commands in a given repository and reports their output.
/// Git discovery happens lazily on first use and is cached for the
/// lifetime of the executor.
#[derive(Clone, Debug, Default)]
pub struct GitCommandExecutor {
  info: Arc<Mutex<Option<GitInfo>>>,
}

impl GitCommandExecutor {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[instrument(skip(self))]
  pub fn get_info(&self) -> Result<GitInfo> {
    let mut guard = self.info.lock().map_err(|e| anyhow!("Failed to acquire lock: {}", e))?;
    if guard.is_none() {
      let info = GitInfo::discover().map_err(|e| anyhow!(e))?;
      tracing::info!(git_version = %info.version, git_path = %info.path, "discovered git info");
      *guard = Some(info);
    }

    guard.as_ref().ok_or_else(|| anyhow!("Git info should be initialized")).cloned()
  }

  /// Split raw command output into trimmed, non-empty lines
  pub fn parse_lines(output: &[u8]) -> Vec<String> {
    output
      .split(|&b| b == b'\n')
      .filter_map(|line| {
        let line_str = String::from_utf8_lossy(line);
        let trimmed = line_str.trim();
        if !trimmed.is_empty() { Some(trimmed.to_string()) } else { None }
      })
      .collect()
  }

  fn run(&self, args: &[&str], repository_path: &str) -> Result<std::process::Output> {
    if repository_path.is_empty() {
      return Err(anyhow!("repository path cannot be blank"));
    }
    let git_info = self.get_info()?;

    Command::new(&git_info.path)
      .args(args)
      .current_dir(repository_path)
      .output()
      .map_err(|e| anyhow!("Failed to execute git command: {e}"))
  }

  fn command_failed<T>(&self, output: &std::process::Output, args: &[&str]) -> Result<T> {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    tracing::Span::current().record("success", false);
    tracing::error!(stderr = %stderr, "git command failed");
    Err(anyhow!("git command failed: git {}\nError: {stderr}", args.join(" ")))
  }

  #[instrument(
    skip(self),
    fields(
      git_command = args.join(" "),
      repository_path = repository_path,
      success = tracing::field::Empty,
    )
  )]
  pub fn execute_command(&self, args: &[&str], repository_path: &str) -> Result<String> {
    let output = self.run(args, repository_path)?;

    if output.status.success() {
      tracing::Span::current().record("success", true);
      Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
      self.command_failed(&output, args)
    }
  }

  /// Execute a git command and return its output as lines, filtering empty lines
  #[instrument(
    skip(self),
    fields(
      git_command = args.join(" "),
      repository_path = repository_path,
      success = tracing::field::Empty,
    )
  )]
  pub fn execute_command_lines(&self, args: &[&str], repository_path: &str) -> Result<Vec<String>> {
    let output = self.run(args, repository_path)?;

    if output.status.success() {
      tracing::Span::current().record("success", true);
      Ok(Self::parse_lines(&output.stdout))
    } else {
      self.command_failed(&output, args)
    }
  }
}
