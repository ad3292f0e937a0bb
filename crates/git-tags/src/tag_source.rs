use crate::executor::GitCommandExecutor;
use anyhow::Result;
use tracing::instrument;

/// Source of version tags for the sync pipeline.
///
/// The production implementation shells out to git; tests substitute a fake
/// source so no process needs to be spawned.
pub trait TagSource {
  fn tags(&self) -> Result<Vec<String>>;
}

/// Lists tags of a local git repository via `git tag`.
#[derive(Clone, Debug)]
pub struct GitTagSource {
  executor: GitCommandExecutor,
  repo_path: String,
}

impl GitTagSource {
  pub fn new(repo_path: impl Into<String>) -> Self {
    Self {
      executor: GitCommandExecutor::new(),
      repo_path: repo_path.into(),
    }
  }

  pub fn with_executor(executor: GitCommandExecutor, repo_path: impl Into<String>) -> Self {
    Self {
      executor,
      repo_path: repo_path.into(),
    }
  }
}

impl TagSource for GitTagSource {
  #[instrument(skip(self), fields(repo_path = %self.repo_path))]
  fn tags(&self) -> Result<Vec<String>> {
    let mut tags = self.executor.execute_command_lines(&["tag"], &self.repo_path)?;
    // Lexicographic, not semver order: "v10.0.0" sorts before "v2.0.0"
    tags.sort();
    Ok(tags)
  }
}
