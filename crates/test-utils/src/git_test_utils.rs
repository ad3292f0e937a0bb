use git_tags::executor::GitCommandExecutor;
use std::path::Path;
use tempfile::TempDir;

// Constants for test Git user configuration
const TEST_USER_NAME: &str = "Test User";
const TEST_USER_EMAIL: &str = "test@example.com";

/// Git test repository wrapper with helper methods
pub struct TestRepo {
  dir: TempDir,
  git_executor: GitCommandExecutor,
}

impl Default for TestRepo {
  fn default() -> Self {
    Self::new()
  }
}

impl TestRepo {
  /// Creates a new test repository
  pub fn new() -> Self {
    let dir = tempfile::tempdir().unwrap();
    let git_executor = GitCommandExecutor::new();
    let repo_path = dir.path().to_str().unwrap();

    git_executor
      .execute_command(&["init"], repo_path)
      .unwrap_or_else(|e| panic!("Git init failed: {}", e));

    git_executor.execute_command(&["config", "user.name", TEST_USER_NAME], repo_path).unwrap();
    git_executor.execute_command(&["config", "user.email", TEST_USER_EMAIL], repo_path).unwrap();

    Self { dir, git_executor }
  }

  /// Get the repository path
  pub fn path(&self) -> &Path {
    self.dir.path()
  }

  /// Get the repository path as a string
  pub fn path_str(&self) -> &str {
    self.dir.path().to_str().unwrap()
  }

  /// Creates a commit with a file
  pub fn create_commit(&self, message: &str, filename: &str, content: &str) -> String {
    let file_path = self.path().join(filename);
    if let Some(parent) = file_path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&file_path, content).unwrap();

    self
      .git_executor
      .execute_command(&["add", filename], self.path_str())
      .unwrap_or_else(|e| panic!("Git add failed: {}", e));
    self
      .git_executor
      .execute_command(&["commit", "-m", message], self.path_str())
      .unwrap_or_else(|e| panic!("Git commit failed: {}", e));

    self.head()
  }

  /// Creates a lightweight tag pointing at the current HEAD
  pub fn create_tag(&self, tag_name: &str) {
    self
      .git_executor
      .execute_command(&["tag", tag_name], self.path_str())
      .unwrap_or_else(|e| panic!("Git tag failed: {}", e));
  }

  /// Creates an annotated tag pointing at the current HEAD
  pub fn create_annotated_tag(&self, tag_name: &str, message: &str) {
    self
      .git_executor
      .execute_command(&["tag", "-a", tag_name, "-m", message], self.path_str())
      .unwrap_or_else(|e| panic!("Git tag failed: {}", e));
  }

  /// Get the current HEAD commit hash
  pub fn head(&self) -> String {
    self.git_executor.execute_command(&["rev-parse", "HEAD"], self.path_str()).unwrap().trim().to_string()
  }
}
