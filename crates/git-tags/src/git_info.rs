use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitInfo {
  pub version: String,
  pub path: String,
}

impl GitInfo {
  // resolves the git executable from PATH and records its version
  pub fn discover() -> Result<Self, String> {
    Self::from_path("git")
  }

  pub fn from_path(git_path: &str) -> Result<Self, String> {
    let output = Command::new(git_path)
      .arg("version")
      .output()
      .map_err(|e| format!("Could not run git executable at '{git_path}': {e}"))?;

    if !output.status.success() {
      return Err(format!("'{git_path} version' failed: {}", String::from_utf8_lossy(&output.stderr).trim()));
    }

    let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(Self {
      version: raw.strip_prefix("git version ").unwrap_or(&raw).to_string(),
      path: git_path.to_string(),
    })
  }
}
