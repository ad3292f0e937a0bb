use std::path::PathBuf;

/// Default name of the rendered versions document, relative to the repo root
pub const DEFAULT_DOC_FILE: &str = "UNSUPPORTED_VERSIONS.md";
/// Default name of the optional status mapping, relative to the repo root
pub const DEFAULT_MAPPING_FILE: &str = "versions-mapping.json";
/// Default issue template directory, relative to the repo root
pub const DEFAULT_TEMPLATE_DIR: &str = ".github/ISSUE_TEMPLATE";

/// Process-wide configuration for one sync run, constructed once at startup
/// and injected into the pipeline. Every path and the link URL can be
/// overridden, which keeps the pipeline testable against temp directories.
#[derive(Debug, Clone)]
pub struct SyncConfig {
  /// Repository whose tags are listed
  pub repo_root: PathBuf,
  /// Markdown document that gets fully overwritten each run
  pub doc_path: PathBuf,
  /// Optional JSON file mapping tag name to maintenance status
  pub mapping_path: PathBuf,
  /// Directory holding GitHub issue form templates
  pub template_dir: PathBuf,
  /// Base URL each version row links to, with the tag name appended
  pub repo_url: String,
}

impl SyncConfig {
  /// Configuration with all files resolved at their default locations under
  /// the given repository root
  pub fn for_root(root: impl Into<PathBuf>, repo_url: impl Into<String>) -> Self {
    let root = root.into();
    Self {
      doc_path: root.join(DEFAULT_DOC_FILE),
      mapping_path: root.join(DEFAULT_MAPPING_FILE),
      template_dir: root.join(DEFAULT_TEMPLATE_DIR),
      repo_root: root,
      repo_url: repo_url.into(),
    }
  }
}
