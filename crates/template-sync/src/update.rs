use crate::template::{FALLBACK_OPTION, IssueTemplate};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Rewrite the version dropdown of every issue template in `dir`.
///
/// A missing directory is absorbed with a warning (repositories without issue
/// forms are fine); a template that fails to parse or write aborts the whole
/// loop. Returns the paths that were rewritten.
#[instrument(skip(tags), fields(tag_count = tags.len()))]
pub fn update_templates(dir: &Path, tags: &[String]) -> Result<Vec<PathBuf>> {
  if !dir.exists() {
    tracing::warn!(dir = %dir.display(), "issue template directory not found, skipping template update");
    return Ok(Vec::new());
  }

  let mut entries = std::fs::read_dir(dir)
    .with_context(|| format!("failed to read issue template directory {}", dir.display()))?
    .collect::<Result<Vec<_>, _>>()
    .with_context(|| format!("failed to list issue template directory {}", dir.display()))?;
  // read_dir order is platform-dependent, process templates in a stable order
  entries.sort_by_key(|entry| entry.file_name());

  let mut updated = Vec::new();
  for entry in entries {
    let path = entry.path();
    if !path.is_file() || !has_yaml_extension(&path) {
      continue;
    }

    if update_template_file(&path, tags)? {
      tracing::info!(file = %path.display(), "updated issue template with new version tags");
      updated.push(path);
    }
  }

  Ok(updated)
}

fn has_yaml_extension(path: &Path) -> bool {
  matches!(path.extension().and_then(|ext| ext.to_str()), Some("yaml" | "yml"))
}

/// Returns true when the file contained a version dropdown and was rewritten.
/// Files without a matching block are left byte-identical on disk.
fn update_template_file(path: &Path, tags: &[String]) -> Result<bool> {
  let raw = std::fs::read_to_string(path).with_context(|| format!("failed to read issue template {}", path.display()))?;
  let mut template: IssueTemplate = serde_yaml::from_str(&raw).with_context(|| format!("malformed issue template {}", path.display()))?;

  // Only the first matching dropdown is rewritten, later duplicates are left alone
  let Some(block) = template.body.iter_mut().find(|block| block.is_version_dropdown()) else {
    return Ok(false);
  };

  let mut options = tags.to_vec();
  options.push(FALLBACK_OPTION.to_string());
  block.set_options(options);

  let serialized = serde_yaml::to_string(&template).with_context(|| format!("failed to serialize issue template {}", path.display()))?;
  std::fs::write(path, serialized).with_context(|| format!("failed to write issue template {}", path.display()))?;
  Ok(true)
}
