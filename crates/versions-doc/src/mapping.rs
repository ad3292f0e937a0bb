use crate::model::VersionsMapping;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::instrument;

/// Load the versions mapping from disk.
///
/// A missing file is not an error: the mapping is optional and an absent file
/// simply means no version has an assigned status yet. Malformed JSON is
/// fatal and propagates to the caller.
#[instrument]
pub fn load_mapping(path: &Path) -> Result<VersionsMapping> {
  if !path.exists() {
    tracing::debug!("versions mapping not found, using empty mapping");
    return Ok(VersionsMapping::new());
  }

  let raw = std::fs::read_to_string(path).with_context(|| format!("failed to read versions mapping at {}", path.display()))?;
  serde_json::from_str(&raw).with_context(|| format!("malformed versions mapping at {}", path.display()))
}
