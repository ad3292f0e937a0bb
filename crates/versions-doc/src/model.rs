use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maintenance status of a released version.
///
/// The mapping file is hand-maintained, so decoding is tolerant: any status
/// string this enum does not know collapses to `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
  Supported,
  Beta,
  Skipped,
  #[default]
  #[serde(other)]
  Unsupported,
}

impl MaintenanceStatus {
  /// Glyph shown in the Maintenance column of the rendered table
  pub fn glyph(self) -> &'static str {
    match self {
      Self::Supported => "✅",
      Self::Beta => "⚠️",
      Self::Skipped => "⏭️",
      Self::Unsupported => "❎",
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionInfo {
  #[serde(default)]
  pub status: MaintenanceStatus,
}

/// Hand-maintained mapping from tag name to version metadata.
/// Loaded once per run, read-only afterwards. Tags absent from the mapping
/// are treated as unsupported.
pub type VersionsMapping = HashMap<String, VersionInfo>;
