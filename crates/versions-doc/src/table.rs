use crate::model::VersionsMapping;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::instrument;

/// Marker line telling readers the document is machine-produced
pub const AUTO_GENERATED_NOTICE: &str = "# THIS FILE IS AUTO-GENERATED. DO NOT EDIT MANUALLY.";

// Column widths are cosmetic padding only, nothing parses them back
const VERSION_COLUMN_WIDTH: usize = 71;
const STATUS_COLUMN_WIDTH: usize = 11;

/// Render the versions table as a markdown document.
///
/// Pure function: one notice line, two table header lines, then one row per
/// tag in input order. Tags absent from the mapping render as unsupported.
pub fn render_table(tags: &[String], mapping: &VersionsMapping, repo_url: &str) -> String {
  let mut lines = Vec::with_capacity(tags.len() + 3);
  lines.push(AUTO_GENERATED_NOTICE.to_string());
  lines.push(format!(
    "| {version:<vw$} | {status:<sw$} |",
    version = "Version",
    status = "Maintenance",
    vw = VERSION_COLUMN_WIDTH,
    sw = STATUS_COLUMN_WIDTH
  ));
  lines.push(format!("|{}|{}|", "-".repeat(VERSION_COLUMN_WIDTH + 2), "-".repeat(STATUS_COLUMN_WIDTH + 2)));

  for tag in tags {
    let status = mapping.get(tag).map(|info| info.status).unwrap_or_default();
    let link = format!("[{tag}]({repo_url}{tag})");
    lines.push(format!(
      "| {link:<vw$} | {glyph:<sw$} |",
      glyph = status.glyph(),
      vw = VERSION_COLUMN_WIDTH,
      sw = STATUS_COLUMN_WIDTH
    ));
  }

  let mut document = lines.join("\n");
  document.push('\n');
  document
}

/// Overwrite the versions document with the rendered content.
/// Plain truncate-and-write, no atomicity: the run model is a manual or
/// nightly re-run, a partial file from a crashed run is overwritten next time.
#[instrument(skip(content), fields(bytes = content.len()))]
pub fn write_doc(path: &Path, content: &str) -> Result<()> {
  std::fs::write(path, content).with_context(|| format!("failed to write versions document at {}", path.display()))
}
