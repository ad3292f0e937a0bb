use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Sentinel option appended after the tag list so reporters can always pick
/// something when their version is not offered
pub const FALLBACK_OPTION: &str = "Another or unknown";

/// A GitHub issue form document.
///
/// Only the `body` block list is modeled; every other top-level key
/// (name, description, labels, ...) round-trips through `extra` untouched.
/// Key order and cosmetic formatting may change on reserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTemplate {
  #[serde(flatten)]
  pub extra: Mapping,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub body: Vec<TemplateBlock>,
}

/// One form field inside an issue template body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateBlock {
  #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
  pub kind: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Mapping::is_empty")]
  pub attributes: Mapping,
  #[serde(flatten)]
  pub extra: Mapping,
}

impl TemplateBlock {
  /// The single mutation target: the dropdown asking which version the
  /// reporter runs
  pub fn is_version_dropdown(&self) -> bool {
    self.kind == "dropdown" && self.id.as_deref() == Some("version")
  }

  /// Replace the block's option list wholesale (overwrite, not merge)
  pub fn set_options(&mut self, options: Vec<String>) {
    let options = Value::Sequence(options.into_iter().map(Value::String).collect());
    self.attributes.insert(Value::String("options".to_string()), options);
  }

  pub fn options(&self) -> Option<Vec<String>> {
    let options = self.attributes.get("options")?.as_sequence()?;
    Some(options.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
  }
}
