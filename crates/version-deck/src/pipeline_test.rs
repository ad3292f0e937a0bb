use crate::config::SyncConfig;
use crate::pipeline::run;
use anyhow::{Result, anyhow};
use git_tags::tag_source::{GitTagSource, TagSource};
use pretty_assertions::assert_eq;
use std::path::Path;
use test_log::test;
use test_utils::git_test_utils::TestRepo;

const REPO_URL: &str = "https://github.com/example/project/tree/";

struct FakeTagSource {
  tags: Vec<String>,
}

impl FakeTagSource {
  fn new(tags: &[&str]) -> Self {
    Self {
      tags: tags.iter().map(|s| s.to_string()).collect(),
    }
  }
}

impl TagSource for FakeTagSource {
  fn tags(&self) -> Result<Vec<String>> {
    Ok(self.tags.clone())
  }
}

struct FailingTagSource;

impl TagSource for FailingTagSource {
  fn tags(&self) -> Result<Vec<String>> {
    Err(anyhow!("git command failed: git tag"))
  }
}

fn config_for(root: &Path) -> SyncConfig {
  SyncConfig::for_root(root, REPO_URL)
}

#[test]
fn test_failing_tag_source_is_absorbed() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_for(dir.path());

  let report = run(&config, &FailingTagSource).unwrap();

  assert_eq!(report.tag_count, 0);
  assert!(report.updated_templates.is_empty());
  // header-only document still gets written
  let document = std::fs::read_to_string(&config.doc_path).unwrap();
  assert_eq!(document.lines().count(), 3);
}

#[test]
fn test_run_with_mapping_and_templates() {
  let dir = tempfile::tempdir().unwrap();
  let root = dir.path();
  std::fs::write(root.join("versions-mapping.json"), r#"{ "v1.0.0": { "status": "supported" } }"#).unwrap();

  let template_dir = root.join(".github/ISSUE_TEMPLATE");
  std::fs::create_dir_all(&template_dir).unwrap();
  std::fs::write(
    template_dir.join("bug_report.yaml"),
    "name: Bug report\nbody:\n  - type: dropdown\n    id: version\n    attributes:\n      label: Version\n      options: [old1]\n",
  )
  .unwrap();

  let config = config_for(root);
  let report = run(&config, &FakeTagSource::new(&["v1.0.0", "v2.0.0"])).unwrap();

  assert_eq!(report.tag_count, 2);
  assert_eq!(report.updated_templates, vec![template_dir.join("bug_report.yaml")]);

  let document = std::fs::read_to_string(&config.doc_path).unwrap();
  let rows: Vec<&str> = document.lines().skip(3).collect();
  assert_eq!(rows.len(), 2);
  assert!(rows[0].contains("[v1.0.0]") && rows[0].contains("✅"));
  assert!(rows[1].contains("[v2.0.0]") && rows[1].contains("❎"));

  let template: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(template_dir.join("bug_report.yaml")).unwrap()).unwrap();
  let options = template["body"][0]["attributes"]["options"].as_sequence().unwrap();
  let options: Vec<&str> = options.iter().filter_map(|v| v.as_str()).collect();
  assert_eq!(options, vec!["v1.0.0", "v2.0.0", "Another or unknown"]);
}

#[test]
fn test_missing_template_directory_is_absorbed() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_for(dir.path());

  let report = run(&config, &FakeTagSource::new(&["v1.0.0"])).unwrap();

  assert_eq!(report.tag_count, 1);
  assert!(report.updated_templates.is_empty());
  assert!(!config.template_dir.exists());
  assert!(config.doc_path.exists());
}

#[test]
fn test_malformed_mapping_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("versions-mapping.json"), "{ not json").unwrap();

  let result = run(&config_for(dir.path()), &FakeTagSource::new(&["v1.0.0"]));
  assert!(result.is_err());
}

#[test]
fn test_end_to_end_with_git_repository() {
  let repo = TestRepo::new();
  repo.create_commit("Initial commit", "README.md", "# Test");
  repo.create_tag("v10.0.0");
  repo.create_annotated_tag("v2.0.0", "release v2");
  repo.create_tag("v1.0.0");

  let out = tempfile::tempdir().unwrap();
  let config = config_for(out.path());
  let tag_source = GitTagSource::new(repo.path_str());

  let report = run(&config, &tag_source).unwrap();
  assert_eq!(report.tag_count, 3);

  // lexicographic order: v10.0.0 sorts before v2.0.0
  let document = std::fs::read_to_string(&config.doc_path).unwrap();
  let rows: Vec<&str> = document.lines().skip(3).collect();
  assert!(rows[0].contains("[v1.0.0]"));
  assert!(rows[1].contains("[v10.0.0]"));
  assert!(rows[2].contains("[v2.0.0]"));
}
