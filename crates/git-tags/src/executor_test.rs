use crate::executor::GitCommandExecutor;
use crate::git_info::GitInfo;
use pretty_assertions::assert_eq;
use test_log::test;

#[test]
fn test_parse_lines_filters_empty_lines() {
  let output = b"v1.0.0\nv1.1.0\n\nv2.0.0\n";
  let lines = GitCommandExecutor::parse_lines(output);
  assert_eq!(lines, vec!["v1.0.0", "v1.1.0", "v2.0.0"]);
}

#[test]
fn test_parse_lines_trims_whitespace() {
  let output = b"  v1.0.0  \n\t\nv2.0.0";
  let lines = GitCommandExecutor::parse_lines(output);
  assert_eq!(lines, vec!["v1.0.0", "v2.0.0"]);
}

#[test]
fn test_parse_lines_empty_output() {
  assert_eq!(GitCommandExecutor::parse_lines(b""), Vec::<String>::new());
  assert_eq!(GitCommandExecutor::parse_lines(b"\n"), Vec::<String>::new());
}

#[test]
fn test_blank_repository_path_is_rejected() {
  let executor = GitCommandExecutor::new();
  let result = executor.execute_command(&["tag"], "");
  assert!(result.is_err());
  assert!(result.unwrap_err().to_string().contains("repository path cannot be blank"));
}

#[test]
fn test_git_info_from_bogus_path_fails() {
  let result = GitInfo::from_path("/nonexistent/definitely-not-git");
  assert!(result.is_err());
}
