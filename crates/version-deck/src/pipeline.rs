use crate::config::SyncConfig;
use anyhow::Result;
use git_tags::tag_source::TagSource;
use std::path::PathBuf;
use template_sync::update::update_templates;
use tracing::instrument;
use versions_doc::mapping::load_mapping;
use versions_doc::table::{render_table, write_doc};

/// What a completed run produced, for the final summary
#[derive(Debug)]
pub struct SyncReport {
  pub tag_count: usize,
  pub doc_path: PathBuf,
  pub updated_templates: Vec<PathBuf>,
}

/// Run the sync pipeline: list tags, load the status mapping, render the
/// versions table, overwrite the document, rewrite issue templates.
///
/// A failing tag source is absorbed into an empty tag list so the run still
/// produces a (near-empty) document. Malformed inputs and write failures are
/// fatal and propagate.
#[instrument(skip(config, tag_source))]
pub fn run(config: &SyncConfig, tag_source: &dyn TagSource) -> Result<SyncReport> {
  let tags = match tag_source.tags() {
    Ok(tags) => tags,
    Err(e) => {
      tracing::warn!(error = %e, "unable to retrieve tags, continuing with an empty tag list");
      Vec::new()
    }
  };

  let mapping = load_mapping(&config.mapping_path)?;
  let document = render_table(&tags, &mapping, &config.repo_url);
  write_doc(&config.doc_path, &document)?;
  let updated_templates = update_templates(&config.template_dir, &tags)?;

  Ok(SyncReport {
    tag_count: tags.len(),
    doc_path: config.doc_path.clone(),
    updated_templates,
  })
}
