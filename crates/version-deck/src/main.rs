use anyhow::Result;
use clap::Parser;
use git_tags::tag_source::GitTagSource;
use std::path::PathBuf;
use version_deck::config::SyncConfig;
use version_deck::pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sync version-support docs and issue-template dropdowns with git tags", long_about = None)]
struct Args {
  /// Repository root holding the document, mapping and issue templates
  #[arg(short, long, default_value = ".")]
  root: PathBuf,

  /// Base URL that version rows link to (tag name is appended)
  #[arg(long, default_value = "https://github.com/version-deck/version-deck/tree/")]
  repo_url: String,

  /// Override the rendered markdown document path
  #[arg(long)]
  doc: Option<PathBuf>,

  /// Override the versions mapping path
  #[arg(long)]
  mapping: Option<PathBuf>,

  /// Override the issue template directory
  #[arg(long)]
  templates: Option<PathBuf>,
}

fn init_logging() {
  use tracing_subscriber::layer::SubscriberExt;
  use tracing_subscriber::util::SubscriberInitExt;

  let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
}

fn main() -> Result<()> {
  init_logging();
  let args = Args::parse();

  let mut config = SyncConfig::for_root(&args.root, args.repo_url);
  if let Some(doc) = args.doc {
    config.doc_path = doc;
  }
  if let Some(mapping) = args.mapping {
    config.mapping_path = mapping;
  }
  if let Some(templates) = args.templates {
    config.template_dir = templates;
  }

  let tag_source = GitTagSource::new(args.root.to_string_lossy().into_owned());
  let report = pipeline::run(&config, &tag_source)?;

  println!(
    "Updated {} with {} version tags, rewrote {} issue template(s).",
    report.doc_path.display(),
    report.tag_count,
    report.updated_templates.len()
  );

  Ok(())
}
