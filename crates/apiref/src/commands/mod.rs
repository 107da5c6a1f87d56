//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod resolve;
pub(crate) mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use apiref_config::{CliSettings, Config};
use apiref_index::FsIndexSource;
use apiref_site::{FsContentStore, Reference, ReferenceConfig};
use clap::Args;

pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover apiref.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Index artifact directory (overrides config).
    #[arg(long, env = "APIREF_INDEX_DIR")]
    index_dir: Option<PathBuf>,

    /// Content fragment directory (overrides config).
    #[arg(long, env = "APIREF_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Root breadcrumb label (overrides config).
    #[arg(long)]
    site_name: Option<String>,

    /// Enable verbose output (index loads and request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration with these arguments applied on top.
    fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            index_dir: self.index_dir.clone(),
            content_dir: self.content_dir.clone(),
            site_name: self.site_name.clone(),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Open the reference described by `config` without loading anything.
fn open_reference(config: &Config) -> Reference {
    Reference::new(
        Arc::new(FsIndexSource::new(
            config.artifacts_resolved.index_dir.clone(),
        )),
        Arc::new(FsContentStore::new(
            config.artifacts_resolved.content_dir.clone(),
        )),
        ReferenceConfig {
            site_name: config.site.name.clone(),
        },
    )
}
