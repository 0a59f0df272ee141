//! CLI command implementations.

mod display;

pub mod languages;
pub mod stats;
pub mod symbols;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use gitsplain::{ExtractorConfig, Selection, workspace};

/// How `symbols` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One prompt-format line per symbol
    Text,
    /// A JSON array of symbols
    Json,
}

/// Options shared by the analysis commands.
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub include_tests: bool,
    pub max_files: Option<usize>,
}

impl RunOptions {
    /// Resolve the effective config: file first, then flags on top.
    fn resolve_config(&self, dir: &Path) -> gitsplain::Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::load(path)?,
            None => ExtractorConfig::load_or_default(dir)?,
        };
        if self.include_tests {
            config.exclude_tests = false;
        }
        if let Some(max_files) = self.max_files {
            config.max_files = max_files;
        }
        Ok(config)
    }
}

/// The files picked for analysis, with their contents.
struct Workload {
    config: ExtractorConfig,
    selection: Selection,
    files: Vec<(String, String)>,
}

fn load_workload(dir: &Path, options: &RunOptions) -> gitsplain::Result<Workload> {
    let config = options.resolve_config(dir)?;
    let tree = workspace::list_files(dir)?;
    let selection = gitsplain::select_parseable_files(&tree, config.max_files);
    let files = workspace::read_files(dir, &selection.files);
    Ok(Workload {
        config,
        selection,
        files,
    })
}
