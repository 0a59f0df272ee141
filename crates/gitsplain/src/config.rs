//! Extraction configuration.
//!
//! Settings are plain data with defaults matching the analysis pipeline:
//! tests are excluded and at most 50 files are parsed per run. A YAML file
//! (`.gitsplain.yaml` by convention) can override any of them:
//!
//! ```yaml
//! exclude-tests: true
//! max-files: 200
//! extra-test-dirs:
//!   - e2e
//!   - fixtures
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Conventional config file name, looked up in the analyzed directory.
pub const CONFIG_FILE_NAME: &str = ".gitsplain.yaml";

/// Default cap on files parsed per analysis run.
pub const DEFAULT_MAX_FILES: usize = 50;

/// Settings for a symbol extraction run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtractorConfig {
    /// Skip files classified as tests
    pub exclude_tests: bool,

    /// Maximum number of parseable files to analyze
    pub max_files: usize,

    /// Directory names treated as test directories in addition to the
    /// built-in set
    pub extra_test_dirs: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            exclude_tests: true,
            max_files: DEFAULT_MAX_FILES,
            extra_test_dirs: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Load `dir/.gitsplain.yaml` if it exists, otherwise the defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from YAML text. Missing keys take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a YAML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
