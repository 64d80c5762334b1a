use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::format::DEFAULT_VARIABLE;

/// File name looked up in the working directory by the binary
pub const CONFIG_FILE_NAME: &str = "gen-sources.toml";

/// Main configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Directory that manifest entries are written relative to
    pub base_dir: PathBuf,
    /// Directory to scan, relative to `base_dir`
    pub root: PathBuf,
    /// Manifest file, relative to `base_dir`
    pub output: PathBuf,
    /// Recognized filename suffixes (e.g. ".cpp")
    pub suffixes: Vec<String>,
    /// Name of the Meson list the fragment appends to
    pub variable: String,
    /// Glob patterns excluded from discovery (e.g. "third_party/**")
    pub ignore_patterns: Vec<String>,
    /// Descend into and match entries whose name starts with '.'
    pub include_hidden: bool,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Honor .gitignore / .ignore files found in the tree
    pub respect_ignore_files: bool,
    /// Drop duplicate entries after sorting
    pub dedup: bool,
    /// Backslash-escape `'` and `\` in entries instead of writing them verbatim
    pub escape_quotes: bool,
    /// Enable debug logging
    pub verbose: bool,
}

impl SourcesConfig {
    /// Rejects configurations that cannot produce a usable fragment.
    pub fn validate(&self) -> Result<()> {
        if self.suffixes.is_empty() {
            return Err(GenerateError::Config("no source suffixes configured".into()));
        }
        if let Some(empty) = self.suffixes.iter().find(|s| s.is_empty()) {
            return Err(GenerateError::Config(format!(
                "empty source suffix {:?} would match every file",
                empty
            )));
        }
        if self.variable.trim().is_empty() {
            return Err(GenerateError::Config("variable name must not be empty".into()));
        }
        Ok(())
    }

    /// Absolute-or-base-relative directory the walk starts from.
    pub fn scan_root(&self) -> PathBuf {
        self.base_dir.join(&self.root)
    }

    /// Where the manifest is written.
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output)
    }

    /// Loads `gen-sources.toml` from the current directory, if present.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_default_file() -> Result<Option<Self>> {
        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GenerateError::config_file(path, e))?;
        toml::from_str(&content).map_err(|e| GenerateError::config_file(path, e))
    }

    /// Effective configuration in the same format `load_from_file` reads.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            root: PathBuf::from("src"),
            output: PathBuf::from("src").join("meson.build"),
            suffixes: [".cpp", ".c", ".cc"].into_iter().map(String::from).collect(),
            variable: DEFAULT_VARIABLE.to_string(),
            ignore_patterns: Vec::new(),
            include_hidden: false,
            follow_links: false,
            respect_ignore_files: false,
            dedup: false,
            escape_quotes: false,
            verbose: false,
        }
    }
}
