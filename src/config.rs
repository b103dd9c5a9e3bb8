//! Project defaults (gridatlas.yaml).
//!
//! The defaults file supplies values for any option not given on the command
//! line. Explicit flags always win.
//!
//! ```yaml
//! format: RGBA4444
//! filter: Nearest,Nearest
//! repeat: none
//! out: both
//! margin: [1, 1]
//! spacing: [2, 2]
//! output_dir: assets/atlas
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, Result};

/// File name looked up next to the input image.
pub const CONFIG_FILE: &str = "gridatlas.yaml";

/// Which descriptor files to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Both,
    Atlas,
    Json,
}

impl OutputKind {
    pub fn writes_atlas(self) -> bool {
        matches!(self, OutputKind::Both | OutputKind::Atlas)
    }

    pub fn writes_json(self) -> bool {
        matches!(self, OutputKind::Both | OutputKind::Json)
    }
}

/// Defaults loaded from gridatlas.yaml. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Option<String>,
    pub filter: Option<String>,
    pub repeat: Option<String>,
    pub out: Option<OutputKind>,
    pub margin: Option<[u32; 2]>,
    pub spacing: Option<[u32; 2]>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load defaults from a YAML file.
    ///
    /// A relative `output_dir` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AtlasError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content).map_err(|message| AtlasError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        if let (Some(dir), Some(base)) = (config.output_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.output_dir = Some(base.join(dir));
            }
        }

        Ok(config)
    }

    /// Parse defaults from a YAML string.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Find the config to use for `input`.
    ///
    /// An explicit path must exist; otherwise gridatlas.yaml beside the input
    /// is used when present.
    pub fn discover(explicit: Option<&Path>, input: &Path) -> Result<Option<(PathBuf, Self)>> {
        if let Some(path) = explicit {
            return Self::load(path).map(|c| Some((path.to_path_buf(), c)));
        }

        let beside = input
            .parent()
            .map(|dir| dir.join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        if beside.is_file() {
            let config = Self::load(&beside)?;
            Ok(Some((beside, config)))
        } else {
            Ok(None)
        }
    }
}
