use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tupper_engine_edit::TUPPER_K;

use crate::CliResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// `k` shown when none is given on the command line
    #[serde(default = "default_k")]
    pub default_k: String,

    /// Paint strokes toggle cells instead of setting them
    #[serde(default = "default_true")]
    pub blend: bool,

    #[serde(default = "default_on_char")]
    pub on_char: char,

    #[serde(default = "default_off_char")]
    pub off_char: char,
}

fn default_k() -> String {
    TUPPER_K.to_string()
}

fn default_true() -> bool {
    true
}

fn default_on_char() -> char {
    '#'
}

fn default_off_char() -> char {
    '.'
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            blend: true,
            on_char: default_on_char(),
            off_char: default_off_char(),
        }
    }
}

impl Options {
    /// Load options from `path`, or from `options.toml` in the config directory.
    ///
    /// # Errors
    ///
    /// Fails if an explicitly given file is missing, or if a file cannot be parsed.
    pub fn load_options(path: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Some(options_file) = Self::options_file() {
            if options_file.exists() {
                return Self::from_file(&options_file);
            }
        }
        Ok(Options::default())
    }

    pub fn options_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "tupper").map(|dirs| dirs.config_dir().join("options.toml"))
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)?;
        let options: Options = toml::from_str(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }
}
