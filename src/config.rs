// src/config.rs
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Name of the optional local configuration file.
pub const CONFIG_FILE: &str = "costar.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub cast_file: PathBuf,
    pub ratings_file: PathBuf,
    pub verbose: bool,
}

#[derive(Debug, Default, Deserialize)]
struct CostarToml {
    #[serde(default)]
    data: DataSection,
}

#[derive(Debug, Default, Deserialize)]
struct DataSection {
    cast_file: Option<PathBuf>,
    ratings_file: Option<PathBuf>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cast_file: PathBuf::from("casts.json"),
            ratings_file: PathBuf::from("ratings.csv"),
            verbose: false,
        }
    }

    /// Creates a config and overlays local settings (`costar.toml`).
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    /// Overlays values from `costar.toml` in the working directory.
    /// A missing file leaves the defaults untouched.
    pub fn load_local_config(&mut self) {
        let Ok(content) = fs::read_to_string(CONFIG_FILE) else {
            return;
        };
        self.parse_toml(&content);
    }

    /// Applies the keys present in the given TOML content. A malformed
    /// file is ignored with a warning rather than aborting the run.
    pub fn parse_toml(&mut self, content: &str) {
        match toml::from_str::<CostarToml>(content) {
            Ok(parsed) => {
                if let Some(cast_file) = parsed.data.cast_file {
                    self.cast_file = cast_file;
                }
                if let Some(ratings_file) = parsed.data.ratings_file {
                    self.ratings_file = ratings_file;
                }
            }
            Err(e) => eprintln!("Ignoring malformed {CONFIG_FILE}: {e}"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
