// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, LinkRankToml, RankConfig};

use std::path::Path;

use crate::error::Result;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config with `linkrank.toml` from the working directory applied.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    pub fn load_local_config(&mut self) {
        io::load_toml_config(self, Path::new("."));
    }

    pub fn load_from_dir(&mut self, dir: &Path) {
        io::load_toml_config(self, dir);
    }

    pub fn parse_toml(&mut self, content: &str) {
        io::parse_toml(self, content);
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if any rank setting is out of range.
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()
    }
}
