// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::{Config, LinkRankToml};

pub const CONFIG_FILE: &str = "linkrank.toml";

/// Loads `linkrank.toml` from `dir` if present.
pub fn load_toml_config(config: &mut Config, dir: &Path) {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return;
    }
    match fs::read_to_string(&path) {
        Ok(content) => parse_toml(config, &content),
        Err(e) => log::warn!("could not read {}: {e}", path.display()),
    }
}

/// Applies a TOML document; malformed input keeps the current settings.
pub fn parse_toml(config: &mut Config, content: &str) {
    match toml::from_str::<LinkRankToml>(content) {
        Ok(parsed) => config.rank = parsed.rank,
        Err(e) => log::warn!("ignoring malformed {CONFIG_FILE}: {e}"),
    }
}
