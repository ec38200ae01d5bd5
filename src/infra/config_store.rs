// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores the LoaderConfig of a run.
//
// Why persist the config?
//   A shuffled split is only reproducible if the same source,
//   extension, ratios, seed and cleaning options are used
//   again. Writing them next to the run output lets a later
//   run rebuild the exact same partitions.
//
// File layout:
//   <dir>/
//     loader_config.json   ← LoaderConfig as pretty JSON
//
// A config file can also live anywhere and be loaded directly
// by path (the CLI's --config flag).

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::split_use_case::LoaderConfig;

/// File name used inside a config directory
pub const CONFIG_FILE: &str = "loader_config.json";

/// Manages a directory holding one loader_config.json.
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the config file in this store
    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Write `cfg` as pretty JSON, creating the directory if needed.
    /// Returns the path written.
    pub fn save(&self, cfg: &LoaderConfig) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path();
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved loader config to '{}'", path.display());
        Ok(path)
    }

    /// Load the config saved in this store
    pub fn load(&self) -> Result<LoaderConfig> {
        load_config_file(self.path())
    }
}

/// Read a LoaderConfig from any JSON file.
/// Missing fields fall back to LoaderConfig::default().
pub fn load_config_file(path: impl AsRef<Path>) -> Result<LoaderConfig> {
    let path = path.as_ref();

    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid loader config in '{}'", path.display()))?;

    Ok(cfg)
}
