use crate::error::SfResult;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Persistent bitstring -> QoR memo for one design.
///
/// Every `put` rewrites the whole JSON file. Entries are never invalidated:
/// a key that is present is returned as-is, whatever produced it.
#[derive(Debug, Default)]
pub struct QorCache {
    path: Option<PathBuf>,
    entries: BTreeMap<String, f64>,
}

/// Cache key for a design: its file name without extension
/// (`benchmarks/log2.blif` -> `log2`).
pub fn design_key(design_path: &str) -> String {
    Path::new(design_path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| design_path.to_string())
}

pub fn cache_path_for(dir: impl AsRef<Path>, design_path: &str) -> PathBuf {
    dir.as_ref()
        .join(format!("qor_cache_{}.json", design_key(design_path)))
}

impl QorCache {
    /// Memo with no backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the memo stored at `path`. A missing or unreadable file yields
    /// an empty cache that will be written to `path` on the first `put`.
    pub fn load<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let entries = if path.exists() {
            match read_entries(&path) {
                Ok(entries) => {
                    debug!("Loaded {} cached QoR entries from {:?}", entries.len(), path);
                    entries
                }
                Err(e) => {
                    warn!("Ignoring unreadable QoR cache {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Self {
            path: Some(path),
            entries,
        }
    }

    pub fn for_design(dir: impl AsRef<Path>, design_path: &str) -> Self {
        Self::load(cache_path_for(dir, design_path))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts and immediately flushes the full map.
    pub fn put(&mut self, key: String, score: f64) -> SfResult<()> {
        self.entries.insert(key, score);
        self.flush()
    }

    pub fn flush(&self) -> SfResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> SfResult<BTreeMap<String, f64>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
