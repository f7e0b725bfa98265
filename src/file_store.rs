//! JSON-file [`KeyValueStore`], the command-line stand-in for browser local
//! storage.
//!
//! The file holds one JSON object of string keys to string values, exactly
//! like local storage: the profile is a JSON document stored *as a string*
//! under `userInterestProfile`. Every write re-reads and rewrites the whole
//! file, so concurrent processes are last-writer-wins. A garbled file reads as
//! empty rather than failing every operation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use site_persona_core::store::KeyValueStore;
use tracing::warn;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry, plus whether anything had to be discarded.
    ///
    /// Only an I/O failure is an error. Content that is not a JSON object is
    /// read as an empty store, and entries whose value is not a string are
    /// skipped, so the next write replaces them with a valid file.
    fn read_all(&self) -> Result<(BTreeMap<String, String>, bool)> {
        if !self.path.exists() {
            return Ok((BTreeMap::new(), false));
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok((BTreeMap::new(), false));
        }

        let obj = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(obj)) => obj,
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "storage file is not a JSON object; reading as empty");
                return Ok((BTreeMap::new(), true));
            }
        };

        let mut entries = BTreeMap::new();
        let mut discarded = false;
        for (key, value) in obj {
            match value {
                Value::String(s) => {
                    entries.insert(key, s);
                }
                _ => {
                    warn!(key = %key, "dropping non-string storage entry");
                    discarded = true;
                }
            }
        }
        Ok((entries, discarded))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create storage directory: {}", parent.display())
                })?;
            }
        }
        let body = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)
            .with_context(|| format!("Failed to write storage file: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace storage file: {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.0.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let (mut entries, discarded) = self.read_all()?;
        if entries.remove(key).is_some() || discarded {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}
