//! Write-only persistence sinks for the accumulated company list.
//!
//! A sink is handed to the store at construction time. Writes are
//! fire-and-forget: the store never reads a sink back and a failed write
//! never reaches the caller.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::types::Company;

/// Destination for the key-value write performed on append
pub trait ItemSink: Send + Sync {
    /// Store `items` under `key`, replacing any previous value
    fn write(&self, key: &str, items: &[Company]) -> Result<()>;
}

/// Sink that discards every write
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ItemSink for NullSink {
    fn write(&self, _key: &str, _items: &[Company]) -> Result<()> {
        Ok(())
    }
}

/// In-memory sink; clones share the same storage
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON last written under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Companies last written under `key`
    pub fn companies(&self, key: &str) -> Option<Vec<Company>> {
        self.get(key).and_then(|raw| serde_json::from_str(&raw).ok())
    }
}

impl ItemSink for MemorySink {
    fn write(&self, key: &str, items: &[Company]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.entries.lock().insert(key.to_string(), raw);
        Ok(())
    }
}

/// Sink writing one `<key>.json` file per key into a directory
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ItemSink for JsonFileSink {
    fn write(&self, key: &str, items: &[Company]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string(items)?;
        fs::write(self.path_for(key), content)?;
        Ok(())
    }
}
