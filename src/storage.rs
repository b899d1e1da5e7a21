use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;

/// Storage slot for the cart document.
pub const CART_KEY: &str = "cart";
/// Storage slot for the logged-in identity document.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// One named slot per key, string values. The original keeps these documents
/// in browser localStorage; backends here stand in for it so tests can use an
/// in-memory map and the demo a real directory.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slots.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.slots.lock().unwrap().remove(key);
        Ok(())
    }
}

/// One JSON file per key under a directory. The mutex serializes
/// read-modify-write sequences within the process, matching the effective
/// atomicity a single browser tab gets from run-to-completion execution.
/// Nothing guards against a second process on the same directory.
pub struct FileStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn open(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating store directory {}", dir.display()))?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock().unwrap();
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading slot {key}")),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().unwrap();
        fs::write(self.slot_path(key), value).with_context(|| format!("writing slot {key}"))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().unwrap();
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("removing slot {key}")),
        }
    }
}
