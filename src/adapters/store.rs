use crate::domain::model::Blend;
use crate::domain::ports::BlendStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const STORE_FILE: &str = "blends.json";

/// Blend store persisted as a JSON array in a single file under `base_path`.
/// A missing file loads as an empty list; `reset` removes the file.
#[derive(Debug, Clone)]
pub struct JsonBlendStore {
    base_path: String,
}

impl JsonBlendStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn store_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(STORE_FILE)
    }
}

impl BlendStore for JsonBlendStore {
    fn load(&self) -> Result<Vec<Blend>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn append(&self, blend: Blend) -> Result<()> {
        let mut blends = self.load()?;
        blends.push(blend);

        let path = self.store_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(&blends)?)?;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let path = self.store_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory store used by unit tests and as a scratch backend.
#[derive(Debug, Default)]
pub struct MemoryBlendStore {
    blends: Mutex<Vec<Blend>>,
}

impl BlendStore for MemoryBlendStore {
    fn load(&self) -> Result<Vec<Blend>> {
        Ok(self.blends.lock().unwrap().clone())
    }

    fn append(&self, blend: Blend) -> Result<()> {
        self.blends.lock().unwrap().push(blend);
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.blends.lock().unwrap().clear();
        Ok(())
    }
}
