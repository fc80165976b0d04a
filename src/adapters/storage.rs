use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(self.resolve(path))?;
        Ok(data)
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }

    async fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(self.resolve(path))?;
        Ok(())
    }
}
