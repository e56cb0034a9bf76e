use crate::{
    error::{Result, TaskFlowError},
    storage::Storage,
};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

/// File-based storage: one JSON file per key
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TASKFLOW_DIR: &'static str = ".taskflow";
    const BLOB_EXTENSION: &'static str = "json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::TASKFLOW_DIR),
        }
    }

    /// Directory holding the blob files
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn blob_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(TaskFlowError::StorageError(format!(
                "invalid storage key: {:?}",
                key
            )));
        }
        Ok(self
            .root_path
            .join(format!("{}.{}", key, Self::BLOB_EXTENSION)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    /// Creates the storage directory
    pub async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let gitignore_path = self.root_path.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(gitignore_path, "# Interrupted writes\n.tmp*\n").await?;
        }

        Ok(())
    }

    pub async fn is_initialized(&self) -> bool {
        self.root_path.exists()
    }
}

/// Writes into a temp file in `dir`, then renames it over `path`.
/// The temp file is deleted if anything fails before the rename.
fn atomic_write(dir: &Path, path: &Path, data: &[u8]) -> Result<()> {
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.blob_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, blob: &str) -> Result<()> {
        let file_path = self.blob_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        let dir = self.root_path.clone();
        let data = blob.as_bytes().to_vec();
        tokio::task::spawn_blocking(move || atomic_write(&dir, &file_path, &data))
            .await
            .map_err(|e| TaskFlowError::StorageError(format!("blob write task failed: {e}")))?
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file_path = self.blob_file(key)?;

        if file_path.exists() {
            fs::remove_file(file_path).await?;
        }
        Ok(())
    }
}
