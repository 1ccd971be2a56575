use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use cp_core::ports::StateStoragePort;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

/// Stores every key in a single JSON object file.
///
/// 所有键值保存在同一个 JSON 文件中，写入使用临时文件 + rename。
///
/// Writes go through a temp file and a rename, so the file on disk is always
/// either the previous or the new complete object.
pub struct JsonFileStateStorage {
    path: PathBuf,
    // serializes the read-merge-write of the whole file
    file_lock: Mutex<()>,
}

impl JsonFileStateStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create state dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn read_object(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read state failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)
            .with_context(|| format!("parse state failed: {}", self.path.display()))?
        {
            Value::Object(map) => Ok(map),
            _ => bail!(
                "state file is not a JSON object: {}",
                self.path.display()
            ),
        }
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp state failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp state to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl StateStoragePort for JsonFileStateStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let _guard = self.file_lock.lock().await;
        let mut object = self.read_object().await?;
        Ok(object.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let _guard = self.file_lock.lock().await;
        let mut object = self.read_object().await?;
        object.insert(key.to_string(), value);

        let content = serde_json::to_string_pretty(&Value::Object(object))
            .context("serialize state failed")?;
        self.atomic_write(&content).await?;

        tracing::debug!(key, path = %self.path.display(), "state key written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_file_reads_as_absent_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStateStorage::new(dir.path().join("state.json"));

        assert_eq!(storage.get("clipboardHistory").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_creates_parent_dirs_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let storage = JsonFileStateStorage::new(&path);

        storage.set("a", json!([1, 2])).await.unwrap();
        storage.set("b", json!({ "maxItems": 10 })).await.unwrap();

        assert_eq!(storage.get("a").await.unwrap(), Some(json!([1, 2])));
        assert_eq!(storage.get("b").await.unwrap(), Some(json!({ "maxItems": 10 })));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn non_object_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "[1,2,3]").unwrap();

        let storage = JsonFileStateStorage::new(&path);
        let err = storage.get("a").await.unwrap_err();

        assert!(err.to_string().contains("not a JSON object"));
        assert!(storage.set("a", json!(1)).await.is_err());
    }
}
