use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::StoreError;

use super::{KeyValueStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// File-per-key blob store rooted at a directory: key `k` lives in `k.json`.
/// Writes stage to a temporary file and rename into place so a failed write
/// never clobbers the previous blob.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Write {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StoreError::Read {
                key: key.to_string(),
                source,
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let tmp = tmp_path(&path);
        let write = || -> std::io::Result<()> {
            fs::write(&tmp, value)?;
            fs::rename(&tmp, &path)
        };
        write().map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
