//! File storage backend
//!
//! One `<key>.json` document per storage key under a data directory.
//!
//! Writes land in a temp file that is renamed over the final path, so an
//! interrupted write leaves the previous document intact rather than a
//! half-written one.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PetbaseError, Result};

use super::StorageBackend;

/// Durable backend persisting each key as a JSON document on disk
pub struct FileBackend {
    data_dir: PathBuf,
    sync_writes: bool,
}

impl FileBackend {
    const DOC_EXTENSION: &'static str = "json";
    const TMP_SUFFIX: &'static str = ".tmp";

    /// Open or create a backend rooted at `data_dir`
    pub fn open(data_dir: impl Into<PathBuf>, sync_writes: bool) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| PetbaseError::StorageWrite {
            key: data_dir.display().to_string(),
            source,
        })?;

        Ok(Self {
            data_dir,
            sync_writes,
        })
    }

    /// Path of the document holding `key`
    pub fn document_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{key}.{}", Self::DOC_EXTENSION))
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{key}.{}{}", Self::DOC_EXTENSION, Self::TMP_SUFFIX))
    }

    fn write_err(key: &str, source: std::io::Error) -> PetbaseError {
        PetbaseError::StorageWrite {
            key: key.to_string(),
            source,
        }
    }

    fn read_err(key: &str, source: std::io::Error) -> PetbaseError {
        PetbaseError::StorageRead {
            key: key.to_string(),
            source,
        }
    }

    fn fsync_dir(dir: &Path, key: &str) -> Result<()> {
        let handle = File::open(dir).map_err(|e| Self::write_err(key, e))?;
        handle.sync_all().map_err(|e| Self::write_err(key, e))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.document_path(key);

        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "no document on disk, reading as absent");
                return Ok(None);
            }
            Err(e) => return Err(Self::read_err(key, e)),
        };

        let mut raw = String::new();
        file.read_to_string(&mut raw)
            .map_err(|e| Self::read_err(key, e))?;

        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let tmp = self.tmp_path(key);
        let path = self.document_path(key);

        // Step 1: Write the full document to a temp file
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&tmp)
                .map_err(|e| Self::write_err(key, e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| Self::write_err(key, e))?;

            if self.sync_writes {
                file.sync_all().map_err(|e| Self::write_err(key, e))?;
            }
        }

        // Step 2: Atomically replace the previous document
        fs::rename(&tmp, &path).map_err(|e| Self::write_err(key, e))?;

        if self.sync_writes {
            Self::fsync_dir(&self.data_dir, key)?;
        }

        debug!(key, bytes = value.len(), "document persisted");
        Ok(())
    }
}
