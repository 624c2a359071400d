//! JSON file backend for the booking store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use deskaway_core::{BOOKINGS_STORAGE_KEY, BookingState, BookingStorage};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum FileStorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// On-disk layout: the snapshot keyed like the browser slot.
#[derive(Serialize, Deserialize)]
struct StoreFile {
    key: String,
    bookings: BookingState,
}

/// Booking snapshot kept in a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> FileStorageError {
        FileStorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookingStorage for FileStorage {
    type Error = FileStorageError;

    fn load(&self) -> Result<Option<BookingState>, Self::Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        let file: StoreFile = serde_json::from_str(&raw)?;
        if file.key != BOOKINGS_STORAGE_KEY {
            log::warn!("store file {} uses unknown key {}", self.path.display(), file.key);
            return Ok(None);
        }
        Ok(Some(file.bookings))
    }

    fn save(&self, state: &BookingState) -> Result<(), Self::Error> {
        let file = StoreFile {
            key: BOOKINGS_STORAGE_KEY.to_string(),
            bookings: state.clone(),
        };
        let raw = serde_json::to_string_pretty(&file)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, raw).map_err(|e| self.io_error(e))
    }
}
