//! Catalog snapshot storage with XDG path support.
//!
//! This module persists a [`Catalog`] as JSON, by default at
//! `~/.cache/stringlens/catalog.json`.
//!
//! Both synchronous and asynchronous I/O methods are provided:
//! - `save()`, `load()` - Synchronous methods using `std::fs`
//! - `save_async()`, `load_async()` - Asynchronous methods using `tokio::fs`
//!
//! Snapshots are best effort: writes go through a temp file and a rename, but
//! nothing is fsynced and there is no locking between processes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::Catalog;

/// Default snapshot filename.
const CATALOG_FILENAME: &str = "catalog.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "stringlens";

/// Errors that can occur during catalog storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine XDG cache directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write catalog file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create catalog directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file delete.
    #[error("failed to delete catalog file '{path}': {source}")]
    DeleteError {
        /// The path that failed to delete.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true if this is a read error caused by a missing file.
    fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ReadError { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistent storage for a [`Catalog`].
///
/// `CatalogStore` is [`Send`] and [`Sync`], but concurrent `save()` calls from
/// several threads or processes race: the last rename wins. In CLI usage the
/// store is owned by a single command and no coordination is needed.
///
/// # Example
///
/// ```no_run
/// use stringlens_core::{Catalog, CatalogStore};
///
/// let store = CatalogStore::new()?;
///
/// // Load existing catalog or start empty
/// let mut catalog = store.load_or_default()?;
/// catalog.insert("racecar").ok();
///
/// store.save(&catalog)?;
/// # Ok::<(), stringlens_core::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Path to the snapshot file.
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a new `CatalogStore` with the default XDG path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `CatalogStore` with a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default XDG path for the snapshot file.
    ///
    /// On Unix: `~/.cache/stringlens/catalog.json`
    /// On macOS: `~/Library/Caches/stringlens/catalog.json`
    /// On Windows: `C:\Users\<User>\AppData\Local\stringlens\cache\catalog.json`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(StoreError::NoDataDir)?;

        Ok(project_dirs.cache_dir().join(CATALOG_FILENAME))
    }

    /// Returns the path to the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the snapshot file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the catalog from disk.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` if the file cannot be read (including
    ///   when it does not exist; see [`load_or_default()`](Self::load_or_default)).
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub fn load(&self) -> Result<Catalog> {
        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        self.parse(&contents)
    }

    /// Loads the catalog from disk, returning an empty catalog if the file
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` for I/O errors other than "file not found".
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub fn load_or_default(&self) -> Result<Catalog> {
        match self.load() {
            Ok(catalog) => Ok(catalog),
            Err(e) if e.is_not_found() => Ok(Catalog::default()),
            Err(e) => Err(e),
        }
    }

    /// Saves the catalog to disk.
    ///
    /// Creates the parent directory if needed and writes pretty-printed JSON
    /// through a temp file and rename.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::CreateDirError` if the directory cannot be created.
    /// - Returns `StoreError::WriteError` if the file cannot be written.
    /// - Returns `StoreError::Json` if serialization fails.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(catalog)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, &json).map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), records = catalog.len(), "saved catalog");
        Ok(())
    }

    /// Deletes the snapshot file from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DeleteError` if the file cannot be deleted.
    /// Does not return an error if the file doesn't exist.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::DeleteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    // =========================================================================
    // Async I/O Methods
    // =========================================================================

    /// Loads the catalog from disk asynchronously.
    ///
    /// This is the async equivalent of [`load()`](Self::load).
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` if the file cannot be read.
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub async fn load_async(&self) -> Result<Catalog> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| StoreError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })?;
        self.parse(&contents)
    }

    /// Loads the catalog asynchronously, returning an empty catalog if the
    /// file doesn't exist.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` for I/O errors other than "file not found".
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub async fn load_or_default_async(&self) -> Result<Catalog> {
        match self.load_async().await {
            Ok(catalog) => Ok(catalog),
            Err(e) if e.is_not_found() => Ok(Catalog::default()),
            Err(e) => Err(e),
        }
    }

    /// Saves the catalog to disk asynchronously.
    ///
    /// This is the async equivalent of [`save()`](Self::save).
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::CreateDirError` if the directory cannot be created.
    /// - Returns `StoreError::WriteError` if the file cannot be written.
    /// - Returns `StoreError::Json` if serialization fails.
    pub async fn save_async(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::CreateDirError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let json = serde_json::to_string_pretty(catalog)?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &json)
            .await
            .map_err(|e| StoreError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), records = catalog.len(), "saved catalog");
        Ok(())
    }

    /// Parses snapshot contents and rebuilds the fingerprint index.
    fn parse(&self, contents: &str) -> Result<Catalog> {
        let mut catalog: Catalog = serde_json::from_str(contents)?;
        catalog.rebuild_index();
        debug!(path = %self.path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Returns the parent directory, skipping the empty parent of a bare filename.
    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}
