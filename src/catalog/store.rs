//! Memoized catalog loading.
//!
//! `CatalogStore` replaces the ad-hoc "load once, stash in a global"
//! pattern with an explicit, injectable object: the read+parse happens at
//! most once per store, failures are never cached, and tests can reset the
//! cache with `invalidate()`.
//!
//! Concurrency policy: the cache mutex is held across the read+parse, so
//! concurrent first calls block on the same load and then observe the
//! cached value. Duplicate reads of the catalog file cannot occur.

use super::model::Catalog;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// Catalog-related errors.
///
/// `Io`/`Json` are load failures; `SubjectNotFound` means the catalog
/// loaded fine but the requested id is absent. Controllers render the two
/// with distinct user-facing messages.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog `{path}` is not valid JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("subject `{0}` not found in the catalog")]
    SubjectNotFound(String),
}

impl CatalogError {
    /// True for the not-found kind (as opposed to a load failure).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SubjectNotFound(_))
    }
}

/// Stateful catalog loader with a process-lifetime cache.
///
/// One store per catalog file; the dev server shares a single store across
/// request threads via `Arc`.
pub struct CatalogStore {
    path: PathBuf,
    cache: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogStore {
    /// Create a store for the catalog at `path`. Nothing is read until the
    /// first `load()`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// The catalog file this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, reading and parsing the file at most once.
    ///
    /// Subsequent calls return the cached `Arc`. A failed load leaves the
    /// cache empty, so the next call retries.
    pub fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        // Lock held across read+parse: concurrent first callers wait here
        // and then hit the cache instead of issuing a second read.
        let mut cache = self.cache.lock();

        if let Some(catalog) = cache.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let text = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&text).map_err(|source| CatalogError::Json {
            path: self.path.clone(),
            source,
        })?;

        let catalog = Arc::new(catalog);
        *cache = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Drop the cached catalog; the next `load()` re-reads the file.
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }

    /// True once a load has succeeded and the result is cached.
    pub fn is_loaded(&self) -> bool {
        self.cache.lock().is_some()
    }
}
