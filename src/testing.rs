//! Test utilities and fake implementations for template resolution
//!
//! This module provides an in-memory [`TemplateSource`] and environment
//! fixtures, so resolution and deployment planning can be exercised without
//! the embedded catalog or a checkout of the contracts repository.
//!
//! The fakes can also simulate I/O failures, which the embedded catalog can
//! never produce.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::TemplateSource;
use crate::environment::{BridgeEnvironment, CoreEnvironment};
use crate::error::{Result, TemplateError};

/// Address used by the catalog-wide tests when every placeholder must
/// resolve.
pub const FAKE_ADDRESS: &str = "0x0A";

/// Bridge and core environments with every placeholder set to
/// [`FAKE_ADDRESS`].
pub fn all_addresses() -> (BridgeEnvironment, CoreEnvironment) {
    (
        BridgeEnvironment::with_all(FAKE_ADDRESS),
        CoreEnvironment::with_all(FAKE_ADDRESS),
    )
}

// ============================================================================
// In-memory catalog
// ============================================================================

/// A catalog backed by a map of path to contents.
///
/// Every read is logged, which lets tests check which files an operation
/// touched. Clones share the same log.
///
/// This allows testing scenarios like:
/// - Templates missing from the catalog
/// - Malformed argument files
/// - I/O failures while reading
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    files: BTreeMap<String, Vec<u8>>,
    failures: Vec<String>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file that will be returned for the given path
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Configure a path to fail with an I/O error
    pub fn with_failure(mut self, path: impl Into<String>) -> Self {
        self.failures.push(path.into());
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Paths read so far, in call order
    pub fn reads(&self) -> Vec<String> {
        self.read_log().clone()
    }

    fn read_log(&self) -> MutexGuard<'_, Vec<String>> {
        self.reads.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TemplateSource for InMemoryCatalog {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.read_log().push(path.to_string());

        if self.failures.iter().any(|failure| failure == path) {
            return Err(io::Error::other("Simulated read failure").into());
        }

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| TemplateError::TemplateNotFound {
                path: path.to_string(),
            })
    }
}
