//! Templates read from a directory on disk

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::TemplateSource;
use crate::error::{Result, TemplateError};

/// Catalog rooted at a project directory, e.g. a checkout of the bridge
/// contracts where `cadence/` sits at the top level.
///
/// Paths are resolved relative to the root and may not escape it.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        (!escapes).then(|| self.root.join(relative))
    }
}

impl TemplateSource for DirectoryCatalog {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let not_found = || TemplateError::TemplateNotFound {
            path: path.to_string(),
        };

        let full_path = self.full_path(path).ok_or_else(not_found)?;
        debug!(
            path = %full_path.display(),
            event = "template_file_read"
        );

        match std::fs::read(&full_path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(e.into()),
        }
    }
}
