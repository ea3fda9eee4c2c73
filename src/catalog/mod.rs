//! Template catalogs
//!
//! A catalog is a read-only, path-keyed store of template sources and JSON
//! argument files. The resolver only needs [`TemplateSource::read_file`], so
//! templates can come from the binary ([`EmbeddedCatalog`]), from a checkout
//! of the contracts repository ([`DirectoryCatalog`]), or from memory in
//! tests.

mod directory;
mod embedded;

pub use directory::DirectoryCatalog;
pub use embedded::{EmbeddedCatalog, EMBEDDED_FILES};

use crate::error::{Result, TemplateError};

/// Read access to template files by logical path.
///
/// A missing path must map to [`TemplateError::TemplateNotFound`].
pub trait TemplateSource: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Reads `path` as UTF-8 text.
    fn read_to_string(&self, path: &str) -> Result<String> {
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes).map_err(|e| TemplateError::MalformedArguments {
            path: path.to_string(),
            reason: format!("file is not valid UTF-8: {e}"),
        })
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for Box<T> {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for std::sync::Arc<T> {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }
}
