//! Template address resolution
//!
//! Resolving a template means reading it from a catalog, substituting every
//! import placeholder that has an address, and checking that no placeholder
//! is left. A template with missing addresses is not an error at the catalog
//! level: the partially substituted code is always returned together with
//! the names still missing, and the caller decides whether that is fatal.

mod scanner;
mod substitute;

pub use scanner::{
    unresolved_import_names, ImportScanner, QuoteSplitScanner, TemplateKind, UNRESOLVED_IMPORT,
};
pub use substitute::{replace_address, replace_addresses, replace_core_addresses, with_hex_prefix};

use std::fmt;
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, warn};

use crate::catalog::{EmbeddedCatalog, TemplateSource};
use crate::environment::{BridgeEnvironment, CoreEnvironment};
use crate::error::{Result, TemplateError};
use crate::spans;

/// Outcome of resolving one template.
///
/// `code` holds the substituted source even when `missing` is non-empty, so
/// it can still be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: String,
    pub kind: TemplateKind,
    pub code: String,
    pub missing: Vec<String>,
}

impl Resolution {
    /// True when no `import "` is left in the code.
    pub fn is_resolved(&self) -> bool {
        !self.code.contains(UNRESOLVED_IMPORT)
    }

    /// The missing-import error for this resolution, if any.
    pub fn error(&self) -> Option<TemplateError> {
        (!self.is_resolved()).then(|| TemplateError::MissingImports {
            path: self.path.clone(),
            names: self.missing.clone(),
        })
    }

    /// Returns the code, or [`TemplateError::MissingImports`] if anything is
    /// left unresolved.
    pub fn into_result(self) -> Result<String> {
        if self.is_resolved() {
            Ok(self.code)
        } else {
            Err(TemplateError::MissingImports {
                path: self.path,
                names: self.missing,
            })
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

fn default_scanner() -> Arc<dyn ImportScanner> {
    Arc::new(QuoteSplitScanner)
}

/// Resolves catalog templates against bridge and core environments.
///
/// The resolver holds no mutable state, so one instance can serve any number
/// of environments and callers concurrently.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::{BridgeEnvironment, CoreEnvironment, EmbeddedCatalog, Resolver};
///
/// let resolver = Resolver::builder().catalog(EmbeddedCatalog::new()).build();
///
/// let bridge = BridgeEnvironment::default();
/// let mut core = CoreEnvironment::default();
/// core.fungible_token = "ee82856bf20e2aa6".to_string();
///
/// let resolution = resolver
///     .resolve("cadence/contracts/bridge/interfaces/CrossVMToken.cdc", &bridge, &core)
///     .unwrap();
///
/// assert!(resolution.code.contains("import FungibleToken from 0xee82856bf20e2aa6"));
/// assert!(resolution.missing.contains(&"EVM".to_string()));
/// ```
#[derive(Builder, Clone)]
pub struct Resolver<S: TemplateSource> {
    catalog: S,
    #[builder(default = default_scanner())]
    scanner: Arc<dyn ImportScanner>,
}

impl Resolver<EmbeddedCatalog> {
    /// Resolver over the templates compiled into this crate.
    pub fn embedded() -> Self {
        Self::builder().catalog(EmbeddedCatalog::new()).build()
    }
}

impl<S: TemplateSource> Resolver<S> {
    pub fn catalog(&self) -> &S {
        &self.catalog
    }

    /// Resolves the template at `path`, inferring its kind from the path.
    ///
    /// # Errors
    ///
    /// Fails only on configuration problems: the path is not in the catalog
    /// or its kind cannot be inferred. Missing addresses are reported in the
    /// returned [`Resolution`].
    pub fn resolve(
        &self,
        path: &str,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Result<Resolution> {
        let kind = TemplateKind::from_path(path).ok_or_else(|| {
            TemplateError::UnknownTemplateKind {
                path: path.to_string(),
            }
        })?;
        self.resolve_as(path, kind, bridge, core)
    }

    /// Resolves the template at `path` as the given kind.
    pub fn resolve_as(
        &self,
        path: &str,
        kind: TemplateKind,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Result<Resolution> {
        let span = spans::resolve_template(path, kind);
        let _guard = span.enter();

        let source = match self.catalog.read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                spans::record_error(&e);
                return Err(e);
            }
        };

        Ok(self.resolve_source(&source, path, kind, bridge, core))
    }

    /// Resolves a Cadence contract, e.g. `cadence/contracts/bridge/FlowEVMBridge.cdc`.
    pub fn contract(
        &self,
        path: &str,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Result<Resolution> {
        self.resolve_as(path, TemplateKind::Contract, bridge, core)
    }

    /// Resolves a Cadence transaction.
    pub fn transaction(
        &self,
        path: &str,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Result<Resolution> {
        self.resolve_as(path, TemplateKind::Transaction, bridge, core)
    }

    /// Resolves a Cadence script.
    pub fn script(
        &self,
        path: &str,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Result<Resolution> {
        self.resolve_as(path, TemplateKind::Script, bridge, core)
    }

    /// Substitutes and validates source text that did not come from the
    /// catalog. `path` is only used for reporting.
    pub fn resolve_source(
        &self,
        source: &str,
        path: &str,
        kind: TemplateKind,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Resolution {
        let code = replace_addresses(source, bridge, core);
        let missing = self.missing_imports(&code, kind);

        if missing.is_empty() {
            debug!(
                path = %path,
                kind = %kind,
                event = "template_resolved"
            );
        } else {
            spans::record_missing_imports(&missing);
            warn!(
                path = %path,
                kind = %kind,
                missing = %missing.join(", "),
                event = "template_imports_unresolved"
            );
        }

        Resolution {
            path: path.to_string(),
            kind,
            code,
            missing,
        }
    }

    /// Checks already-substituted code for leftover placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingImports`] naming every unresolved
    /// import, in source order.
    pub fn validate(&self, code: &str, path: &str, kind: TemplateKind) -> Result<()> {
        let missing = self.missing_imports(code, kind);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TemplateError::MissingImports {
                path: path.to_string(),
                names: missing,
            })
        }
    }

    /// Unresolved import names, never empty while `import "` remains.
    ///
    /// The scanner decides the names; when it finds none although a
    /// placeholder is still present, every `import "Name"` line is reported.
    fn missing_imports(&self, code: &str, kind: TemplateKind) -> Vec<String> {
        if !code.contains(UNRESOLVED_IMPORT) {
            return Vec::new();
        }

        let names = self.scanner.unresolved_imports(code, kind);
        if !names.is_empty() {
            return names;
        }

        let names = unresolved_import_names(code);
        if names.is_empty() {
            vec![UNRESOLVED_IMPORT.to_string()]
        } else {
            names
        }
    }
}

impl<S: TemplateSource + fmt::Debug> fmt::Debug for Resolver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
