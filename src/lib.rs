//! # flow-evm-bridge-rs
//!
//! Cadence templates and deployment tooling for the Flow VM bridge, the
//! bridge that moves NFTs and fungible tokens between Cadence and Flow EVM.
//!
//! The crate ships the bridge's Cadence contracts, scripts and transactions
//! as templates whose imports are placeholders (`import "FlowEVMBridge"`).
//! Resolving a template substitutes the account addresses of a concrete
//! deployment and reports any import that is still unresolved.
//!
//! ## Quick Start
//!
//! ```rust
//! use flow_evm_bridge_rs::{BridgeEnvironment, CoreEnvironment, Resolver};
//!
//! let resolver = Resolver::embedded();
//!
//! let bridge = BridgeEnvironment::with_all("0x179b6b1cb6755e31");
//! let mut core = CoreEnvironment::with_all("0xf8d6e0586b0a20c7");
//! core.fungible_token = "ee82856bf20e2aa6".to_string();
//!
//! let code = resolver
//!     .transaction(
//!         "cadence/transactions/bridge/admin/fee/update_base_fee.cdc",
//!         &bridge,
//!         &core,
//!     )
//!     .unwrap()
//!     .into_result()
//!     .unwrap();
//! assert!(code.contains("import FlowEVMBridgeConfig from 0x179b6b1cb6755e31"));
//! ```
//!
//! ## Missing addresses
//!
//! An environment field left empty keeps its placeholder. The resolution
//! still carries the partially substituted code, and
//! [`Resolution::into_result`] turns it into a
//! [`TemplateError::MissingImports`] naming what is left:
//!
//! ```rust
//! use flow_evm_bridge_rs::{BridgeEnvironment, CoreEnvironment, Resolver};
//!
//! let resolution = Resolver::embedded()
//!     .script(
//!         "cadence/scripts/bridge/batch_evm_address_requires_onboarding.cdc",
//!         &BridgeEnvironment::default(),
//!         &CoreEnvironment::default(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(resolution.missing, vec!["EVM", "FlowEVMBridge"]);
//! let err = resolution.into_result().unwrap_err();
//! assert!(!err.is_fatal());
//! ```
//!
//! ## Public API
//!
//! - [`Resolver`] and [`Resolution`] - Template resolution
//! - [`BridgeEnvironment`] and [`CoreEnvironment`] - Deployment addresses
//! - [`TemplateSource`] with [`EmbeddedCatalog`] and [`DirectoryCatalog`] - Template storage
//! - [`ImportScanner`] and [`QuoteSplitScanner`] - Unresolved import detection
//! - [`TemplateError`] and [`Result`] - Error types for error handling
//! - [`args`] - Cadence-JSON argument files and code chunks
//! - [`solidity`] - Compiled EVM bytecode for the bridge's Solidity contracts
//! - [`deployment`] - Stand-up order, networks and `flow.json` addresses

mod catalog;
mod environment;
mod error;

pub mod args;
pub mod deployment;
pub mod resolve;
pub mod solidity;

pub use catalog::{DirectoryCatalog, EmbeddedCatalog, TemplateSource, EMBEDDED_FILES};
pub use environment::{placeholders, BridgeEnvironment, CoreEnvironment};
pub use error::{Result, TemplateError};
pub use resolve::{
    ImportScanner, QuoteSplitScanner, Resolution, Resolver, TemplateKind, UNRESOLVED_IMPORT,
};

// Public module for advanced users who need custom instrumentation
pub mod spans;

// Fakes for downstream tests
pub mod testing;
