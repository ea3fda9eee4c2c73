// SPDX-FileCopyrightText: 2025 Flow EVM Bridge Contributors
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Cannot return code for {path}. Missing import addresses for {}.", names.join(", "))]
    MissingImports { path: String, names: Vec<String> },

    #[error("Template not found in catalog: {path}")]
    TemplateNotFound { path: String },

    #[error("Cannot infer template kind from path: {path}")]
    UnknownTemplateKind { path: String },

    #[error("Malformed arguments in {path}: {reason}")]
    MalformedArguments { path: String, reason: String },

    #[error("Invalid Solidity Contract Name {0}")]
    InvalidSolidityContract(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid flow.json configuration: {0}")]
    FlowConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex conversion error: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),
}

impl TemplateError {
    /// Returns true for configuration errors the caller should escalate.
    ///
    /// Only [`TemplateError::MissingImports`] is recoverable: it is the
    /// expected outcome while an environment is still being filled in, and
    /// the partially resolved code is still available to the caller.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MissingImports { .. })
    }

    /// Names of the unresolved imports, if this is a missing-import error.
    pub fn missing_imports(&self) -> Option<&[String]> {
        match self {
            Self::MissingImports { names, .. } => Some(names),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_imports_message() {
        let err = TemplateError::MissingImports {
            path: "cadence/contracts/bridge/FlowEVMBridge.cdc".to_string(),
            names: vec!["EVM".to_string(), "FlowEVMBridgeUtils".to_string()],
        };

        insta::assert_snapshot!(
            err.to_string(),
            @"Cannot return code for cadence/contracts/bridge/FlowEVMBridge.cdc. Missing import addresses for EVM, FlowEVMBridgeUtils."
        );
        assert!(!err.is_fatal());
        assert_eq!(
            err.missing_imports(),
            Some(&["EVM".to_string(), "FlowEVMBridgeUtils".to_string()][..])
        );
    }

    #[test]
    fn test_configuration_errors_are_fatal() {
        let not_found = TemplateError::TemplateNotFound {
            path: "cadence/contracts/Nope.cdc".to_string(),
        };
        assert!(not_found.is_fatal());
        assert!(not_found.missing_imports().is_none());

        let invalid = TemplateError::InvalidSolidityContract("CryptoPunks".to_string());
        assert!(invalid.is_fatal());
        assert_eq!(
            invalid.to_string(),
            "Invalid Solidity Contract Name CryptoPunks"
        );
    }
}
