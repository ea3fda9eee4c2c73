//! Templates compiled into the binary

use std::collections::BTreeMap;

use super::TemplateSource;
use crate::error::{Result, TemplateError};

macro_rules! embed {
    ($($path:literal),+ $(,)?) => {
        &[
            $( ($path, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path))), )+
        ]
    };
}

/// Every file shipped in the embedded catalog, keyed by logical path.
pub static EMBEDDED_FILES: &[(&str, &str)] = embed![
    // Contracts
    "cadence/contracts/bridge/interfaces/CrossVMNFT.cdc",
    "cadence/contracts/bridge/interfaces/CrossVMToken.cdc",
    "cadence/contracts/bridge/interfaces/FlowEVMBridgeHandlerInterfaces.cdc",
    "cadence/contracts/bridge/interfaces/IBridgePermissions.cdc",
    "cadence/contracts/bridge/interfaces/ICrossVM.cdc",
    "cadence/contracts/bridge/interfaces/ICrossVMAsset.cdc",
    "cadence/contracts/bridge/interfaces/IEVMBridgeNFTMinter.cdc",
    "cadence/contracts/bridge/interfaces/IEVMBridgeTokenMinter.cdc",
    "cadence/contracts/bridge/interfaces/IFlowEVMNFTBridge.cdc",
    "cadence/contracts/bridge/interfaces/IFlowEVMTokenBridge.cdc",
    "cadence/contracts/bridge/FlowEVMBridge.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeAccessor.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeConfig.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeCustomAssociationTypes.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeCustomAssociations.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeHandlers.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeNFTEscrow.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeResolver.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeTemplates.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeTokenEscrow.cdc",
    "cadence/contracts/bridge/FlowEVMBridgeUtils.cdc",
    "cadence/contracts/utils/ArrayUtils.cdc",
    "cadence/contracts/utils/ScopedFTProviders.cdc",
    "cadence/contracts/utils/Serialize.cdc",
    "cadence/contracts/utils/SerializeMetadata.cdc",
    "cadence/contracts/utils/StringUtils.cdc",
    // Scripts
    "cadence/scripts/bridge/batch_evm_address_requires_onboarding.cdc",
    "cadence/scripts/bridge/batch_get_associated_evm_address.cdc",
    "cadence/scripts/bridge/calculate_bridge_fee.cdc",
    "cadence/scripts/config/get_base_fee.cdc",
    "cadence/scripts/config/get_onboard_fee.cdc",
    "cadence/scripts/evm/get_evm_address_string.cdc",
    // Transactions
    "cadence/transactions/bridge/admin/blocklist/block_cadence_type.cdc",
    "cadence/transactions/bridge/admin/blocklist/block_evm_address.cdc",
    "cadence/transactions/bridge/admin/evm/add_deployer.cdc",
    "cadence/transactions/bridge/admin/evm/set_delegated_deployer.cdc",
    "cadence/transactions/bridge/admin/evm/set_deployment_registry.cdc",
    "cadence/transactions/bridge/admin/evm/set_registrar.cdc",
    "cadence/transactions/bridge/admin/fee/update_base_fee.cdc",
    "cadence/transactions/bridge/admin/fee/update_onboard_fee.cdc",
    "cadence/transactions/bridge/admin/pause/update_bridge_pause_status.cdc",
    "cadence/transactions/bridge/admin/templates/upsert_contract_code_chunks.cdc",
    "cadence/transactions/evm/create_account.cdc",
    "cadence/transactions/evm/deploy.cdc",
    // Test helpers carrying compiled Solidity bytecode
    "cadence/tests/test_helpers.cdc",
    // JSON arguments
    "cadence/args/bridged-nft-code-chunks-args-emulator.json",
    "cadence/args/bridged-token-code-chunks-args-emulator.json",
    "cadence/args/deploy-factory-args.json",
    "cadence/args/deploy-deployment-registry-args.json",
    "cadence/args/deploy-erc20-deployer-args.json",
    "cadence/args/deploy-erc721-deployer-args.json",
];

/// Read-only catalog backed by [`EMBEDDED_FILES`].
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::{EmbeddedCatalog, TemplateSource};
///
/// let catalog = EmbeddedCatalog::new();
/// let code = catalog.read_file("cadence/contracts/utils/ArrayUtils.cdc").unwrap();
/// assert!(!code.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct EmbeddedCatalog {
    files: BTreeMap<&'static str, &'static str>,
}

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self {
            files: EMBEDDED_FILES.iter().copied().collect(),
        }
    }

    /// Returns the embedded text at `path` without copying it.
    pub fn get(&self, path: &str) -> Option<&'static str> {
        self.files.get(normalize(path)).copied()
    }

    /// Logical paths of every embedded file, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.keys().copied()
    }
}

impl Default for EmbeddedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for EmbeddedCatalog {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.get(path)
            .map(|text| text.as_bytes().to_vec())
            .ok_or_else(|| TemplateError::TemplateNotFound {
                path: path.to_string(),
            })
    }
}

fn normalize(path: &str) -> &str {
    path.trim_start_matches("./")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_embedded_file_is_readable() {
        let catalog = EmbeddedCatalog::new();
        assert_eq!(catalog.paths().count(), EMBEDDED_FILES.len());
        for (path, _) in EMBEDDED_FILES {
            let bytes = catalog.read_file(path).unwrap();
            assert!(!bytes.is_empty(), "{path} is empty");
        }
    }

    #[test]
    fn test_leading_dot_slash_is_accepted() {
        let catalog = EmbeddedCatalog::new();
        assert!(catalog
            .get("./cadence/contracts/utils/StringUtils.cdc")
            .is_some());
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let err = EmbeddedCatalog::new()
            .read_file("cadence/contracts/CryptoPunks.cdc")
            .unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
        assert!(err.is_fatal());
    }
}
