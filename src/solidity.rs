// SPDX-FileCopyrightText: 2025 Flow EVM Bridge Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Compiled Solidity bytecode for the bridge's EVM contracts
//!
//! The bytecode ships inside `cadence/tests/test_helpers.cdc` as string
//! literals. Each contract lives at a fixed position among the file's
//! double-quote separated fragments.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::catalog::TemplateSource;
use crate::error::{Result, TemplateError};

/// Catalog path of the file holding the bytecode literals.
pub const SOLIDITY_HELPERS_PATH: &str = "cadence/tests/test_helpers.cdc";

/// EVM contracts whose bytecode is shipped with the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidityContract {
    FlowBridgeFactory,
    FlowEvmBridgedErc20Deployer,
    FlowEvmBridgedErc721Deployer,
    FlowBridgeDeploymentRegistry,
    FlowEvmBridgedErc721,
    FlowEvmBridgedErc20,
    Wflow,
}

impl SolidityContract {
    pub const ALL: [Self; 7] = [
        Self::FlowBridgeFactory,
        Self::FlowEvmBridgedErc20Deployer,
        Self::FlowEvmBridgedErc721Deployer,
        Self::FlowBridgeDeploymentRegistry,
        Self::FlowEvmBridgedErc721,
        Self::FlowEvmBridgedErc20,
        Self::Wflow,
    ];

    /// Contract name as written in Solidity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FlowBridgeFactory => "FlowBridgeFactory",
            Self::FlowEvmBridgedErc20Deployer => "FlowEVMBridgedERC20Deployer",
            Self::FlowEvmBridgedErc721Deployer => "FlowEVMBridgedERC721Deployer",
            Self::FlowBridgeDeploymentRegistry => "FlowBridgeDeploymentRegistry",
            Self::FlowEvmBridgedErc721 => "FlowEVMBridgedERC721",
            Self::FlowEvmBridgedErc20 => "FlowEVMBridgedERC20",
            Self::Wflow => "WFLOW",
        }
    }

    /// Index of the bytecode literal when the helpers file is split on `"`.
    pub const fn quote_index(self) -> usize {
        match self {
            Self::FlowBridgeFactory => 13,
            Self::FlowEvmBridgedErc20Deployer => 15,
            Self::FlowEvmBridgedErc721Deployer => 17,
            Self::FlowBridgeDeploymentRegistry => 19,
            Self::FlowEvmBridgedErc721 => 21,
            Self::FlowEvmBridgedErc20 => 23,
            Self::Wflow => 25,
        }
    }
}

impl fmt::Display for SolidityContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolidityContract {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|contract| contract.name() == s)
            .ok_or_else(|| TemplateError::InvalidSolidityContract(s.to_string()))
    }
}

/// Returns the bytecode of `contract` from the helpers file in `catalog`.
///
/// # Errors
///
/// - [`TemplateError::TemplateNotFound`] if the helpers file is missing
/// - [`TemplateError::MalformedArguments`] if the file has fewer fragments
///   than expected
pub fn solidity_bytecode<S: TemplateSource + ?Sized>(
    catalog: &S,
    contract: SolidityContract,
) -> Result<String> {
    let helpers = catalog.read_to_string(SOLIDITY_HELPERS_PATH)?;

    let bytecode = helpers
        .split('"')
        .nth(contract.quote_index())
        .ok_or_else(|| TemplateError::MalformedArguments {
            path: SOLIDITY_HELPERS_PATH.to_string(),
            reason: format!("no bytecode literal for {contract}"),
        })?;

    debug!(
        contract = %contract,
        bytes = bytecode.len() / 2,
        event = "solidity_bytecode_loaded"
    );

    Ok(bytecode.to_string())
}

/// Looks up a contract by its Solidity name and returns its bytecode.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::{solidity::solidity_contract_code, EmbeddedCatalog};
///
/// let catalog = EmbeddedCatalog::new();
/// let factory = solidity_contract_code(&catalog, "FlowBridgeFactory").unwrap();
/// assert!(factory.starts_with("6080"));
///
/// let err = solidity_contract_code(&catalog, "CryptoPunks").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid Solidity Contract Name CryptoPunks");
/// ```
pub fn solidity_contract_code<S: TemplateSource + ?Sized>(catalog: &S, name: &str) -> Result<String> {
    let contract: SolidityContract = name.parse()?;
    solidity_bytecode(catalog, contract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;
    use crate::testing::InMemoryCatalog;
    use rstest::rstest;

    #[rstest]
    #[case("FlowBridgeFactory", 13)]
    #[case("FlowEVMBridgedERC20Deployer", 15)]
    #[case("FlowEVMBridgedERC721Deployer", 17)]
    #[case("FlowBridgeDeploymentRegistry", 19)]
    #[case("FlowEVMBridgedERC721", 21)]
    #[case("FlowEVMBridgedERC20", 23)]
    #[case("WFLOW", 25)]
    fn test_known_names(#[case] name: &str, #[case] index: usize) {
        let contract: SolidityContract = name.parse().unwrap();
        assert_eq!(contract.quote_index(), index);
        assert_eq!(contract.to_string(), name);
    }

    #[rstest]
    #[case("")]
    #[case("wflow")]
    #[case("FlowEVMBridge")]
    fn test_unknown_names_are_rejected(#[case] name: &str) {
        let err = name.parse::<SolidityContract>().unwrap_err();
        assert!(matches!(err, TemplateError::InvalidSolidityContract(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_embedded_bytecode_for_every_contract() {
        let catalog = EmbeddedCatalog::new();
        for contract in SolidityContract::ALL {
            let bytecode = solidity_bytecode(&catalog, contract).unwrap();
            assert!(bytecode.starts_with("6080"), "{contract}");
        }
    }

    #[test]
    fn test_short_helpers_file_is_malformed() {
        let catalog = InMemoryCatalog::new().with_file(SOLIDITY_HELPERS_PATH, "let a = \"6080\"\n");
        let err = solidity_bytecode(&catalog, SolidityContract::Wflow).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Malformed arguments in cadence/tests/test_helpers.cdc: no bytecode literal for WFLOW"
        );
    }
}
