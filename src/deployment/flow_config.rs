// SPDX-FileCopyrightText: 2025 Flow EVM Bridge Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! `flow.json` project configuration
//!
//! Only the parts that carry addresses are read:
//!
//! - `contracts.<Name>.aliases.<network>` and
//!   `dependencies.<Name>.aliases.<network>` for contracts that already live
//!   on a network
//! - `deployments.<network>.<account>` together with
//!   `accounts.<account>.address` for contracts the project deploys itself
//!
//! Everything else in the file is ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::Network;
use crate::environment::{BridgeEnvironment, CoreEnvironment};
use crate::error::{Result, TemplateError};
use crate::spans;

/// A contract entry: either a bare source path or a full record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContractEntry {
    Source(String),
    Detailed {
        source: String,
        #[serde(default)]
        aliases: BTreeMap<String, String>,
    },
}

impl ContractEntry {
    pub fn source(&self) -> &str {
        match self {
            Self::Source(source) | Self::Detailed { source, .. } => source,
        }
    }

    pub fn alias(&self, network: Network) -> Option<&str> {
        match self {
            Self::Source(_) => None,
            Self::Detailed { aliases, .. } => aliases.get(network.as_str()).map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountEntry {
    pub address: String,
}

/// A contract listed under a deployment account: a bare name or a record
/// with init arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeploymentEntry {
    Name(String),
    WithArgs {
        name: String,
        #[serde(default)]
        args: Vec<serde_json::Value>,
    },
}

impl DeploymentEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::WithArgs { name, .. } => name,
        }
    }
}

/// Address-bearing sections of a `flow.json` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub contracts: BTreeMap<String, ContractEntry>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, ContractEntry>,
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountEntry>,
    #[serde(default)]
    pub deployments: BTreeMap<String, BTreeMap<String, Vec<DeploymentEntry>>>,
}

impl FlowConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let span = spans::load_flow_config(&path.display().to_string());
        let _guard = span.enter();

        let result = std::fs::read_to_string(path)
            .map_err(TemplateError::from)
            .and_then(|json| Self::from_json(&json));

        match &result {
            Ok(config) => debug!(
                contracts = config.contracts.len(),
                dependencies = config.dependencies.len(),
                event = "flow_config_loaded"
            ),
            Err(e) => spans::record_error(e),
        }
        result
    }

    /// Address of `name` on `network`.
    ///
    /// An alias wins over a deployment; a deployment is looked up through
    /// its account's address.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::FlowConfig`] if a deployment names an account
    /// that is not declared.
    pub fn address_of(&self, name: &str, network: Network) -> Result<Option<String>> {
        let alias = self
            .contracts
            .get(name)
            .or_else(|| self.dependencies.get(name))
            .and_then(|entry| entry.alias(network));
        if let Some(alias) = alias {
            return Ok(Some(alias.to_string()));
        }

        let Some(accounts) = self.deployments.get(network.as_str()) else {
            return Ok(None);
        };
        for (account, entries) in accounts {
            if entries.iter().any(|entry| entry.name() == name) {
                let address = self.accounts.get(account).ok_or_else(|| {
                    TemplateError::FlowConfig(format!(
                        "deployment account {account} on {network} is not declared"
                    ))
                })?;
                return Ok(Some(address.address.clone()));
            }
        }
        Ok(None)
    }

    /// Builds the bridge and core environments for `network`.
    ///
    /// Placeholders with no known address stay empty and will be reported
    /// as missing imports by the resolver.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flow_evm_bridge_rs::deployment::{FlowConfig, Network};
    ///
    /// let config = FlowConfig::from_json(r#"{
    ///     "contracts": {
    ///         "FungibleToken": {
    ///             "source": "./cadence/contracts/standards/FungibleToken.cdc",
    ///             "aliases": { "testnet": "9a0766d93b6608b7" }
    ///         }
    ///     }
    /// }"#).unwrap();
    ///
    /// let (_bridge, core) = config.environments(Network::Testnet).unwrap();
    /// assert_eq!(core.fungible_token, "9a0766d93b6608b7");
    /// ```
    pub fn environments(&self, network: Network) -> Result<(BridgeEnvironment, CoreEnvironment)> {
        let mut bridge = BridgeEnvironment::default();
        let mut core = CoreEnvironment::default();

        for name in crate::environment::placeholders::BRIDGE_PLACEHOLDERS {
            if let Some(address) = self.address_of(name, network)? {
                bridge.set(name, address);
            }
        }
        for name in crate::environment::placeholders::CORE_PLACEHOLDERS {
            if let Some(address) = self.address_of(name, network)? {
                core.set(name, address);
            }
        }

        info!(
            network = %network,
            bridge_unset = bridge.unset().len(),
            core_unset = core.unset().len(),
            event = "environments_built"
        );
        Ok((bridge, core))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOW_JSON: &str = r#"{
        "contracts": {
            "ArrayUtils": "./cadence/contracts/utils/ArrayUtils.cdc",
            "FlowEVMBridge": {
                "source": "./cadence/contracts/bridge/FlowEVMBridge.cdc",
                "aliases": { "testnet": "dfc20aee650fcbdf" }
            },
            "EVM": {
                "source": "./cadence/contracts/standards/EVM.cdc",
                "aliases": { "emulator": "f8d6e0586b0a20c7", "testnet": "8c5303eaa26202d6" }
            }
        },
        "dependencies": {
            "Burner": {
                "source": "mainnet://f233dcee88fe0abe.Burner",
                "hash": "71af18e227984cd434a3ad00bb2f3618b76482842bae920ee55662c37c8bf331",
                "aliases": { "emulator": "f8d6e0586b0a20c7", "testnet": "9a0766d93b6608b7" }
            }
        },
        "networks": { "emulator": "127.0.0.1:3569" },
        "accounts": {
            "emulator-flow-evm-bridge": {
                "address": "179b6b1cb6755e31",
                "key": { "type": "file", "location": "local/emulator-flow-evm-bridge.pkey" }
            }
        },
        "deployments": {
            "emulator": {
                "emulator-flow-evm-bridge": [
                    "ArrayUtils",
                    { "name": "FlowEVMBridgeUtils", "args": [{ "type": "String", "value": "0x" }] }
                ]
            }
        }
    }"#;

    #[test]
    fn test_alias_lookup() {
        let config = FlowConfig::from_json(FLOW_JSON).unwrap();
        assert_eq!(
            config.address_of("EVM", Network::Testnet).unwrap().as_deref(),
            Some("8c5303eaa26202d6")
        );
        assert_eq!(
            config.address_of("Burner", Network::Emulator).unwrap().as_deref(),
            Some("f8d6e0586b0a20c7")
        );
        assert_eq!(config.address_of("EVM", Network::Mainnet).unwrap(), None);
    }

    #[test]
    fn test_deployment_lookup_uses_account_address() {
        let config = FlowConfig::from_json(FLOW_JSON).unwrap();
        assert_eq!(
            config.address_of("FlowEVMBridgeUtils", Network::Emulator).unwrap().as_deref(),
            Some("179b6b1cb6755e31")
        );
        assert_eq!(
            config.contracts["ArrayUtils"].source(),
            "./cadence/contracts/utils/ArrayUtils.cdc"
        );
    }

    #[test]
    fn test_environments_for_emulator() {
        let config = FlowConfig::from_json(FLOW_JSON).unwrap();
        let (bridge, core) = config.environments(Network::Emulator).unwrap();

        assert_eq!(bridge.array_utils, "179b6b1cb6755e31");
        assert_eq!(bridge.flow_evm_bridge_utils, "179b6b1cb6755e31");
        assert_eq!(bridge.flow_evm_bridge, "");
        assert_eq!(core.evm, "f8d6e0586b0a20c7");
        assert_eq!(core.burner, "f8d6e0586b0a20c7");
        assert_eq!(core.fungible_token, "");
    }

    #[test]
    fn test_undeclared_deployment_account() {
        let config = FlowConfig::from_json(
            r#"{ "deployments": { "testnet": { "bridge": ["ArrayUtils"] } } }"#,
        )
        .unwrap();
        let err = config.environments(Network::Testnet).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Invalid flow.json configuration: deployment account bridge on testnet is not declared"
        );
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.json");
        std::fs::write(&path, FLOW_JSON).unwrap();

        let config = FlowConfig::load(&path).unwrap();
        assert_eq!(config.accounts.len(), 1);

        let missing = FlowConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, TemplateError::Io(_)));
    }
}
