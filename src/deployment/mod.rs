// SPDX-FileCopyrightText: 2025 Flow EVM Bridge Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Bridge stand-up order
//!
//! Standing up the bridge happens in three phases:
//!
//! 1. The EVM support contracts are deployed from the bridge account's COA,
//!    bytecode taken from the argument files ([`EVM_DEPLOYMENTS`])
//! 2. The Cadence contracts are deployed, dependencies first
//!    ([`BRIDGE_DEPLOYMENT_ORDER`])
//! 3. Admin transactions pause the bridge, wire the EVM contracts together
//!    and set fees ([`CONFIGURATION_TRANSACTIONS`])
//!
//! [`DeploymentPlan`] resolves every template of every phase against a pair
//! of environments so problems surface before anything is submitted. It
//! submits nothing itself.

mod flow_config;
mod network;

pub use flow_config::{AccountEntry, ContractEntry, DeploymentEntry, FlowConfig};
pub use network::Network;

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::args::extract_bytecode;
use crate::catalog::TemplateSource;
use crate::environment::placeholders as names;
use crate::environment::{BridgeEnvironment, CoreEnvironment};
use crate::error::Result;
use crate::resolve::{Resolution, Resolver, TemplateKind};
use crate::solidity::SolidityContract;
use crate::spans;

/// Gas limit used for every EVM support contract deployment.
pub const EVM_DEPLOY_GAS_LIMIT: u64 = 15_000_000;

/// An EVM contract deployed during stand-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvmDeployment {
    pub contract: SolidityContract,
    /// Catalog path of the Cadence-JSON arguments for `evm/deploy`.
    pub args_path: &'static str,
}

/// Transaction that deploys EVM bytecode from the signer's COA.
pub const EVM_DEPLOY_TRANSACTION: &str = "cadence/transactions/evm/deploy.cdc";

pub const EVM_DEPLOYMENTS: [EvmDeployment; 4] = [
    EvmDeployment {
        contract: SolidityContract::FlowBridgeFactory,
        args_path: "cadence/args/deploy-factory-args.json",
    },
    EvmDeployment {
        contract: SolidityContract::FlowBridgeDeploymentRegistry,
        args_path: "cadence/args/deploy-deployment-registry-args.json",
    },
    EvmDeployment {
        contract: SolidityContract::FlowEvmBridgedErc20Deployer,
        args_path: "cadence/args/deploy-erc20-deployer-args.json",
    },
    EvmDeployment {
        contract: SolidityContract::FlowEvmBridgedErc721Deployer,
        args_path: "cadence/args/deploy-erc721-deployer-args.json",
    },
];

/// Init argument a Cadence contract needs at deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitArgument {
    None,
    /// EVM address of the deployed factory, as a hex string
    FactoryAddress,
    /// Flow address of the `EVM` core contract
    EvmContractAddress,
}

/// A Cadence contract deployed during stand-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceDeployment {
    pub name: &'static str,
    pub path: &'static str,
    pub init: InitArgument,
}

const fn contract(name: &'static str, path: &'static str) -> CadenceDeployment {
    CadenceDeployment {
        name,
        path,
        init: InitArgument::None,
    }
}

/// Cadence contracts in deployment order. Every contract comes after the
/// contracts it imports; the accessor goes last.
pub const BRIDGE_DEPLOYMENT_ORDER: [CadenceDeployment; 26] = [
    contract(
        names::FLOW_EVM_BRIDGE_HANDLER_INTERFACES,
        "cadence/contracts/bridge/interfaces/FlowEVMBridgeHandlerInterfaces.cdc",
    ),
    contract(names::ARRAY_UTILS, "cadence/contracts/utils/ArrayUtils.cdc"),
    contract(names::STRING_UTILS, "cadence/contracts/utils/StringUtils.cdc"),
    contract(
        names::SCOPED_FT_PROVIDERS,
        "cadence/contracts/utils/ScopedFTProviders.cdc",
    ),
    contract(names::SERIALIZE, "cadence/contracts/utils/Serialize.cdc"),
    contract(
        names::SERIALIZE_METADATA,
        "cadence/contracts/utils/SerializeMetadata.cdc",
    ),
    contract(
        names::I_BRIDGE_PERMISSIONS,
        "cadence/contracts/bridge/interfaces/IBridgePermissions.cdc",
    ),
    contract(names::I_CROSS_VM, "cadence/contracts/bridge/interfaces/ICrossVM.cdc"),
    contract(
        names::I_CROSS_VM_ASSET,
        "cadence/contracts/bridge/interfaces/ICrossVMAsset.cdc",
    ),
    contract(names::CROSS_VM_NFT, "cadence/contracts/bridge/interfaces/CrossVMNFT.cdc"),
    contract(
        names::CROSS_VM_TOKEN,
        "cadence/contracts/bridge/interfaces/CrossVMToken.cdc",
    ),
    contract(
        names::FLOW_EVM_BRIDGE_CUSTOM_ASSOCIATION_TYPES,
        "cadence/contracts/bridge/FlowEVMBridgeCustomAssociationTypes.cdc",
    ),
    contract(
        names::FLOW_EVM_BRIDGE_CUSTOM_ASSOCIATIONS,
        "cadence/contracts/bridge/FlowEVMBridgeCustomAssociations.cdc",
    ),
    contract(
        names::FLOW_EVM_BRIDGE_CONFIG,
        "cadence/contracts/bridge/FlowEVMBridgeConfig.cdc",
    ),
    CadenceDeployment {
        name: names::FLOW_EVM_BRIDGE_UTILS,
        path: "cadence/contracts/bridge/FlowEVMBridgeUtils.cdc",
        init: InitArgument::FactoryAddress,
    },
    contract(
        names::FLOW_EVM_BRIDGE_RESOLVER,
        "cadence/contracts/bridge/FlowEVMBridgeResolver.cdc",
    ),
    contract(
        names::FLOW_EVM_BRIDGE_HANDLERS,
        "cadence/contracts/bridge/FlowEVMBridgeHandlers.cdc",
    ),
    contract(
        names::FLOW_EVM_BRIDGE_NFT_ESCROW,
        "cadence/contracts/bridge/FlowEVMBridgeNFTEscrow.cdc",
    ),
    contract(
        names::FLOW_EVM_BRIDGE_TOKEN_ESCROW,
        "cadence/contracts/bridge/FlowEVMBridgeTokenEscrow.cdc",
    ),
    contract(
        names::FLOW_EVM_BRIDGE_TEMPLATES,
        "cadence/contracts/bridge/FlowEVMBridgeTemplates.cdc",
    ),
    contract(
        names::I_EVM_BRIDGE_NFT_MINTER,
        "cadence/contracts/bridge/interfaces/IEVMBridgeNFTMinter.cdc",
    ),
    contract(
        names::I_EVM_BRIDGE_TOKEN_MINTER,
        "cadence/contracts/bridge/interfaces/IEVMBridgeTokenMinter.cdc",
    ),
    contract(
        names::I_FLOW_EVM_NFT_BRIDGE,
        "cadence/contracts/bridge/interfaces/IFlowEVMNFTBridge.cdc",
    ),
    contract(
        names::I_FLOW_EVM_TOKEN_BRIDGE,
        "cadence/contracts/bridge/interfaces/IFlowEVMTokenBridge.cdc",
    ),
    contract(names::FLOW_EVM_BRIDGE, "cadence/contracts/bridge/FlowEVMBridge.cdc"),
    CadenceDeployment {
        name: names::FLOW_EVM_BRIDGE_ACCESSOR,
        path: "cadence/contracts/bridge/FlowEVMBridgeAccessor.cdc",
        init: InitArgument::EvmContractAddress,
    },
];

/// Admin transactions run after the contracts are deployed, in order.
///
/// The bridge stays paused at the end; templates must still be uploaded
/// with `upsert_contract_code_chunks` before it is unpaused.
pub const CONFIGURATION_TRANSACTIONS: [&str; 7] = [
    "cadence/transactions/bridge/admin/pause/update_bridge_pause_status.cdc",
    "cadence/transactions/bridge/admin/evm/set_registrar.cdc",
    "cadence/transactions/bridge/admin/evm/set_deployment_registry.cdc",
    "cadence/transactions/bridge/admin/evm/set_delegated_deployer.cdc",
    "cadence/transactions/bridge/admin/evm/add_deployer.cdc",
    "cadence/transactions/bridge/admin/fee/update_onboard_fee.cdc",
    "cadence/transactions/bridge/admin/fee/update_base_fee.cdc",
];

/// Bytecode read for one EVM deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmStep {
    pub deployment: EvmDeployment,
    pub bytecode: String,
}

/// Everything a stand-up run would submit, resolved.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    pub evm_deploy: Resolution,
    pub evm: Vec<EvmStep>,
    pub contracts: Vec<(CadenceDeployment, Resolution)>,
    pub configuration: Vec<Resolution>,
}

impl DeploymentPlan {
    /// Resolves every stand-up template against `bridge` and `core`.
    ///
    /// # Errors
    ///
    /// Fails on the first configuration error: a template or argument file
    /// missing from the catalog, or malformed arguments. Missing addresses
    /// do not fail; they are collected in the per-step resolutions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flow_evm_bridge_rs::deployment::DeploymentPlan;
    /// use flow_evm_bridge_rs::{BridgeEnvironment, CoreEnvironment, Resolver};
    ///
    /// let resolver = Resolver::embedded();
    /// let plan = DeploymentPlan::resolve(
    ///     &resolver,
    ///     &BridgeEnvironment::with_all("0x179b6b1cb6755e31"),
    ///     &CoreEnvironment::with_all("0xf8d6e0586b0a20c7"),
    /// )
    /// .unwrap();
    /// assert!(plan.is_resolved());
    /// assert_eq!(plan.contracts.len(), 26);
    /// ```
    pub fn resolve<S: TemplateSource>(
        resolver: &Resolver<S>,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Result<Self> {
        let steps = 1 + EVM_DEPLOYMENTS.len()
            + BRIDGE_DEPLOYMENT_ORDER.len()
            + CONFIGURATION_TRANSACTIONS.len();
        let span = spans::resolve_deployment_plan(steps);
        let _guard = span.enter();

        let result = Self::resolve_steps(resolver, bridge, core);
        match &result {
            Ok(plan) => {
                let missing = plan.missing();
                span.record("plan.resolved", missing.is_empty());
                if missing.is_empty() {
                    info!(steps, event = "deployment_plan_resolved");
                } else {
                    warn!(
                        steps,
                        missing = %missing.into_iter().collect::<Vec<_>>().join(", "),
                        event = "deployment_plan_incomplete"
                    );
                }
            }
            Err(e) => {
                span.record("plan.resolved", false);
                spans::record_error_with_context(
                    "DeploymentPlan",
                    &e.to_string(),
                    Some(&format!("{steps} steps planned")),
                );
                warn!(error = %e, event = "deployment_plan_failed");
            }
        }
        result
    }

    fn resolve_steps<S: TemplateSource>(
        resolver: &Resolver<S>,
        bridge: &BridgeEnvironment,
        core: &CoreEnvironment,
    ) -> Result<Self> {
        let evm_deploy =
            resolver.resolve_as(EVM_DEPLOY_TRANSACTION, TemplateKind::Transaction, bridge, core)?;

        let evm = EVM_DEPLOYMENTS
            .iter()
            .map(|deployment| -> Result<EvmStep> {
                Ok(EvmStep {
                    deployment: *deployment,
                    bytecode: extract_bytecode(resolver.catalog(), deployment.args_path)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let contracts = BRIDGE_DEPLOYMENT_ORDER
            .iter()
            .map(|deployment| -> Result<(CadenceDeployment, Resolution)> {
                let resolution = resolver.contract(deployment.path, bridge, core)?;
                Ok((*deployment, resolution))
            })
            .collect::<Result<Vec<_>>>()?;

        let configuration = CONFIGURATION_TRANSACTIONS
            .iter()
            .map(|path| resolver.transaction(path, bridge, core))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            evm_deploy,
            evm,
            contracts,
            configuration,
        })
    }

    /// Every Cadence resolution in submission order.
    pub fn resolutions(&self) -> impl Iterator<Item = &Resolution> {
        std::iter::once(&self.evm_deploy)
            .chain(self.contracts.iter().map(|(_, resolution)| resolution))
            .chain(self.configuration.iter())
    }

    /// Distinct placeholder names left unresolved anywhere in the plan.
    pub fn missing(&self) -> BTreeSet<&str> {
        self.resolutions()
            .flat_map(|resolution| resolution.missing.iter().map(String::as_str))
            .collect()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolutions().all(Resolution::is_resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EMBEDDED_FILES;
    use crate::error::TemplateError;
    use crate::testing::{all_addresses, InMemoryCatalog};

    #[test]
    fn test_order_covers_every_bridge_placeholder_once() {
        let mut deployed: Vec<_> = BRIDGE_DEPLOYMENT_ORDER.iter().map(|d| d.name).collect();
        deployed.sort_unstable();
        let mut registry = names::BRIDGE_PLACEHOLDERS.to_vec();
        registry.sort_unstable();
        assert_eq!(deployed, registry);
    }

    #[test]
    fn test_order_paths_match_names() {
        for deployment in BRIDGE_DEPLOYMENT_ORDER {
            assert!(
                deployment.path.ends_with(&format!("/{}.cdc", deployment.name)),
                "{}",
                deployment.path
            );
        }
    }

    #[test]
    fn test_dependencies_deploy_first() {
        let resolver = Resolver::embedded();
        let bridge = BridgeEnvironment::default();
        let core = CoreEnvironment::with_all("0x01");

        for (position, deployment) in BRIDGE_DEPLOYMENT_ORDER.iter().enumerate() {
            let resolution = resolver.contract(deployment.path, &bridge, &core).unwrap();
            let earlier: Vec<_> = BRIDGE_DEPLOYMENT_ORDER[..position]
                .iter()
                .map(|d| d.name)
                .collect();
            for import in &resolution.missing {
                assert!(
                    earlier.contains(&import.as_str()),
                    "{} imports {} which deploys later",
                    deployment.name,
                    import
                );
            }
        }
    }

    #[test]
    fn test_init_arguments() {
        let with_init: Vec<_> = BRIDGE_DEPLOYMENT_ORDER
            .iter()
            .filter(|d| d.init != InitArgument::None)
            .map(|d| (d.name, d.init))
            .collect();
        assert_eq!(
            with_init,
            vec![
                ("FlowEVMBridgeUtils", InitArgument::FactoryAddress),
                ("FlowEVMBridgeAccessor", InitArgument::EvmContractAddress),
            ]
        );
        assert_eq!(BRIDGE_DEPLOYMENT_ORDER[25].name, "FlowEVMBridgeAccessor");
    }

    #[test]
    fn test_plan_with_all_addresses() {
        let (bridge, core) = all_addresses();
        let plan = DeploymentPlan::resolve(&Resolver::embedded(), &bridge, &core).unwrap();

        assert!(plan.is_resolved());
        assert!(plan.missing().is_empty());
        assert_eq!(plan.evm.len(), 4);
        assert!(plan.evm.iter().all(|step| step.bytecode.starts_with("6080")));
        assert_eq!(plan.configuration.len(), CONFIGURATION_TRANSACTIONS.len());
    }

    #[test]
    fn test_plan_reports_missing_names() {
        let (mut bridge, core) = all_addresses();
        bridge.flow_evm_bridge_config.clear();

        let plan = DeploymentPlan::resolve(&Resolver::embedded(), &bridge, &core).unwrap();
        assert!(!plan.is_resolved());
        assert_eq!(plan.missing().into_iter().collect::<Vec<_>>(), vec!["FlowEVMBridgeConfig"]);
    }

    #[test]
    fn test_plan_fails_on_missing_file() {
        let mut catalog = InMemoryCatalog::new();
        for (path, contents) in EMBEDDED_FILES {
            if *path != "cadence/args/deploy-factory-args.json" {
                catalog.insert(*path, *contents);
            }
        }

        let resolver = Resolver::builder().catalog(catalog).build();
        let (bridge, core) = all_addresses();
        let err = DeploymentPlan::resolve(&resolver, &bridge, &core).unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
    }
}
