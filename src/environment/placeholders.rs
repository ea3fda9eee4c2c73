// SPDX-FileCopyrightText: 2025 Flow EVM Bridge Contributors
//
// SPDX-License-Identifier: Apache-2.0
//! Import placeholder names used by the embedded Cadence templates
//!
//! Templates import their dependencies as `import "Name"`. Each constant here
//! is the bare dependency name; the quoted form is what gets matched during
//! substitution. The lists must stay in sync with the templates under
//! `cadence/`.

// Bridge contracts

pub const CROSS_VM_NFT: &str = "CrossVMNFT";
pub const CROSS_VM_TOKEN: &str = "CrossVMToken";
pub const FLOW_EVM_BRIDGE_HANDLER_INTERFACES: &str = "FlowEVMBridgeHandlerInterfaces";
pub const I_BRIDGE_PERMISSIONS: &str = "IBridgePermissions";
pub const I_CROSS_VM: &str = "ICrossVM";
pub const I_CROSS_VM_ASSET: &str = "ICrossVMAsset";
pub const I_EVM_BRIDGE_NFT_MINTER: &str = "IEVMBridgeNFTMinter";
pub const I_EVM_BRIDGE_TOKEN_MINTER: &str = "IEVMBridgeTokenMinter";
pub const I_FLOW_EVM_NFT_BRIDGE: &str = "IFlowEVMNFTBridge";
pub const I_FLOW_EVM_TOKEN_BRIDGE: &str = "IFlowEVMTokenBridge";
pub const FLOW_EVM_BRIDGE: &str = "FlowEVMBridge";
pub const FLOW_EVM_BRIDGE_ACCESSOR: &str = "FlowEVMBridgeAccessor";
pub const FLOW_EVM_BRIDGE_CONFIG: &str = "FlowEVMBridgeConfig";
pub const FLOW_EVM_BRIDGE_HANDLERS: &str = "FlowEVMBridgeHandlers";
pub const FLOW_EVM_BRIDGE_NFT_ESCROW: &str = "FlowEVMBridgeNFTEscrow";
pub const FLOW_EVM_BRIDGE_RESOLVER: &str = "FlowEVMBridgeResolver";
pub const FLOW_EVM_BRIDGE_TEMPLATES: &str = "FlowEVMBridgeTemplates";
pub const FLOW_EVM_BRIDGE_TOKEN_ESCROW: &str = "FlowEVMBridgeTokenEscrow";
pub const FLOW_EVM_BRIDGE_UTILS: &str = "FlowEVMBridgeUtils";
pub const FLOW_EVM_BRIDGE_CUSTOM_ASSOCIATION_TYPES: &str = "FlowEVMBridgeCustomAssociationTypes";
pub const FLOW_EVM_BRIDGE_CUSTOM_ASSOCIATIONS: &str = "FlowEVMBridgeCustomAssociations";

// Utility contracts deployed alongside the bridge

pub const ARRAY_UTILS: &str = "ArrayUtils";
pub const SCOPED_FT_PROVIDERS: &str = "ScopedFTProviders";
pub const SERIALIZE: &str = "Serialize";
pub const SERIALIZE_METADATA: &str = "SerializeMetadata";
pub const STRING_UTILS: &str = "StringUtils";

// =============================================================================
// Core contracts
// =============================================================================
//
// Shared Flow standards the bridge depends on. These live at well-known
// addresses per network and are not deployed by the bridge itself.

pub const FUNGIBLE_TOKEN: &str = "FungibleToken";
pub const NON_FUNGIBLE_TOKEN: &str = "NonFungibleToken";
pub const METADATA_VIEWS: &str = "MetadataViews";
pub const FUNGIBLE_TOKEN_METADATA_VIEWS: &str = "FungibleTokenMetadataViews";
pub const VIEW_RESOLVER: &str = "ViewResolver";
pub const BURNER: &str = "Burner";
pub const EVM: &str = "EVM";
pub const CROSS_VM_METADATA_VIEWS: &str = "CrossVMMetadataViews";
pub const CRYPTO: &str = "Crypto";
pub const FLOW_TOKEN: &str = "FlowToken";
pub const FLOW_FEES: &str = "FlowFees";
pub const FLOW_STORAGE_FEES: &str = "FlowStorageFees";

/// Bridge placeholders in the order substitution applies them.
pub const BRIDGE_PLACEHOLDERS: [&str; 26] = [
    CROSS_VM_NFT,
    CROSS_VM_TOKEN,
    FLOW_EVM_BRIDGE_HANDLER_INTERFACES,
    I_BRIDGE_PERMISSIONS,
    I_CROSS_VM,
    I_CROSS_VM_ASSET,
    I_EVM_BRIDGE_NFT_MINTER,
    I_EVM_BRIDGE_TOKEN_MINTER,
    I_FLOW_EVM_NFT_BRIDGE,
    I_FLOW_EVM_TOKEN_BRIDGE,
    FLOW_EVM_BRIDGE,
    FLOW_EVM_BRIDGE_ACCESSOR,
    FLOW_EVM_BRIDGE_CONFIG,
    FLOW_EVM_BRIDGE_HANDLERS,
    FLOW_EVM_BRIDGE_NFT_ESCROW,
    FLOW_EVM_BRIDGE_RESOLVER,
    FLOW_EVM_BRIDGE_TEMPLATES,
    FLOW_EVM_BRIDGE_TOKEN_ESCROW,
    FLOW_EVM_BRIDGE_UTILS,
    FLOW_EVM_BRIDGE_CUSTOM_ASSOCIATION_TYPES,
    FLOW_EVM_BRIDGE_CUSTOM_ASSOCIATIONS,
    ARRAY_UTILS,
    SCOPED_FT_PROVIDERS,
    SERIALIZE,
    SERIALIZE_METADATA,
    STRING_UTILS,
];

/// Core placeholders in the order substitution applies them.
pub const CORE_PLACEHOLDERS: [&str; 12] = [
    FUNGIBLE_TOKEN,
    NON_FUNGIBLE_TOKEN,
    METADATA_VIEWS,
    FUNGIBLE_TOKEN_METADATA_VIEWS,
    VIEW_RESOLVER,
    BURNER,
    EVM,
    CROSS_VM_METADATA_VIEWS,
    CRYPTO,
    FLOW_TOKEN,
    FLOW_FEES,
    FLOW_STORAGE_FEES,
];
