// SPDX-FileCopyrightText: 2025 Flow EVM Bridge Contributors
//
// SPDX-License-Identifier: Apache-2.0
//! Deployment address environments
//!
//! An environment maps each import placeholder to the account address the
//! dependency is deployed at. Two environments compose for every resolution:
//!
//! - [`BridgeEnvironment`]: the bridge's own contracts and utilities
//! - [`CoreEnvironment`]: shared Flow standards (fungible token, metadata
//!   views, EVM, ...)
//!
//! An empty address means "not yet known". The placeholder is then left in
//! place and reported as a missing import.
//!
//! Both records deserialize from JSON keyed by contract name:
//!
//! ```rust
//! use flow_evm_bridge_rs::CoreEnvironment;
//!
//! let core: CoreEnvironment =
//!     serde_json::from_str(r#"{"FungibleToken": "ee82856bf20e2aa6", "EVM": "f8d6e0586b0a20c7"}"#)
//!         .unwrap();
//! assert_eq!(core.get("FungibleToken"), Some("ee82856bf20e2aa6"));
//! assert_eq!(core.get("Burner"), Some(""));
//! ```

pub mod placeholders;

use serde::{Deserialize, Serialize};

macro_rules! address_environment {
    (
        $(#[$meta:meta])*
        $name:ident, $count:literal {
            $( $field:ident => $placeholder:tt, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                #[doc = concat!("Address of `", $placeholder, "`")]
                #[serde(rename = $placeholder)]
                pub $field: String,
            )+
        }

        impl $name {
            /// Number of placeholders this environment covers.
            pub const LEN: usize = $count;

            /// Returns `(placeholder, address)` pairs in substitution order.
            pub fn entries(&self) -> [(&'static str, &str); $count] {
                [ $( ($placeholder, self.$field.as_str()), )+ ]
            }

            /// Returns the address recorded for `placeholder`, or `None` if the
            /// name is not part of this environment.
            pub fn get(&self, placeholder: &str) -> Option<&str> {
                match placeholder {
                    $( $placeholder => Some(self.$field.as_str()), )+
                    _ => None,
                }
            }

            /// Records `address` for `placeholder`.
            ///
            /// Returns false if the name is not part of this environment.
            pub fn set(&mut self, placeholder: &str, address: impl Into<String>) -> bool {
                match placeholder {
                    $(
                        $placeholder => {
                            self.$field = address.into();
                            true
                        }
                    )+
                    _ => false,
                }
            }

            /// Builds an environment with every placeholder pointing at `address`.
            ///
            /// Handy for emulator deployments where everything lives on the
            /// service account, and for tests.
            pub fn with_all(address: &str) -> Self {
                Self {
                    $( $field: address.to_string(), )+
                }
            }

            /// Placeholders that still have no address.
            pub fn unset(&self) -> Vec<&'static str> {
                self.entries()
                    .into_iter()
                    .filter(|(_, address)| address.is_empty())
                    .map(|(name, _)| name)
                    .collect()
            }
        }
    };
}

address_environment! {
    /// Addresses of the bridge's own Cadence contracts.
    BridgeEnvironment, 26 {
        cross_vm_nft => "CrossVMNFT",
        cross_vm_token => "CrossVMToken",
        flow_evm_bridge_handler_interfaces => "FlowEVMBridgeHandlerInterfaces",
        i_bridge_permissions => "IBridgePermissions",
        i_cross_vm => "ICrossVM",
        i_cross_vm_asset => "ICrossVMAsset",
        i_evm_bridge_nft_minter => "IEVMBridgeNFTMinter",
        i_evm_bridge_token_minter => "IEVMBridgeTokenMinter",
        i_flow_evm_nft_bridge => "IFlowEVMNFTBridge",
        i_flow_evm_token_bridge => "IFlowEVMTokenBridge",
        flow_evm_bridge => "FlowEVMBridge",
        flow_evm_bridge_accessor => "FlowEVMBridgeAccessor",
        flow_evm_bridge_config => "FlowEVMBridgeConfig",
        flow_evm_bridge_handlers => "FlowEVMBridgeHandlers",
        flow_evm_bridge_nft_escrow => "FlowEVMBridgeNFTEscrow",
        flow_evm_bridge_resolver => "FlowEVMBridgeResolver",
        flow_evm_bridge_templates => "FlowEVMBridgeTemplates",
        flow_evm_bridge_token_escrow => "FlowEVMBridgeTokenEscrow",
        flow_evm_bridge_utils => "FlowEVMBridgeUtils",
        flow_evm_bridge_custom_association_types => "FlowEVMBridgeCustomAssociationTypes",
        flow_evm_bridge_custom_associations => "FlowEVMBridgeCustomAssociations",
        array_utils => "ArrayUtils",
        scoped_ft_providers => "ScopedFTProviders",
        serialize => "Serialize",
        serialize_metadata => "SerializeMetadata",
        string_utils => "StringUtils",
    }
}

address_environment! {
    /// Addresses of the shared Flow core contracts the bridge imports.
    CoreEnvironment, 12 {
        fungible_token => "FungibleToken",
        non_fungible_token => "NonFungibleToken",
        metadata_views => "MetadataViews",
        fungible_token_metadata_views => "FungibleTokenMetadataViews",
        view_resolver => "ViewResolver",
        burner => "Burner",
        evm => "EVM",
        cross_vm_metadata_views => "CrossVMMetadataViews",
        crypto => "Crypto",
        flow_token => "FlowToken",
        flow_fees => "FlowFees",
        flow_storage_fees => "FlowStorageFees",
    }
}
