//! Placeholder substitution
//!
//! Matching is a plain string replacement of `import "Name"`. The quotes
//! delimit the name, so `"ICrossVM"` never matches inside `"ICrossVMAsset"`,
//! and a quoted name outside an import (`name: "FlowEVMBridgeAccessor"`)
//! is left alone.

use super::UNRESOLVED_IMPORT;
use crate::environment::{BridgeEnvironment, CoreEnvironment};

/// Prepends `0x` to `address` unless it already starts with it.
///
/// This is a prefix check only; the address is not validated as hex.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::resolve::with_hex_prefix;
///
/// assert_eq!(with_hex_prefix("0A"), "0x0A");
/// assert_eq!(with_hex_prefix("0x0A"), "0x0A");
/// assert_eq!(with_hex_prefix(""), "");
/// ```
pub fn with_hex_prefix(address: &str) -> String {
    if address.is_empty() || address.starts_with("0x") {
        address.to_string()
    } else {
        format!("0x{address}")
    }
}

/// Replaces every `import "name"` placeholder in `code` with
/// `import name from 0x...`.
///
/// An empty `address` leaves the code untouched so the import is reported as
/// missing during validation.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::resolve::replace_address;
///
/// let code = "import \"FungibleToken\"\n";
/// assert_eq!(
///     replace_address(code, "FungibleToken", "ee82856bf20e2aa6"),
///     "import FungibleToken from 0xee82856bf20e2aa6\n"
/// );
/// assert_eq!(replace_address(code, "FungibleToken", ""), code);
/// ```
pub fn replace_address(code: &str, name: &str, address: &str) -> String {
    if address.is_empty() {
        return code.to_string();
    }

    let placeholder = format!("{UNRESOLVED_IMPORT}{name}\"");
    let replacement = format!("import {name} from {}", with_hex_prefix(address));
    code.replace(&placeholder, &replacement)
}

/// Applies every bridge placeholder, then every core placeholder, in
/// registry order.
///
/// Bridge and core placeholder names are disjoint, so the order between the
/// two passes does not change the result.
pub fn replace_addresses(code: &str, bridge: &BridgeEnvironment, core: &CoreEnvironment) -> String {
    let code = bridge
        .entries()
        .into_iter()
        .fold(code.to_string(), |code, (name, address)| {
            replace_address(&code, name, address)
        });

    replace_core_addresses(&code, core)
}

/// Applies only the core placeholders.
pub fn replace_core_addresses(code: &str, core: &CoreEnvironment) -> String {
    core.entries()
        .into_iter()
        .fold(code.to_string(), |code, (name, address)| {
            replace_address(&code, name, address)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CODE: &str = "import \"ICrossVM\"\nimport \"ICrossVMAsset\"\n\naccess(all) contract Foo {}\n";

    #[rstest]
    #[case("0A", "0x0A")]
    #[case("0x0A", "0x0A")]
    #[case("f8d6e0586b0a20c7", "0xf8d6e0586b0a20c7")]
    #[case("", "")]
    fn test_with_hex_prefix(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(with_hex_prefix(input), expected);
    }

    #[test]
    fn test_prefix_insensitive_substitution() {
        assert_eq!(
            replace_address(CODE, "ICrossVM", "0A"),
            replace_address(CODE, "ICrossVM", "0x0A")
        );
    }

    #[test]
    fn test_no_cross_match_on_shared_prefix() {
        let code = replace_address(CODE, "ICrossVM", "0x0A");
        assert!(code.contains("import ICrossVM from 0x0A\n"));
        assert!(code.contains("import \"ICrossVMAsset\"\n"));

        let code = replace_address(CODE, "ICrossVMAsset", "0x0B");
        assert!(code.contains("import \"ICrossVM\"\n"));
        assert!(code.contains("import ICrossVMAsset from 0x0B\n"));
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let code = "import \"EVM\"\nimport \"EVM\"\n";
        assert_eq!(
            replace_address(code, "EVM", "0x0A"),
            "import EVM from 0x0A\nimport EVM from 0x0A\n"
        );
    }

    #[test]
    fn test_substitution_is_idempotent() {
        let once = replace_address(CODE, "ICrossVM", "0x0A");
        let twice = replace_address(&once, "ICrossVM", "0x0A");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_quoted_names_outside_imports_are_kept() {
        let code = "import \"FlowEVMBridgeAccessor\"\n\naccess(all) contract A {\n    let name = \"FlowEVMBridgeAccessor\"\n}\n";
        assert_eq!(
            replace_address(code, "FlowEVMBridgeAccessor", "0x0A"),
            "import FlowEVMBridgeAccessor from 0x0A\n\naccess(all) contract A {\n    let name = \"FlowEVMBridgeAccessor\"\n}\n"
        );
    }

    #[test]
    fn test_empty_address_leaves_code_unchanged() {
        assert_eq!(replace_address(CODE, "ICrossVM", ""), CODE);
    }

    #[test]
    fn test_replace_addresses_composes_bridge_and_core() {
        let code = "import \"FungibleToken\"\nimport \"FlowEVMBridgeUtils\"\nimport \"EVM\"\n";
        let mut bridge = BridgeEnvironment::default();
        bridge.flow_evm_bridge_utils = "0x0B".to_string();
        let mut core = CoreEnvironment::default();
        core.fungible_token = "0C".to_string();

        let resolved = replace_addresses(code, &bridge, &core);
        assert_eq!(
            resolved,
            "import FungibleToken from 0x0C\nimport FlowEVMBridgeUtils from 0x0B\nimport \"EVM\"\n"
        );
    }
}
