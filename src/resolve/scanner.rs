//! Import-completeness scanning
//!
//! After substitution, any `import "` left in the code marks a placeholder
//! with no address. [`ImportScanner`] extracts the names of those imports so
//! they can be reported together.
//!
//! The default [`QuoteSplitScanner`] splits the source on `"` and reads the
//! fragments that precede the template body. Where the body starts depends
//! on the [`TemplateKind`]; those boundary tokens track Cadence syntax and
//! must be updated together if the language changes.

use std::fmt;

/// Marker left in code that still has an unresolved placeholder.
pub const UNRESOLVED_IMPORT: &str = "import \"";

/// Category of a Cadence template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Contract or contract interface under `cadence/contracts/`
    Contract,
    /// Transaction under `cadence/transactions/`
    Transaction,
    /// Script under `cadence/scripts/`
    Script,
}

impl TemplateKind {
    /// Token that starts the template body.
    ///
    /// Import scanning stops at the first fragment containing it. The
    /// contract token also matches `access(all) contract interface `.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flow_evm_bridge_rs::TemplateKind;
    ///
    /// assert_eq!(TemplateKind::Transaction.body_boundary(), "transaction(");
    /// ```
    #[inline]
    pub const fn body_boundary(self) -> &'static str {
        match self {
            Self::Contract => "access(all) contract ",
            Self::Transaction => "transaction(",
            Self::Script => "access(all) fun main(",
        }
    }

    /// Infers the kind from a catalog path such as
    /// `cadence/scripts/bridge/get_gas_limit.cdc`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flow_evm_bridge_rs::TemplateKind;
    ///
    /// assert_eq!(
    ///     TemplateKind::from_path("cadence/contracts/utils/ArrayUtils.cdc"),
    ///     Some(TemplateKind::Contract)
    /// );
    /// assert_eq!(TemplateKind::from_path("cadence/args/deploy-factory-args.json"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_start_matches("./");
        if path.starts_with("cadence/contracts/") {
            Some(Self::Contract)
        } else if path.starts_with("cadence/transactions/") {
            Some(Self::Transaction)
        } else if path.starts_with("cadence/scripts/") {
            Some(Self::Script)
        } else {
            None
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Transaction => "transaction",
            Self::Script => "script",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Finds the names of imports that substitution left unresolved.
///
/// Implementations must return names in a deterministic order and report
/// every unresolved import before the template body. An empty result means
/// the code is fully resolved.
pub trait ImportScanner: Send + Sync {
    fn unresolved_imports(&self, code: &str, kind: TemplateKind) -> Vec<String>;
}

/// Quote-splitting heuristic scanner.
///
/// Walks the `"`-separated fragments of the source until the body boundary
/// of the template kind, skipping fragments that hold the `import` keyword
/// and empty ones. What remains are the quoted placeholder names, in source
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteSplitScanner;

impl ImportScanner for QuoteSplitScanner {
    fn unresolved_imports(&self, code: &str, kind: TemplateKind) -> Vec<String> {
        if !code.contains(UNRESOLVED_IMPORT) {
            return Vec::new();
        }

        let boundary = kind.body_boundary();
        code.split('"')
            .take_while(|fragment| !fragment.contains(boundary))
            .filter(|fragment| !fragment.contains("import") && !fragment.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Names of every `import "Name"` left in `code`, in source order.
///
/// Unlike [`QuoteSplitScanner`] this ignores the body boundary, so it still
/// finds the leftover imports when a boundary token appears above them (in a
/// header comment, say).
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::resolve::unresolved_import_names;
///
/// let code = "// Call as transaction(id: String)\nimport \"EVM\"\n";
/// assert_eq!(unresolved_import_names(code), vec!["EVM"]);
/// ```
pub fn unresolved_import_names(code: &str) -> Vec<String> {
    code.match_indices(UNRESOLVED_IMPORT)
        .filter_map(|(start, marker)| {
            let rest = &code[start + marker.len()..];
            rest.split(['"', '\n']).next()
        })
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cadence/contracts/bridge/FlowEVMBridge.cdc", Some(TemplateKind::Contract))]
    #[case("./cadence/contracts/utils/ArrayUtils.cdc", Some(TemplateKind::Contract))]
    #[case("cadence/transactions/evm/deploy.cdc", Some(TemplateKind::Transaction))]
    #[case("cadence/scripts/config/get_base_fee.cdc", Some(TemplateKind::Script))]
    #[case("cadence/tests/test_helpers.cdc", None)]
    fn test_kind_from_path(#[case] path: &str, #[case] expected: Option<TemplateKind>) {
        assert_eq!(TemplateKind::from_path(path), expected);
    }

    #[test]
    fn test_fully_resolved_code_reports_nothing() {
        let code = "import EVM from 0x0A\n\naccess(all) contract Foo {\n    let s = \"quoted\"\n}\n";
        assert!(QuoteSplitScanner
            .unresolved_imports(code, TemplateKind::Contract)
            .is_empty());
    }

    #[test]
    fn test_reports_unresolved_contract_imports_in_order() {
        let code = "import \"NonFungibleToken\"\nimport MetadataViews from 0x0A\nimport \"EVM\"\nimport \"ICrossVMAsset\"\n\naccess(all) contract CrossVMNFT {\n    let name = \"ignored\"\n}\n";
        let names = QuoteSplitScanner.unresolved_imports(code, TemplateKind::Contract);
        assert_eq!(names, vec!["NonFungibleToken", "EVM", "ICrossVMAsset"]);
    }

    #[test]
    fn test_contract_interface_boundary() {
        let code = "import \"EVM\"\n\naccess(all) contract interface ICrossVM {\n    let x = \"body\"\n}\n";
        let names = QuoteSplitScanner.unresolved_imports(code, TemplateKind::Contract);
        assert_eq!(names, vec!["EVM"]);
    }

    #[test]
    fn test_transaction_boundary() {
        let code = "import \"EVM\"\nimport \"FlowEVMBridgeConfig\"\n\ntransaction(identifier: String) {\n    execute { panic(\"no\") }\n}\n";
        let names = QuoteSplitScanner.unresolved_imports(code, TemplateKind::Transaction);
        assert_eq!(names, vec!["EVM", "FlowEVMBridgeConfig"]);
    }

    #[test]
    fn test_script_boundary() {
        let code = "import \"EVM\"\nimport FlowEVMBridge from 0x0A\n\naccess(all) fun main(hex: String): String {\n    return \"x\"\n}\n";
        let names = QuoteSplitScanner.unresolved_imports(code, TemplateKind::Script);
        assert_eq!(names, vec!["EVM"]);
    }

    #[test]
    fn test_resolved_import_between_unresolved_ones() {
        let code = "import \"EVM\"\nimport FungibleToken from 0x0A\nimport \"FlowEVMBridgeConfig\"\n\ntransaction() {\n    prepare(signer: &Account) { log(\"x\") }\n}\n";
        let names = QuoteSplitScanner.unresolved_imports(code, TemplateKind::Transaction);
        assert_eq!(names, vec!["EVM", "FlowEVMBridgeConfig"]);
        assert_eq!(unresolved_import_names(code), names);
    }

    #[test]
    fn test_boundary_in_header_comment_hides_imports_from_quote_split() {
        let code = "// Call as transaction(identifier: String)\nimport \"EVM\"\n\ntransaction(identifier: String) {}\n";
        assert!(QuoteSplitScanner
            .unresolved_imports(code, TemplateKind::Transaction)
            .is_empty());
        assert_eq!(unresolved_import_names(code), vec!["EVM"]);
    }

    #[rstest]
    #[case("import EVM from 0x0A\n", &[])]
    #[case("import \"EVM\"\nimport \"Burner\"\n", &["EVM", "Burner"])]
    #[case("import \"\"\n", &[])]
    fn test_unresolved_import_names(#[case] code: &str, #[case] expected: &[&str]) {
        assert_eq!(unresolved_import_names(code), expected);
    }
}
