//! Flow networks the bridge is stood up on

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};

/// Network a deployment targets
///
/// The name matches the alias keys used in `flow.json`.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::deployment::Network;
///
/// let network: Network = "testnet".parse().unwrap();
/// assert_eq!(network, Network::Testnet);
/// assert_eq!(network.to_string(), "testnet");
/// assert!("devnet".parse::<Network>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Local emulator, every contract on the service account
    Emulator,
    Previewnet,
    Crescendo,
    Testnet,
    Mainnet,
}

impl Network {
    pub const ALL: [Self; 5] = [
        Self::Emulator,
        Self::Previewnet,
        Self::Crescendo,
        Self::Testnet,
        Self::Mainnet,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emulator => "emulator",
            Self::Previewnet => "previewnet",
            Self::Crescendo => "crescendo",
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownNetwork(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("emulator", Network::Emulator)]
    #[case("previewnet", Network::Previewnet)]
    #[case("crescendo", Network::Crescendo)]
    #[case("testnet", Network::Testnet)]
    #[case("mainnet", Network::Mainnet)]
    fn test_parse_and_display(#[case] name: &str, #[case] network: Network) {
        assert_eq!(name.parse::<Network>().unwrap(), network);
        assert_eq!(network.to_string(), name);
    }

    #[rstest]
    #[case("")]
    #[case("Mainnet")]
    #[case("sepolia")]
    fn test_unknown_network(#[case] name: &str) {
        let err = name.parse::<Network>().unwrap_err();
        assert!(matches!(err, TemplateError::UnknownNetwork(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Network::Crescendo).unwrap(),
            "\"crescendo\""
        );
        let network: Network = serde_json::from_str("\"previewnet\"").unwrap();
        assert_eq!(network, Network::Previewnet);
    }
}
