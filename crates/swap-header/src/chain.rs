//! Known chains and the network badge label table.
//!
//! The exchange lives on BNB Smart Chain. Any other known network gets a
//! warning label so the header can tell the user they are connected to the
//! wrong place.

use serde::Serialize;

/// Label shown for Ethereum networks the exchange is not deployed on.
pub const WRONG_NETWORK: &str = "Wrong Network";

/// Label shown for the BSC test network.
pub const TESTNET: &str = "Testnet";

/// Chains the front-end knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChainId {
    Mainnet,
    Ropsten,
    Rinkeby,
    Goerli,
    Kovan,
    BscMainnet,
    BscTestnet,
}

impl ChainId {
    /// Every known chain, in table order.
    pub const ALL: [ChainId; 7] = [
        ChainId::Mainnet,
        ChainId::Ropsten,
        ChainId::Rinkeby,
        ChainId::Goerli,
        ChainId::Kovan,
        ChainId::BscMainnet,
        ChainId::BscTestnet,
    ];

    /// Numeric EIP-155 chain id.
    pub const fn id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Rinkeby => 4,
            Self::Goerli => 5,
            Self::Kovan => 42,
            Self::BscMainnet => 56,
            Self::BscTestnet => 97,
        }
    }

    /// Resolve a numeric chain id; `None` for chains outside the table.
    pub fn from_id(id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|chain| chain.id() == id)
    }

    /// Badge label for this chain. `None` means the default supported
    /// network, which needs no warning.
    pub const fn network_label(self) -> Option<&'static str> {
        match self {
            Self::Mainnet | Self::Ropsten | Self::Rinkeby | Self::Goerli | Self::Kovan => {
                Some(WRONG_NETWORK)
            }
            Self::BscMainnet => None,
            Self::BscTestnet => Some(TESTNET),
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "Ethereum Mainnet"),
            Self::Ropsten => write!(f, "Ropsten"),
            Self::Rinkeby => write!(f, "Rinkeby"),
            Self::Goerli => write!(f, "Görli"),
            Self::Kovan => write!(f, "Kovan"),
            Self::BscMainnet => write!(f, "BSC Mainnet"),
            Self::BscTestnet => write!(f, "BSC Testnet"),
        }
    }
}

/// Look up the badge label for a possibly absent, possibly unknown chain id.
pub fn network_label(chain_id: Option<u64>) -> Option<&'static str> {
    chain_id
        .and_then(ChainId::from_id)
        .and_then(ChainId::network_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ethereum_networks_are_flagged_as_wrong() {
        for id in [1, 3, 4, 5, 42] {
            assert_eq!(network_label(Some(id)), Some(WRONG_NETWORK), "chain {id}");
        }
    }

    #[test]
    fn bsc_mainnet_has_no_label() {
        assert_eq!(network_label(Some(56)), None);
        assert_eq!(ChainId::from_id(56), Some(ChainId::BscMainnet));
    }

    #[test]
    fn bsc_testnet_is_labelled() {
        assert_eq!(network_label(Some(97)), Some(TESTNET));
    }

    #[test]
    fn unknown_and_absent_chains_have_no_label() {
        assert_eq!(network_label(Some(137)), None);
        assert_eq!(network_label(None), None);
        assert_eq!(ChainId::from_id(0), None);
    }

    #[test]
    fn ids_are_unique() {
        let ids: std::collections::BTreeSet<u64> = ChainId::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), ChainId::ALL.len());
    }
}
