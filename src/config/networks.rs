//! The static network reference list.
//!
//! The user can append custom networks at runtime (see
//! `domain::network::NetworkBook`); removal is not supported.

use crate::domain::network::NetworkOption;

pub fn seed_networks() -> Vec<NetworkOption> {
    vec![
        NetworkOption {
            id: "eth-mainnet".to_string(),
            name: "Ethereum Mainnet".to_string(),
            chain_id: 1,
            explorer_url: "https://etherscan.io".to_string(),
        },
        NetworkOption {
            id: "sepolia".to_string(),
            name: "Sepolia Testnet".to_string(),
            chain_id: 11155111,
            explorer_url: "https://sepolia.etherscan.io".to_string(),
        },
        NetworkOption {
            id: "polygon".to_string(),
            name: "Polygon PoS".to_string(),
            chain_id: 137,
            explorer_url: "https://polygonscan.com".to_string(),
        },
    ]
}
