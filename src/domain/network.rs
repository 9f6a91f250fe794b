//! Network reference list: static seed entries plus append-only custom adds.

use serde::{Deserialize, Serialize};

use crate::config::networks::seed_networks;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOption {
    pub id: String,
    pub name: String,
    pub chain_id: u64,
    pub explorer_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkBook {
    options: Vec<NetworkOption>,
}

impl Default for NetworkBook {
    fn default() -> Self {
        Self {
            options: seed_networks(),
        }
    }
}

impl NetworkBook {
    pub fn options(&self) -> &[NetworkOption] {
        &self.options
    }

    pub fn get(&self, id: &str) -> Option<&NetworkOption> {
        self.options.iter().find(|n| n.id == id)
    }

    /// First entry of the seed list; the settings form's default selection.
    pub fn first_id(&self) -> &str {
        &self.options[0].id
    }

    /// Appends a user-defined network. The list is append-only; there is no
    /// removal path.
    pub fn add_custom(&mut self, name: String, chain_id: u64, explorer_url: String) -> &NetworkOption {
        let id = format!("custom-{}", chain_id);
        self.options.push(NetworkOption {
            id,
            name,
            chain_id,
            explorer_url,
        });
        self.options.last().expect("just pushed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list_present() {
        let book = NetworkBook::default();
        assert_eq!(book.options().len(), 3);
        assert_eq!(book.first_id(), "eth-mainnet");
        assert_eq!(book.get("polygon").unwrap().chain_id, 137);
    }

    #[test]
    fn test_custom_network_appended() {
        let mut book = NetworkBook::default();
        let before = book.options().len();
        let added = book
            .add_custom("Base".to_string(), 8453, "https://basescan.org".to_string())
            .clone();
        assert_eq!(book.options().len(), before + 1);
        assert_eq!(added.id, "custom-8453");
        assert_eq!(book.get("custom-8453"), Some(&added));
    }
}
