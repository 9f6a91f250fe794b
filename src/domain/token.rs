//! The in-progress token definition ("draft") and its validation rules.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::DEFAULT_DECIMALS;

/// The fixed set of token standards offered by the definition form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum TokenType {
    #[default]
    Erc20,
    Erc721,
    Erc1155,
    Custom,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TokenType::Erc20 => "ERC-20",
            TokenType::Erc721 => "ERC-721",
            TokenType::Erc1155 => "ERC-1155",
            TokenType::Custom => "Custom",
        };
        write!(f, "{}", label)
    }
}

impl TokenType {
    /// Only the fungible standard requires a positive total supply up front.
    pub fn requires_supply(&self) -> bool {
        matches!(self, TokenType::Erc20)
    }
}

/// Optional contract capabilities toggled on the definition form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFeatures {
    pub mintable: bool,
    pub burnable: bool,
    pub pausable: bool,
    pub upgradable: bool,
    pub snapshots: bool,
    pub permit: bool,
}

/// Fields that can fail validation, keyed so the form can render the
/// message under the matching input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DraftField {
    Name,
    Symbol,
    TotalSupply,
}

/// Lifecycle of the draft within a session.
///
/// AI proposal fields are only merged while `Empty`; the first manual edit
/// moves to `UserEdited` and submitting the definition form moves to
/// `Committed`. Later proposals never overwrite either of those.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DraftStage {
    #[default]
    Empty,
    UserEdited,
    Committed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenDraft {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub token_type: TokenType,
    pub total_supply: f64,
    pub decimals: u8,
    pub features: TokenFeatures,
    /// Pretty-printed dump of the proposal that pre-filled this draft, if any.
    pub ai_notes: Option<String>,
}

impl Default for TokenDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            description: String::new(),
            token_type: TokenType::default(),
            total_supply: 0.0,
            decimals: DEFAULT_DECIMALS,
            features: TokenFeatures {
                burnable: true,
                ..TokenFeatures::default()
            },
            ai_notes: None,
        }
    }
}

impl TokenDraft {
    /// Synchronous submit-time validation. An empty map means the draft may
    /// be committed; otherwise each entry carries the inline message for one
    /// field and the step must not advance.
    pub fn validate(&self) -> BTreeMap<DraftField, &'static str> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(DraftField::Name, "Required");
        }
        if self.symbol.trim().len() < 2 {
            errors.insert(DraftField::Symbol, "Symbol too short");
        }
        if self.token_type.requires_supply() && self.total_supply <= 0.0 {
            errors.insert(DraftField::TotalSupply, "Must be > 0");
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TokenDraft {
        TokenDraft {
            name: "Forge".to_string(),
            symbol: "FRG".to_string(),
            total_supply: 1_000_000.0,
            ..TokenDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn test_missing_name_and_short_symbol_rejected() {
        let draft = TokenDraft {
            name: " ".to_string(),
            symbol: "F".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate();
        assert_eq!(errors.get(&DraftField::Name), Some(&"Required"));
        assert_eq!(errors.get(&DraftField::Symbol), Some(&"Symbol too short"));
    }

    #[test]
    fn test_supply_required_only_for_fungible_type() {
        let mut draft = TokenDraft {
            total_supply: 0.0,
            ..valid_draft()
        };
        assert!(draft.validate().contains_key(&DraftField::TotalSupply));

        draft.token_type = TokenType::Erc721;
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_default_draft_has_burnable_and_18_decimals() {
        let draft = TokenDraft::default();
        assert!(draft.features.burnable);
        assert!(!draft.features.mintable);
        assert_eq!(draft.decimals, 18);
    }
}
