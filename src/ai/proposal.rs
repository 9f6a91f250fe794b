//! The structured suggestion returned by the assist call.
//!
//! A proposal is a suggestion overlay: fields are copied into the draft only
//! while the corresponding draft field is still at its default, and the
//! session only asks for the overlay while the draft is untouched. A field
//! absent from the response leaves the draft unchanged.

use serde::{Deserialize, Serialize};

use crate::domain::allocation::AllocationCategory;
use crate::domain::token::TokenDraft;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenomicsProposal {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub total_supply: Option<f64>,
    pub decimals: Option<f64>,
    pub allocation: Option<AllocationBreakdown>,
    pub vesting_recommendations: Option<VestingRecommendations>,
    pub utility_suggestions: Vec<String>,
}

/// Percentage split across the six fixed categories of the request schema.
/// The model is instructed that these sum to 100; the client does not
/// enforce it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationBreakdown {
    pub team: f64,
    pub investors: f64,
    pub ecosystem: f64,
    pub treasury: f64,
    pub marketing: f64,
    pub liquidity: f64,
}

impl AllocationBreakdown {
    /// Category/percentage pairs in schema order, labels as the model emits
    /// them (lower case; normalised via `AllocationCategory::from_label`).
    pub fn pairs(&self) -> [(AllocationCategory, f64); 6] {
        [
            (AllocationCategory::from_label("team"), self.team),
            (AllocationCategory::from_label("investors"), self.investors),
            (AllocationCategory::from_label("ecosystem"), self.ecosystem),
            (AllocationCategory::from_label("treasury"), self.treasury),
            (AllocationCategory::from_label("marketing"), self.marketing),
            (AllocationCategory::from_label("liquidity"), self.liquidity),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VestingRecommendations {
    pub team: Option<String>,
    pub investors: Option<String>,
}

impl TokenomicsProposal {
    /// Overlays the proposal onto `base`, filling only fields still at their
    /// default. Decimals are left alone: the form pre-fills exactly name,
    /// symbol, supply and description. The full proposal is dumped into
    /// `ai_notes` for display.
    pub fn overlay_on(&self, base: &TokenDraft) -> TokenDraft {
        let mut draft = base.clone();

        if draft.name.is_empty() {
            if let Some(name) = &self.name {
                draft.name = name.clone();
            }
        }
        if draft.symbol.is_empty() {
            if let Some(symbol) = &self.symbol {
                draft.symbol = symbol.clone();
            }
        }
        if draft.description.is_empty() {
            if let Some(description) = &self.description {
                draft.description = description.clone();
            }
        }
        if draft.total_supply <= 0.0 {
            if let Some(total_supply) = self.total_supply {
                draft.total_supply = total_supply;
            }
        }

        draft.ai_notes = serde_json::to_string_pretty(self).ok();
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_token_proposal() -> TokenomicsProposal {
        serde_json::from_str(
            r#"{
                "name": "FlowToken",
                "symbol": "FLW",
                "totalSupply": 500000000,
                "allocation": {
                    "team": 20, "investors": 15, "ecosystem": 30,
                    "treasury": 15, "marketing": 10, "liquidity": 10
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_overlay_fills_empty_draft() {
        let proposal = flow_token_proposal();
        let draft = proposal.overlay_on(&TokenDraft::default());
        assert_eq!(draft.name, "FlowToken");
        assert_eq!(draft.symbol, "FLW");
        assert_eq!(draft.total_supply, 500_000_000.0);
        assert!(draft.ai_notes.is_some());
    }

    #[test]
    fn test_overlay_keeps_existing_fields() {
        let proposal = flow_token_proposal();
        let base = TokenDraft {
            name: "Mine".to_string(),
            total_supply: 42.0,
            ..TokenDraft::default()
        };
        let draft = proposal.overlay_on(&base);
        assert_eq!(draft.name, "Mine");
        assert_eq!(draft.total_supply, 42.0);
        // Still-empty fields do get the suggestion
        assert_eq!(draft.symbol, "FLW");
    }

    #[test]
    fn test_absent_fields_leave_draft_unchanged() {
        let proposal = TokenomicsProposal::default();
        let draft = proposal.overlay_on(&TokenDraft::default());
        assert!(draft.name.is_empty());
        assert_eq!(draft.total_supply, 0.0);
    }

    #[test]
    fn test_breakdown_pairs_are_title_cased_categories() {
        let proposal = flow_token_proposal();
        let pairs = proposal.allocation.unwrap().pairs();
        assert_eq!(pairs[0].0.to_string(), "Team");
        assert_eq!(pairs[2], (AllocationCategory::Ecosystem, 30.0));
        let sum: f64 = pairs.iter().map(|(_, pct)| pct).sum();
        assert_eq!(sum, 100.0);
    }
}
