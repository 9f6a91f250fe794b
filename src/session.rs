//! Shared session state.
//!
//! One explicit object owned by the app and passed by reference into the
//! step panels; each step writes only its own slice on commit. Everything
//! here lives for the session only - nothing survives a reload.

use crate::ai::proposal::TokenomicsProposal;
use crate::domain::allocation::AllocationBook;
use crate::domain::deploy::DeploymentRecord;
use crate::domain::network::NetworkBook;
use crate::domain::token::{DraftStage, TokenDraft};

#[derive(Default)]
pub struct SessionState {
    pub draft: TokenDraft,
    pub draft_stage: DraftStage,
    pub allocations: AllocationBook,
    pub networks: NetworkBook,
    /// Last AI-generated proposal; a suggestion overlay, never authoritative.
    pub proposal: Option<TokenomicsProposal>,
    /// Whether the current proposal has already seeded the allocation book.
    /// Once set, the user owns the entries; emptying the book must not bring
    /// the suggestion back.
    allocations_seeded: bool,
    /// Illustrative output of the completed mock deployment.
    pub deployment_record: Option<DeploymentRecord>,
}

impl SessionState {
    /// Records a generated proposal. The overlay itself happens lazily when
    /// the definition form next renders (and only while the draft is Empty).
    pub fn set_proposal(&mut self, proposal: TokenomicsProposal) {
        self.proposal = Some(proposal);
        self.allocations_seeded = false;
    }

    /// The draft the definition form should edit: the committed/edited draft
    /// as-is, or - while still Empty - the draft with proposal fields
    /// overlaid one time.
    pub fn merged_draft(&self) -> TokenDraft {
        match (&self.proposal, self.draft_stage) {
            (Some(proposal), DraftStage::Empty) => proposal.overlay_on(&self.draft),
            _ => self.draft.clone(),
        }
    }

    /// First manual edit locks the draft against later proposal merges.
    pub fn mark_user_edited(&mut self) {
        if self.draft_stage == DraftStage::Empty {
            self.draft_stage = DraftStage::UserEdited;
        }
    }

    /// Step 1 submit: the validated draft becomes the committed definition.
    pub fn commit_draft(&mut self, draft: TokenDraft) {
        self.draft = draft;
        self.draft_stage = DraftStage::Committed;
    }

    /// Synthesizes allocation entries from the proposal breakdown. Each
    /// proposal gets one shot, and only an empty book is filled; afterwards
    /// the entries belong to the user, so removing them all leaves the book
    /// empty. Amounts are computed against the draft's total supply. Returns
    /// true when entries were created.
    pub fn seed_allocations_from_proposal(&mut self) -> bool {
        if self.allocations_seeded {
            return false;
        }
        let Some(breakdown) = self.proposal.as_ref().and_then(|p| p.allocation) else {
            return false;
        };
        self.allocations_seeded = true;
        if !self.allocations.is_empty() {
            return false;
        }
        self.allocations
            .seed(breakdown.pairs(), self.draft.total_supply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocation::AllocationCategory;
    use crate::domain::token::DraftStage;

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
    fn test_proposal_flows_through_empty_session() {
        // Full walk-through: proposal applied to an empty draft and an empty
        // allocation list.
        let mut session = SessionState::default();
        session.set_proposal(flow_token_proposal());

        let merged = session.merged_draft();
        assert_eq!(merged.name, "FlowToken");
        assert_eq!(merged.symbol, "FLW");
        assert_eq!(merged.total_supply, 500_000_000.0);

        session.commit_draft(merged);
        assert!(session.seed_allocations_from_proposal());

        let entries = session.allocations.entries();
        assert_eq!(entries.len(), 6);
        assert!(session.allocations.is_fully_allocated());
        for entry in entries {
            assert_eq!(entry.amount, entry.percentage / 100.0 * 500_000_000.0);
        }
        assert_eq!(entries[0].category, AllocationCategory::Team);
    }

    #[test]
    fn test_merge_is_one_time_only() {
        let mut session = SessionState::default();
        session.mark_user_edited();
        session.set_proposal(flow_token_proposal());

        // UserEdited: the proposal must not touch the draft
        assert_eq!(session.merged_draft().name, "");

        session.commit_draft(TokenDraft {
            name: "Mine".to_string(),
            symbol: "MN".to_string(),
            total_supply: 10.0,
            ..TokenDraft::default()
        });
        assert_eq!(session.draft_stage, DraftStage::Committed);

        // A later proposal never overwrites a committed draft either
        session.set_proposal(flow_token_proposal());
        assert_eq!(session.merged_draft().name, "Mine");
    }

    #[test]
    fn test_seeding_requires_empty_book() {
        let mut session = SessionState::default();
        session.set_proposal(flow_token_proposal());
        session.commit_draft(session.merged_draft());

        session
            .allocations
            .add(AllocationCategory::Team, 10.0, 500_000_000.0)
            .unwrap();
        assert!(!session.seed_allocations_from_proposal());
        assert_eq!(session.allocations.entries().len(), 1);
    }

    #[test]
    fn test_emptied_book_is_not_reseeded() {
        // The proposal gets one shot; once the user deletes the suggested
        // entries the book stays empty.
        let mut session = SessionState::default();
        session.set_proposal(flow_token_proposal());
        session.commit_draft(session.merged_draft());
        assert!(session.seed_allocations_from_proposal());
        assert_eq!(session.allocations.entries().len(), 6);

        for _ in 0..6 {
            session.allocations.remove(0);
        }
        assert!(session.allocations.is_empty());

        assert!(!session.seed_allocations_from_proposal());
        assert!(session.allocations.is_empty());

        // A fresh proposal may seed again
        session.set_proposal(flow_token_proposal());
        assert!(session.seed_allocations_from_proposal());
        assert_eq!(session.allocations.entries().len(), 6);
    }

    #[test]
    fn test_committed_draft_survives_navigation() {
        // Round-trip: commit, then ask for the form draft again - the
        // committed values come back unchanged.
        let mut session = SessionState::default();
        let draft = TokenDraft {
            name: "Forge".to_string(),
            symbol: "FRG".to_string(),
            total_supply: 1_000_000.0,
            ..TokenDraft::default()
        };
        session.commit_draft(draft.clone());
        assert_eq!(session.merged_draft(), draft);
    }
}
