//! Start/poll plumbing for the single async operation: the proposal request.
//!
//! The promise is the loading flag. It is cleared on every exit path; on
//! failure the dialog stays open and nothing is applied; a result arriving
//! after the dialog was closed is discarded.

use eframe::egui;
use poll_promise::Promise;

use crate::ai::client;
use crate::ai::proposal::TokenomicsProposal;
use crate::domain::token::DraftStage;
use crate::ui::app::{AppError, TokenForgeApp};

#[cfg(debug_assertions)]
use crate::config::PRINT_UI_INTERACTIONS;

impl TokenForgeApp {
    pub(super) fn start_proposal_request(&mut self) {
        if self.ai_promise.is_some() {
            return;
        }

        self.last_error = None;
        let config = self.ai_config.clone();
        let concept = self.ai_prompt.clone();

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("tokenomics_request", move || {
            client::fetch_proposal_blocking(&config, &concept).map_err(AppError::from)
        });

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::spawn_local(async move {
            client::fetch_proposal(&config, &concept)
                .await
                .map_err(AppError::from)
        });

        self.ai_promise = Some(promise);
    }

    pub(super) fn poll_proposal_request(&mut self, ctx: &egui::Context) {
        let outcome = self
            .ai_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        if let Some(result) = outcome {
            // Loading flag drops on every exit path
            self.ai_promise = None;

            if !self.ai_dialog_open {
                // The dialog was closed mid-request; the late result must
                // not be applied to a closed dialog's state.
                #[cfg(debug_assertions)]
                if PRINT_UI_INTERACTIONS {
                    log::info!("[ai] discarding proposal result for closed dialog");
                }
                return;
            }

            self.apply_proposal_outcome(result);
        } else if self.ai_promise.is_some() {
            ctx.request_repaint();
        }
    }

    /// Applies a finished request. Success stores the proposal, re-seeds an
    /// untouched definition form and closes the dialog; failure is logged
    /// and shown inline while the dialog stays open.
    pub(super) fn apply_proposal_outcome(
        &mut self,
        result: Result<TokenomicsProposal, AppError>,
    ) {
        match result {
            Ok(proposal) => {
                self.session.set_proposal(proposal);
                // Let an untouched definition form pick up the new overlay;
                // an edited or committed draft is left alone
                if self.session.draft_stage == DraftStage::Empty {
                    self.definition_form.seeded = false;
                }
                self.last_error = None;
                self.ai_dialog_open = false;
            }
            Err(error) => {
                log::error!("❌ Tokenomics generation failed: {}", error);
                self.last_error = Some(error);
            }
        }
    }

    pub(super) fn is_generating(&self) -> bool {
        self.ai_promise.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::{AiConfig, AiError};

    fn test_app() -> TokenForgeApp {
        TokenForgeApp {
            session: Default::default(),
            wizard: Default::default(),
            definition_form: Default::default(),
            allocation_form: Default::default(),
            settings_form: Default::default(),
            deployment: None,
            ai_config: AiConfig::without_key(),
            ai_dialog_open: true,
            ai_prompt: String::new(),
            ai_promise: None,
            last_error: None,
        }
    }

    #[test]
    fn test_failure_applies_nothing_and_keeps_dialog_open() {
        let mut app = test_app();
        app.apply_proposal_outcome(Err(AppError::Ai(AiError::Status(500))));

        assert!(!app.is_generating());
        assert!(app.session.proposal.is_none());
        assert!(app.ai_dialog_open);
        assert!(app.last_error.is_some());
    }

    #[test]
    fn test_failed_request_clears_loading_flag() {
        // isLoading must go true -> false on the failure path too
        let mut app = test_app();
        app.ai_promise = Some(Promise::from_ready(Err(AppError::Ai(AiError::Request(
            "connection refused".to_string(),
        )))));
        assert!(app.is_generating());

        let ctx = egui::Context::default();
        app.poll_proposal_request(&ctx);

        assert!(!app.is_generating());
        assert!(app.session.proposal.is_none());
        assert!(app.ai_dialog_open);
    }

    #[test]
    fn test_result_after_dialog_close_is_discarded() {
        let mut app = test_app();
        app.ai_dialog_open = false;
        app.ai_promise = Some(Promise::from_ready(Ok(TokenomicsProposal {
            name: Some("LateToken".to_string()),
            ..TokenomicsProposal::default()
        })));

        let ctx = egui::Context::default();
        app.poll_proposal_request(&ctx);

        assert!(!app.is_generating());
        assert!(app.session.proposal.is_none());
    }

    #[test]
    fn test_success_stores_proposal_and_closes_dialog() {
        let mut app = test_app();
        let proposal = TokenomicsProposal {
            name: Some("FlowToken".to_string()),
            ..TokenomicsProposal::default()
        };
        app.apply_proposal_outcome(Ok(proposal));

        assert!(app.session.proposal.is_some());
        assert!(!app.ai_dialog_open);
        assert!(app.last_error.is_none());
        assert_eq!(app.session.draft_stage, DraftStage::Empty);
    }
}
