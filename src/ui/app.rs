use eframe::{Frame, egui};
use poll_promise::Promise;
use std::fmt;

use crate::ai::client::{AiConfig, AiError};
use crate::ai::proposal::TokenomicsProposal;
use crate::config::MONITOR_REPAINT_INTERVAL;
use crate::domain::deploy::{DeployPhase, DeploymentRun};
use crate::session::SessionState;
use crate::ui::ui_allocation::AllocationFormState;
use crate::ui::ui_definition::DefinitionFormState;
use crate::ui::ui_settings::SettingsFormState;
use crate::ui::utils::setup_custom_visuals;
use crate::wizard::{Wizard, WizardStep};

#[cfg(debug_assertions)]
use crate::config::PRINT_DEPLOY_PHASES;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// The assist call failed (transport, status or parse)
    Ai(AiError),
    /// General error with a message
    General(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Ai(err) => write!(f, "{}", err),
            AppError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::Ai(err)
    }
}

pub struct TokenForgeApp {
    // Shared session state: each step writes only its own slice
    pub(super) session: SessionState,
    pub(super) wizard: Wizard,

    // Step form state; lives on the app so committed values survive
    // back/forward navigation
    pub(super) definition_form: DefinitionFormState,
    pub(super) allocation_form: AllocationFormState,
    pub(super) settings_form: SettingsFormState,

    // The active mock deployment; None outside the monitor step. Dropping it
    // is the cancellation path for its timers.
    pub(super) deployment: Option<DeploymentRun>,

    // AI dialog state. The promise doubles as the loading flag: a request is
    // in flight exactly while it is Some.
    pub(super) ai_config: AiConfig,
    pub(super) ai_dialog_open: bool,
    pub(super) ai_prompt: String,
    pub(super) ai_promise: Option<Promise<Result<TokenomicsProposal, AppError>>>,
    pub(super) last_error: Option<AppError>,
}

impl TokenForgeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, ai_config: AiConfig) -> Self {
        Self {
            session: SessionState::default(),
            wizard: Wizard::default(),
            definition_form: DefinitionFormState::default(),
            allocation_form: AllocationFormState::default(),
            settings_form: SettingsFormState::default(),
            deployment: None,
            ai_config,
            ai_dialog_open: false,
            ai_prompt: String::new(),
            ai_promise: None,
            last_error: None,
        }
    }

    /// Starts a fresh run when the monitor step is entered without one
    /// (also covers retreating from the dashboard, which re-mounts the
    /// monitor and restarts its timers).
    pub(super) fn ensure_deployment_run(&mut self) {
        if self.deployment.is_some() {
            return;
        }
        let network_name = self
            .settings_form
            .settings
            .as_ref()
            .and_then(|s| self.session.networks.get(&s.network_id))
            .map(|n| n.name.clone())
            .unwrap_or_else(|| "Ethereum Mainnet".to_string());
        self.deployment = Some(DeploymentRun::start(network_name));
    }

    /// Drives the monitor's two fixed-delay transitions while the step is
    /// visible; captures the illustrative record on completion.
    pub(super) fn tick_deployment(&mut self, ctx: &egui::Context) {
        if self.wizard.current() != WizardStep::Deploy {
            return;
        }

        let Some(run) = self.deployment.as_mut() else {
            return;
        };

        if let Some(phase) = run.tick() {
            #[cfg(debug_assertions)]
            if PRINT_DEPLOY_PHASES {
                log::info!("[deploy] phase -> {}", phase);
            }
            if phase == DeployPhase::Completed {
                self.session.deployment_record = Some(run.record());
            }
        }

        if !self.deployment.as_ref().is_some_and(|r| r.is_completed()) {
            ctx.request_repaint_after(MONITOR_REPAINT_INTERVAL);
        }
    }
}

impl eframe::App for TokenForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll the outstanding proposal request, if any
        self.poll_proposal_request(ctx);

        // Advance the monitor's cosmetic state machine
        self.tick_deployment(ctx);

        self.render_header(ctx);
        self.render_central_panel(ctx);

        if self.ai_dialog_open {
            self.render_ai_dialog(ctx);
        }
    }
}
