#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod ai;
pub mod config;
pub mod domain;
pub mod session;
pub mod ui;
pub mod utils;
pub mod wizard;

// Re-export commonly used types
pub use ai::{AiConfig, TokenomicsProposal};
pub use domain::{AllocationBook, AllocationEntry, NetworkBook, TokenDraft};
pub use session::SessionState;
pub use ui::TokenForgeApp;
pub use utils::app_time;
pub use wizard::WizardStep;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generative API key; falls back to the GEMINI_API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, ai_config: AiConfig) -> Box<dyn eframe::App> {
    let app = ui::TokenForgeApp::new(cc, ai_config);
    Box::new(app)
}
