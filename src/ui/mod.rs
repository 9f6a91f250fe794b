// User interface components
pub mod app;
pub mod app_async;
pub mod config;
pub mod styles;
pub mod ui_ai_dialog;
pub mod ui_allocation;
pub mod ui_contract;
pub mod ui_dashboard;
pub mod ui_definition;
pub mod ui_monitor;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_settings;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::TokenForgeApp;
pub use config::UI_CONFIG;
