use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub accent: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub card: Color32,
    pub ok: Color32,
    pub warn: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_rounding: f32,
    pub contract_preview_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(148, 163, 184),  // slate-400
        heading: Color32::from_rgb(241, 245, 249), // slate-100
        subsection_heading: Color32::from_rgb(203, 213, 225), // slate-300
        accent: Color32::from_rgb(6, 182, 212),   // cyan-500
        central_panel: Color32::from_rgb(15, 23, 42), // slate-900
        top_panel: Color32::from_rgb(10, 16, 30),
        card: Color32::from_rgb(30, 41, 59),      // slate-800
        ok: Color32::from_rgb(74, 222, 128),      // green-400
        warn: Color32::from_rgb(250, 204, 21),    // yellow-400
        error: Color32::from_rgb(248, 113, 113),  // red-400
    },
    card_rounding: 8.0,
    contract_preview_height: 220.0,
};
