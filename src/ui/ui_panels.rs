//! Shared panel plumbing for the step forms.

use eframe::egui::{Button, CornerRadius, Frame, Margin, Ui};

use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Card-style frame used by every step.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .corner_radius(CornerRadius::same(UI_CONFIG.card_rounding as u8))
        .inner_margin(Margin::same(16))
}

/// Back/forward row at the bottom of a step. Returns (back_clicked,
/// next_clicked). `next_enabled` gates the forward button; `next_label`
/// lets steps rename it ("Deploy Contract", "Go to Dashboard").
pub fn nav_row(
    ui: &mut Ui,
    show_back: bool,
    next_enabled: bool,
    next_label: &str,
) -> (bool, bool) {
    let mut back = false;
    let mut next = false;

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if show_back && ui.button(UI_TEXT.back).clicked() {
            back = true;
        }
        ui.with_layout(
            eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
            |ui| {
                if ui.add_enabled(next_enabled, Button::new(next_label)).clicked() {
                    next = true;
                }
            },
        );
    });

    (back, next)
}
