//! The AI tokenomics modeler dialog.
//!
//! One request may be in flight per dialog session: the generate control is
//! disabled while loading. Closing the dialog mid-request does not cancel
//! the call; the poll handler discards a result that arrives afterwards.

use eframe::egui::{Align2, Button, Context, Spinner, TextEdit, Window};

use crate::ui::app::TokenForgeApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

pub enum AiDialogEvent {
    Generate,
    Close,
}

impl TokenForgeApp {
    pub(super) fn render_ai_dialog(&mut self, ctx: &Context) {
        let mut events = Vec::new();
        let is_loading = self.is_generating();
        let has_key = self.ai_config.has_key();

        let mut open = true;
        Window::new(UI_TEXT.ai_dialog_title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label_subheader(UI_TEXT.ai_prompt_label);
                ui.add(
                    TextEdit::multiline(&mut self.ai_prompt)
                        .hint_text(UI_TEXT.ai_prompt_hint)
                        .desired_rows(4)
                        .desired_width(360.0),
                );

                if let Some(error) = &self.last_error {
                    ui.add_space(4.0);
                    ui.label_error(error.to_string());
                }
                if !has_key {
                    ui.add_space(4.0);
                    ui.label_warning(UI_TEXT.ai_no_key_hint);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(UI_TEXT.ai_cancel).clicked() {
                        events.push(AiDialogEvent::Close);
                    }

                    let can_generate =
                        !is_loading && has_key && !self.ai_prompt.trim().is_empty();
                    let label = if is_loading {
                        UI_TEXT.ai_generating
                    } else {
                        UI_TEXT.ai_generate
                    };
                    if ui.add_enabled(can_generate, Button::new(label)).clicked() {
                        events.push(AiDialogEvent::Generate);
                    }
                    if is_loading {
                        ui.add(Spinner::new().color(UI_CONFIG.colors.accent));
                    }
                });
            });

        if !open {
            events.push(AiDialogEvent::Close);
        }

        for event in events {
            match event {
                AiDialogEvent::Generate => self.start_proposal_request(),
                AiDialogEvent::Close => {
                    // An in-flight request keeps running; its result will be
                    // discarded by the poll handler once the dialog is closed.
                    self.ai_dialog_open = false;
                }
            }
        }
    }
}
