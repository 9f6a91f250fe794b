//! Step 6: the mocked post-issuance dashboard.
//!
//! Display only; no forward transition. Supply figures come from the
//! committed draft, the rest is illustrative placeholder data.

use eframe::egui::{Button, RichText, Ui};

use crate::session::SessionState;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, card_frame};
use crate::ui::utils::{format_amount, shorten_hex};

pub struct DashboardPanel<'a> {
    session: &'a SessionState,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(session: &'a SessionState) -> Self {
        Self { session }
    }

    fn stat_card(ui: &mut Ui, label: &str, value: String, accent: bool) {
        card_frame().show(ui, |ui| {
            ui.set_min_width(130.0);
            ui.label_subdued(label);
            ui.label(
                RichText::new(value)
                    .heading()
                    .color(if accent {
                        UI_CONFIG.colors.accent
                    } else {
                        UI_CONFIG.colors.heading
                    }),
            );
        });
    }
}

impl Panel for DashboardPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ui.label_header(UI_TEXT.dashboard_heading);
        ui.add_space(8.0);

        let draft = &self.session.draft;
        let symbol = if draft.symbol.is_empty() {
            "TKN".to_string()
        } else {
            draft.symbol.clone()
        };

        ui.horizontal_wrapped(|ui| {
            Self::stat_card(
                ui,
                UI_TEXT.stat_total_supply,
                format!("{} {}", format_amount(draft.total_supply), symbol),
                false,
            );
            Self::stat_card(
                ui,
                UI_TEXT.stat_circulating,
                format_amount(draft.total_supply * 0.4),
                false,
            );
            Self::stat_card(ui, UI_TEXT.stat_burned, "12,500".to_string(), false);
            Self::stat_card(ui, UI_TEXT.stat_holders, "1,248".to_string(), true);
        });

        if let Some(record) = &self.session.deployment_record {
            ui.add_space(8.0);
            ui.metric(
                "Deployed to",
                &record.network_name,
                UI_CONFIG.colors.subsection_heading,
            );
            ui.metric(
                UI_TEXT.monitor_address_label,
                &shorten_hex(&record.contract_address),
                UI_CONFIG.colors.accent,
            );
        }

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            card_frame().show(&mut columns[0], |ui| {
                ui.label_subheader(UI_TEXT.quick_management);
                ui.add_space(6.0);
                // Cosmetic controls; management actions are out of scope
                let _ = ui.add_enabled(false, Button::new("Mint Tokens"));
                let _ = ui.add_enabled(false, Button::new("Burn Tokens"));
                let _ = ui.add_enabled(false, Button::new("Pause Transfers"));
            });

            card_frame().show(&mut columns[1], |ui| {
                ui.label_subheader(UI_TEXT.recent_activity);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label_subdued(format!("Token Transfer (150 {})", symbol));
                    ui.label_subdued("2 mins ago");
                });
                ui.horizontal(|ui| {
                    ui.label_subdued(format!("Tokens Burned (5 {})", symbol));
                    ui.label_subdued("14 mins ago");
                });
            });
        });

        Vec::new()
    }
}
