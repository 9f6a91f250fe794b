//! Step 4: deployment settings.
//!
//! Local-only selections: target network, gas strategy, owner address and
//! the front-run toggle. Defaults are always valid, so "Deploy" always
//! succeeds and hands over to the monitor. Also hosts the append-only
//! custom-network form.

use eframe::egui::{Checkbox, ComboBox, DragValue, Grid, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::domain::deploy::{DeploySettings, GasStrategy};
use crate::domain::network::NetworkBook;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, nav_row};

pub enum SettingsEvent {
    AddNetwork {
        name: String,
        chain_id: u64,
        explorer_url: String,
    },
    Back,
    Deploy,
}

pub struct SettingsFormState {
    pub settings: Option<DeploySettings>,
    pub custom_name: String,
    pub custom_chain_id: u64,
    pub custom_explorer: String,
}

impl Default for SettingsFormState {
    fn default() -> Self {
        Self {
            settings: None,
            custom_name: String::new(),
            custom_chain_id: 1,
            custom_explorer: String::new(),
        }
    }
}

impl SettingsFormState {
    /// Lazily defaults to the first seed network.
    pub fn settings_mut(&mut self, networks: &NetworkBook) -> &mut DeploySettings {
        self.settings
            .get_or_insert_with(|| DeploySettings::for_network(networks.first_id()))
    }
}

pub struct SettingsPanel<'a> {
    form: &'a mut SettingsFormState,
    networks: &'a NetworkBook,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(form: &'a mut SettingsFormState, networks: &'a NetworkBook) -> Self {
        Self { form, networks }
    }
}

impl Panel for SettingsPanel<'_> {
    type Event = SettingsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label_header(UI_TEXT.settings_heading);
        ui.add_space(8.0);

        let networks = self.networks;
        let settings = self.form.settings_mut(networks);

        Grid::new("settings_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label_subheader(UI_TEXT.network_label);
                let selected_name = networks
                    .get(&settings.network_id)
                    .map(|n| n.name.clone())
                    .unwrap_or_else(|| settings.network_id.clone());
                ComboBox::from_id_salt("target_network")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for network in networks.options() {
                            ui.selectable_value(
                                &mut settings.network_id,
                                network.id.clone(),
                                &network.name,
                            );
                        }
                    });
                ui.end_row();

                ui.label_subheader(UI_TEXT.owner_label);
                ui.add(
                    TextEdit::singleline(&mut settings.owner_address)
                        .hint_text(UI_TEXT.owner_hint)
                        .desired_width(320.0),
                );
                ui.end_row();

                ui.label_subheader(UI_TEXT.gas_label);
                ComboBox::from_id_salt("gas_strategy")
                    .selected_text(settings.gas_strategy.to_string())
                    .show_ui(ui, |ui| {
                        for strategy in GasStrategy::iter() {
                            ui.selectable_value(
                                &mut settings.gas_strategy,
                                strategy,
                                strategy.to_string(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("");
                ui.add(Checkbox::new(
                    &mut settings.front_run_protection,
                    UI_TEXT.front_run_label,
                ));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.collapsing(UI_TEXT.custom_network_heading, |ui| {
            Grid::new("custom_network_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label_subheader(UI_TEXT.custom_network_name);
                    ui.text_edit_singleline(&mut self.form.custom_name);
                    ui.end_row();

                    ui.label_subheader(UI_TEXT.custom_network_chain_id);
                    ui.add(DragValue::new(&mut self.form.custom_chain_id).range(1..=u64::MAX));
                    ui.end_row();

                    ui.label_subheader(UI_TEXT.custom_network_explorer);
                    ui.text_edit_singleline(&mut self.form.custom_explorer);
                    ui.end_row();
                });

            let can_add = !self.form.custom_name.trim().is_empty();
            if ui
                .add_enabled(can_add, eframe::egui::Button::new(UI_TEXT.custom_network_add))
                .clicked()
            {
                events.push(SettingsEvent::AddNetwork {
                    name: self.form.custom_name.trim().to_string(),
                    chain_id: self.form.custom_chain_id,
                    explorer_url: self.form.custom_explorer.trim().to_string(),
                });
                self.form.custom_name.clear();
                self.form.custom_explorer.clear();
            }
        });

        let (back, deploy) = nav_row(ui, true, true, UI_TEXT.deploy_button);
        if back {
            events.push(SettingsEvent::Back);
        }
        if deploy {
            events.push(SettingsEvent::Deploy);
        }

        events
    }
}
