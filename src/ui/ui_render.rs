use eframe::egui::{CentralPanel, Context, Frame, RichText, ScrollArea, TopBottomPanel};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_allocation::{AllocationEvent, AllocationPanel};
use crate::ui::ui_contract::{ContractEvent, ContractPanel};
use crate::ui::ui_dashboard::DashboardPanel;
use crate::ui::ui_definition::{DefinitionEvent, DefinitionPanel};
use crate::ui::ui_monitor::{MonitorEvent, MonitorPanel};
use crate::ui::ui_panels::{Panel, card_frame};
use crate::ui::ui_settings::{SettingsEvent, SettingsPanel};
use crate::wizard::WizardStep;
use strum::IntoEnumIterator;

use super::app::TokenForgeApp;

#[cfg(debug_assertions)]
use crate::config::PRINT_UI_INTERACTIONS;

impl TokenForgeApp {
    pub(super) fn render_header(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(eframe::egui::Margin::symmetric(16, 10));
        TopBottomPanel::top("header").frame(header_frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.app_title)
                        .heading()
                        .color(UI_CONFIG.colors.accent)
                        .strong(),
                );
                ui.label_subdued(UI_TEXT.app_subtitle);
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        if ui.button(UI_TEXT.ai_open_button).clicked() {
                            self.ai_dialog_open = true;
                        }
                    },
                );
            });
        });
    }

    fn render_progress_bar(&self, ui: &mut eframe::egui::Ui) {
        let current = self.wizard.current();
        ui.horizontal(|ui| {
            for step in WizardStep::iter() {
                let color = if step == current {
                    UI_CONFIG.colors.accent
                } else if step < current {
                    UI_CONFIG.colors.ok
                } else {
                    UI_CONFIG.colors.label
                };
                let label = format!("{}. {}", step.index() + 1, step);
                let text = if step == current {
                    RichText::new(label).color(color).strong()
                } else {
                    RichText::new(label).color(color).small()
                };
                ui.label(text);
                if step.index() + 1 < WizardStep::COUNT {
                    ui.label_subdued("›");
                }
            }
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(eframe::egui::Margin::same(16));
        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            self.render_progress_bar(ui);
            ui.add_space(12.0);

            ScrollArea::vertical().id_salt("step_scroll").show(ui, |ui| {
                card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width().min(720.0));
                    self.render_current_step(ui);
                });
            });
        });
    }

    fn render_current_step(&mut self, ui: &mut eframe::egui::Ui) {
        match self.wizard.current() {
            WizardStep::Definition => self.render_definition_step(ui),
            WizardStep::Allocation => self.render_allocation_step(ui),
            WizardStep::Contract => self.render_contract_step(ui),
            WizardStep::Settings => self.render_settings_step(ui),
            WizardStep::Deploy => self.render_monitor_step(ui),
            WizardStep::Dashboard => {
                DashboardPanel::new(&self.session).render(ui);
            }
        }
    }

    fn render_definition_step(&mut self, ui: &mut eframe::egui::Ui) {
        // Re-seed an untouched form from the latest proposal overlay
        self.definition_form.sync_from_session(&self.session);

        let events = DefinitionPanel::new(&mut self.definition_form).render(ui);
        for event in events {
            match event {
                DefinitionEvent::Edited => self.session.mark_user_edited(),
                DefinitionEvent::Commit(draft) => {
                    #[cfg(debug_assertions)]
                    if PRINT_UI_INTERACTIONS {
                        log::info!("[wizard] definition committed: {} ({})", draft.name, draft.symbol);
                    }
                    self.session.commit_draft(draft);
                    self.wizard.advance();
                }
            }
        }
    }

    fn render_allocation_step(&mut self, ui: &mut eframe::egui::Ui) {
        // One-time synthesis from the proposal breakdown while no entries exist
        if self.session.seed_allocations_from_proposal() {
            #[cfg(debug_assertions)]
            if PRINT_UI_INTERACTIONS {
                log::info!("[wizard] allocations seeded from AI proposal");
            }
        }

        let events =
            AllocationPanel::new(&mut self.allocation_form, &self.session.allocations).render(ui);
        for event in events {
            match event {
                AllocationEvent::Add { category, percentage } => {
                    let total_supply = self.session.draft.total_supply;
                    match self.session.allocations.add(category, percentage, total_supply) {
                        Ok(()) => {
                            self.allocation_form.last_reject = None;
                            self.allocation_form.new_percentage = 0.0;
                        }
                        Err(reject) => {
                            // The book is untouched; show why inline
                            self.allocation_form.last_reject = Some(reject);
                        }
                    }
                }
                AllocationEvent::Remove(index) => {
                    self.session.allocations.remove(index);
                    self.allocation_form.last_reject = None;
                }
                AllocationEvent::Back => self.wizard.retreat(),
                AllocationEvent::Next => {
                    if self.session.allocations.is_fully_allocated() {
                        self.wizard.advance();
                    }
                }
            }
        }
    }

    fn render_contract_step(&mut self, ui: &mut eframe::egui::Ui) {
        for event in ContractPanel.render(ui) {
            match event {
                ContractEvent::Back => self.wizard.retreat(),
                ContractEvent::Next => self.wizard.advance(),
            }
        }
    }

    fn render_settings_step(&mut self, ui: &mut eframe::egui::Ui) {
        let events = SettingsPanel::new(&mut self.settings_form, &self.session.networks).render(ui);
        for event in events {
            match event {
                SettingsEvent::AddNetwork { name, chain_id, explorer_url } => {
                    #[cfg(debug_assertions)]
                    if PRINT_UI_INTERACTIONS {
                        log::info!("[settings] custom network added: {}", name);
                    }
                    self.session.networks.add_custom(name, chain_id, explorer_url);
                }
                SettingsEvent::Back => self.wizard.retreat(),
                SettingsEvent::Deploy => {
                    // Always succeeds locally; a fresh run starts its timers
                    self.deployment = None;
                    self.ensure_deployment_run();
                    self.wizard.advance();
                }
            }
        }
    }

    fn render_monitor_step(&mut self, ui: &mut eframe::egui::Ui) {
        // Covers re-entry from the dashboard, which restarts the run
        self.ensure_deployment_run();

        let events = MonitorPanel::new(self.deployment.as_ref()).render(ui);
        for event in events {
            match event {
                MonitorEvent::Back => {
                    // Leaving the monitor drops the run and with it both
                    // pending timers
                    self.deployment = None;
                    self.wizard.retreat();
                }
                MonitorEvent::Next => {
                    self.deployment = None;
                    self.wizard.advance();
                }
            }
        }
    }
}
