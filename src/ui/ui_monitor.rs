//! Step 5: the cosmetic deployment monitor.
//!
//! Displays the run's phase; "Next" stays disabled until the run completes.
//! The run itself is ticked from the app's update loop, not here.

use eframe::egui::{RichText, Spinner, Ui};

use crate::domain::deploy::{DeployPhase, DeploymentRun};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, nav_row};
use crate::ui::utils::shorten_hex;

pub enum MonitorEvent {
    Back,
    Next,
}

pub struct MonitorPanel<'a> {
    run: Option<&'a DeploymentRun>,
}

impl<'a> MonitorPanel<'a> {
    pub fn new(run: Option<&'a DeploymentRun>) -> Self {
        Self { run }
    }

    fn phase_message(phase: DeployPhase) -> &'static str {
        match phase {
            DeployPhase::Pending => UI_TEXT.monitor_pending,
            DeployPhase::Deploying => UI_TEXT.monitor_deploying,
            DeployPhase::Completed => UI_TEXT.monitor_completed,
        }
    }
}

impl Panel for MonitorPanel<'_> {
    type Event = MonitorEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label_header(UI_TEXT.monitor_heading);
        ui.add_space(16.0);

        let completed = match self.run {
            Some(run) => {
                let phase = run.phase();
                ui.vertical_centered(|ui| {
                    if phase != DeployPhase::Completed {
                        ui.add(Spinner::new().size(48.0).color(UI_CONFIG.colors.accent));
                    }
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(phase.to_string())
                            .heading()
                            .color(if phase == DeployPhase::Completed {
                                UI_CONFIG.colors.ok
                            } else {
                                UI_CONFIG.colors.heading
                            }),
                    );
                    ui.label_subdued(Self::phase_message(phase));

                    if phase == DeployPhase::Completed {
                        let record = run.record();
                        ui.add_space(12.0);
                        ui.metric(
                            UI_TEXT.monitor_address_label,
                            &shorten_hex(&record.contract_address),
                            UI_CONFIG.colors.accent,
                        );
                        ui.metric(
                            UI_TEXT.monitor_hash_label,
                            &shorten_hex(&record.tx_hash),
                            UI_CONFIG.colors.accent,
                        );
                    }
                });
                phase == DeployPhase::Completed
            }
            None => false,
        };

        let (back, next) = nav_row(ui, true, completed, UI_TEXT.monitor_next);
        if back {
            events.push(MonitorEvent::Back);
        }
        if next {
            events.push(MonitorEvent::Next);
        }

        events
    }
}
