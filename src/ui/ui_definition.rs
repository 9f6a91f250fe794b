//! Step 1: the token definition form.
//!
//! The form owns a working copy of the draft so committed values survive
//! back/forward navigation. While the session draft is still Empty, the
//! working copy is (re)seeded from the latest AI proposal overlay; the first
//! manual edit locks that out.

use std::collections::BTreeMap;

use eframe::egui::{Checkbox, ComboBox, DragValue, Grid, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::domain::token::{DraftField, TokenDraft, TokenType};
use crate::session::SessionState;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, nav_row};

pub enum DefinitionEvent {
    /// Any manual change to any field.
    Edited,
    /// Validation passed on submit; commit this draft and advance.
    Commit(TokenDraft),
}

#[derive(Default)]
pub struct DefinitionFormState {
    pub draft: TokenDraft,
    pub errors: BTreeMap<DraftField, &'static str>,
    /// Whether `draft` has been seeded from the session yet. Cleared when a
    /// new proposal lands so an untouched form picks up the overlay.
    pub seeded: bool,
}

impl DefinitionFormState {
    pub fn sync_from_session(&mut self, session: &SessionState) {
        if !self.seeded {
            self.draft = session.merged_draft();
            self.seeded = true;
        }
    }
}

pub struct DefinitionPanel<'a> {
    form: &'a mut DefinitionFormState,
}

impl<'a> DefinitionPanel<'a> {
    pub fn new(form: &'a mut DefinitionFormState) -> Self {
        Self { form }
    }

    fn field_error(&self, ui: &mut Ui, field: DraftField) {
        if let Some(message) = self.form.errors.get(&field) {
            ui.label_error(*message);
        }
    }
}

impl Panel for DefinitionPanel<'_> {
    type Event = DefinitionEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let mut edited = false;

        ui.label_header(UI_TEXT.definition_heading);
        ui.add_space(8.0);

        Grid::new("definition_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label_subheader(UI_TEXT.name_label);
                ui.vertical(|ui| {
                    edited |= ui
                        .add(TextEdit::singleline(&mut self.form.draft.name).desired_width(240.0))
                        .changed();
                    self.field_error(ui, DraftField::Name);
                });
                ui.end_row();

                ui.label_subheader(UI_TEXT.symbol_label);
                ui.vertical(|ui| {
                    edited |= ui
                        .add(TextEdit::singleline(&mut self.form.draft.symbol).desired_width(120.0))
                        .changed();
                    self.field_error(ui, DraftField::Symbol);
                });
                ui.end_row();

                ui.label_subheader(UI_TEXT.type_label);
                let selected = self.form.draft.token_type;
                ComboBox::from_id_salt("token_type")
                    .selected_text(selected.to_string())
                    .show_ui(ui, |ui| {
                        for token_type in TokenType::iter() {
                            if ui
                                .selectable_value(
                                    &mut self.form.draft.token_type,
                                    token_type,
                                    token_type.to_string(),
                                )
                                .clicked()
                            {
                                edited = true;
                            }
                        }
                    });
                ui.end_row();

                ui.label_subheader(UI_TEXT.supply_label);
                ui.vertical(|ui| {
                    edited |= ui
                        .add(
                            DragValue::new(&mut self.form.draft.total_supply)
                                .range(0.0..=f64::MAX)
                                .speed(1000.0),
                        )
                        .changed();
                    self.field_error(ui, DraftField::TotalSupply);
                });
                ui.end_row();

                ui.label_subheader(UI_TEXT.decimals_label);
                edited |= ui
                    .add(DragValue::new(&mut self.form.draft.decimals).range(0..=36))
                    .changed();
                ui.end_row();

                ui.label_subheader(UI_TEXT.description_label);
                edited |= ui
                    .add(
                        TextEdit::multiline(&mut self.form.draft.description)
                            .desired_rows(3)
                            .desired_width(320.0),
                    )
                    .changed();
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.label_subdued(UI_TEXT.features_label);
        ui.horizontal_wrapped(|ui| {
            let features = &mut self.form.draft.features;
            edited |= ui.add(Checkbox::new(&mut features.mintable, "Mintable")).changed();
            edited |= ui.add(Checkbox::new(&mut features.burnable, "Burnable")).changed();
            edited |= ui.add(Checkbox::new(&mut features.pausable, "Pausable")).changed();
            edited |= ui
                .add(Checkbox::new(&mut features.upgradable, "Upgradable"))
                .changed();
            edited |= ui.add(Checkbox::new(&mut features.snapshots, "Snapshots")).changed();
            edited |= ui.add(Checkbox::new(&mut features.permit, "Permit")).changed();
        });

        if let Some(notes) = &self.form.draft.ai_notes {
            ui.add_space(8.0);
            ui.collapsing(UI_TEXT.ai_notes_label, |ui| {
                ui.label_subdued(notes.clone());
            });
        }

        if edited {
            events.push(DefinitionEvent::Edited);
        }

        // Submit row: validation runs synchronously here; failures render as
        // per-field messages on the next frame and the step does not advance.
        let (_, submit) = nav_row(ui, false, true, UI_TEXT.definition_submit);
        if submit {
            self.form.errors = self.form.draft.validate();
            if self.form.errors.is_empty() {
                events.push(DefinitionEvent::Commit(self.form.draft.clone()));
            }
        }

        events
    }
}
