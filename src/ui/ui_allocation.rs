//! Step 2: supply allocation.
//!
//! Renders the entry list, the add form and the distribution chart. The
//! running total gates "Next"; a rejected add surfaces an inline message
//! (the book itself is untouched).

use eframe::egui::{ComboBox, DragValue, Grid, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};
use strum::IntoEnumIterator;

use crate::domain::allocation::{AllocationBook, AllocationCategory, AllocationReject};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, nav_row};
use crate::ui::utils::format_amount;

pub enum AllocationEvent {
    Add { category: AllocationCategory, percentage: f64 },
    Remove(usize),
    Back,
    Next,
}

pub struct AllocationFormState {
    pub new_category: AllocationCategory,
    pub new_percentage: f64,
    pub last_reject: Option<AllocationReject>,
}

impl Default for AllocationFormState {
    fn default() -> Self {
        Self {
            new_category: AllocationCategory::Team,
            new_percentage: 0.0,
            last_reject: None,
        }
    }
}

pub struct AllocationPanel<'a> {
    form: &'a mut AllocationFormState,
    book: &'a AllocationBook,
}

impl<'a> AllocationPanel<'a> {
    pub fn new(form: &'a mut AllocationFormState, book: &'a AllocationBook) -> Self {
        Self { form, book }
    }

    fn render_entries(&self, ui: &mut Ui, events: &mut Vec<AllocationEvent>) {
        for (index, entry) in self.book.entries().iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label_subheader(entry.category.to_string());
                ui.label_subdued(format!("{:.1}%", entry.percentage));
                ui.label_subdued(format_amount(entry.amount));
                if ui.small_button(UI_TEXT.remove_allocation).clicked() {
                    events.push(AllocationEvent::Remove(index));
                }
            });
        }
    }

    fn render_add_form(&mut self, ui: &mut Ui, events: &mut Vec<AllocationEvent>) {
        Grid::new("allocation_add_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label_subheader(UI_TEXT.new_category_label);
                ComboBox::from_id_salt("allocation_category")
                    .selected_text(self.form.new_category.to_string())
                    .show_ui(ui, |ui| {
                        for category in AllocationCategory::iter() {
                            ui.selectable_value(
                                &mut self.form.new_category,
                                category,
                                category.to_string(),
                            );
                        }
                    });
                ui.end_row();

                ui.label_subheader(UI_TEXT.percentage_label);
                ui.add(
                    DragValue::new(&mut self.form.new_percentage)
                        .range(0.0..=100.0)
                        .speed(0.5)
                        .suffix("%"),
                );
                ui.end_row();
            });

        if ui.button(UI_TEXT.add_allocation).clicked() {
            events.push(AllocationEvent::Add {
                category: self.form.new_category,
                percentage: self.form.new_percentage,
            });
        }

        if let Some(reject) = self.form.last_reject {
            ui.label_error(reject.to_string());
        }
    }

    fn render_chart(&self, ui: &mut Ui) {
        let bars: Vec<Bar> = self
            .book
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new(i as f64, entry.percentage)
                    .width(0.6)
                    .fill(UI_CONFIG.colors.accent)
                    .name(entry.category.to_string())
            })
            .collect();

        Plot::new("allocation_chart")
            .height(160.0)
            .show_axes([false, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(UI_TEXT.allocation_chart_title, bars));
            });
    }
}

impl Panel for AllocationPanel<'_> {
    type Event = AllocationEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label_header(UI_TEXT.allocation_heading);
        ui.add_space(8.0);

        self.render_entries(ui, &mut events);
        ui.add_space(8.0);
        self.render_add_form(ui, &mut events);

        ui.add_space(8.0);
        let total = self.book.total_pct();
        let total_color = if self.book.is_fully_allocated() {
            UI_CONFIG.colors.ok
        } else {
            UI_CONFIG.colors.warn
        };
        ui.horizontal(|ui| {
            ui.label_subdued(format!("{}:", UI_TEXT.total_allocated_label));
            ui.label(RichText::new(format!("{:.2}%", total)).color(total_color).strong());
        });

        if !self.book.is_empty() {
            ui.add_space(8.0);
            self.render_chart(ui);
        }

        let (back, next) = nav_row(ui, true, self.book.is_fully_allocated(), UI_TEXT.next);
        if back {
            events.push(AllocationEvent::Back);
        }
        if next {
            events.push(AllocationEvent::Next);
        }

        events
    }
}
