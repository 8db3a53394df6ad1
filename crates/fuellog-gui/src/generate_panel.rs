//! Generate panel: the form, the error banner and the result table

use eframe::egui::{self, Color32, RichText, Ui};
use fuellog_app::config::Config;
use fuellog_app::form::{FormInput, FormState};
use fuellog_domain::FuelLog;
use tracing::warn;

pub struct GeneratePanel {
    state: FormState,
}

impl GeneratePanel {
    pub fn new(config: &Config) -> Self {
        Self {
            state: FormState::new(FormInput::from_config(config)),
        }
    }

    /// Replace the form fields with configured defaults. The last log stays.
    pub fn reset_form(&mut self, config: &Config) {
        self.state.input = FormInput::from_config(config);
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Dynamic Fuel Log Generator");
            ui.add_space(10.0);

            self.render_form(ui);

            ui.add_space(10.0);
            self.render_error(ui);

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui
                    .button(RichText::new("Generate Fuel Log").strong().size(16.0))
                    .clicked()
                {
                    self.state.generate(&mut rand::thread_rng());
                }
            });

            ui.add_space(15.0);
            if let Some(log) = self.state.log() {
                render_log(ui, log);
            }
        });
    }

    fn render_form(&mut self, ui: &mut Ui) {
        let input = &mut self.state.input;

        egui::Grid::new("fuel_form")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Start Date:").strong());
                ui.add(egui::TextEdit::singleline(&mut input.start_date).hint_text("YYYY-MM-DD"));
                ui.end_row();

                ui.label(RichText::new("End Date:").strong());
                ui.add(egui::TextEdit::singleline(&mut input.end_date).hint_text("YYYY-MM-DD"));
                ui.end_row();

                ui.label(RichText::new("Max Tank Capacity (Gallons):").strong());
                ui.text_edit_singleline(&mut input.max_tank_capacity);
                ui.end_row();

                ui.label(RichText::new("Total Gallons to Purchase:").strong());
                ui.text_edit_singleline(&mut input.total_gallons);
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Gas Stations (one per line):").strong());
            if ui.small_button("Load from file...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Text", &["txt", "csv"])
                    .pick_file()
                {
                    match std::fs::read_to_string(&path) {
                        Ok(content) => input.stations = content,
                        Err(e) => warn!(path = %path.display(), error = %e, "failed to read stations file"),
                    }
                }
            }
        });
        ui.add(
            egui::TextEdit::multiline(&mut input.stations)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .hint_text("e.g., Shell, 123 Main St"),
        );
    }

    fn render_error(&self, ui: &mut Ui) {
        if let Some(error) = self.state.error() {
            egui::Frame::new()
                .fill(Color32::from_rgb(80, 20, 20))
                .inner_margin(8.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("Error!").strong().color(Color32::LIGHT_RED));
                        ui.label(RichText::new(error).color(Color32::LIGHT_RED));
                    });
                });
        }
    }
}

/// Result table with a total footer. Nothing is drawn for an empty log.
fn render_log(ui: &mut Ui, log: &FuelLog) {
    if log.is_empty() {
        return;
    }

    egui::Grid::new("fuel_log_table")
        .num_columns(3)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Date").strong());
            ui.label(RichText::new("Gallons Purchased").strong());
            ui.label(RichText::new("Gas Station").strong());
            ui.end_row();

            for record in log.records() {
                ui.label(record.date.format("%Y-%m-%d").to_string());
                ui.label(format!("{:.1}", record.gallons));
                ui.label(&record.station);
                ui.end_row();
            }

            ui.label(RichText::new("Total Gallons:").strong());
            ui.label(RichText::new(format!("{:.1}", log.total_gallons())).strong());
            ui.label("");
            ui.end_row();
        });
}
