//! Settings panel for fuel-log GUI

use chrono::NaiveDate;
use eframe::egui::{self, Color32, RichText, Ui};
use fuellog_app::config::Config;
use fuellog_app::form::{parse_stations, FormInput};
use fuellog_types::OutputFormat;

const OUTPUT_FORMATS: &[OutputFormat] = &[OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv];

/// Editable copy of the configured form defaults
pub struct SettingsPanel {
    fields: FormInput,
    output_format: OutputFormat,
    /// Whether fields were modified since the last save
    modified: bool,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl SettingsPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            fields: FormInput::from_config(config),
            output_format: config.output_format,
            modified: false,
            status_message: None,
        }
    }

    /// Render the panel. Returns true when the config was saved this frame.
    pub fn ui(&mut self, ui: &mut Ui, config: &mut Config) -> bool {
        let mut saved = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.add_space(10.0);
            ui.label(
                RichText::new("Defaults used to pre-fill the generator form")
                    .color(Color32::GRAY)
                    .small(),
            );
            ui.add_space(10.0);

            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Start date:");
                    self.modified |= ui.text_edit_singleline(&mut self.fields.start_date).changed();
                    ui.end_row();

                    ui.label("End date:");
                    self.modified |= ui.text_edit_singleline(&mut self.fields.end_date).changed();
                    ui.end_row();

                    ui.label("Tank capacity:");
                    self.modified |= ui
                        .text_edit_singleline(&mut self.fields.max_tank_capacity)
                        .changed();
                    ui.end_row();

                    ui.label("Total gallons:");
                    self.modified |= ui.text_edit_singleline(&mut self.fields.total_gallons).changed();
                    ui.end_row();

                    ui.label("CLI output:");
                    ui.horizontal(|ui| {
                        for format in OUTPUT_FORMATS {
                            let selected = self.output_format == *format;
                            if ui.selectable_label(selected, format.to_string()).clicked() {
                                self.output_format = *format;
                                self.modified = true;
                            }
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.label("Stations:");
            self.modified |= ui
                .add(
                    egui::TextEdit::multiline(&mut self.fields.stations)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                )
                .changed();

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                let save = ui.add_enabled(self.modified, egui::Button::new("Save"));
                if save.clicked() {
                    saved = self.save(config);
                }
                if ui.button("Reset to defaults").clicked() {
                    let defaults = Config::default();
                    self.fields = FormInput::from_config(&defaults);
                    self.output_format = defaults.output_format;
                    self.modified = true;
                }
            });

            if let Some((ref message, is_error)) = self.status_message {
                ui.add_space(10.0);
                let color = if is_error { Color32::LIGHT_RED } else { Color32::LIGHT_GREEN };
                ui.label(RichText::new(message).color(color));
            }
        });

        saved
    }

    fn save(&mut self, config: &mut Config) -> bool {
        let mut updated = config.clone();

        match (parse_date(&self.fields.start_date), parse_date(&self.fields.end_date)) {
            (Some(start), Some(end)) => {
                updated.default_start_date = start;
                updated.default_end_date = end;
            }
            _ => {
                self.status_message = Some(("Dates must be YYYY-MM-DD".to_string(), true));
                return false;
            }
        }
        match (
            self.fields.max_tank_capacity.trim().parse::<f64>(),
            self.fields.total_gallons.trim().parse::<f64>(),
        ) {
            (Ok(capacity), Ok(total)) => {
                updated.max_tank_capacity = capacity;
                updated.total_gallons = total;
            }
            _ => {
                self.status_message = Some(("Capacity and total must be numbers".to_string(), true));
                return false;
            }
        }
        updated.stations = parse_stations(&self.fields.stations);
        updated.output_format = self.output_format;

        match updated.save() {
            Ok(()) => {
                *config = updated;
                self.modified = false;
                self.status_message = Some(("Settings saved".to_string(), false));
                true
            }
            Err(e) => {
                self.status_message = Some((format!("Save failed: {}", e), true));
                false
            }
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
