//! Main application structure with tab navigation

use eframe::egui;
use fuellog_app::config::Config;
use tracing::warn;

use crate::generate_panel::GeneratePanel;
use crate::settings_panel::SettingsPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Generate,
    Settings,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Generate => "Generate",
            Tab::Settings => "Settings",
        }
    }
}

/// Main application state
pub struct FuelLogApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Form, error banner and result table
    generate_panel: GeneratePanel,
    /// Saved form defaults
    settings_panel: SettingsPanel,
    /// Application configuration
    config: Config,
}

impl FuelLogApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load config, using defaults");
            Config::default()
        });

        Self {
            current_tab: Tab::default(),
            generate_panel: GeneratePanel::new(&config),
            settings_panel: SettingsPanel::new(&config),
            config,
        }
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in [Tab::Generate, Tab::Settings] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }
}

impl eframe::App for FuelLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Generate => {
                self.generate_panel.ui(ui);
            }
            Tab::Settings => {
                if self.settings_panel.ui(ui, &mut self.config) {
                    // Saved defaults also refill the form
                    self.generate_panel.reset_form(&self.config);
                }
            }
        });
    }
}
