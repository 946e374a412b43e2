//! Export dialog: pick a destination path and write the plan as JSON.

use crate::app::plan::BusinessPlan;
use egui::{Color32, Context, RichText};
use std::path::PathBuf;
use tracing::{error, info};

pub struct SavePlanWindow {
    pub open: bool,
    path_text: String,
    error_message: Option<String>,
}

impl Default for SavePlanWindow {
    fn default() -> Self {
        Self {
            open: false,
            path_text: String::new(),
            error_message: None,
        }
    }
}

impl SavePlanWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog with a default destination in the user's documents
    /// directory, named after the plan's company.
    pub fn open_for(&mut self, plan: &BusinessPlan) {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let stem: String = plan
            .company_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        let stem = if stem.trim_matches('_').is_empty() {
            "business_plan".to_string()
        } else {
            stem
        };
        self.path_text = base.join(format!("{stem}.json")).display().to_string();
        self.error_message = None;
        self.open = true;
    }

    /// Show the dialog. Returns the path that was written on success.
    pub fn show(&mut self, ctx: &Context, plan: &BusinessPlan) -> Option<PathBuf> {
        if !self.open {
            return None;
        }

        let mut written = None;
        let mut cancelled = false;
        let mut open = self.open;
        egui::Window::new("Export Plan")
            .open(&mut open)
            .default_width(520.0)
            .resizable(true)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Destination:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.path_text)
                        .desired_width(ui.available_width() - 8.0),
                );

                if let Some(error) = &self.error_message {
                    ui.add_space(4.0);
                    ui.colored_label(Color32::RED, error);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(RichText::new("Export").strong()).clicked() {
                        let path = PathBuf::from(self.path_text.trim());
                        match plan.save_to_path(&path) {
                            Ok(()) => {
                                info!("Plan exported to {}", path.display());
                                written = Some(path);
                            }
                            Err(e) => {
                                error!("Failed to export plan: {}", e);
                                self.error_message = Some(format!("Failed to export: {e:#}"));
                            }
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                        self.error_message = None;
                    }
                });
            });

        if written.is_some() || cancelled {
            self.open = false;
        } else {
            self.open = open;
        }
        written
    }
}
