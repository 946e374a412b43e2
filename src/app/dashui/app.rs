//! Application shell: owns the plan document, the edit flag, and every
//! window, and wires menu actions to them.

use crate::app::dashui::chat_window::AskAiWindow;
use crate::app::dashui::drafting_window::DraftingWindow;
use crate::app::dashui::help_window::HelpWindow;
use crate::app::dashui::menu::{build_menu, MenuAction};
use crate::app::dashui::plan_file_picker::{PlanFilePicker, PlanFilePickerStatus};
use crate::app::dashui::save_plan_window::SavePlanWindow;
use crate::app::dashui::{
    business_section, editable, executive_section, financial_section, gtm_section,
    opportunity_section, risks_section, roadmap_section, solution_section,
};
use crate::app::plan::BusinessPlan;
use eframe::egui;
use egui::{Color32, RichText};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info};

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PlanBoardApp {
    pub theme: ThemeChoice,
    /// The document being edited. Persisted with the app state so a restart
    /// picks up where the user left off; explicit import/export is the
    /// durable format.
    pub plan: BusinessPlan,

    #[serde(skip)]
    pub edit_mode: bool,
    #[serde(skip)]
    selected_year: u8,
    #[serde(skip)]
    pub ask_ai_window: AskAiWindow,
    #[serde(skip)]
    pub drafting_window: DraftingWindow,
    #[serde(skip)]
    pub save_plan_window: SavePlanWindow,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    plan_file_picker: Option<PlanFilePicker>,
    #[serde(skip)]
    status_message: Option<(String, Instant)>,
    #[serde(skip)]
    error_message: Option<(String, Instant)>,
}

impl Default for PlanBoardApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            plan: BusinessPlan::default(),
            edit_mode: false,
            selected_year: 1,
            ask_ai_window: AskAiWindow::new(),
            drafting_window: DraftingWindow::new(),
            save_plan_window: SavePlanWindow::new(),
            help_window: HelpWindow::new(),
            plan_file_picker: None,
            status_message: None,
            error_message: None,
        }
    }
}

impl PlanBoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Apply the saved theme
        app.apply_theme(&cc.egui_ctx);

        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some((message.into(), Instant::now()));
    }

    /// Replace the current plan with the contents of an exported file. On
    /// failure the current plan stays as it was and the error is surfaced.
    fn import_plan(&mut self, path: &Path) {
        match BusinessPlan::load_from_file(path) {
            Ok(plan) => {
                self.plan = plan;
                self.selected_year = 1;
                info!("Imported plan from {}", path.display());
                self.set_status(format!("Imported {}", path.display()));
            }
            Err(e) => {
                error!("Failed to import plan from {}: {}", path.display(), e);
                self.set_error(format!("Import failed: {e:#}"));
            }
        }
    }

    fn handle_menu_action(&mut self, action: MenuAction, ctx: &egui::Context) {
        match action {
            MenuAction::None | MenuAction::ThemeChanged => {}
            MenuAction::NewPlan => {
                self.plan = BusinessPlan::default();
                self.selected_year = 1;
                self.set_status("Started a new plan");
            }
            MenuAction::ImportPlan => {
                self.plan_file_picker = Some(PlanFilePicker::new());
            }
            MenuAction::ExportPlan => {
                self.save_plan_window.open_for(&self.plan);
            }
            MenuAction::ToggleAskAi => {
                self.ask_ai_window.toggle();
            }
            MenuAction::ToggleDrafting => {
                self.drafting_window.open_chooser();
            }
            MenuAction::ShowHelp => {
                self.help_window.open = !self.help_window.open;
            }
            MenuAction::Quit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn show_file_picker(&mut self, ctx: &egui::Context) {
        let Some(picker) = &mut self.plan_file_picker else {
            return;
        };
        picker.show(ctx);
        match &picker.status {
            PlanFilePickerStatus::Open => {}
            PlanFilePickerStatus::Closed => {
                self.plan_file_picker = None;
            }
            PlanFilePickerStatus::Selected(path) => {
                let path = path.clone();
                self.plan_file_picker = None;
                self.import_plan(&path);
            }
        }
    }

    fn show_sections(&mut self, ui: &mut egui::Ui) {
        let edit_mode = self.edit_mode;

        // Company header
        ui.vertical_centered(|ui| {
            if edit_mode {
                ui.add(
                    egui::TextEdit::singleline(&mut self.plan.company_name)
                        .font(egui::TextStyle::Heading)
                        .horizontal_align(egui::Align::Center),
                );
                ui.text_edit_singleline(&mut self.plan.tagline);
            } else {
                ui.heading(RichText::new(&self.plan.company_name).size(26.0).strong());
                ui.label(RichText::new(&self.plan.tagline).italics());
            }
        });
        ui.horizontal(|ui| {
            editable::text_field(ui, edit_mode, "Industry:", &mut self.plan.industry);
            ui.separator();
            editable::text_field(
                ui,
                edit_mode,
                "Target Valuation:",
                &mut self.plan.target_valuation,
            );
        });
        ui.separator();

        let mut draft_request = None;
        draft_request =
            draft_request.or(executive_section::show(ui, edit_mode, &mut self.plan.executive));
        draft_request = draft_request.or(opportunity_section::show(
            ui,
            edit_mode,
            &mut self.plan.opportunity,
        ));
        draft_request =
            draft_request.or(solution_section::show(ui, edit_mode, &mut self.plan.solution));
        draft_request =
            draft_request.or(business_section::show(ui, edit_mode, &mut self.plan.business));
        draft_request = draft_request.or(gtm_section::show(ui, edit_mode, &mut self.plan.gtm));
        draft_request = draft_request.or(financial_section::show(
            ui,
            edit_mode,
            &mut self.plan.financial,
            &mut self.selected_year,
        ));
        draft_request =
            draft_request.or(roadmap_section::show(ui, edit_mode, &mut self.plan.roadmap));
        draft_request = draft_request.or(risks_section::show_risks(ui, edit_mode, &mut self.plan));
        draft_request = draft_request.or(risks_section::show_success_factors(
            ui,
            edit_mode,
            &mut self.plan,
        ));

        if let Some(kind) = draft_request {
            self.drafting_window.open_for(kind);
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        // Expire stale messages
        if let Some((_, at)) = &self.status_message {
            if at.elapsed() > STATUS_MESSAGE_TTL {
                self.status_message = None;
            }
        }
        if let Some((_, at)) = &self.error_message {
            if at.elapsed() > STATUS_MESSAGE_TTL {
                self.error_message = None;
            }
        }

        if self.status_message.is_none() && self.error_message.is_none() {
            return;
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((message, _)) = &self.error_message {
                    ui.colored_label(Color32::RED, RichText::new(message).strong());
                } else if let Some((message, _)) = &self.status_message {
                    ui.label(message);
                }
            });
        });
    }
}

impl eframe::App for PlanBoardApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let ai_busy = self.ask_ai_window.is_loading() || self.drafting_window.is_generating();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let mut theme = self.theme;
                let mut edit_mode = self.edit_mode;
                let action = build_menu(
                    ui,
                    ctx,
                    &mut theme,
                    &mut edit_mode,
                    &self.plan.company_name,
                    ai_busy,
                );
                self.theme = theme;
                if self.edit_mode && !edit_mode {
                    self.set_status("Changes saved");
                }
                self.edit_mode = edit_mode;
                self.handle_menu_action(action, ctx);
            });
        });

        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_sections(ui);
                });
        });

        // Windows
        self.show_file_picker(ctx);
        if let Some(path) = self.save_plan_window.show(ctx, &self.plan) {
            self.set_status(format!("Exported {}", path.display()));
        }
        self.ask_ai_window.show(ctx, &self.plan);
        if let Some(kind) = self.drafting_window.show(ctx, &mut self.plan) {
            self.set_status(format!("{} section updated from draft", kind.title()));
        }
        self.help_window.show(ctx);
    }
}

pub fn fuzzy_match_score(pattern: &str, text: &str) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }

    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();

    let mut score = 0;
    let mut pattern_idx = 0;
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut consecutive_matches = 0;

    for c in text.chars() {
        if pattern_idx < pattern_chars.len() && c == pattern_chars[pattern_idx] {
            pattern_idx += 1;
            consecutive_matches += 1;
            // Bonus for consecutive matches
            score += consecutive_matches;
        } else {
            consecutive_matches = 0;
        }
    }

    if pattern_idx == pattern_chars.len() {
        // Bonus for shorter text (more precise match)
        let length_ratio = pattern.len() as f32 / text.len() as f32;
        score = (score as f32 * (1.0 + length_ratio)) as usize;
        Some(score)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_match_requires_subsequence() {
        assert!(fuzzy_match_score("pln", "plan.json").is_some());
        assert!(fuzzy_match_score("xyz", "plan.json").is_none());
        assert_eq!(fuzzy_match_score("", "anything"), Some(0));
    }

    #[test]
    fn fuzzy_match_prefers_tighter_matches() {
        let tight = fuzzy_match_score("plan", "plan.json").unwrap();
        let loose = fuzzy_match_score("plan", "p_l_a_n_backup_export.json").unwrap();
        assert!(tight > loose);
    }
}
