use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::{Color32, RichText};

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    NewPlan,
    ImportPlan,
    ExportPlan,
    ThemeChanged,
    ToggleAskAi,
    ToggleDrafting,
    ShowHelp,
    Quit,
}

#[allow(clippy::too_many_arguments)]
pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    edit_mode: &mut bool,
    company_name: &str,
    ai_busy: bool,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Plan", |ui| {
        if ui.button("New Plan").clicked() {
            menu_action = MenuAction::NewPlan;
        }
        if ui.button("Import from JSON...").clicked() {
            menu_action = MenuAction::ImportPlan;
        }
        if ui.button("Export to JSON...").clicked() {
            menu_action = MenuAction::ExportPlan;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button("AI", |ui| {
        if ui.button("Ask AI").clicked() {
            menu_action = MenuAction::ToggleAskAi;
        }
        if ui.button("Draft a Section...").clicked() {
            menu_action = MenuAction::ToggleDrafting;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    if original_theme != *theme {
        menu_action = MenuAction::ThemeChanged;
    }

    let toggle = ui.checkbox(edit_mode, "Edit Mode");
    if toggle.hovered() {
        toggle.on_hover_text("Switch every section between read-only and editable fields");
    }

    if ui.button(RichText::new("❓").size(16.0)).clicked() {
        menu_action = MenuAction::ShowHelp;
    }

    ui.add_space(16.0);

    ui.horizontal(|ui| {
        ui.label("Plan:");
        ui.label(
            RichText::new(company_name)
                .color(Color32::from_rgb(180, 140, 220))
                .strong(),
        );
        if ai_busy {
            ui.separator();
            ui.spinner();
            ui.label(RichText::new("AI request in flight").weak());
        }
    });

    menu_action
}
