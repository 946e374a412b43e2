//! Risks and success factors editors. Both lists hang directly off the plan
//! root, so the editors take the whole document.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::BusinessPlan;
use egui::{Color32, RichText, Ui};

fn level_color(level: &str) -> Color32 {
    match level {
        "High" => Color32::from_rgb(220, 80, 80),
        "Medium" => Color32::from_rgb(230, 170, 60),
        "Low" => Color32::from_rgb(120, 200, 120),
        _ => Color32::GRAY,
    }
}

pub fn show_risks(ui: &mut Ui, edit_mode: bool, plan: &mut BusinessPlan) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("Risks & Mitigation").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Risks);
            }

            let mut remove_index = None;
            for (idx, risk) in plan.risks.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut risk.risk);
                        if edit_mode {
                            egui::ComboBox::from_id_salt(("risk_level", idx))
                                .selected_text(risk.level.clone())
                                .show_ui(ui, |ui| {
                                    for level in ["High", "Medium", "Low"] {
                                        ui.selectable_value(
                                            &mut risk.level,
                                            level.to_string(),
                                            level,
                                        );
                                    }
                                });
                            if editable::remove_button(ui) {
                                remove_index = Some(idx);
                            }
                        } else {
                            ui.label(
                                RichText::new(&risk.level)
                                    .color(level_color(&risk.level))
                                    .strong(),
                            );
                        }
                    });
                    editable::text_value(ui, edit_mode, &mut risk.description);
                    ui.label(RichText::new("Mitigation").strong());
                    editable::string_list(ui, edit_mode, &mut risk.mitigation, "Mitigation Step");
                });
            }
            if let Some(idx) = remove_index {
                plan.remove_risk(idx);
            }
            if edit_mode && editable::add_button(ui, "Risk") {
                plan.add_risk();
            }
        });

    draft_requested
}

pub fn show_success_factors(
    ui: &mut Ui,
    edit_mode: bool,
    plan: &mut BusinessPlan,
) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("Success Factors").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::SuccessFactors);
            }

            let mut remove_index = None;
            for (idx, factor) in plan.success_factors.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut factor.factor);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::text_value(ui, edit_mode, &mut factor.description);
                });
            }
            if let Some(idx) = remove_index {
                plan.remove_success_factor(idx);
            }
            if edit_mode && editable::add_button(ui, "Success Factor") {
                plan.add_success_factor();
            }
        });

    draft_requested
}
