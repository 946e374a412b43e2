//! Executive summary editor.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::ExecutiveSection;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, edit_mode: bool, section: &mut ExecutiveSection) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("Executive Summary").heading())
        .default_open(true)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Executive);
            }

            ui.horizontal(|ui| {
                editable::text_field(ui, edit_mode, "Market Size:", &mut section.market_size);
                ui.separator();
                editable::text_field(
                    ui,
                    edit_mode,
                    "Year 3 Revenue:",
                    &mut section.year_three_revenue,
                );
            });
            editable::text_field(ui, edit_mode, "Unique Value:", &mut section.unique_value);

            ui.add_space(8.0);
            ui.label(RichText::new("The Problem").strong().size(15.0));
            let mut remove_index = None;
            for (idx, problem) in section.problems.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut problem.title);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::text_value(ui, edit_mode, &mut problem.description);
                });
            }
            if let Some(idx) = remove_index {
                section.remove_problem(idx);
            }
            if edit_mode && editable::add_button(ui, "Problem") {
                section.add_problem();
            }

            ui.add_space(8.0);
            editable::multiline_field(ui, edit_mode, "Our Solution", &mut section.solution);

            ui.add_space(8.0);
            ui.label(RichText::new("Unfair Advantages").strong().size(15.0));
            let mut remove_index = None;
            for (idx, advantage) in section.advantages.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut advantage.metric);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::text_value(ui, edit_mode, &mut advantage.description);
                });
            }
            if let Some(idx) = remove_index {
                section.remove_advantage(idx);
            }
            if edit_mode && editable::add_button(ui, "Advantage") {
                section.add_advantage();
            }
        });

    draft_requested
}
