//! Solution and technology editor.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::SolutionSection;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, edit_mode: bool, section: &mut SolutionSection) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("Solution & Technology").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Solution);
            }

            editable::multiline_field(ui, edit_mode, "Overview", &mut section.description);

            ui.add_space(8.0);
            ui.label(RichText::new("Product Features").strong().size(15.0));
            let mut remove_index = None;
            for (idx, feature) in section.features.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut feature.name);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if edit_mode && editable::remove_button(ui) {
                                remove_index = Some(idx);
                            }
                            editable::text_value(ui, edit_mode, &mut feature.revenue);
                            ui.label(RichText::new("Revenue:").weak());
                        });
                    });
                    editable::text_value(ui, edit_mode, &mut feature.description);
                    editable::string_list(ui, edit_mode, &mut feature.capabilities, "Capability");
                });
            }
            if let Some(idx) = remove_index {
                section.remove_feature(idx);
            }
            if edit_mode && editable::add_button(ui, "Feature") {
                section.add_feature();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Technology Stack").strong().size(15.0));
            let mut remove_index = None;
            for (idx, layer) in section.tech_stack.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut layer.layer);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::string_list(ui, edit_mode, &mut layer.technologies, "Technology");
                });
            }
            if let Some(idx) = remove_index {
                section.remove_tech_stack_layer(idx);
            }
            if edit_mode && editable::add_button(ui, "Stack Layer") {
                section.add_tech_stack_layer();
            }
        });

    draft_requested
}
