//! Market opportunity editor.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::OpportunitySection;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, edit_mode: bool, section: &mut OpportunitySection) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("The Opportunity").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Opportunity);
            }

            ui.horizontal(|ui| {
                editable::text_field(ui, edit_mode, "Market Size:", &mut section.market_size);
                ui.separator();
                editable::text_field(ui, edit_mode, "Growth:", &mut section.market_growth);
            });
            editable::text_field(ui, edit_mode, "Target:", &mut section.target_percent);
            editable::multiline_field(
                ui,
                edit_mode,
                "Target Description",
                &mut section.target_description,
            );

            ui.add_space(8.0);
            ui.label(RichText::new("Growth Drivers").strong().size(15.0));
            editable::string_list(ui, edit_mode, &mut section.growth_drivers, "Driver");

            ui.add_space(8.0);
            ui.label(RichText::new("Customer Segments").strong().size(15.0));
            editable::table_header(ui, &["Segment", "Size", "ARR", "Priority"]);
            let mut remove_index = None;
            for (idx, segment) in section.customer_segments.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut segment.segment);
                    editable::text_value(ui, edit_mode, &mut segment.size);
                    editable::text_value(ui, edit_mode, &mut segment.arr);
                    editable::text_value(ui, edit_mode, &mut segment.priority);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_customer_segment(idx);
            }
            if edit_mode && editable::add_button(ui, "Segment") {
                section.add_customer_segment();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Competitive Comparison").strong().size(15.0));
            editable::table_header(ui, &["Feature", "Us", "Competitor 1", "Competitor 2"]);
            let mut remove_index = None;
            for (idx, advantage) in section.competitive_advantages.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut advantage.feature);
                    editable::bool_cell(ui, edit_mode, &mut advantage.us);
                    editable::bool_cell(ui, edit_mode, &mut advantage.competitor1);
                    editable::bool_cell(ui, edit_mode, &mut advantage.competitor2);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_competitive_advantage(idx);
            }
            if edit_mode && editable::add_button(ui, "Comparison Row") {
                section.add_competitive_advantage();
            }
        });

    draft_requested
}
