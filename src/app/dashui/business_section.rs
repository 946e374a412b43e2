//! Business model editor.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::BusinessSection;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, edit_mode: bool, section: &mut BusinessSection) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("Business Model").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Business);
            }

            ui.label(RichText::new("Revenue Streams").strong().size(15.0));
            editable::table_header(ui, &["Stream", "Model", "Pricing", "Margin", "Split"]);
            let mut remove_index = None;
            for (idx, stream) in section.revenue_streams.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut stream.stream);
                    editable::text_value(ui, edit_mode, &mut stream.model);
                    editable::text_value(ui, edit_mode, &mut stream.pricing);
                    editable::text_value(ui, edit_mode, &mut stream.margin);
                    editable::text_value(ui, edit_mode, &mut stream.split);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_revenue_stream(idx);
            }
            if edit_mode && editable::add_button(ui, "Revenue Stream") {
                section.add_revenue_stream();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Pricing Tiers").strong().size(15.0));
            let mut remove_index = None;
            for (idx, tier) in section.pricing_tiers.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut tier.tier);
                        editable::text_value(ui, edit_mode, &mut tier.price);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::text_field(ui, edit_mode, "Target:", &mut tier.target);
                    editable::string_list(ui, edit_mode, &mut tier.includes, "Included Feature");
                });
            }
            if let Some(idx) = remove_index {
                section.remove_pricing_tier(idx);
            }
            if edit_mode && editable::add_button(ui, "Pricing Tier") {
                section.add_pricing_tier();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Unit Economics").strong().size(15.0));
            ui.horizontal(|ui| {
                editable::text_field(ui, edit_mode, "ARR:", &mut section.unit_economics.arr);
                ui.separator();
                editable::text_field(ui, edit_mode, "CAC:", &mut section.unit_economics.cac);
            });
            ui.horizontal(|ui| {
                editable::text_field(ui, edit_mode, "LTV:", &mut section.unit_economics.ltv);
                ui.separator();
                editable::text_field(
                    ui,
                    edit_mode,
                    "Payback:",
                    &mut section.unit_economics.payback,
                );
            });
        });

    draft_requested
}
