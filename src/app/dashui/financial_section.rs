//! Financial projections editor.
//!
//! The three projection years render as tabs; `selected_year` is UI state
//! owned by the app shell so it survives section redraws without being part
//! of the document.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::FinancialSection;
use egui::{RichText, Ui};

pub fn show(
    ui: &mut Ui,
    edit_mode: bool,
    section: &mut FinancialSection,
    selected_year: &mut u8,
) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("Financial Projections").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Financial);
            }

            ui.label(RichText::new("Key Metrics").strong().size(15.0));
            ui.horizontal(|ui| {
                editable::text_field(
                    ui,
                    edit_mode,
                    "Current ARR:",
                    &mut section.key_metrics.current_arr,
                );
                ui.separator();
                editable::text_field(
                    ui,
                    edit_mode,
                    "Projected ARR:",
                    &mut section.key_metrics.projected_arr,
                );
                ui.separator();
                editable::text_field(ui, edit_mode, "LTV:", &mut section.key_metrics.ltv);
            });

            ui.add_space(8.0);
            ui.label(RichText::new("Projections by Year").strong().size(15.0));
            ui.horizontal(|ui| {
                for year in section.years.keys().copied().collect::<Vec<_>>() {
                    ui.selectable_value(selected_year, year, format!("Year {year}"));
                }
            });
            if let Some(year) = section.years.get_mut(selected_year) {
                ui.horizontal(|ui| {
                    editable::text_field(ui, edit_mode, "Revenue:", &mut year.revenue);
                    ui.separator();
                    editable::text_field(ui, edit_mode, "Clients:", &mut year.clients);
                    ui.separator();
                    editable::text_field(ui, edit_mode, "ARR:", &mut year.arr);
                });
                ui.horizontal(|ui| {
                    editable::text_field(ui, edit_mode, "Margin:", &mut year.margin);
                    ui.separator();
                    editable::text_field(ui, edit_mode, "Team:", &mut year.team);
                });
                ui.label(RichText::new("Milestones").strong());
                editable::string_list(ui, edit_mode, &mut year.milestones, "Milestone");
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Revenue Breakdown (%)").strong().size(15.0));
            editable::table_header(ui, &["Stream", "Y1", "Y2", "Y3"]);
            let mut remove_index = None;
            for (idx, row) in section.revenue_breakdown.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut row.stream);
                    if edit_mode {
                        ui.add(egui::DragValue::new(&mut row.y1).range(0..=100));
                        ui.add(egui::DragValue::new(&mut row.y2).range(0..=100));
                        ui.add(egui::DragValue::new(&mut row.y3).range(0..=100));
                        if editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    } else {
                        ui.label(format!("{}%", row.y1));
                        ui.label(format!("{}%", row.y2));
                        ui.label(format!("{}%", row.y3));
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_revenue_breakdown(idx);
            }
            if edit_mode && editable::add_button(ui, "Breakdown Row") {
                section.add_revenue_breakdown();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Cost Structure").strong().size(15.0));
            editable::table_header(ui, &["Category", "Share"]);
            let mut remove_index = None;
            for (idx, cost) in section.costs.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut cost.category);
                    editable::text_value(ui, edit_mode, &mut cost.percent);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_cost(idx);
            }
            if edit_mode && editable::add_button(ui, "Cost Category") {
                section.add_cost();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Funding Ask").strong().size(15.0));
            editable::text_field(ui, edit_mode, "Amount:", &mut section.funding.amount);
            editable::table_header(ui, &["Use of Funds", "Amount"]);
            let mut remove_index = None;
            for (idx, fund_use) in section.funding.uses.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut fund_use.r#use);
                    editable::text_value(ui, edit_mode, &mut fund_use.amount);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.funding.remove_use(idx);
            }
            if edit_mode && editable::add_button(ui, "Use of Funds") {
                section.funding.add_use();
            }
        });

    draft_requested
}
