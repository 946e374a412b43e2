//! Roadmap and milestones editor.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::RoadmapSection;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, edit_mode: bool, section: &mut RoadmapSection) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("Roadmap & Milestones").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Roadmap);
            }

            ui.label(RichText::new("Launch Plan").strong().size(15.0));
            let mut remove_index = None;
            for (idx, phase) in section.launch.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut phase.month);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::text_field(ui, edit_mode, "Focus:", &mut phase.focus);
                    editable::string_list(ui, edit_mode, &mut phase.tasks, "Task");
                });
            }
            if let Some(idx) = remove_index {
                section.remove_launch_phase(idx);
            }
            if edit_mode && editable::add_button(ui, "Launch Phase") {
                section.add_launch_phase();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Product Roadmap").strong().size(15.0));
            let mut remove_index = None;
            for (idx, quarter) in section.product_roadmap.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut quarter.quarter);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::string_list(ui, edit_mode, &mut quarter.items, "Item");
                });
            }
            if let Some(idx) = remove_index {
                section.remove_roadmap_quarter(idx);
            }
            if edit_mode && editable::add_button(ui, "Quarter") {
                section.add_roadmap_quarter();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Team Building").strong().size(15.0));
            editable::table_header(ui, &["Department", "Y1", "Y2", "Y3"]);
            let mut remove_index = None;
            for (idx, dept) in section.team_building.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut dept.department);
                    if edit_mode {
                        ui.add(egui::DragValue::new(&mut dept.hires.y1));
                        ui.add(egui::DragValue::new(&mut dept.hires.y2));
                        ui.add(egui::DragValue::new(&mut dept.hires.y3));
                        if editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    } else {
                        ui.label(dept.hires.y1.to_string());
                        ui.label(dept.hires.y2.to_string());
                        ui.label(dept.hires.y3.to_string());
                    }
                });
                ui.indent(("key_hires", idx), |ui| {
                    editable::string_list(ui, edit_mode, &mut dept.key, "Key Hire");
                });
            }
            if let Some(idx) = remove_index {
                section.remove_department(idx);
            }
            if edit_mode && editable::add_button(ui, "Department") {
                section.add_department();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("KPIs").strong().size(15.0));
            editable::table_header(ui, &["Metric", "Target"]);
            let mut remove_index = None;
            for (idx, kpi) in section.kpis.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut kpi.metric);
                    editable::text_value(ui, edit_mode, &mut kpi.target);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_kpi(idx);
            }
            if edit_mode && editable::add_button(ui, "KPI") {
                section.add_kpi();
            }
        });

    draft_requested
}
