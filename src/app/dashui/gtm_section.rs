//! Go-to-market strategy editor.

use crate::app::dashui::editable;
use crate::app::drafting::SectionKind;
use crate::app::plan::GtmSection;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, edit_mode: bool, section: &mut GtmSection) -> Option<SectionKind> {
    let mut draft_requested = None;

    egui::CollapsingHeader::new(RichText::new("GTM Strategy").heading())
        .default_open(false)
        .show(ui, |ui| {
            if edit_mode && ui.button("✨ Draft with AI").clicked() {
                draft_requested = Some(SectionKind::Gtm);
            }

            ui.label(RichText::new("Rollout Phases").strong().size(15.0));
            let mut remove_index = None;
            for (idx, phase) in section.phases.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        editable::text_value(ui, edit_mode, &mut phase.name);
                        editable::text_value(ui, edit_mode, &mut phase.duration);
                        if edit_mode && editable::remove_button(ui) {
                            remove_index = Some(idx);
                        }
                    });
                    editable::text_field(ui, edit_mode, "Target:", &mut phase.target);
                    editable::text_field(ui, edit_mode, "Channels:", &mut phase.channels);
                    editable::text_field(ui, edit_mode, "Offer:", &mut phase.offer);
                    editable::text_field(ui, edit_mode, "Focus:", &mut phase.focus);
                });
            }
            if let Some(idx) = remove_index {
                section.remove_phase(idx);
            }
            if edit_mode && editable::add_button(ui, "Phase") {
                section.add_phase();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Acquisition Channels").strong().size(15.0));
            editable::table_header(ui, &["Channel", "Investment", "ROI", "Timeframe"]);
            let mut remove_index = None;
            for (idx, channel) in section.channels.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut channel.channel);
                    editable::text_value(ui, edit_mode, &mut channel.investment);
                    editable::text_value(ui, edit_mode, &mut channel.roi);
                    editable::text_value(ui, edit_mode, &mut channel.timeframe);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_channel(idx);
            }
            if edit_mode && editable::add_button(ui, "Channel") {
                section.add_channel();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Sales Process").strong().size(15.0));
            editable::table_header(ui, &["Stage", "Duration", "Conversion"]);
            let mut remove_index = None;
            for (idx, stage) in section.sales_process.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut stage.stage);
                    editable::text_value(ui, edit_mode, &mut stage.duration);
                    editable::text_value(ui, edit_mode, &mut stage.conversion);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_sales_stage(idx);
            }
            if edit_mode && editable::add_button(ui, "Sales Stage") {
                section.add_sales_stage();
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Strategic Partnerships").strong().size(15.0));
            editable::table_header(ui, &["Partner", "Value", "Type"]);
            let mut remove_index = None;
            for (idx, partnership) in section.partnerships.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    editable::text_value(ui, edit_mode, &mut partnership.partner);
                    editable::text_value(ui, edit_mode, &mut partnership.value);
                    editable::text_value(ui, edit_mode, &mut partnership.kind);
                    if edit_mode && editable::remove_button(ui) {
                        remove_index = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_index {
                section.remove_partnership(idx);
            }
            if edit_mode && editable::add_button(ui, "Partnership") {
                section.add_partnership();
            }
        });

    draft_requested
}
