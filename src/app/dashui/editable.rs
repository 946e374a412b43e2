//! Shared widgets for the section editors.
//!
//! Every field in the plan renders in one of two states driven by the global
//! edit flag: a plain label when viewing, a text box when editing. These
//! helpers keep the two states next to each other so an editor can't show a
//! widget the other state lacks.

use egui::{Color32, RichText, Ui};

/// A single-line field with a label. Renders as `label: value` when viewing.
pub fn text_field(ui: &mut Ui, edit_mode: bool, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        if edit_mode {
            ui.add(egui::TextEdit::singleline(value).desired_width(ui.available_width() - 8.0));
        } else {
            ui.label(value.as_str());
        }
    });
}

/// A multi-line field with the label above the text.
pub fn multiline_field(ui: &mut Ui, edit_mode: bool, label: &str, value: &mut String) {
    ui.label(RichText::new(label).strong());
    if edit_mode {
        ui.add(
            egui::TextEdit::multiline(value)
                .desired_rows(3)
                .desired_width(ui.available_width() - 8.0),
        );
    } else {
        ui.label(value.as_str());
    }
}

/// A bare single-line value, for table cells.
pub fn text_value(ui: &mut Ui, edit_mode: bool, value: &mut String) {
    if edit_mode {
        ui.text_edit_singleline(value);
    } else {
        ui.label(value.as_str());
    }
}

/// The per-row remove control. Only shown in edit mode; returns true when the
/// row should be removed.
pub fn remove_button(ui: &mut Ui) -> bool {
    ui.button(RichText::new("✖").color(Color32::from_rgb(220, 80, 80)))
        .on_hover_text("Remove")
        .clicked()
}

/// The append control shown under a list in edit mode.
pub fn add_button(ui: &mut Ui, label: &str) -> bool {
    ui.button(format!("＋ {label}")).clicked()
}

/// A list of plain strings rendered as bullets, editable in place. Removal
/// is deferred to after the loop so indices stay valid while rendering.
pub fn string_list(ui: &mut Ui, edit_mode: bool, items: &mut Vec<String>, add_label: &str) {
    let mut remove_index = None;
    for (idx, item) in items.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            ui.label("•");
            if edit_mode {
                ui.add(
                    egui::TextEdit::singleline(item)
                        .desired_width(ui.available_width() - 40.0),
                );
                if remove_button(ui) {
                    remove_index = Some(idx);
                }
            } else {
                ui.label(item.as_str());
            }
        });
    }
    if let Some(idx) = remove_index {
        if idx < items.len() {
            items.remove(idx);
        }
    }
    if edit_mode && add_button(ui, add_label) {
        items.push(format!("New {add_label}"));
    }
}

/// A yes/no cell in the comparison table: a checkbox when editing, a mark
/// when viewing.
pub fn bool_cell(ui: &mut Ui, edit_mode: bool, value: &mut bool) {
    if edit_mode {
        ui.checkbox(value, "");
    } else if *value {
        ui.label(RichText::new("✔").color(Color32::from_rgb(120, 200, 120)));
    } else {
        ui.label(RichText::new("—").weak());
    }
}

/// Header row for the ad-hoc tables used by the section editors.
pub fn table_header(ui: &mut Ui, columns: &[&str]) {
    ui.horizontal(|ui| {
        for column in columns {
            ui.label(RichText::new(*column).strong().underline());
            ui.add_space(12.0);
        }
    });
}
