//! Import picker: a fuzzy-searchable directory listing for exported plans.
//!
//! Only directories and `.json` files are listed. Arrow keys move the
//! selection, Enter opens it (descending into directories), Left ascends,
//! Esc cancels. Selecting a file hands its path back through
//! [`PlanFilePickerStatus::Selected`]; the shell does the actual import.

use crate::app::dashui::app::fuzzy_match_score;
use egui::{Color32, Context, Key, RichText, Window};
use std::path::{Path, PathBuf};

pub enum PlanFilePickerStatus {
    Open,
    Closed,
    Selected(PathBuf),
}

struct Entry {
    name: String,
    is_dir: bool,
}

/// What the user asked for this frame. Collected from buttons, clicks, and
/// keys, then applied once after rendering so the entry list is never
/// mutated while it is being drawn.
enum PickerAction {
    None,
    Cancel,
    OpenSelected,
    Ascend,
    MoveUp,
    MoveDown,
}

fn is_plan_file(name: &str) -> bool {
    name.to_lowercase().ends_with(".json")
}

/// List one directory: visible subdirectories plus plan files matching the
/// query, directories first, each group in case-insensitive name order.
fn list_entries(dir: &Path, query: &str) -> std::io::Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = std::fs::read_dir(dir)?
        .flatten()
        .filter_map(|dir_entry| {
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                return None;
            }
            let is_dir = dir_entry.path().is_dir();
            if !is_dir && !is_plan_file(&name) {
                return None;
            }
            if !query.is_empty() && fuzzy_match_score(query, &name).is_none() {
                return None;
            }
            Some(Entry { name, is_dir })
        })
        .collect();
    entries.sort_by_key(|e| (!e.is_dir, e.name.to_lowercase()));
    Ok(entries)
}

pub struct PlanFilePicker {
    pub status: PlanFilePickerStatus,
    current_dir: PathBuf,
    query: String,
    entries: Vec<Entry>,
    selected: usize,
    error_message: Option<String>,
}

impl Default for PlanFilePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanFilePicker {
    /// Open the picker in the user's home directory.
    pub fn new() -> Self {
        let mut picker = Self {
            status: PlanFilePickerStatus::Open,
            current_dir: dirs::home_dir().unwrap_or_else(|| PathBuf::from("/")),
            query: String::new(),
            entries: Vec::new(),
            selected: 0,
            error_message: None,
        };
        picker.refresh();
        picker
    }

    fn refresh(&mut self) {
        self.selected = 0;
        match list_entries(&self.current_dir, &self.query) {
            Ok(entries) => {
                self.entries = entries;
                self.error_message = None;
            }
            Err(e) => {
                self.entries.clear();
                self.error_message =
                    Some(format!("Cannot read {}: {}", self.current_dir.display(), e));
            }
        }
    }

    fn apply(&mut self, action: PickerAction) {
        match action {
            PickerAction::None => {}
            PickerAction::Cancel => {
                self.status = PlanFilePickerStatus::Closed;
            }
            PickerAction::MoveDown => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            PickerAction::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            PickerAction::Ascend => {
                if let Some(parent) = self.current_dir.parent() {
                    self.current_dir = parent.to_path_buf();
                    self.query.clear();
                    self.refresh();
                }
            }
            PickerAction::OpenSelected => {
                let Some(entry) = self.entries.get(self.selected) else {
                    return;
                };
                let name = entry.name.clone();
                if entry.is_dir {
                    self.current_dir = self.current_dir.join(name);
                    self.query.clear();
                    self.refresh();
                } else {
                    self.status = PlanFilePickerStatus::Selected(self.current_dir.join(name));
                }
            }
        }
    }

    pub fn show(&mut self, ctx: &Context) {
        if !matches!(self.status, PlanFilePickerStatus::Open) {
            return;
        }

        // Keep the search field focused so typing always filters.
        let search_id = egui::Id::new("plan_search_field");
        ctx.memory_mut(|mem| mem.request_focus(search_id));

        let mut action = PickerAction::None;

        Window::new("Import Plan")
            .collapsible(false)
            .resizable(true)
            .default_size([480.0, 420.0])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(self.current_dir.display().to_string())
                        .strong()
                        .monospace(),
                );
                if let Some(error) = &self.error_message {
                    ui.colored_label(Color32::RED, error);
                }

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.query)
                        .hint_text("Search for an exported plan (.json)")
                        .desired_width(ui.available_width() - 8.0)
                        .id(search_id),
                );
                if response.changed() {
                    self.refresh();
                }
                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        for (idx, entry) in self.entries.iter().enumerate() {
                            let label = if entry.is_dir {
                                RichText::new(format!("📁 {}", entry.name)).strong()
                            } else {
                                RichText::new(&entry.name)
                            };
                            if ui.selectable_label(idx == self.selected, label).clicked() {
                                self.selected = idx;
                                action = PickerAction::OpenSelected;
                            }
                        }
                        if self.entries.is_empty() {
                            ui.label(RichText::new("No matching entries").weak());
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Enter opens · ← goes up · Esc cancels").weak());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Cancel").clicked() {
                            action = PickerAction::Cancel;
                        }
                        if ui.button("Open").clicked() {
                            action = PickerAction::OpenSelected;
                        }
                    });
                });
            });

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                action = PickerAction::Cancel;
            } else if i.key_pressed(Key::Enter) {
                action = PickerAction::OpenSelected;
            } else if i.key_pressed(Key::ArrowLeft) && self.query.is_empty() {
                action = PickerAction::Ascend;
            } else if i.key_pressed(Key::ArrowDown) {
                action = PickerAction::MoveDown;
            } else if i.key_pressed(Key::ArrowUp) {
                action = PickerAction::MoveUp;
            }
        });

        self.apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        std::fs::write(path, b"{}").unwrap();
    }

    #[test]
    fn listing_keeps_directories_first_and_plans_only() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("backups")).unwrap();
        touch(&dir.path().join("alpha.json"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join(".hidden.json"));

        let entries = list_entries(dir.path(), "").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["backups", "alpha.json"]);
        assert!(entries[0].is_dir);
    }

    #[test]
    fn listing_filters_by_fuzzy_query() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("plan_2025.json"));
        touch(&dir.path().join("draft.json"));

        let entries = list_entries(dir.path(), "pln").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["plan_2025.json"]);
    }

    #[test]
    fn opening_a_file_reports_its_full_path() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("plan.json"));

        let mut picker = PlanFilePicker::new();
        picker.current_dir = dir.path().to_path_buf();
        picker.refresh();
        picker.apply(PickerAction::OpenSelected);

        match picker.status {
            PlanFilePickerStatus::Selected(path) => {
                assert_eq!(path, dir.path().join("plan.json"));
            }
            _ => panic!("expected a selected file"),
        }
    }

    #[test]
    fn opening_a_directory_descends_and_rescans() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("exports");
        std::fs::create_dir(&sub).unwrap();
        touch(&sub.join("inner.json"));

        let mut picker = PlanFilePicker::new();
        picker.current_dir = dir.path().to_path_buf();
        picker.query = "exp".to_string();
        picker.refresh();
        picker.apply(PickerAction::OpenSelected);

        assert!(matches!(picker.status, PlanFilePickerStatus::Open));
        assert_eq!(picker.current_dir, sub);
        assert!(picker.query.is_empty());
        assert_eq!(picker.entries.len(), 1);
        assert_eq!(picker.entries[0].name, "inner.json");
    }

    #[test]
    fn selection_moves_stay_in_bounds() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.json"));
        touch(&dir.path().join("b.json"));

        let mut picker = PlanFilePicker::new();
        picker.current_dir = dir.path().to_path_buf();
        picker.refresh();

        picker.apply(PickerAction::MoveUp);
        assert_eq!(picker.selected, 0);
        picker.apply(PickerAction::MoveDown);
        assert_eq!(picker.selected, 1);
        picker.apply(PickerAction::MoveDown);
        assert_eq!(picker.selected, 1);
    }

    #[test]
    fn unreadable_directory_surfaces_an_error() {
        let mut picker = PlanFilePicker::new();
        picker.current_dir = PathBuf::from("/definitely/not/a/real/dir");
        picker.refresh();

        assert!(picker.entries.is_empty());
        assert!(picker.error_message.is_some());
    }
}
