use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(600.0);
        let window_height = central_panel_size.y.min(500.0);

        let mut open = self.open;
        egui::Window::new("Help")
            .open(&mut open)
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                self.ui_content(ui);
            });
        self.open = open;
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Editing");
            ui.add_space(5.0);
            ui.label("Toggle Edit Mode in the menu bar to switch every section between");
            ui.label("read-only text and editable fields. Collapsed sections keep their");
            ui.label("state; list rows can be added and removed while editing.");

            ui.add_space(15.0);

            ui.heading("Import & Export");
            ui.add_space(5.0);
            ui.label("Plan > Export to JSON writes the whole plan to a file. Plan > Import");
            ui.label("from JSON replaces the current plan with a previously exported file.");
            ui.label("A file that fails to parse leaves the current plan untouched.");

            ui.add_space(15.0);

            ui.heading("AI Features");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Ask AI").strong());
                ui.label("- chat about the current plan; the full document is sent as context.");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Draft a Section").strong());
                ui.label("- answer a short questionnaire, review the generated");
            });
            ui.label("content, and accept it to replace that section.");
            ui.add_space(5.0);
            ui.label("Both features need the GEMINI_API_KEY environment variable set.");

            ui.add_space(20.0);
        });
    }
}
