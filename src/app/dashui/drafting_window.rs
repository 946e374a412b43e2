//! Guided drafting wizard.
//!
//! Three steps: answer the section's questionnaire, wait for generation,
//! review the reply. The review text is editable, and accepting it runs the
//! strict validation in [`crate::app::drafting::apply_draft`]: a reply that
//! does not match the section's structure shows an error and merges nothing.

use crate::app::ai_client::AiClient;
use crate::app::drafting::{self, SectionKind};
use crate::app::plan::BusinessPlan;
use egui::{Color32, Context, RichText, ScrollArea, Ui, Window};
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftStep {
    Questions,
    Generating,
    Review,
}

pub struct DraftingWindow {
    pub open: bool,
    section: Option<SectionKind>,
    step: DraftStep,
    question_index: usize,
    answers: Vec<String>,
    edited_reply: String,
    error: Option<String>,
    receiver: Option<mpsc::Receiver<Result<String, String>>>,
}

impl Default for DraftingWindow {
    fn default() -> Self {
        Self {
            open: false,
            section: None,
            step: DraftStep::Questions,
            question_index: 0,
            answers: Vec::new(),
            edited_reply: String::new(),
            error: None,
            receiver: None,
        }
    }
}

impl DraftingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with the section chooser (no section selected yet).
    pub fn open_chooser(&mut self) {
        self.open = true;
        self.section = None;
        self.step = DraftStep::Questions;
        self.question_index = 0;
        self.answers.clear();
        self.edited_reply.clear();
        self.error = None;
        self.receiver = None;
    }

    /// Open directly on a section's questionnaire, discarding any previous
    /// wizard state.
    pub fn open_for(&mut self, kind: SectionKind) {
        self.open_chooser();
        self.select_section(kind);
    }

    pub fn is_generating(&self) -> bool {
        self.step == DraftStep::Generating
    }

    fn select_section(&mut self, kind: SectionKind) {
        self.section = Some(kind);
        self.answers = vec![String::new(); kind.questions().len()];
        self.question_index = 0;
        self.step = DraftStep::Questions;
        self.error = None;
    }

    fn generate(&mut self) {
        let Some(kind) = self.section else {
            return;
        };
        let prompt = drafting::draft_prompt(kind, &self.answers);
        info!(
            section = kind.title(),
            prompt_len = prompt.len(),
            "Starting section draft generation"
        );
        self.step = DraftStep::Generating;
        self.error = None;

        let (tx, rx) = mpsc::channel();
        self.receiver = Some(rx);
        std::thread::spawn(move || {
            let result = AiClient::from_env()
                .and_then(|client| client.generate(&prompt))
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(result);
        });
    }

    fn poll_response(&mut self) {
        let Some(receiver) = &self.receiver else {
            return;
        };
        match receiver.try_recv() {
            Ok(Ok(reply)) => {
                info!(reply_len = reply.len(), "Draft generation finished");
                self.edited_reply = reply;
                self.step = DraftStep::Review;
                self.receiver = None;
            }
            Ok(Err(e)) => {
                error!("Draft generation failed: {}", e);
                self.error = Some(format!("Failed to generate content: {e}. Please try again."));
                self.step = DraftStep::Questions;
                self.receiver = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                error!("Draft worker thread exited without a reply");
                self.error = Some("The request was interrupted. Please try again.".to_string());
                self.step = DraftStep::Questions;
                self.receiver = None;
            }
        }
    }

    /// Show the wizard. Returns the section that was accepted this frame, if
    /// any, so the shell can surface a confirmation.
    pub fn show(&mut self, ctx: &Context, plan: &mut BusinessPlan) -> Option<SectionKind> {
        if !self.open {
            return None;
        }

        self.poll_response();
        if self.is_generating() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        let screen_rect = ctx.screen_rect();
        let window_width = (screen_rect.width() * 0.6).min(700.0);
        let window_height = screen_rect.height() * 0.8;

        let mut accepted = None;
        let mut open = self.open;
        let title = match self.section {
            Some(kind) => format!("Draft: {}", kind.title()),
            None => "Draft a Section".to_string(),
        };
        Window::new(title)
            .open(&mut open)
            .default_size([window_width, window_height])
            .resizable(true)
            .collapsible(false)
            .show(ctx, |ui| {
                accepted = self.ui_content(ui, plan);
            });
        self.open = open && accepted.is_none();

        accepted
    }

    fn ui_content(&mut self, ui: &mut Ui, plan: &mut BusinessPlan) -> Option<SectionKind> {
        if let Some(error) = &self.error {
            ui.colored_label(Color32::RED, error);
            ui.add_space(8.0);
        }

        let Some(kind) = self.section else {
            ui.label("Pick the section to draft:");
            ui.add_space(4.0);
            let mut chosen = None;
            for kind in SectionKind::ALL {
                if ui.button(kind.title()).clicked() {
                    chosen = Some(*kind);
                }
            }
            if let Some(kind) = chosen {
                self.select_section(kind);
            }
            return None;
        };

        match self.step {
            DraftStep::Questions => {
                self.show_questions(ui, kind);
                None
            }
            DraftStep::Generating => {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Generating content...").italics());
                });
                None
            }
            DraftStep::Review => self.show_review(ui, kind, plan),
        }
    }

    fn show_questions(&mut self, ui: &mut Ui, kind: SectionKind) {
        let questions = kind.questions();
        let idx = self.question_index.min(questions.len() - 1);
        let question = &questions[idx];
        let is_last = idx + 1 == questions.len();

        ui.label(
            RichText::new(format!("Question {} of {}", idx + 1, questions.len())).weak(),
        );
        ui.add_space(8.0);

        ui.label(RichText::new(question.question).strong());
        let answer = &mut self.answers[idx];
        if question.multiline {
            ui.add(
                egui::TextEdit::multiline(answer)
                    .hint_text(question.placeholder)
                    .desired_rows(4)
                    .desired_width(ui.available_width() - 8.0),
            );
        } else {
            ui.add(
                egui::TextEdit::singleline(answer)
                    .hint_text(question.placeholder)
                    .desired_width(ui.available_width() - 8.0),
            );
        }

        ui.add_space(4.0);
        ui.label(
            RichText::new("Be specific - better answers lead to better generated content.").weak(),
        );

        ui.add_space(8.0);
        let answered = !self.answers[idx].trim().is_empty();
        ui.horizontal(|ui| {
            if ui.add_enabled(idx > 0, egui::Button::new("Back")).clicked() {
                self.question_index = idx - 1;
            }
            if is_last {
                let generate = egui::Button::new(RichText::new("Generate").strong());
                if ui.add_enabled(answered, generate).clicked() {
                    self.generate();
                }
            } else if ui.add_enabled(answered, egui::Button::new("Next")).clicked() {
                self.question_index = idx + 1;
            }
            if ui.button("Choose Another Section").clicked() {
                self.section = None;
            }
        });
    }

    fn show_review(
        &mut self,
        ui: &mut Ui,
        kind: SectionKind,
        plan: &mut BusinessPlan,
    ) -> Option<SectionKind> {
        ui.label(
            RichText::new("Review and edit the generated content before accepting it.").weak(),
        );
        ui.add_space(8.0);

        ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height(ui.available_height() - 48.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.edited_reply)
                        .code_editor()
                        .desired_rows(18)
                        .desired_width(ui.available_width() - 8.0),
                );
            });

        ui.add_space(8.0);
        let mut accepted = None;
        ui.horizontal(|ui| {
            if ui.button(RichText::new("Accept").strong()).clicked() {
                match drafting::apply_draft(plan, kind, &self.edited_reply) {
                    Ok(()) => {
                        accepted = Some(kind);
                    }
                    Err(e) => {
                        error!("Rejected draft for {}: {}", kind.title(), e);
                        self.error = Some(format!("{e:#}"));
                    }
                }
            }
            if ui.button("🔄 Regenerate").clicked() {
                self.generate();
            }
            if ui.button("Back to Questions").clicked() {
                self.step = DraftStep::Questions;
                self.error = None;
            }
        });
        accepted
    }
}
