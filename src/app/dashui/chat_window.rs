//! Ask AI window.
//!
//! A chat-style panel that answers free-form questions about the current
//! plan. Each question is sent with the full serialized document (see
//! [`crate::app::prompts`]) from a background thread; the frame loop polls a
//! channel for the reply so the UI stays responsive while a request is in
//! flight. One request at a time: the send controls are disabled while
//! waiting.

use crate::app::ai_client::AiClient;
use crate::app::plan::BusinessPlan;
use crate::app::prompts;
use chrono::{DateTime, Utc};
use egui::{Color32, Context, RichText, ScrollArea, Ui, Window};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info};

const FAILURE_MESSAGE: &str = "Sorry, I couldn't process your request. Please try again.";

const DEFAULT_MODEL_NAME: &str = "Gemini 2.5 Flash";

// Display name to model id, in menu order.
const MODEL_ID_MAP: &[(&str, &str)] = &[
    (DEFAULT_MODEL_NAME, "gemini-2.5-flash"),
    ("Gemini 2.5 Pro", "gemini-2.5-pro"),
    ("Gemini 2.0 Flash", "gemini-2.0-flash"),
];

fn model_id_for(display_name: &str) -> &'static str {
    MODEL_ID_MAP
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, id)| *id)
        .unwrap_or(MODEL_ID_MAP[0].1)
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatStatus {
    Idle,
    Loading,
    Error(String),
}

pub struct AskAiWindow {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub status: ChatStatus,
    pub selected_model: String,
    scrolled_to_bottom: bool,
    markdown_cache: CommonMarkCache,
    receiver: Option<mpsc::Receiver<Result<String, String>>>,
}

impl Default for AskAiWindow {
    fn default() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage {
                role: "assistant".to_string(),
                content: "Hello! Ask me anything about your business plan. I can see every \
                          section of the current document."
                    .to_string(),
                timestamp: Utc::now(),
            }],
            input_text: String::new(),
            status: ChatStatus::Idle,
            selected_model: DEFAULT_MODEL_NAME.to_string(),
            scrolled_to_bottom: false,
            markdown_cache: CommonMarkCache::default(),
            receiver: None,
        }
    }
}

impl AskAiWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.scrolled_to_bottom = false;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ChatStatus::Loading
    }

    /// Send the current input. Empty or whitespace-only input is ignored, as
    /// is a send while a request is already in flight.
    fn send_message(&mut self, plan: &BusinessPlan) {
        let query = self.input_text.trim().to_string();
        if query.is_empty() || self.is_loading() {
            return;
        }
        self.input_text.clear();
        self.ask(plan, query);
    }

    fn ask(&mut self, plan: &BusinessPlan, query: String) {
        self.messages.push(ChatMessage {
            role: "user".to_string(),
            content: query.clone(),
            timestamp: Utc::now(),
        });

        let prompt = match prompts::ask_ai_prompt(plan, &query) {
            Ok(prompt) => prompt,
            Err(e) => {
                error!("Failed to build Ask AI prompt: {}", e);
                self.push_failure(e.to_string());
                return;
            }
        };

        let model_id = model_id_for(&self.selected_model).to_string();
        info!(
            model = %model_id,
            prompt_len = prompt.len(),
            "Sending Ask AI request"
        );
        self.status = ChatStatus::Loading;

        let (tx, rx) = mpsc::channel();
        self.receiver = Some(rx);
        std::thread::spawn(move || {
            let result = AiClient::from_env()
                .map(|client| client.with_model(model_id))
                .and_then(|client| client.generate(&prompt))
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(result);
        });
    }

    /// Check for a finished background request. Called once per frame.
    fn poll_response(&mut self) {
        let Some(receiver) = &self.receiver else {
            return;
        };
        match receiver.try_recv() {
            Ok(Ok(reply)) => {
                info!("Ask AI reply received, length: {}", reply.len());
                self.messages.push(ChatMessage {
                    role: "assistant".to_string(),
                    content: reply,
                    timestamp: Utc::now(),
                });
                self.status = ChatStatus::Idle;
                self.receiver = None;
            }
            Ok(Err(e)) => {
                error!("Ask AI request failed: {}", e);
                self.push_failure(e);
                self.receiver = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                error!("Ask AI worker thread exited without a reply");
                self.push_failure("The request was interrupted".to_string());
                self.receiver = None;
            }
        }
    }

    fn push_failure(&mut self, detail: String) {
        self.messages.push(ChatMessage {
            role: "system".to_string(),
            content: FAILURE_MESSAGE.to_string(),
            timestamp: Utc::now(),
        });
        self.status = ChatStatus::Error(detail);
    }

    pub fn show(&mut self, ctx: &Context, plan: &BusinessPlan) {
        if !self.open {
            return;
        }

        self.poll_response();
        if self.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        let screen_rect = ctx.screen_rect();
        let chat_width = 420.0;
        let chat_height = screen_rect.height() * 0.85;

        let mut open = self.open;
        Window::new("Ask AI")
            .open(&mut open)
            .movable(true)
            .default_size([chat_width, chat_height])
            .min_width(360.0)
            .max_width(640.0)
            .min_height(400.0)
            .max_height(screen_rect.height() * 0.95)
            .order(egui::Order::Foreground)
            .resizable(true)
            .show(ctx, |ui| {
                self.ui_content(ui, plan);
            });
        self.open = open;
    }

    fn ui_content(&mut self, ui: &mut Ui, plan: &BusinessPlan) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label("Model:");
                egui::ComboBox::from_id_salt("ask_ai_model")
                    .selected_text(&self.selected_model)
                    .show_ui(ui, |ui| {
                        for (name, _) in MODEL_ID_MAP {
                            ui.selectable_value(
                                &mut self.selected_model,
                                name.to_string(),
                                *name,
                            );
                        }
                    });
            });
            ui.separator();

            let input_area_height = 70.0;
            let max_scroll_height = (ui.available_height() - input_area_height).min(500.0);

            ScrollArea::vertical()
                .auto_shrink([false, true])
                .max_height(max_scroll_height)
                .stick_to_bottom(!self.scrolled_to_bottom)
                .id_salt("ask_ai_scroll_area")
                .show(ui, |ui| {
                    let available_width = ui.available_width();
                    ui.set_max_width(available_width);
                    self.render_messages(ui);
                });

            // One-click starter questions until the user has asked something.
            if self.messages.iter().all(|m| m.role != "user") {
                ui.add_space(4.0);
                ui.label(RichText::new("Try asking:").weak());
                for suggestion in prompts::STARTER_QUESTIONS {
                    if ui.button(*suggestion).clicked() && !self.is_loading() {
                        self.ask(plan, suggestion.to_string());
                    }
                }
            }

            match &self.status {
                ChatStatus::Idle => {}
                ChatStatus::Loading => {
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Waiting for response...").italics());
                    });
                }
                ChatStatus::Error(err) => {
                    ui.add_space(4.0);
                    ui.colored_label(Color32::RED, RichText::new(err).strong());
                }
            }

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let frame = egui::Frame::new()
                    .fill(ui.visuals().extreme_bg_color)
                    .inner_margin(egui::vec2(8.0, 6.0))
                    .corner_radius(2.0);

                let mut send_requested = false;
                frame.show(ui, |ui| {
                    let text_width = ui.available_width().min(380.0);
                    let is_loading = self.is_loading();
                    let text_edit = egui::TextEdit::multiline(&mut self.input_text)
                        .hint_text("Ask about your plan...")
                        .desired_width(text_width)
                        .min_size(egui::vec2(text_width, 36.0));

                    let response = ui.add_enabled(!is_loading, text_edit);

                    if !self.scrolled_to_bottom {
                        response.request_focus();
                        self.scrolled_to_bottom = true;
                    }

                    if response.has_focus() {
                        // The editor has already inserted this Enter as a
                        // newline; send_message trims it off with the rest of
                        // the surrounding whitespace.
                        let enter = ui
                            .ctx()
                            .input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
                        if enter {
                            send_requested = true;
                        }
                    }
                });

                ui.add_space(4.0);

                let send_button = egui::Button::new(RichText::new("Send").strong())
                    .min_size(egui::vec2(60.0, 36.0))
                    .fill(ui.visuals().selection.bg_fill);
                if ui.add_enabled(!self.is_loading(), send_button).clicked() {
                    send_requested = true;
                }

                if send_requested {
                    self.send_message(plan);
                }
            });
        });
    }

    fn render_messages(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);

        // Split borrows: the cache is mutated while messages are read.
        let messages = std::mem::take(&mut self.messages);
        for message in &messages {
            match message.role.as_str() {
                "user" => {
                    ui.with_layout(egui::Layout::top_down(egui::Align::RIGHT), |ui| {
                        let fill = ui.visuals().selection.bg_fill;
                        self.render_bubble(ui, message, fill, true);
                    });
                }
                "system" => {
                    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                        self.render_bubble(ui, message, Color32::from_rgb(180, 0, 0), false);
                    });
                }
                _ => {
                    let fill = ui.visuals().widgets.noninteractive.bg_fill;
                    self.render_bubble(ui, message, fill, false);
                }
            }
            ui.add_space(12.0);
        }
        self.messages = messages;

        ui.add_space(8.0);
    }

    fn render_bubble(&mut self, ui: &mut Ui, message: &ChatMessage, fill: Color32, plain: bool) {
        let max_width = ui.available_width() * 0.85;

        egui::Frame::default()
            .fill(fill)
            .inner_margin(egui::vec2(10.0, 8.0))
            .corner_radius(2.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);

                let time = message.timestamp.format("%H:%M:%S").to_string();
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&message.role).strong().size(10.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(time).small().weak());
                    });
                });
                ui.add_space(4.0);

                if plain {
                    ui.label(&message.content);
                } else {
                    // Assistant replies come back as Markdown.
                    CommonMarkViewer::new().show(ui, &mut self.markdown_cache, &message.content);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_input_sends_nothing() {
        let mut window = AskAiWindow::new();
        window.input_text = "   \n".to_string();
        let before = window.messages.len();
        window.send_message(&BusinessPlan::default());
        assert_eq!(window.messages.len(), before);
        assert_eq!(window.status, ChatStatus::Idle);
        assert!(window.receiver.is_none());
    }

    #[test]
    fn enter_newline_is_trimmed_before_sending() {
        let mut window = AskAiWindow::new();
        window.input_text = "What is my runway?\n".to_string();
        window.send_message(&BusinessPlan::default());
        let last = window.messages.last().unwrap();
        assert_eq!(last.role, "user");
        assert_eq!(last.content, "What is my runway?");
        assert!(window.input_text.is_empty());
    }

    #[test]
    fn sending_borrows_the_plan_without_taking_ownership() {
        let plan = BusinessPlan::default();
        let mut window = AskAiWindow::new();
        window.input_text = "Summarize the plan".to_string();
        window.send_message(&plan);
        assert_eq!(window.messages.last().unwrap().role, "user");
        assert!(window.is_loading());
        // The caller still owns and can read the document afterwards.
        assert!(!plan.company_name.is_empty());
    }

    #[test]
    fn model_names_map_to_ids() {
        assert_eq!(model_id_for(DEFAULT_MODEL_NAME), "gemini-2.5-flash");
        assert_eq!(model_id_for("Gemini 2.5 Pro"), "gemini-2.5-pro");
        // Unknown display names fall back to the default model.
        assert_eq!(model_id_for("not a model"), "gemini-2.5-flash");
    }
}
