//! Desktop user interface for PlanBoard.
//!
//! The UI is built from egui windows and collapsible section editors. The
//! shell ([`app::PlanBoardApp`]) owns the plan document and a global edit
//! flag; each section editor renders one region of the plan and reports
//! back when the user asks to draft that section with AI.
//!
//! # Components
//!
//! ## Section Editors
//! One module per plan section, each exposing a `show` function that takes
//! the edit flag and a mutable borrow of its slice of the document:
//! [`executive_section`], [`opportunity_section`], [`solution_section`],
//! [`business_section`], [`gtm_section`], [`financial_section`],
//! [`roadmap_section`], and [`risks_section`] (risks plus success factors).
//! Shared field widgets live in [`editable`].
//!
//! ## Windows
//! - [`chat_window::AskAiWindow`] - chat about the current plan
//! - [`drafting_window::DraftingWindow`] - guided per-section drafting
//! - [`plan_file_picker::PlanFilePicker`] - fuzzy-search import picker
//! - [`save_plan_window::SavePlanWindow`] - export destination dialog
//! - [`help_window::HelpWindow`] - usage notes
//!
//! ## Theme Support
//! Latte, Frappe, Macchiato, and Mocha color schemes via Catppuccin, chosen
//! from the menu bar and persisted across sessions.

pub mod app;
pub mod business_section;
pub mod chat_window;
pub mod drafting_window;
pub mod editable;
pub mod executive_section;
pub mod financial_section;
pub mod gtm_section;
pub mod help_window;
pub mod menu;
pub mod opportunity_section;
pub mod plan_file_picker;
pub mod risks_section;
pub mod roadmap_section;
pub mod save_plan_window;
pub mod solution_section;

pub use app::PlanBoardApp;
