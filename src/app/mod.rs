//! Core application modules for PlanBoard.
//!
//! # Module Organization
//!
//! ## Document Model
//! - [`plan`] - the business plan document tree, its list operations, and
//!   JSON persistence
//!
//! ## AI Integration
//! - [`ai_client`] - blocking HTTP client for the text-generation API
//! - [`prompts`] - Ask AI prompt assembly and supplementary notes
//! - [`drafting`] - per-section questionnaires, generation prompts, and
//!   strict validation of generated drafts
//!
//! ## UI
//! - [`dashui`] - complete user interface implementation with window
//!   management
//!
//! # Architecture
//!
//! The layering is strict in one direction: [`dashui`] calls into the other
//! modules, never the reverse. [`plan`] has no knowledge of the AI modules;
//! [`drafting`] is the only module that writes AI output into the document,
//! and it does so only through typed deserialization.

pub mod ai_client;
pub mod dashui;
pub mod drafting;
pub mod plan;
pub mod prompts;

pub use dashui::app::PlanBoardApp;
