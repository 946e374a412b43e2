//! PlanBoard - Business Plan Editor
//!
//! PlanBoard is a desktop application for writing and refining an investor
//! business plan. The whole plan is one structured document, edited in place
//! through collapsible section editors and serialized to JSON for durable
//! import/export.
//!
//! # Core Features
//!
//! - **Sectioned Editing**: Collapsible editors for every plan section with a
//!   single edit/view toggle
//! - **Structured Lists**: Add, edit, and remove rows in every list-typed
//!   field (problems, segments, pricing tiers, risks, ...)
//! - **JSON Import/Export**: The full document round-trips through
//!   pretty-printed JSON with a fixed camelCase format
//! - **Ask AI**: A chat panel that answers questions with the full current
//!   plan as context
//! - **Guided Drafting**: A per-section questionnaire wizard that generates
//!   a draft, lets the user review and edit it, and validates the result
//!   against the section's structure before merging
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui-based desktop interface
//! - **Document Model** ([`app::plan`]): the typed plan tree and its
//!   persistence
//! - **AI Integration** ([`app::ai_client`], [`app::prompts`],
//!   [`app::drafting`]): prompt assembly, the HTTP client, and draft
//!   validation
//!
//! The main entry point is [`PlanBoardApp`], which owns the document and
//! coordinates the windows.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::PlanBoardApp;
