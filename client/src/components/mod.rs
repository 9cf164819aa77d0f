//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workspace panels and overlays while reading/writing
//! shared state from Leptos context providers.

pub mod fullscreen_viewer;
pub mod parameter_panel;
pub mod security_modals;
pub mod toast_stack;
pub mod upload_panel;
pub mod variants_panel;
