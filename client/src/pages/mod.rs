//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen's orchestration and delegates rendering details
//! to `components`. The root route switches between landing, auth, workspace
//! and dashboard in place; `/payment` is a route of its own.

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod payment;
pub mod workspace;
