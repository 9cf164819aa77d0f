//! Networking modules for the transformation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend call (prefix, bearer token, rate-limit redirect)
//! and `types` defines the JSON wire schema.

pub mod api;
pub mod types;
