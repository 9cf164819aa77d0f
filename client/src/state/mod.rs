//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `transform`, `toast`, `viewer`, `ui`)
//! so each component depends on a small focused model provided via context.
//! `profile` is the exception: it is not reactive and reads/writes browser
//! local storage on demand.

pub mod profile;
pub mod session;
pub mod toast;
pub mod transform;
pub mod ui;
pub mod viewer;
