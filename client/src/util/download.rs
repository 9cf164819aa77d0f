//! Image download helpers: file naming and the anchor-click download.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the result card, variant thumbnails and the fullscreen viewer.
//! Naming is pure; the download itself is hydrate-only and no-ops elsewhere.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use leptos::prelude::*;

use crate::net::types::Style;
use crate::state::toast::{ToastKind, ToastState, notify};

/// Where a download takes its bytes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadSource {
    /// Raw base64 PNG payload returned by the backend.
    Data { base64: String, filename: String },
    /// An existing URL (e.g. the local preview data URL).
    Url { href: String, filename: String },
}

impl DownloadSource {
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Data { base64, .. } => data_url(base64),
            Self::Url { href, .. } => href.clone(),
        }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Data { filename, .. } | Self::Url { filename, .. } => filename,
        }
    }
}

/// `data:` URL for a base64 PNG payload.
#[must_use]
pub fn data_url(base64: &str) -> String {
    format!("data:image/png;base64,{base64}")
}

/// Compact an ISO-8601 timestamp to `YYYYMMDDTHHMMSS`.
#[must_use]
pub fn compact_timestamp(iso: &str) -> String {
    iso.chars().take(19).filter(|c| *c != '-' && *c != ':').collect()
}

#[must_use]
pub fn original_filename(timestamp: &str) -> String {
    format!("original_{timestamp}.png")
}

#[must_use]
pub fn result_filename(style: Style, timestamp: &str) -> String {
    format!("reframe_{}_{timestamp}.png", style.as_str())
}

#[must_use]
pub fn variant_filename(style: Style, variant: &str, timestamp: &str) -> String {
    format!("reframe_{}_{variant}_{timestamp}.png", style.as_str())
}

/// Display form of a variant key: a space before each uppercase letter.
#[must_use]
pub fn humanize_variant(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_owned()
}

/// Current time as a compact timestamp; empty outside the browser.
#[must_use]
pub fn now_timestamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        compact_timestamp(&iso)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Save `source` through a temporary `<a download>` element.
/// Returns `true` when the click was dispatched.
pub fn trigger(source: &DownloadSource) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(body) = document.body() else {
            return false;
        };
        let Ok(anchor) = document
            .create_element("a")
            .map_err(|_| ())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().map_err(|_| ()))
        else {
            return false;
        };
        anchor.set_href(&source.href());
        anchor.set_download(source.filename());
        if body.append_child(&anchor).is_err() {
            return false;
        }
        anchor.click();
        anchor.remove();
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = source;
        false
    }
}

/// [`trigger`] followed by the confirmation toast.
pub fn save(source: &DownloadSource, toasts: RwSignal<ToastState>) {
    if trigger(source) {
        notify(toasts, ToastKind::Success, "Image downloaded successfully!");
    }
}
