//! Fullscreen image viewer state.
//!
//! DESIGN
//! ======
//! Two states only. Opening while already open replaces the content in place;
//! the sole way out of `Open` is an explicit close.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::types::Style;
use crate::util::download::{self, DownloadSource};

/// What the viewer displays and what its download button saves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerContent {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub download: DownloadSource,
}

impl ViewerContent {
    /// Content for an on-page image. `base64` is the raw payload when the
    /// image came from the backend; otherwise the download uses `src`.
    #[must_use]
    pub fn for_image(src: String, alt: String, title: String, base64: Option<String>, filename: String) -> Self {
        let download = match base64 {
            Some(data) if !data.is_empty() => DownloadSource::Data { base64: data, filename },
            _ => DownloadSource::Url { href: src.clone(), filename },
        };
        Self { src, alt, title, download }
    }

    /// Content for a variant thumbnail given its name and base64 payload.
    #[must_use]
    pub fn for_variant(name: &str, base64: &str, style: Style, timestamp: &str) -> Self {
        Self {
            src: download::data_url(base64),
            alt: format!("{name} variant"),
            title: format!("{} Variant", download::humanize_variant(name)),
            download: DownloadSource::Data {
                base64: base64.to_owned(),
                filename: download::variant_filename(style, name, timestamp),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open(ViewerContent),
}

impl ViewerState {
    pub fn open(&mut self, content: ViewerContent) {
        *self = Self::Open(content);
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn content(&self) -> Option<&ViewerContent> {
        match self {
            Self::Open(content) => Some(content),
            Self::Closed => None,
        }
    }
}
