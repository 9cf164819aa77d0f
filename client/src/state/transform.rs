//! Workspace transformation state.
//!
//! DESIGN
//! ======
//! One value drives the whole workspace: the picked style and processing
//! engine, the local preview, the latest result, its variants and the
//! parameter panel. `transforming` and `applying` double as in-flight guards;
//! a `begin_*` call that returns `false` means a request is already running.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::net::api::ApiError;
use crate::net::types::{FilterParams, Processing, Style, TransformResult, Variants};
use crate::state::profile::ProfileStore;
use crate::state::toast::ToastKind;
use crate::util::storage::KeyValueStore;

/// The primary transformed image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultImage {
    /// Raw base64 PNG payload.
    pub base64: String,
    pub ai_used: bool,
    /// Style the image was produced with.
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransformState {
    pub style: Style,
    pub processing: Processing,
    pub params: FilterParams,
    /// `data:` URL of the selected file.
    pub preview: Option<String>,
    pub file_name: Option<String>,
    pub result: Option<ResultImage>,
    pub variants: Variants,
    pub parameters_visible: bool,
    pub placeholder_visible: bool,
    pub transforming: bool,
    pub applying: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            style: Style::default(),
            processing: Processing::default(),
            params: FilterParams::default(),
            preview: None,
            file_name: None,
            result: None,
            variants: Variants::default(),
            parameters_visible: false,
            placeholder_visible: true,
            transforming: false,
            applying: false,
        }
    }
}

impl TransformState {
    /// A new image was read: show it and hide every downstream panel.
    pub fn accept_upload(&mut self, file_name: String, preview: String) {
        self.file_name = Some(file_name);
        self.preview = Some(preview);
        self.result = None;
        self.variants.clear();
        self.parameters_visible = false;
        self.placeholder_visible = true;
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.preview.is_some()
    }

    #[must_use]
    pub fn variants_visible(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Mark a transform as started. Returns `false` if one is running.
    pub fn begin_transform(&mut self) -> bool {
        if self.transforming {
            return false;
        }
        self.transforming = true;
        self.placeholder_visible = false;
        true
    }

    /// Store a successful response produced with `style`.
    pub fn finish_transform(&mut self, style: Style, response: TransformResult) {
        self.transforming = false;
        self.result = Some(ResultImage { base64: response.image, ai_used: response.ai_used, style });
        self.variants = response.variants;
        self.parameters_visible = true;
        self.placeholder_visible = false;
    }

    pub fn fail_transform(&mut self) {
        self.transforming = false;
        self.placeholder_visible = true;
    }

    /// Mark a parameter re-apply as started. Returns `false` if one is
    /// running.
    pub fn begin_apply(&mut self) -> bool {
        if self.applying {
            return false;
        }
        self.applying = true;
        true
    }

    /// Replace the primary image only. Variants are left as they were.
    pub fn finish_apply(&mut self, style: Style, response: TransformResult) {
        self.applying = false;
        self.result = Some(ResultImage { base64: response.image, ai_used: response.ai_used, style });
    }

    pub fn fail_apply(&mut self) {
        self.applying = false;
    }

    /// Button caption for the transform action.
    #[must_use]
    pub fn transform_label(&self) -> String {
        if self.transforming { format!("Applying {} style...", self.style.as_str()) } else { "Apply".to_owned() }
    }

    /// Back to a blank workspace (logout). Picker selections survive.
    pub fn reset(&mut self) {
        *self = Self { style: self.style, processing: self.processing, ..Self::default() };
    }
}

/// Which request produced a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// First transformation of the uploaded image.
    Transform,
    /// Parameter re-apply on the same image.
    Apply,
}

/// Fold a finished `/transform` call into `state`.
///
/// `username` is the signed-in user at completion time; `None` means the
/// user logged out while the request was in flight and the result is
/// dropped without touching anything. Only a successful first transform is
/// counted in the user's statistics. Returns the toast to show, if any.
pub fn settle<S: KeyValueStore>(
    state: &mut TransformState,
    profiles: &ProfileStore<S>,
    username: Option<&str>,
    kind: RequestKind,
    style: Style,
    result: Result<TransformResult, ApiError>,
) -> Option<(ToastKind, String)> {
    username?;
    match (kind, result) {
        (RequestKind::Transform, Ok(response)) if response.success => {
            let ai_used = response.ai_used;
            state.finish_transform(style, response);
            profiles.record_transformation(username, style.as_str(), ai_used);
            Some((ToastKind::Success, completion_message(style, ai_used)))
        }
        (RequestKind::Apply, Ok(response)) if response.success => {
            state.finish_apply(style, response);
            Some((ToastKind::Success, "Parameters applied successfully!".to_owned()))
        }
        (RequestKind::Transform, Ok(_)) => {
            state.fail_transform();
            None
        }
        (RequestKind::Apply, Ok(_)) => {
            state.fail_apply();
            None
        }
        (RequestKind::Transform, Err(e)) => {
            state.fail_transform();
            Some((ToastKind::Error, format!("Transformation failed: {e}")))
        }
        (RequestKind::Apply, Err(e)) => {
            state.fail_apply();
            Some((ToastKind::Error, format!("Failed to apply parameters: {e}")))
        }
    }
}

/// Toast text for a completed transformation.
#[must_use]
pub fn completion_message(style: Style, ai_used: bool) -> String {
    let raw = style.as_str();
    let mut chars = raw.chars();
    let capitalized = chars.next().map(|c| c.to_ascii_uppercase().to_string() + chars.as_str()).unwrap_or_default();
    let engine = if ai_used { "AI" } else { "OpenCV" };
    format!("{capitalized} transformation completed with {engine}!")
}
