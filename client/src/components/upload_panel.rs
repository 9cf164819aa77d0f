//! Image picker: file input, drag-and-drop target and keyboard activation.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::toast::ToastState;
use crate::state::transform::TransformState;

#[component]
pub fn UploadPanel(transform: RwSignal<TransformState>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let drag_over = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                accept_file(file, transform, session, toasts);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, session, toasts);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        #[cfg(feature = "hydrate")]
        if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
            accept_file(file, transform, session, toasts);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" || ev.key() == " " {
            ev.prevent_default();
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    view! {
        <section class="upload-section">
            <input
                node_ref=input_ref
                id="file-input"
                class="file-input"
                type="file"
                accept="image/*"
                on:change=on_change
            />
            <label
                for="file-input"
                tabindex="0"
                role="button"
                class=move || if drag_over.get() { "file-upload-label drag-over" } else { "file-upload-label" }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(true);
                }
                on:dragleave=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(false);
                }
                on:drop=on_drop
                on:keydown=on_keydown
            >
                <span class="file-upload-label__title">"Drop an image here or click to browse"</span>
                <span class="file-upload-label__hint">"PNG, JPG or JPEG, up to 10MB"</span>
            </label>
            <span class="file-name">{move || transform.with(|t| t.file_name.clone().unwrap_or_default())}</span>
        </section>
    }
}

/// Validate, stash and preview a picked file. Rejected files leave all state
/// untouched.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn accept_file(
    file: web_sys::File,
    transform: RwSignal<TransformState>,
    session: RwSignal<Session>,
    toasts: RwSignal<ToastState>,
) {
    use crate::state::session::PendingFile;
    use crate::state::toast::{ToastKind, notify};
    use crate::util::upload;

    let name = file.name();
    let media_type = file.type_();
    let size = file.size() as u64;
    if let Err(message) = upload::validate_upload(&media_type, size) {
        notify(toasts, ToastKind::Error, message);
        return;
    }

    let issued_to = session.with_untracked(|s| s.token.clone());
    leptos::task::spawn_local(async move {
        match upload::read_data_url(&file).await {
            Ok(preview) => {
                let pending = PendingFile { name: name.clone(), media_type, size };
                let accepted = session
                    .try_update(|s| s.accept_pending_file(issued_to.as_deref(), pending))
                    .unwrap_or(false);
                if !accepted {
                    return;
                }
                upload::set_pending_file(file);
                transform.update(|t| t.accept_upload(name.clone(), preview));
                notify(toasts, ToastKind::Success, format!("Image loaded: {name}"));
            }
            Err(e) => {
                log::warn!("reading {name} failed: {e}");
                notify(toasts, ToastKind::Error, e);
            }
        }
    });
}
