//! Main transformation workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Upload -> pick style and engine -> transform -> inspect result and
//! variants -> optionally fine-tune and re-apply. All request state lives in
//! the shared `TransformState`, whose busy flags gate duplicate submissions.

use leptos::prelude::*;

use crate::components::parameter_panel::ParameterPanel;
use crate::components::upload_panel::UploadPanel;
use crate::components::variants_panel::VariantsPanel;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{Processing, Style, TransformResult};
use crate::state::profile::ProfileStore;
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::state::transform::{self, RequestKind, TransformState};
use crate::state::ui::{AuthTab, Page, UiState};
use crate::state::viewer::{ViewerContent, ViewerState};
use crate::util::{download, upload};

/// Sign-out action shared by the workspace and dashboard headers.
#[derive(Clone, Copy)]
pub(crate) struct Logout {
    session: RwSignal<Session>,
    transform: RwSignal<TransformState>,
    viewer: RwSignal<ViewerState>,
    ui: RwSignal<UiState>,
    toasts: RwSignal<ToastState>,
}

impl Logout {
    pub(crate) fn from_context() -> Self {
        Self {
            session: expect_context::<RwSignal<Session>>(),
            transform: expect_context::<RwSignal<TransformState>>(),
            viewer: expect_context::<RwSignal<ViewerState>>(),
            ui: expect_context::<RwSignal<UiState>>(),
            toasts: expect_context::<RwSignal<ToastState>>(),
        }
    }

    /// Forget identity and upload, hide every result panel and return to the
    /// login tab.
    pub(crate) fn run(self) {
        self.session.update(Session::sign_out);
        upload::clear_pending_file();
        self.transform.update(TransformState::reset);
        self.viewer.update(ViewerState::close);
        notify(self.toasts, ToastKind::Success, "Logged out successfully");
        self.ui.update(|u| u.show_auth(AuthTab::Login));
    }
}

/// Load the signed-in user's stored defaults into the pickers.
fn apply_user_preferences(session: RwSignal<Session>, transform: RwSignal<TransformState>) {
    let Some(username) = session.get_untracked().username else {
        return;
    };
    let Some(prefs) = ProfileStore::browser().load_preferences(&username) else {
        return;
    };
    transform.update(|t| {
        if let Some(processing) = prefs.processing() {
            t.processing = processing;
        }
        if let Some(style) = prefs.style() {
            t.style = style;
        }
    });
}

/// Apply a finished request to the workspace and show its toast. Results
/// arriving after logout are dropped.
fn settle_request(
    session: RwSignal<Session>,
    transform: RwSignal<TransformState>,
    toasts: RwSignal<ToastState>,
    kind: RequestKind,
    style: Style,
    result: Result<TransformResult, ApiError>,
) {
    let username = session.with_untracked(|s| s.is_signed_in().then(|| s.display_name()));
    if username.is_none() {
        return;
    }
    let profiles = ProfileStore::browser();
    let notice = transform.try_update(|t| transform::settle(t, &profiles, username.as_deref(), kind, style, result)).flatten();
    if let Some((toast_kind, message)) = notice {
        notify(toasts, toast_kind, message);
    }
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let transform = expect_context::<RwSignal<TransformState>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let logout = Logout::from_context();

    apply_user_preferences(session, transform);

    let on_transform = move |_| {
        if !session.with_untracked(Session::has_pending_file) {
            return notify(toasts, ToastKind::Error, "Please select an image first");
        }
        if !transform.try_update(TransformState::begin_transform).unwrap_or(false) {
            return;
        }
        let (style, processing) = transform.with_untracked(|t| (t.style, t.processing));
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(session, toasts).transform(style, processing, None).await;
            settle_request(session, transform, toasts, RequestKind::Transform, style, result);
        });
    };

    let on_apply = Callback::new(move |()| {
        if !session.with_untracked(Session::has_pending_file) {
            return notify(toasts, ToastKind::Error, "No image to apply changes to");
        }
        if !transform.try_update(TransformState::begin_apply).unwrap_or(false) {
            return;
        }
        let (style, processing, params) = transform.with_untracked(|t| (t.style, t.processing, t.params));
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(session, toasts).transform(style, processing, Some(params)).await;
            settle_request(session, transform, toasts, RequestKind::Apply, style, result);
        });
    });

    let original_content = move || {
        let src = transform.with_untracked(|t| t.preview.clone())?;
        let filename = download::original_filename(&download::now_timestamp());
        Some(ViewerContent::for_image(src, "Original image".to_owned(), "Original Image".to_owned(), None, filename))
    };
    let result_content = move || {
        let result = transform.with_untracked(|t| t.result.clone())?;
        let filename = download::result_filename(result.style, &download::now_timestamp());
        Some(ViewerContent::for_image(
            download::data_url(&result.base64),
            "Transformed image".to_owned(),
            "Transformed Image".to_owned(),
            Some(result.base64),
            filename,
        ))
    };
    let open_viewer = move |content: Option<ViewerContent>| {
        if let Some(content) = content {
            viewer.update(|v| v.open(content));
        }
    };
    let save = move |content: Option<ViewerContent>| {
        if let Some(content) = content {
            download::save(&content.download, toasts);
        }
    };

    let username = move || session.with(Session::display_name);
    let show_result = move || transform.with(|t| t.result.is_some() && !t.placeholder_visible && !t.transforming);

    view! {
        <main class="workspace">
            <header class="workspace__header">
                <h1>"Reframe"</h1>
                <div class="workspace__user">
                    <button class="btn" title="Open dashboard" on:click=move |_| ui.update(|u| u.show(Page::Dashboard))>
                        {username}
                    </button>
                    <button class="btn" on:click=move |_| logout.run()>"Logout"</button>
                </div>
            </header>

            <UploadPanel transform=transform />

            <section class="controls" aria-label="Transformation options">
                <fieldset class="style-picker">
                    <legend>"Style"</legend>
                    {Style::ALL
                        .into_iter()
                        .map(|style| {
                            view! {
                                <label class="style-option">
                                    <input
                                        type="radio"
                                        name="style"
                                        value=style.as_str()
                                        prop:checked=move || transform.with(|t| t.style == style)
                                        on:change=move |_| transform.update(|t| t.style = style)
                                    />
                                    <span>{style.label()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <fieldset class="processing-picker">
                    <legend>"Processing"</legend>
                    {[(Processing::Ai, "AI"), (Processing::Opencv, "OpenCV")]
                        .into_iter()
                        .map(|(processing, label)| {
                            view! {
                                <label class="processing-option">
                                    <input
                                        type="radio"
                                        name="processing"
                                        value=processing.as_str()
                                        prop:checked=move || transform.with(|t| t.processing == processing)
                                        on:change=move |_| transform.update(|t| t.processing = processing)
                                    />
                                    <span>{label}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <button
                    class="btn btn--primary transform-btn"
                    disabled=move || transform.with(|t| t.transforming)
                    on:click=on_transform
                >
                    <span>{move || transform.with(TransformState::transform_label)}</span>
                    <Show when=move || transform.with(|t| t.transforming)>
                        <span class="spinner" aria-hidden="true"></span>
                    </Show>
                </button>
            </section>

            <Show when=move || transform.with(TransformState::has_image)>
                <section class="results-section">
                    <div class="image-card">
                        <div class="image-card__header">
                            <h3>"Original"</h3>
                            <div class="image-card__actions">
                                <button class="action-btn" title="Fullscreen" on:click=move |_| open_viewer(original_content())>
                                    "⛶"
                                </button>
                                <button class="action-btn" title="Download" on:click=move |_| save(original_content())>
                                    "⤓"
                                </button>
                            </div>
                        </div>
                        <img
                            class="image-card__image"
                            alt="Original image"
                            src=move || transform.with(|t| t.preview.clone().unwrap_or_default())
                            on:click=move |_| open_viewer(original_content())
                        />
                    </div>
                    <div class="image-card">
                        <div class="image-card__header">
                            <h3>"Result"</h3>
                            <Show when=show_result>
                                <div class="image-card__actions">
                                    <button class="action-btn" title="Fullscreen" on:click=move |_| open_viewer(result_content())>
                                        "⛶"
                                    </button>
                                    <button class="action-btn" title="Download" on:click=move |_| save(result_content())>
                                        "⤓"
                                    </button>
                                </div>
                            </Show>
                        </div>
                        <Show when=move || transform.with(|t| t.placeholder_visible)>
                            <div class="result-placeholder">"Your transformed image will appear here"</div>
                        </Show>
                        <Show when=move || transform.with(|t| t.transforming)>
                            <div class="result-loading">
                                <span class="spinner" aria-hidden="true"></span>
                            </div>
                        </Show>
                        <Show when=show_result>
                            <img
                                class="image-card__image"
                                alt="Transformed image"
                                src=move || {
                                    transform.with(|t| t.result.as_ref().map(|r| download::data_url(&r.base64)).unwrap_or_default())
                                }
                                on:click=move |_| open_viewer(result_content())
                            />
                        </Show>
                    </div>
                </section>
            </Show>

            <VariantsPanel transform=transform />
            <ParameterPanel transform=transform on_apply=on_apply />
        </main>
    }
}
