//! Fullscreen image modal driven by `ViewerState`.
//!
//! While open, page scroll is suspended and a window-level Escape listener is
//! installed. Both are undone when the viewer closes.

use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::state::viewer::ViewerState;
use crate::util::{dom, download};

#[component]
pub fn FullscreenViewer() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    Effect::new(move |was_open: Option<bool>| {
        let open = viewer.with(ViewerState::is_open);
        if open {
            let handle = window_event_listener(leptos::ev::keydown, move |ev| {
                if ev.key() == "Escape" {
                    viewer.update(ViewerState::close);
                }
            });
            on_cleanup(move || handle.remove());
        }
        if was_open.unwrap_or(false) != open {
            dom::lock_page_scroll(open);
        }
        open
    });

    let close = move || viewer.update(ViewerState::close);
    let on_download = move |_| {
        if let Some(content) = viewer.with_untracked(|v| v.content().cloned()) {
            download::save(&content.download, toasts);
        }
    };

    view! {
        <Show when=move || viewer.with(ViewerState::is_open)>
            <div
                class="fullscreen-modal"
                role="dialog"
                aria-modal="true"
                on:click=move |_| close()
            >
                <div class="fullscreen-modal__content" on:click=move |ev| ev.stop_propagation()>
                    <div class="fullscreen-modal__header">
                        <h3 class="fullscreen-modal__title">
                            {move || viewer.with(|v| v.content().map(|c| c.title.clone()).unwrap_or_default())}
                        </h3>
                        <div class="fullscreen-modal__actions">
                            <button class="action-btn" title="Download" on:click=on_download>
                                "Download"
                            </button>
                            <button class="action-btn" title="Close" on:click=move |_| close()>
                                "✕"
                            </button>
                        </div>
                    </div>
                    <img
                        class="fullscreen-modal__image"
                        src=move || viewer.with(|v| v.content().map(|c| c.src.clone()).unwrap_or_default())
                        alt=move || viewer.with(|v| v.content().map(|c| c.alt.clone()).unwrap_or_default())
                    />
                </div>
            </div>
        </Show>
    }
}
