//! Grid of alternate renderings returned with a transform.

use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::state::transform::TransformState;
use crate::state::viewer::{ViewerContent, ViewerState};
use crate::util::download::{self, DownloadSource};

/// One card per variant key. Hidden while the map is empty.
#[component]
pub fn VariantsPanel(transform: RwSignal<TransformState>) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let entries = move || {
        transform.with(|t| {
            let style = t.result.as_ref().map_or(t.style, |r| r.style);
            t.variants.iter().map(|(name, data)| (name.clone(), data.clone(), style)).collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || transform.with(TransformState::variants_visible)>
            <section class="variants-section" aria-label="Variants">
                <h3>"Variants"</h3>
                <div class="variants-grid" role="grid">
                    {move || {
                        entries()
                            .into_iter()
                            .map(|(name, data, style)| {
                                let title = download::humanize_variant(&name);
                                let src = download::data_url(&data);
                                let alt = format!("{name} variant");
                                let open = {
                                    let (name, data) = (name.clone(), data.clone());
                                    move || {
                                        let content = ViewerContent::for_variant(&name, &data, style, &download::now_timestamp());
                                        viewer.update(|v| v.open(content));
                                    }
                                };
                                let open_img = open.clone();
                                let on_download = {
                                    let (name, data) = (name.clone(), data.clone());
                                    move |_| {
                                        let filename = download::variant_filename(style, &name, &download::now_timestamp());
                                        download::save(&DownloadSource::Data { base64: data.clone(), filename }, toasts);
                                    }
                                };
                                view! {
                                    <div class="variant-item" role="gridcell">
                                        <div class="variant-header">
                                            <h4>{title}</h4>
                                            <div class="variant-actions">
                                                <button
                                                    class="action-btn"
                                                    title="Fullscreen"
                                                    aria-label={format!("View {name} in fullscreen")}
                                                    on:click=move |_| open()
                                                >
                                                    "⛶"
                                                </button>
                                                <button
                                                    class="action-btn download-btn"
                                                    title="Download"
                                                    aria-label={format!("Download {name}")}
                                                    on:click=on_download
                                                >
                                                    "⤓"
                                                </button>
                                            </div>
                                        </div>
                                        <div class="variant-wrapper">
                                            <img src=src alt=alt loading="lazy" on:click=move |_| open_img() />
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}
