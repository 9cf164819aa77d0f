//! Filter sliders shown after the first successful transform.

use leptos::prelude::*;

use crate::state::transform::TransformState;

#[component]
pub fn ParameterPanel(transform: RwSignal<TransformState>, on_apply: Callback<()>) -> impl IntoView {
    let intensity = move || format!("{:.1}", transform.with(|t| t.params.intensity));
    let blur = move || transform.with(|t| t.params.blur).to_string();
    let edge = move || transform.with(|t| t.params.edge_threshold).to_string();

    let on_intensity = move |ev| {
        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
            transform.update(|t| t.params.intensity = v);
        }
    };
    let on_blur = move |ev| {
        if let Ok(v) = event_target_value(&ev).parse::<u32>() {
            transform.update(|t| t.params.blur = v);
        }
    };
    let on_edge = move |ev| {
        if let Ok(v) = event_target_value(&ev).parse::<u32>() {
            transform.update(|t| t.params.edge_threshold = v);
        }
    };

    view! {
        <Show when=move || transform.with(|t| t.parameters_visible)>
            <section class="filter-parameters" aria-label="Filter parameters">
                <h3>"Fine-tune"</h3>
                <label class="parameter">
                    <span>"Intensity"</span>
                    <input type="range" min="0.1" max="2.0" step="0.1" prop:value=intensity on:input=on_intensity />
                    <span class="parameter__value">{intensity}</span>
                </label>
                <label class="parameter">
                    <span>"Blur"</span>
                    <input type="range" min="1" max="15" step="2" prop:value=blur on:input=on_blur />
                    <span class="parameter__value">{blur}</span>
                </label>
                <label class="parameter">
                    <span>"Edge threshold"</span>
                    <input type="range" min="50" max="200" step="10" prop:value=edge on:input=on_edge />
                    <span class="parameter__value">{edge}</span>
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || transform.with(|t| t.applying)
                    on:click=move |_| on_apply.run(())
                >
                    {move || if transform.with(|t| t.applying) { "Applying..." } else { "Apply changes" }}
                </button>
            </section>
        </Show>
    }
}
