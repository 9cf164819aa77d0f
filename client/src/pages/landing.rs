//! Marketing landing section shown before sign-in.

use leptos::prelude::*;

use crate::net::types::Style;
use crate::state::ui::{AuthTab, UiState};

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <main class="landing">
            <header class="landing__hero">
                <h1>"Reframe"</h1>
                <p class="landing__tagline">"Turn any photo into a cartoon, sketch, watercolor or oil painting."</p>
                <div class="landing__cta">
                    <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.show_auth(AuthTab::Login))>
                        "Get Started"
                    </button>
                    <button class="btn" on:click=move |_| ui.update(|u| u.show_auth(AuthTab::Register))>
                        "Create Account"
                    </button>
                </div>
            </header>
            <section class="landing__styles" aria-label="Available styles">
                {Style::ALL
                    .into_iter()
                    .map(|style| view! { <div class="landing__style-card">{style.label()}</div> })
                    .collect_view()}
            </section>
            <section class="landing__features">
                <div class="landing__feature">
                    <h3>"AI or OpenCV"</h3>
                    <p>"Pick a neural model or fast classic filters for each transformation."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Variants"</h3>
                    <p>"Every result comes with alternate renderings to compare and download."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Fine-tune"</h3>
                    <p>"Adjust intensity, blur and edge threshold, then apply again."</p>
                </div>
            </section>
        </main>
    }
}
