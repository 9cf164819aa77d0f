//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::fullscreen_viewer::FullscreenViewer;
use crate::components::toast_stack::ToastStack;
use crate::pages::auth::AuthPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::payment::PaymentPage;
use crate::pages::workspace::WorkspacePage;
use crate::state::session::Session;
use crate::state::toast::ToastState;
use crate::state::transform::TransformState;
use crate::state::ui::{Page, UiState};
use crate::state::viewer::ViewerState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let ui = RwSignal::new(UiState::default());
    let transform = RwSignal::new(TransformState::default());
    let toasts = RwSignal::new(ToastState::default());
    let viewer = RwSignal::new(ViewerState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(transform);
    provide_context(toasts);
    provide_context(viewer);

    view! {
        <Stylesheet id="leptos" href="/pkg/reframe.css"/>
        <Title text="Reframe"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PageSwitch/>
                <Route path=StaticSegment("payment") view=PaymentPage/>
            </Routes>
        </Router>
        <FullscreenViewer/>
        <ToastStack/>
    }
}

/// Renders exactly one top-level page section, chosen by `UiState::page`.
#[component]
fn PageSwitch() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let page = Memo::new(move |_| ui.get().page);

    move || match page.get() {
        Page::Landing => view! { <LandingPage/> }.into_any(),
        Page::Auth => view! { <AuthPage/> }.into_any(),
        Page::Workspace => view! { <WorkspacePage/> }.into_any(),
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
    }
}
