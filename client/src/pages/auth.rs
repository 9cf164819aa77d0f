//! Sign-in and registration tabs.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::state::ui::{AuthTab, Page, UiState};
use crate::util::validate;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tab = Memo::new(move |_| ui.with(|u| u.auth_tab));

    let tab_class = move |which: AuthTab| {
        move || if tab.get() == which { "auth-tab auth-tab--active" } else { "auth-tab" }
    };

    view! {
        <main class="auth">
            <div class="auth__card">
                <h1>"Reframe"</h1>
                <div class="auth__tabs" role="tablist">
                    <button
                        role="tab"
                        class=tab_class(AuthTab::Login)
                        on:click=move |_| ui.update(|u| u.auth_tab = AuthTab::Login)
                    >
                        "Login"
                    </button>
                    <button
                        role="tab"
                        class=tab_class(AuthTab::Register)
                        on:click=move |_| ui.update(|u| u.auth_tab = AuthTab::Register)
                    >
                        "Register"
                    </button>
                </div>
                {move || match tab.get() {
                    AuthTab::Login => view! { <LoginForm /> }.into_any(),
                    AuthTab::Register => view! { <RegisterForm /> }.into_any(),
                }}
                <button class="auth__back" on:click=move |_| ui.update(|u| u.show(Page::Landing))>
                    "Back to home"
                </button>
            </div>
        </main>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let creds = match validate::login(&username.get_untracked(), &password.get_untracked()) {
            Ok(creds) => creds,
            Err(message) => return notify(toasts, ToastKind::Error, message),
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(session, toasts).login(&creds.username, &creds.password).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    session.update(|s| s.sign_in(response.username, response.access_token));
                    notify(toasts, ToastKind::Success, "Login successful!");
                    username.set(String::new());
                    password.set(String::new());
                    ui.update(|u| u.show(Page::Workspace));
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    };

    view! {
        <form class="auth__form" on:submit=on_submit>
            <label>
                "Username"
                <input type="text" autocomplete="username" bind:value=username />
            </label>
            <label>
                "Password"
                <input type="password" autocomplete="current-password" bind:value=password />
            </label>
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let creds = match validate::registration(
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(creds) => creds,
            Err(message) => return notify(toasts, ToastKind::Error, message),
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(session, toasts).register(&creds.username, &creds.password).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    notify(toasts, ToastKind::Success, "Registration successful! Please login.");
                    username.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                    ui.update(|u| u.show_auth(AuthTab::Login));
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    };

    view! {
        <form class="auth__form" on:submit=on_submit>
            <label>
                "Username"
                <input type="text" autocomplete="username" bind:value=username />
            </label>
            <label>
                "Password"
                <input type="password" autocomplete="new-password" bind:value=password />
            </label>
            <label>
                "Confirm password"
                <input type="password" autocomplete="new-password" bind:value=confirm />
            </label>
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                {move || if busy.get() { "Creating account..." } else { "Register" }}
            </button>
        </form>
    }
}
