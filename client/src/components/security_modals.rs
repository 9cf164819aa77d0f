//! Account modals: change username, change password, set security question.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the dashboard through `UiState::account_modal`. Each form runs
//! its local checks (including the stored security answer) before any
//! backend call. Closing unmounts the form, which discards its inputs.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::profile::{ProfileStore, SECURITY_QUESTIONS, UserSecurity};
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::state::ui::{AccountModal, UiState};
use crate::util::{dom, validate};

/// Renders whichever account modal is open. `on_saved` fires after any
/// successful change so the dashboard can reload its records.
#[component]
pub fn SecurityModals(on_saved: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = Memo::new(move |_| ui.with(|u| u.account_modal));

    Effect::new(move |was_open: Option<bool>| {
        let is_open = open.get().is_some();
        if was_open.unwrap_or(false) != is_open {
            dom::lock_page_scroll(is_open);
        }
        is_open
    });

    let close = Callback::new(move |()| ui.update(|u| u.account_modal = None));

    move || match open.get() {
        Some(AccountModal::ChangeUsername) => view! { <ChangeUsernameForm close=close on_saved=on_saved /> }.into_any(),
        Some(AccountModal::ChangePassword) => view! { <ChangePasswordForm close=close /> }.into_any(),
        Some(AccountModal::SecurityQuestion) => view! { <SecurityQuestionForm close=close on_saved=on_saved /> }.into_any(),
        None => ().into_any(),
    }
}

#[component]
fn ModalFrame(title: &'static str, close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="security-modal" role="dialog" aria-modal="true" on:click=move |_| close.run(())>
            <div class="security-modal__content" on:click=move |ev| ev.stop_propagation()>
                <div class="security-modal__header">
                    <h3>{title}</h3>
                    <button class="action-btn" title="Close" on:click=move |_| close.run(())>
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

fn question_text(username: &str) -> String {
    let security: UserSecurity = ProfileStore::browser().load_security(username);
    if security.is_configured() { security.question } else { "No security question set".to_owned() }
}

#[component]
fn ChangeUsernameForm(close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let new_username = RwSignal::new(String::new());
    let answer = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let current = session.get_untracked().display_name();
    let question = question_text(&current);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let change = match validate::username_change(&new_username.get_untracked(), &answer.get_untracked()) {
            Ok(change) => change,
            Err(message) => return notify(toasts, ToastKind::Error, message),
        };
        let old = session.get_untracked().display_name();
        let profiles = ProfileStore::browser();
        if let Err(message) = profiles.verify_security_answer(&old, &change.security_answer) {
            return notify(toasts, ToastKind::Error, message);
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(session, toasts)
                .change_username(&change.new_username, &change.security_answer)
                .await;
            busy.set(false);
            match result {
                Ok(response) if response.success => {
                    profiles.migrate_user(&old, &change.new_username);
                    session.update(|s| s.rename(change.new_username.clone()));
                    notify(toasts, ToastKind::Success, "Username changed successfully!");
                    on_saved.run(());
                    close.run(());
                }
                Ok(_) => {}
                Err(e) => notify(toasts, ToastKind::Error, format!("Failed to change username: {e}")),
            }
        });
    };

    view! {
        <ModalFrame title="Change Username" close=close>
            <form class="security-form" on:submit=on_submit>
                <label>
                    "Current username"
                    <input type="text" readonly prop:value=current />
                </label>
                <label>
                    "New username"
                    <input type="text" bind:value=new_username autocomplete="username" />
                </label>
                <p class="security-form__question">{question}</p>
                <label>
                    "Security answer"
                    <input type="text" bind:value=answer />
                </label>
                <div class="security-form__actions">
                    <button type="button" class="btn" on:click=move |_| close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>"Change Username"</button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn ChangePasswordForm(close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let answer = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let question = question_text(&session.get_untracked().display_name());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let change = match validate::password_change(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm.get_untracked(),
            &answer.get_untracked(),
        ) {
            Ok(change) => change,
            Err(message) => return notify(toasts, ToastKind::Error, message),
        };
        let username = session.get_untracked().display_name();
        if let Err(message) = ProfileStore::browser().verify_security_answer(&username, &change.security_answer) {
            return notify(toasts, ToastKind::Error, message);
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(session, toasts)
                .change_password(&change.current_password, &change.new_password, &change.security_answer)
                .await;
            busy.set(false);
            match result {
                Ok(response) if response.success => {
                    notify(toasts, ToastKind::Success, "Password changed successfully!");
                    close.run(());
                }
                Ok(_) => {}
                Err(e) => notify(toasts, ToastKind::Error, format!("Failed to change password: {e}")),
            }
        });
    };

    view! {
        <ModalFrame title="Change Password" close=close>
            <form class="security-form" on:submit=on_submit>
                <label>
                    "Current password"
                    <input type="password" bind:value=current_password autocomplete="current-password" />
                </label>
                <label>
                    "New password"
                    <input type="password" bind:value=new_password autocomplete="new-password" />
                </label>
                <label>
                    "Confirm new password"
                    <input type="password" bind:value=confirm autocomplete="new-password" />
                </label>
                <p class="security-form__question">{question}</p>
                <label>
                    "Security answer"
                    <input type="text" bind:value=answer />
                </label>
                <div class="security-form__actions">
                    <button type="button" class="btn" on:click=move |_| close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>"Change Password"</button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn SecurityQuestionForm(close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let username = session.get_untracked().display_name();
    let existing = ProfileStore::browser().load_security(&username);
    let question = RwSignal::new(existing.question);
    let answer = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate::security_answer(&question.get_untracked(), &answer.get_untracked(), &confirm.get_untracked()) {
            Ok(input) => {
                let username = session.get_untracked().display_name();
                ProfileStore::browser().set_security(&username, &input);
                notify(toasts, ToastKind::Success, "Security question set successfully!");
                on_saved.run(());
                close.run(());
            }
            Err(message) => notify(toasts, ToastKind::Error, message),
        }
    };

    view! {
        <ModalFrame title="Security Question" close=close>
            <form class="security-form" on:submit=on_submit>
                <label>
                    "Question"
                    <select
                        prop:value=move || question.get()
                        on:change=move |ev| question.set(event_target_value(&ev))
                    >
                        <option value="">"Select a question"</option>
                        {SECURITY_QUESTIONS
                            .iter()
                            .map(|q| view! { <option value=*q>{*q}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Answer"
                    <input type="text" bind:value=answer />
                </label>
                <label>
                    "Confirm answer"
                    <input type="text" bind:value=confirm />
                </label>
                <div class="security-form__actions">
                    <button type="button" class="btn" on:click=move |_| close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn--primary">"Save"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
