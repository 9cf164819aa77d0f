//! Account dashboard: usage counters, workspace defaults and account actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything shown here except the AI status check comes from the per-user
//! local records in `state::profile`. Records are reloaded on entry and after
//! any change made through the account modals.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use super::workspace::Logout;
use crate::components::security_modals::SecurityModals;
use crate::net::api::ApiClient;
use crate::net::types::{AiStatus, Processing, Style};
use crate::state::profile::{ProfileStore, UserPreferences, UserSecurity, UserStatistics};
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::state::ui::{AccountModal, Page, UiState};
use crate::util::dom;

const CLEAR_DATA_PROMPT: &str = "Are you sure you want to clear all your data? This action cannot be undone.";

/// Counter tiles in display order: one per style, then the AI and overall
/// totals.
pub(crate) fn stat_tiles(stats: &UserStatistics) -> Vec<(&'static str, u64)> {
    Style::ALL
        .into_iter()
        .map(|style| (style.label(), stats.for_style(style)))
        .chain([
            ("AI Transformations", stats.ai_transformations),
            ("Total Transformations", stats.total_transformations),
        ])
        .collect()
}

/// Toast for a `/test-ai` answer.
pub(crate) fn ai_status_notice(status: &AiStatus) -> (ToastKind, String) {
    if status.ready {
        (ToastKind::Success, "AI connection is working perfectly!".to_owned())
    } else {
        let message = status.message.as_deref().unwrap_or("unknown");
        (ToastKind::Warning, format!("AI connection issue: {message}"))
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let logout = Logout::from_context();

    let stats = RwSignal::new(UserStatistics::default());
    let security = RwSignal::new(UserSecurity::default());
    let default_processing = RwSignal::new(Processing::default());
    let default_style = RwSignal::new(Style::default());
    let testing_ai = RwSignal::new(false);

    let reload = move || {
        let username = session.get_untracked().display_name();
        let profiles = ProfileStore::browser();
        stats.set(profiles.load_stats(&username));
        security.set(profiles.load_security(&username));
        if let Some(prefs) = profiles.load_preferences(&username) {
            default_processing.set(prefs.processing().unwrap_or_default());
            default_style.set(prefs.style().unwrap_or_default());
        }
    };
    reload();

    let on_save_preferences = move |_| {
        let username = session.get_untracked().display_name();
        let prefs = UserPreferences::new(default_processing.get_untracked(), default_style.get_untracked());
        ProfileStore::browser().save_preferences(&username, &prefs);
        notify(toasts, ToastKind::Success, "Preferences saved successfully!");
    };

    let on_clear = move |_| {
        if !dom::confirm(CLEAR_DATA_PROMPT) {
            return;
        }
        ProfileStore::browser().clear_user(&session.get_untracked().display_name());
        stats.set(UserStatistics::default());
        security.set(UserSecurity::default());
        default_processing.set(Processing::default());
        default_style.set(Style::default());
        notify(toasts, ToastKind::Success, "User data cleared successfully");
    };

    let on_test_ai = move |_| {
        if testing_ai.get_untracked() {
            return;
        }
        testing_ai.set(true);
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(session, toasts).test_ai().await;
            testing_ai.set(false);
            let (kind, message) = match result {
                Ok(status) => ai_status_notice(&status),
                Err(e) => (ToastKind::Error, format!("Failed to test AI connection: {e}")),
            };
            notify(toasts, kind, message);
        });
    };

    let open_modal = move |modal: AccountModal| move |_| ui.update(|u| u.account_modal = Some(modal));
    let on_saved = Callback::new(move |()| reload());

    view! {
        <main class="dashboard">
            <header class="dashboard__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="dashboard__user">{move || session.with(Session::display_name)}</p>
                </div>
                <div class="dashboard__nav">
                    <button class="btn" on:click=move |_| ui.update(|u| u.show(Page::Workspace))>"Back to App"</button>
                    <button class="btn" on:click=move |_| logout.run()>"Logout"</button>
                </div>
            </header>

            <section class="dashboard__stats" aria-label="Statistics">
                {move || {
                    stat_tiles(&stats.get())
                        .into_iter()
                        .map(|(label, count)| {
                            view! {
                                <div class="stat-tile">
                                    <span class="stat-tile__count">{count}</span>
                                    <span class="stat-tile__label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </section>

            <section class="dashboard__panel">
                <h2>"Preferences"</h2>
                <label>
                    "Default processing"
                    <select
                        prop:value=move || default_processing.get().as_str()
                        on:change=move |ev| {
                            if let Some(p) = Processing::parse(&event_target_value(&ev)) {
                                default_processing.set(p);
                            }
                        }
                    >
                        <option value="opencv">"OpenCV"</option>
                        <option value="ai">"AI"</option>
                    </select>
                </label>
                <label>
                    "Default style"
                    <select
                        prop:value=move || default_style.get().as_str()
                        on:change=move |ev| {
                            if let Some(s) = Style::parse(&event_target_value(&ev)) {
                                default_style.set(s);
                            }
                        }
                    >
                        {Style::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="dashboard__actions">
                    <button class="btn btn--primary" on:click=on_save_preferences>"Save Preferences"</button>
                    <button class="btn btn--danger" on:click=on_clear>"Clear Data"</button>
                    <button class="btn" disabled=move || testing_ai.get() on:click=on_test_ai>
                        "Test AI Connection"
                    </button>
                </div>
            </section>

            <section class="dashboard__panel">
                <h2>"Security"</h2>
                <p class="dashboard__question">
                    {move || {
                        security.with(|s| {
                            if s.is_configured() { s.question.clone() } else { "No security question set".to_owned() }
                        })
                    }}
                </p>
                <div class="dashboard__actions">
                    <button class="btn" on:click=open_modal(AccountModal::ChangeUsername)>"Change Username"</button>
                    <button class="btn" on:click=open_modal(AccountModal::ChangePassword)>"Change Password"</button>
                    <button class="btn" on:click=open_modal(AccountModal::SecurityQuestion)>"Security Question"</button>
                </div>
            </section>

            <SecurityModals on_saved=on_saved />
        </main>
    }
}
