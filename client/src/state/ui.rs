//! Local UI chrome state (active page, auth tab, open account modal).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `session` and `transform` so page
//! navigation can change without touching protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level page section; exactly one is rendered at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Auth,
    Workspace,
    Dashboard,
}

/// Tabs on the auth page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Account modals reachable from the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountModal {
    ChangeUsername,
    ChangePassword,
    SecurityQuestion,
}

/// UI state for page routing and modal visibility.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub page: Page,
    pub auth_tab: AuthTab,
    pub account_modal: Option<AccountModal>,
}

impl UiState {
    /// Switch to `page`, closing any account modal.
    pub fn show(&mut self, page: Page) {
        self.page = page;
        self.account_modal = None;
    }

    /// Switch to the auth page with `tab` selected.
    pub fn show_auth(&mut self, tab: AuthTab) {
        self.show(Page::Auth);
        self.auth_tab = tab;
    }
}
