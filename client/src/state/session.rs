//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created on successful login and cleared on logout. The API client reads the
//! token from here; the upload flow records the selected file here. The raw
//! browser `File` handle lives in `util::upload` since it is not `Send`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Metadata of the file currently selected for transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

/// Tab-lifetime session: identity, bearer token and pending upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub token: Option<String>,
    pub pending_file: Option<PendingFile>,
}

impl Session {
    pub fn sign_in(&mut self, username: String, token: String) {
        self.username = Some(username);
        self.token = Some(token);
    }

    /// Drop identity, token and any pending upload.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.username.is_some() && self.token.is_some()
    }

    /// Username for display; empty when signed out.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.username.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn has_pending_file(&self) -> bool {
        self.pending_file.is_some()
    }

    /// Record a file whose read finished. `issued_to` is the token that was
    /// current when the read started; the file is dropped (returns `false`)
    /// if that session has since ended.
    pub fn accept_pending_file(&mut self, issued_to: Option<&str>, file: PendingFile) -> bool {
        if !self.is_signed_in() || issued_to.is_none() || self.token.as_deref() != issued_to {
            return false;
        }
        self.pending_file = Some(file);
        true
    }

    /// Replace the username after a successful backend rename.
    /// The token is kept as issued.
    pub fn rename(&mut self, new_username: String) {
        if self.username.is_some() {
            self.username = Some(new_username);
        }
    }
}
