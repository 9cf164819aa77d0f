//! Per-user records kept in browser local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three JSON records live under `userStats_<name>`, `userPrefs_<name>` and
//! `userSecurity_<name>`. They are client-only: the backend never sees
//! statistics or preferences, and the security answer is a local gate in
//! front of the account-change calls, not real access control.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{Processing, Style};
use crate::util::storage::{BrowserStorage, KeyValueStore, load_json, save_json};
use crate::util::validate::SecurityAnswer;

pub const INCORRECT_ANSWER: &str = "Incorrect security answer";

/// Transformation counters. Missing fields read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatistics {
    pub cartoon: u64,
    pub sketch: u64,
    pub watercolor: u64,
    pub oilpaint: u64,
    pub ai_transformations: u64,
    pub total_transformations: u64,
}

impl UserStatistics {
    /// Count one completed transformation. A style with no bucket still
    /// counts toward the total.
    pub fn record(&mut self, style: &str, ai_used: bool) {
        let bucket = match style {
            "cartoon" => Some(&mut self.cartoon),
            "sketch" => Some(&mut self.sketch),
            "watercolor" => Some(&mut self.watercolor),
            "oilpaint" => Some(&mut self.oilpaint),
            _ => None,
        };
        if let Some(count) = bucket {
            *count += 1;
        }
        self.total_transformations += 1;
        if ai_used {
            self.ai_transformations += 1;
        }
    }

    #[must_use]
    pub fn for_style(&self, style: Style) -> u64 {
        match style {
            Style::Cartoon => self.cartoon,
            Style::Sketch => self.sketch,
            Style::Watercolor => self.watercolor,
            Style::OilPaint => self.oilpaint,
        }
    }
}

/// Workspace defaults applied on entry. Values are kept as stored strings;
/// unrecognized ones are ignored when applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub default_processing: String,
    pub default_style: String,
}

impl UserPreferences {
    #[must_use]
    pub fn new(processing: Processing, style: Style) -> Self {
        Self { default_processing: processing.as_str().to_owned(), default_style: style.as_str().to_owned() }
    }

    #[must_use]
    pub fn processing(&self) -> Option<Processing> {
        Processing::parse(&self.default_processing)
    }

    #[must_use]
    pub fn style(&self) -> Option<Style> {
        Style::parse(&self.default_style)
    }
}

/// Security question and its lowercased answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSecurity {
    pub question: String,
    pub answer: String,
}

impl UserSecurity {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.question.is_empty()
    }
}

/// Questions offered by the security-question form.
pub const SECURITY_QUESTIONS: [&str; 5] = [
    "What was the name of your first pet?",
    "In what city were you born?",
    "What is your mother's maiden name?",
    "What was the name of your first school?",
    "What is your favorite book?",
];

#[must_use]
pub fn stats_key(username: &str) -> String {
    format!("userStats_{username}")
}

#[must_use]
pub fn prefs_key(username: &str) -> String {
    format!("userPrefs_{username}")
}

#[must_use]
pub fn security_key(username: &str) -> String {
    format!("userSecurity_{username}")
}

/// Typed access to the per-user records in a [`KeyValueStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ProfileStore<S = BrowserStorage> {
    store: S,
}

impl ProfileStore<BrowserStorage> {
    #[must_use]
    pub fn browser() -> Self {
        Self { store: BrowserStorage }
    }
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn load_stats(&self, username: &str) -> UserStatistics {
        load_json(&self.store, &stats_key(username)).unwrap_or_default()
    }

    /// Count a completed transformation for `username`. No-op (and `None`)
    /// when nobody is signed in.
    pub fn record_transformation(&self, username: Option<&str>, style: &str, ai_used: bool) -> Option<UserStatistics> {
        let username = username?;
        let mut stats = self.load_stats(username);
        stats.record(style, ai_used);
        save_json(&self.store, &stats_key(username), &stats);
        Some(stats)
    }

    pub fn save_preferences(&self, username: &str, prefs: &UserPreferences) {
        save_json(&self.store, &prefs_key(username), prefs);
    }

    #[must_use]
    pub fn load_preferences(&self, username: &str) -> Option<UserPreferences> {
        load_json(&self.store, &prefs_key(username))
    }

    #[must_use]
    pub fn load_security(&self, username: &str) -> UserSecurity {
        load_json(&self.store, &security_key(username)).unwrap_or_default()
    }

    /// Store a validated question/answer pair; the answer is lowercased.
    pub fn set_security(&self, username: &str, input: &SecurityAnswer) -> UserSecurity {
        let security = UserSecurity { question: input.question.clone(), answer: input.answer.to_lowercase() };
        save_json(&self.store, &security_key(username), &security);
        security
    }

    /// Case-insensitive comparison against the stored answer.
    ///
    /// # Errors
    ///
    /// Fails when no answer is stored or it does not match.
    pub fn verify_security_answer(&self, username: &str, answer: &str) -> Result<(), &'static str> {
        let stored = self.load_security(username).answer;
        if stored.is_empty() || stored.to_lowercase() != answer.to_lowercase() {
            return Err(INCORRECT_ANSWER);
        }
        Ok(())
    }

    /// Move statistics and security records to a renamed account.
    /// Preferences stay under the old name.
    pub fn migrate_user(&self, old: &str, new: &str) {
        for key in [stats_key, security_key] {
            let (from, to) = (key(old), key(new));
            if let Some(raw) = self.store.get(&from) {
                self.store.set(&to, &raw);
                self.store.remove(&from);
            }
        }
    }

    /// Delete all three records for `username`.
    pub fn clear_user(&self, username: &str) {
        self.store.remove(&stats_key(username));
        self.store.remove(&prefs_key(username));
        self.store.remove(&security_key(username));
    }
}
