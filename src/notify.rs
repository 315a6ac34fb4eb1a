//! Notifications
//!
//! User-facing notices for every mutating action, and the toast queue that
//! displays them.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::{ApiError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }

    // ========================
    // Per-action notices
    // ========================

    pub fn vote_recorded() -> Self {
        Self::success("Vote Updated!", "Your preference has been recorded.")
    }

    pub fn vote_failed(err: &ApiError) -> Self {
        match err.kind() {
            ErrorKind::Authorization => Self::destructive("Action Forbidden", "You cannot vote on your own spell."),
            _ => Self::destructive("An error occurred", "Could not cast your vote. Please try again."),
        }
    }

    pub fn spell_created(name: &str) -> Self {
        Self::success("Spell Created Successfully!", format!("\"{}\" has been added to the grimoire.", name))
    }

    pub fn create_failed(err: &ApiError) -> Self {
        Self::destructive(
            "Failed to Create Spell",
            describe(err, "Could not create spell. Please try again."),
        )
    }

    pub fn spell_updated() -> Self {
        Self::success("Spell Updated", "Your spell has been successfully updated.")
    }

    pub fn update_failed(err: &ApiError) -> Self {
        match err.kind() {
            ErrorKind::Authorization => Self::destructive("Action Forbidden", "You can only edit your own spells."),
            _ => Self::destructive("Update Failed", describe(err, "Failed to update spell.")),
        }
    }

    pub fn spell_deleted() -> Self {
        Self::success("Spell Deleted", "Your spell has been successfully deleted.")
    }

    pub fn delete_failed(err: &ApiError) -> Self {
        match err.kind() {
            ErrorKind::Authorization => Self::destructive("Action Forbidden", "You can only delete your own spells."),
            _ => Self::destructive("Delete Failed", describe(err, "Failed to delete spell.")),
        }
    }

    pub fn logged_in(username: &str) -> Self {
        Self::success("Welcome back!", format!("Logged in successfully as {}", username))
    }

    pub fn login_failed(err: &ApiError) -> Self {
        Self::destructive("Login Failed", describe(err, "Invalid credentials. Please try again."))
    }

    pub fn registered(username: &str) -> Self {
        Self::success("Account Created", format!("Welcome, {}! You can now log in.", username))
    }

    pub fn register_failed(err: &ApiError) -> Self {
        Self::destructive("Registration Failed", describe(err, "Could not create your account. Please try again."))
    }

    pub fn logged_out() -> Self {
        Self::success("Logged out", "See you next time.")
    }

    pub fn session_expired() -> Self {
        Self::destructive("Session Expired", "Please log in again.")
    }
}

/// Server detail when it sent one, otherwise the fallback
fn describe(err: &ApiError, fallback: &str) -> String {
    err.detail().unwrap_or(fallback).to_string()
}

/// A notice on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    timeout_ms: u32,
}

impl Toaster {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Show a notice and schedule its dismissal
    pub fn notify(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("[TOAST] {}: {}", notice.title, notice.description);
        } else {
            log::info!("[TOAST] {}: {}", notice.title, notice.description);
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let this = *self;
        let delay = Duration::from_millis(u64::from(self.timeout_ms));
        spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_failure_forbidden_is_distinct_from_generic() {
        let forbidden = Notice::vote_failed(&ApiError::from_status(403, r#"{"detail":"own spell"}"#));
        let generic = Notice::vote_failed(&ApiError::from_status(500, ""));

        assert!(forbidden.is_error());
        assert!(generic.is_error());
        assert_eq!(forbidden.title, "Action Forbidden");
        assert_eq!(generic.title, "An error occurred");
        assert_ne!(forbidden, generic);
    }

    #[test]
    fn test_failure_notices_prefer_server_detail() {
        let err = ApiError::from_status(400, r#"{"detail":"Name already taken"}"#);
        assert_eq!(Notice::create_failed(&err).description, "Name already taken");

        let err = ApiError::Network("offline".into());
        assert_eq!(Notice::update_failed(&err).description, "Failed to update spell.");
        assert_eq!(Notice::delete_failed(&ApiError::from_status(403, "")).title, "Action Forbidden");
    }

    #[test]
    fn test_success_notices() {
        assert!(!Notice::spell_created("Mist").is_error());
        assert_eq!(Notice::logged_in("merlin").description, "Logged in successfully as merlin");
    }
}
