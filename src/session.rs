//! Auth Session Store
//!
//! Current viewer (token + user). Owned by the app root and provided via
//! context; only login, logout and expiry mutate it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::error::{ApiError, ErrorKind};
use crate::models::User;
use crate::notify::{Notice, Toaster};

#[derive(Clone, Copy)]
pub struct SessionStore {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<User>>,
    /// Startup restore still in flight
    restoring: RwSignal<bool>,
    /// Bumped each time a rejected token ends the session
    expirations: RwSignal<u32>,
    base_url: StoredValue<String>,
    storage_key: &'static str,
    on_expired: Callback<()>,
}

/// Drop the in-memory session. False when there was nothing to drop.
fn teardown(token: RwSignal<Option<String>>, user: RwSignal<Option<User>>) -> bool {
    if token.get_untracked().is_none() {
        return false;
    }
    token.set(None);
    user.set(None);
    true
}

/// A failed restore forgets the stored token only when the server rejected it
fn restore_discards_token(err: &ApiError) -> bool {
    err.kind() == ErrorKind::Authentication
}

impl SessionStore {
    pub fn new(config: &AppConfig, toaster: Toaster) -> Self {
        let token = RwSignal::new(None::<String>);
        let user = RwSignal::new(None::<User>);
        let expirations = RwSignal::new(0u32);
        let storage_key = config.token_storage_key;

        // Several in-flight calls can fail together; only the first tears down
        let on_expired = Callback::new(move |_: ()| {
            if !teardown(token, user) {
                return;
            }
            log::warn!("[SESSION] Token rejected, ending session");
            token_storage::clear(storage_key);
            toaster.notify(Notice::session_expired());
            expirations.update(|n| *n += 1);
        });

        Self {
            token,
            user,
            restoring: RwSignal::new(true),
            expirations,
            base_url: StoredValue::new(config.api_base_url.clone()),
            storage_key,
            on_expired,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn viewer_id(&self) -> Option<u32> {
        self.user.with(|u| u.as_ref().map(|u| u.id))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some) && self.user.with(Option::is_some)
    }

    pub fn restoring(&self) -> bool {
        self.restoring.get()
    }

    /// How many times the server has rejected the session token
    pub fn expirations(&self) -> u32 {
        self.expirations.get()
    }

    /// Anonymous client, e.g. for the login call itself
    pub fn anonymous_client(&self) -> ApiClient {
        ApiClient::new(self.base_url.get_value())
    }

    /// Client carrying the current token; a 401 ends the session
    pub fn client(&self) -> ApiClient {
        self.anonymous_client()
            .with_token(self.token.get_untracked())
            .on_unauthorized(self.on_expired)
    }

    /// Re-establish a session from the persisted token
    pub fn restore(&self) {
        let Some(stored) = token_storage::read(self.storage_key) else {
            self.restoring.set(false);
            return;
        };

        let this = *self;
        spawn_local(async move {
            let client = this.anonymous_client().with_token(Some(stored.clone()));
            match api::current_user(&client).await {
                Ok(user) => {
                    log::info!("[SESSION] Restored session for {}", user.username);
                    this.user.set(Some(user));
                    this.token.set(Some(stored));
                }
                Err(err) => {
                    log::warn!("[SESSION] Could not restore session: {}", err);
                    if restore_discards_token(&err) {
                        token_storage::clear(this.storage_key);
                    }
                }
            }
            this.restoring.set(false);
        });
    }

    pub fn login(&self, token: String, user: User) {
        log::info!("[SESSION] Logged in as {}", user.username);
        token_storage::write(self.storage_key, &token);
        self.user.set(Some(user));
        self.token.set(Some(token));
    }

    pub fn logout(&self) {
        log::info!("[SESSION] Logged out");
        token_storage::clear(self.storage_key);
        teardown(self.token, self.user);
    }
}

pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Bearer token persistence in localStorage
mod token_storage {
    use gloo_storage::errors::StorageError;
    use gloo_storage::{LocalStorage, Storage};

    pub fn read(key: &str) -> Option<String> {
        match LocalStorage::get::<String>(key) {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) | Err(StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("[SESSION] Ignoring unreadable stored token: {}", e);
                None
            }
        }
    }

    pub fn write(key: &str, token: &str) {
        if let Err(e) = LocalStorage::set(key, token) {
            log::error!("[SESSION] Failed to persist token: {}", e);
        }
    }

    pub fn clear(key: &str) {
        LocalStorage::delete(key);
        if LocalStorage::get::<String>(key).is_ok() {
            log::error!("[SESSION] Token still stored after clearing '{}'", key);
        }
    }
}
