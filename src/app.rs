//! SpellForge Frontend App
//!
//! Composition root: owns the config, session, toasts and spell store,
//! provides them as context, keeps the spell list in sync with the
//! current viewer, and declares the route table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{ProtectedRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::components::{auth_gate, AuthPending, NavBar, ToastHost};
use crate::config::AppConfig;
use crate::context::{use_page_navigate, AppContext, Page};
use crate::notify::Toaster;
use crate::pages::{
    DiagnosticsPage, HomePage, LoginPage, NotFoundPage, RegisterPage, SpellsPage, SubmitPage,
};
use crate::session::{use_session, SessionStore};
use crate::store::{store_reset_viewer, store_set_spells, SpellState};

/// Sends the viewer to Login whenever the server rejects their token
#[component]
fn ExpiryRedirect() -> impl IntoView {
    let session = use_session();
    let navigate = use_page_navigate();

    Effect::new(move |prev: Option<u32>| {
        let expirations = session.expirations();
        if prev.is_some_and(|prev| prev != expirations) {
            navigate(Page::Login);
        }
        expirations
    });
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let reload_trigger = signal(0u32);
    let ctx = AppContext::new(reload_trigger);
    let toaster = Toaster::new(config.toast_timeout_ms);
    let session = SessionStore::new(&config, toaster);
    let store = Store::new(SpellState::default());

    // Provide context to all children
    provide_context(config);
    provide_context(ctx);
    provide_context(toaster);
    provide_context(session);
    provide_context(store);

    session.restore();

    // Cached user_vote values belong to the previous viewer
    Effect::new(move |prev: Option<Option<String>>| {
        let token = session.token();
        if prev.is_some_and(|prev| prev != token) {
            log::info!("[APP] Viewer changed, resetting per-viewer state");
            store_reset_viewer(&store);
        }
        token
    });

    // Load spells on startup, viewer change or explicit reload.
    // Only the latest request may write the list.
    let fetch_seq = StoredValue::new(0u32);
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        if session.restoring() {
            return;
        }
        let authenticated = session.token().is_some();
        let client = session.client();

        let seq = fetch_seq.get_value().wrapping_add(1);
        fetch_seq.set_value(seq);
        log::debug!("[APP] Loading spells (trigger={}, authenticated={})", trigger, authenticated);

        spawn_local(async move {
            let spells = match api::list_spells(&client).await {
                Ok(loaded) => {
                    log::info!("[APP] Loaded {} spells", loaded.len());
                    loaded
                }
                Err(err) => {
                    log::error!("[APP] Failed to load spells: {}", err);
                    Vec::new()
                }
            };
            if fetch_seq.get_value() == seq {
                store_set_spells(&store, spells);
            } else {
                log::debug!("[APP] Dropping stale spell list #{}", seq);
            }
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <ExpiryRedirect />

                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/spells") view=SpellsPage />
                        <ProtectedRoute
                            path=path!("/submit")
                            view=SubmitPage
                            condition=move || auth_gate(session.restoring(), session.is_authenticated())
                            redirect_path=|| Page::Login.path()
                            fallback=|| view! { <AuthPending /> }
                        />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/diagnostics") view=DiagnosticsPage />
                    </Routes>
                </main>

                <ToastHost />
            </div>
        </Router>
    }
}
