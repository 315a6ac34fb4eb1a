//! Login Page
//!
//! Exchanges credentials for a token, then loads the user behind it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::FieldError;
use crate::context::{use_page_navigate, Page};
use crate::error::{ApiError, ErrorKind};
use crate::models::{LoginData, User};
use crate::notify::{use_toaster, Notice};
use crate::session::{use_session, SessionStore};
use crate::validation::{validate_login, FieldErrors};

/// Token first, then the user it belongs to
async fn sign_in(session: SessionStore, data: LoginData) -> Result<(String, User), ApiError> {
    let token = api::login(&session.anonymous_client(), &data).await?;
    log::debug!("[SESSION] Received {} token", token.token_type);
    let client = session.anonymous_client().with_token(Some(token.access_token.clone()));
    let user = api::current_user(&client).await?;
    Ok((token.access_token, user))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_page_navigate();
    let session = use_session();
    let toaster = use_toaster();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    // Bad credentials are shown on the form rather than as a toast
    let (auth_error, set_auth_error) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let data = LoginData {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let field_errors = validate_login(&data);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }

        set_auth_error.set(None);
        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = sign_in(session, data).await;
            set_is_loading.set(false);
            match outcome {
                Ok((token, user)) => {
                    toaster.notify(Notice::logged_in(&user.username));
                    session.login(token, user);
                    navigate(Page::Home);
                }
                Err(err) if err.kind() == ErrorKind::Authentication => {
                    log::info!("[SESSION] Login rejected: {}", err);
                    set_auth_error.set(Some(
                        err.detail().unwrap_or("Invalid username or password").to_string(),
                    ));
                }
                Err(err) => toaster.notify(Notice::login_failed(&err)),
            }
        });
    };

    view! {
        <section class="auth-page">
            <header class="page-header">
                <h1>"Welcome Back"</h1>
                <p>"Enter your credentials to access the grimoire"</p>
            </header>

            <form class="auth-form" on:submit=submit>
                {move || auth_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}

                <div class="form-field">
                    <label for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                            errors.update(|e| e.clear("username"));
                        }
                    />
                    <FieldError errors=errors field="username" />
                </div>

                <div class="form-field">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            errors.update(|e| e.clear("password"));
                        }
                    />
                    <FieldError errors=errors field="password" />
                </div>

                <button type="submit" class="primary-btn" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Signing In..." } else { "Sign In" }}
                </button>
            </form>

            <p class="auth-switch">
                "Don't have an account? "
                <A href=Page::Register.path()>"Register"</A>
            </p>
        </section>
    }
}
