//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::FieldError;
use crate::context::{use_page_navigate, Page};
use crate::models::RegisterData;
use crate::notify::{use_toaster, Notice};
use crate::session::use_session;
use crate::validation::{validate_register, FieldErrors};

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    field: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|e| e.clear(field));
                }
            />
            <FieldError errors=errors field=field />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_page_navigate();
    let session = use_session();
    let toaster = use_toaster();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let data = RegisterData {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let field_errors = validate_register(&data, &confirm_password.get_untracked());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }

        set_is_loading.set(true);
        let client = session.anonymous_client();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = api::register(&client, &data).await;
            set_is_loading.set(false);
            match outcome {
                Ok(user) => {
                    log::info!("[SESSION] Registered {}", user.username);
                    toaster.notify(Notice::registered(&user.username));
                    navigate(Page::Login);
                }
                Err(err) => toaster.notify(Notice::register_failed(&err)),
            }
        });
    };

    view! {
        <section class="auth-page">
            <header class="page-header">
                <h1>"Join the Guild"</h1>
                <p>"Create an account to submit and vote on spells"</p>
            </header>

            <form class="auth-form" on:submit=submit>
                <TextField id="register-username" label="Username" input_type="text" value=username errors=errors field="username" />
                <TextField id="register-email" label="Email" input_type="email" value=email errors=errors field="email" />
                <TextField id="register-password" label="Password" input_type="password" value=password errors=errors field="password" />
                <TextField
                    id="register-confirm"
                    label="Confirm Password"
                    input_type="password"
                    value=confirm_password
                    errors=errors
                    field="confirm_password"
                />
                <button type="submit" class="primary-btn" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Creating Account..." } else { "Create Account" }}
                </button>
            </form>
        </section>
    }
}
