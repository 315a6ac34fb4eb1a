//! Submit Page
//!
//! New spell form. The spell joins the list once the server returns it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::element_selector::SUBMIT_ELEMENTS;
use crate::components::SpellFormFields;
use crate::context::{use_page_navigate, Page};
use crate::notify::{use_toaster, Notice};
use crate::session::use_session;
use crate::store::{store_apply_create, use_spell_store};
use crate::validation::{validate_spell, FieldErrors, SpellFormInput};

#[component]
pub fn SubmitPage() -> impl IntoView {
    let navigate = use_page_navigate();
    let session = use_session();
    let toaster = use_toaster();
    let store = use_spell_store();

    let form = RwSignal::new(SpellFormInput::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let data = match validate_spell(&form.get_untracked()) {
            Ok(data) => data,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        set_is_loading.set(true);
        let client = session.client();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = api::create_spell(&client, &data).await;
            set_is_loading.set(false);
            match outcome {
                Ok(created) => {
                    log::info!("[SPELLS] Created spell {} ({})", created.id, created.name);
                    store_apply_create(&store, &created);
                    toaster.notify(Notice::spell_created(&created.name));
                    form.set(SpellFormInput::default());
                    navigate(Page::Spells);
                }
                Err(err) => toaster.notify(Notice::create_failed(&err)),
            }
        });
    };

    let presets: Vec<&'static str> = SUBMIT_ELEMENTS.iter().map(|(value, _)| *value).collect();

    view! {
        <section class="submit-page">
            <header class="page-header">
                <h1>"Forge a New Spell"</h1>
                <p>"Share your magical creation with the community"</p>
            </header>

            <form class="spell-form" on:submit=submit>
                <SpellFormFields input=form errors=errors element_presets=presets />
                <button type="submit" class="primary-btn" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Forging Spell..." } else { "Submit Spell" }}
                </button>
            </form>
        </section>
    }
}
