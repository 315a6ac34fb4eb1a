//! Spell Detail Modal
//!
//! Full spell view. Owners can edit or delete from here; both apply to the
//! list only after the server confirms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::element_selector::{element_class, element_label, CLASSIC_ELEMENTS};
use crate::components::spell_form_fields::SpellFormFields;
use crate::models::{Spell, SpellFormData};
use crate::notify::{use_toaster, Notice};
use crate::session::use_session;
use crate::store::{store_apply_delete, store_apply_update, use_spell_store, SpellStateStoreFields};
use crate::validation::{validate_spell, FieldErrors, SpellFormInput};

#[component]
pub fn SpellDetailModal(selected: RwSignal<Option<u32>>) -> impl IntoView {
    let store = use_spell_store();
    let session = use_session();
    let toaster = use_toaster();

    // Follows store patches while open; None once deleted
    let spell = Memo::new(move |_| {
        let id = selected.get()?;
        store.spells().with(|spells| spells.iter().find(|s| s.id == id).cloned())
    });

    let (is_editing, set_is_editing) = signal(false);
    let (is_saving, set_is_saving) = signal(false);
    let form = RwSignal::new(SpellFormInput::default());
    let errors = RwSignal::new(FieldErrors::new());

    // Leave edit mode whenever another spell is opened
    Effect::new(move |prev: Option<Option<u32>>| {
        let current = selected.get();
        if prev.is_some_and(|prev| prev != current) {
            set_is_editing.set(false);
            errors.set(FieldErrors::new());
        }
        current
    });

    let close = move || selected.set(None);

    let start_edit = move |_| {
        if let Some(s) = spell.get_untracked() {
            form.set(SpellFormInput::from_form_data(&SpellFormData::from_spell(&s)));
            errors.set(FieldErrors::new());
            set_is_editing.set(true);
        }
    };

    let save = move |_| {
        let Some(s) = spell.get_untracked() else { return };
        let data = match validate_spell(&form.get_untracked()) {
            Ok(data) => data,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        set_is_saving.set(true);
        let client = session.client();
        spawn_local(async move {
            let outcome = api::update_spell(&client, s.id, &data).await;
            set_is_saving.set(false);
            match outcome {
                Ok(updated) => {
                    store_apply_update(&store, &updated);
                    set_is_editing.set(false);
                    toaster.notify(Notice::spell_updated());
                }
                Err(err) => toaster.notify(Notice::update_failed(&err)),
            }
        });
    };

    let delete = Callback::new(move |_: ()| {
        let Some(s) = spell.get_untracked() else { return };
        set_is_saving.set(true);
        let client = session.client();
        spawn_local(async move {
            let outcome = api::delete_spell(&client, s.id).await;
            set_is_saving.set(false);
            match outcome {
                Ok(()) => {
                    store_apply_delete(&store, s.id);
                    close();
                    toaster.notify(Notice::spell_deleted());
                }
                Err(err) => toaster.notify(Notice::delete_failed(&err)),
            }
        });
    });

    let details = move |s: Spell| {
        let is_owner = session.viewer_id() == Some(s.user_id);
        view! {
            <header class="modal-header">
                <h2>{s.name.clone()}</h2>
                <span class=element_class(&s.element)>{element_label(&s.element)}</span>
            </header>
            <p class="modal-description">{s.description.clone()}</p>
            <dl class="spell-stats">
                <dt>"Mana Cost"</dt>
                <dd>{s.mana_cost}</dd>
                <dt>"Damage"</dt>
                <dd>{s.damage_or_zero()}</dd>
                <dt>"Votes"</dt>
                <dd>{s.vote_count}</dd>
            </dl>
            <p class="spell-id">{format!("Spell #{}", s.id)}</p>
            <Show when=move || is_owner>
                <div class="modal-actions">
                    <button type="button" class="edit-btn" disabled=move || is_saving.get() on:click=start_edit>
                        "Edit"
                    </button>
                    <DeleteConfirmButton disabled=is_saving on_confirm=delete />
                </div>
            </Show>
        }
    };

    let editor = move || {
        view! {
            <header class="modal-header">
                <h2>"Edit Spell"</h2>
            </header>
            <form class="spell-form" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                <SpellFormFields input=form errors=errors element_presets=CLASSIC_ELEMENTS.to_vec() />
                <div class="modal-actions">
                    <button type="button" class="save-btn" disabled=move || is_saving.get() on:click=save>
                        {move || if is_saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        disabled=move || is_saving.get()
                        on:click=move |_| set_is_editing.set(false)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <Show when=move || spell.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" title="Close" on:click=move |_| close()>"×"</button>
                    {move || match (spell.get(), is_editing.get()) {
                        (Some(_), true) => editor().into_any(),
                        (Some(s), false) => details(s).into_any(),
                        (None, _) => ().into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}
