//! Spell Form Fields Component
//!
//! Name, description, stats and element inputs shared by the submit page
//! and the detail editor.

use leptos::prelude::*;

use crate::components::element_selector::ElementSelector;
use crate::validation::{FieldErrors, SpellFormInput, MIN_DESCRIPTION_LEN};

/// Inline error line for one field
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|message| view! {
            <p class="field-error">{message}</p>
        })
    }
}

#[component]
pub fn SpellFormFields(
    input: RwSignal<SpellFormInput>,
    errors: RwSignal<FieldErrors>,
    element_presets: Vec<&'static str>,
) -> impl IntoView {
    // Editing a field clears its error
    let edit = move |field: &'static str, apply: fn(&mut SpellFormInput, String), value: String| {
        input.update(|form| apply(form, value));
        errors.update(|e| e.clear(field));
    };
    let has_error = move |field: &'static str| errors.with(|e| e.get(field).is_some());
    let input_class = move |field: &'static str| if has_error(field) { "form-input invalid" } else { "form-input" };

    view! {
        <div class="form-field">
            <label for="spell-name">"Spell Name"</label>
            <input
                id="spell-name"
                type="text"
                class=move || input_class("name")
                placeholder="Enter the name of your spell"
                prop:value=move || input.with(|f| f.name.clone())
                on:input=move |ev| edit("name", |f, v| f.name = v, event_target_value(&ev))
            />
            <FieldError errors=errors field="name" />
        </div>

        <div class="form-field">
            <label for="spell-description">"Description"</label>
            <textarea
                id="spell-description"
                class=move || input_class("description")
                placeholder="Describe what the spell does"
                prop:value=move || input.with(|f| f.description.clone())
                on:input=move |ev| edit("description", |f, v| f.description = v, event_target_value(&ev))
            ></textarea>
            <div class="form-hint">
                <span>{move || format!("{} characters", input.with(|f| f.description.chars().count()))}</span>
                <span>{format!("Minimum {} characters required", MIN_DESCRIPTION_LEN)}</span>
            </div>
            <FieldError errors=errors field="description" />
        </div>

        <div class="form-row">
            <div class="form-field">
                <label for="spell-mana">"Mana Cost"</label>
                <input
                    id="spell-mana"
                    type="number"
                    min="0"
                    class=move || input_class("mana_cost")
                    prop:value=move || input.with(|f| f.mana_cost.clone())
                    on:input=move |ev| edit("mana_cost", |f, v| f.mana_cost = v, event_target_value(&ev))
                />
                <FieldError errors=errors field="mana_cost" />
            </div>
            <div class="form-field">
                <label for="spell-damage">"Damage (optional)"</label>
                <input
                    id="spell-damage"
                    type="number"
                    min="0"
                    class=move || input_class("damage")
                    prop:value=move || input.with(|f| f.damage.clone())
                    on:input=move |ev| edit("damage", |f, v| f.damage = v, event_target_value(&ev))
                />
                <FieldError errors=errors field="damage" />
            </div>
        </div>

        <div class="form-field">
            <label>"Element"</label>
            <ElementSelector
                current=Signal::derive(move || input.with(|f| f.element.clone()))
                on_change=Callback::new(move |value: String| edit("element", |f, v| f.element = v, value))
                presets=element_presets
                invalid=Signal::derive(move || has_error("element"))
            />
            <FieldError errors=errors field="element" />
        </div>
    }
}
