//! Element Selector Component
//!
//! Preset element buttons plus free entry. Elements are an open vocabulary,
//! presets are only suggestions.

use leptos::prelude::*;

/// Presets offered when submitting: (value, description)
pub const SUBMIT_ELEMENTS: &[(&str, &str)] = &[
    ("Attack", "Offensive magical spells"),
    ("Defense", "Protective and defensive magic"),
    ("Utility", "Practical everyday magic"),
    ("Healing", "Restorative and curative spells"),
    ("Illusion", "Deceptive and mind-affecting magic"),
    ("Enchantment", "Enhancement and augmentation spells"),
];

/// Presets offered in the detail editor
pub const CLASSIC_ELEMENTS: &[&str] = &["fire", "water", "earth", "air", "dark", "light"];

/// Badge CSS class for an element; unknown elements get a neutral style
pub fn element_class(element: &str) -> &'static str {
    match element.to_lowercase().as_str() {
        "fire" | "attack" => "element-badge element-fire",
        "water" | "defense" => "element-badge element-water",
        "earth" | "utility" => "element-badge element-earth",
        "air" => "element-badge element-air",
        "healing" => "element-badge element-healing",
        "dark" => "element-badge element-dark",
        "light" => "element-badge element-light",
        "illusion" | "enchantment" => "element-badge element-arcane",
        _ => "element-badge",
    }
}

/// Capitalize the first letter for display
pub fn element_label(element: &str) -> String {
    let mut chars = element.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Description of a submission preset, if the value is one
pub fn element_description(element: &str) -> Option<&'static str> {
    SUBMIT_ELEMENTS
        .iter()
        .find(|(value, _)| value.eq_ignore_ascii_case(element))
        .map(|(_, description)| *description)
}

/// Element selector buttons with a custom entry field
#[component]
pub fn ElementSelector(
    #[prop(into)] current: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    presets: Vec<&'static str>,
    #[prop(into, optional)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || if invalid.get() { "element-selector invalid" } else { "element-selector" }>
            <div class="element-presets">
                {presets.into_iter().map(|value| {
                    let is_selected = move || current.get().eq_ignore_ascii_case(value);
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "element-btn active" } else { "element-btn" }
                            on:click=move |_| on_change.run(value.to_string())
                        >
                            {element_label(value)}
                        </button>
                    }
                }).collect_view()}
            </div>
            <input
                type="text"
                class="element-custom"
                placeholder="Or type another element..."
                prop:value=move || current.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || element_description(&current.get()).map(|description| view! {
                <p class="element-description">{description}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_helpers() {
        assert_eq!(element_class("FIRE"), "element-badge element-fire");
        assert_eq!(element_class("chronomancy"), "element-badge");
        assert_eq!(element_label("water"), "Water");
        assert_eq!(element_label(""), "");
        assert_eq!(element_description("healing"), Some("Restorative and curative spells"));
        assert_eq!(element_description("fire"), None);
    }
}
