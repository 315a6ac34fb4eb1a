//! UI Components
//!
//! Reusable Leptos components.

mod auth_guard;
pub mod element_selector;
mod delete_confirm_button;
mod nav_bar;
mod spell_card;
mod spell_detail_modal;
mod spell_filters;
mod spell_form_fields;
mod toast_host;

pub use auth_guard::{auth_gate, AuthPending};
pub use nav_bar::NavBar;
pub use spell_card::SpellCard;
pub use spell_detail_modal::SpellDetailModal;
pub use spell_filters::SpellFilters;
pub use spell_form_fields::{FieldError, SpellFormFields};
pub use toast_host::ToastHost;
