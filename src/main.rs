//! SpellForge Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod notify;
mod pages;
mod session;
mod spell_list;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

/// Log records kept in memory for diagnostics
const LOG_HISTORY: usize = 256;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if console_logger::init(config.log_level, LOG_HISTORY).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already installed".into());
    }
    log::info!("[APP] Starting SpellForge against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
