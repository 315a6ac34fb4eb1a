//! Application Context
//!
//! Page paths for the router, and the reload trigger provided via Leptos
//! Context API.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Top-level pages that other code links or redirects to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Spells,
    Submit,
    Login,
    Register,
    Diagnostics,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Spells,
        Page::Submit,
        Page::Login,
        Page::Register,
        Page::Diagnostics,
    ];

    /// Path registered for this page in the route table
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Spells => "/spells",
            Page::Submit => "/submit",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Diagnostics => "/diagnostics",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch spells from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch spells from the API - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a refetch of the spell list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Router navigation by page; must be called under `<Router>`
pub fn use_page_navigate() -> impl Fn(Page) + Clone + 'static {
    let navigate = use_navigate();
    move |page: Page| {
        log::debug!("[ROUTER] Navigating to {}", page.path());
        navigate(page.path(), NavigateOptions::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_paths_are_absolute_and_unique() {
        let paths: HashSet<_> = Page::ALL.iter().map(Page::path).collect();
        assert_eq!(paths.len(), Page::ALL.len());
        assert!(paths.iter().all(|p| p.starts_with('/')));
        assert_eq!(Page::Home.path(), "/");
    }
}
