//! Diagnostics Page
//!
//! Recent log history from the console logger, for attaching to bug reports.

use leptos::prelude::*;

/// Newest first, numbered in capture order
fn numbered_newest_first(entries: Vec<console_logger::Entry>) -> Vec<(usize, console_logger::Entry)> {
    let mut numbered: Vec<_> = entries.into_iter().enumerate().collect();
    numbered.reverse();
    numbered
}

#[component]
pub fn DiagnosticsPage() -> impl IntoView {
    let entries = RwSignal::new(console_logger::recent());

    view! {
        <section class="diagnostics-page">
            <header class="page-header">
                <h1>"Diagnostics"</h1>
                <p>{move || format!("{} recent log records", entries.with(Vec::len))}</p>
                <button class="refresh-btn" title="Refresh" on:click=move |_| entries.set(console_logger::recent())>
                    "↻"
                </button>
            </header>

            <ol class="log-history">
                <For
                    each=move || numbered_newest_first(entries.get())
                    key=|(index, entry)| (*index, entry.to_string())
                    children=move |(_, entry)| {
                        let class = format!("log-entry {}", entry.level.as_str().to_lowercase());
                        view! { <li class=class>{entry.to_string()}</li> }
                    }
                />
            </ol>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn entry(message: &str) -> console_logger::Entry {
        console_logger::Entry {
            level: Level::Info,
            target: "spellforge".into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let numbered = numbered_newest_first(vec![entry("first"), entry("second")]);
        assert_eq!(numbered[0].0, 1);
        assert_eq!(numbered[0].1.message, "second");
        assert_eq!(numbered[1].1.message, "first");
    }
}
