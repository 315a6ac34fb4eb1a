//! Toast Host Component
//!
//! Renders the notification queue in a corner overlay.

use leptos::prelude::*;

use crate::notify::{use_toaster, NoticeVariant};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.variant {
                        NoticeVariant::Success => "toast",
                        NoticeVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class>
                            <div class="toast-body">
                                <strong class="toast-title">{toast.notice.title.clone()}</strong>
                                <p class="toast-description">{toast.notice.description.clone()}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
