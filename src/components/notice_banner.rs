//! Notice Banner Component

use leptos::prelude::*;
use skillshare_core::view::Notice;

/// Dismissible error notification shown above the page content
#[component]
pub fn NoticeBanner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(into)] on_dismiss: Callback<u64>,
) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let id = n.id;
            view! {
                <div class="notice-banner" role="alert">
                    <span class="notice-text">{n.message}</span>
                    <button class="notice-close" on:click=move |_| on_dismiss.run(id)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
