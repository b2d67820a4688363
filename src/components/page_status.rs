//! Page Status Component
//!
//! Shows a loading placeholder or a full-page error with a Retry action
//! until the page's first fetch succeeds, then renders its children.

use leptos::prelude::*;
use skillshare_core::view::LoadState;

#[component]
pub fn PageStatus(
    #[prop(into)] load: Signal<LoadState>,
    #[prop(into)] on_retry: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    move || match load.get() {
        LoadState::Loading => view! {
            <div class="page-status">
                <div class="spinner"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="page-status error">
                <p>{message}</p>
                <button class="primary-btn" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
        LoadState::Ready => children().into_any(),
    }
}
