//! Navigation Bar Component
//!
//! Tab bar for switching between the feed and the profile page.

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn NavBar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"SkillShare"</span>
            {Page::ALL.iter().map(|&target| {
                let tab_class = move || {
                    if page.get() == target { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_page.set(target)>
                        {target.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
