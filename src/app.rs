//! SkillShare Frontend App
//!
//! Top navigation plus the feed and profile pages.

use leptos::prelude::*;

use crate::components::{FeedPage, NavBar, ProfilePage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Feed,
    Profile,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Feed, Page::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Feed => "Community",
            Page::Profile => "Profile",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Feed);

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page />

            <main class="main-content">
                // Each page owns its state; switching pages disposes it
                {move || match page.get() {
                    Page::Feed => view! { <FeedPage /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
