//! Profile Header Component
//!
//! Avatar, name, detail chips, the edit/save buttons and the "more" menu.

use leptos::prelude::*;
use skillshare_core::domain::Profile;

use crate::context::use_profile;

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".into())
}

#[component]
pub fn ProfileHeader() -> impl IntoView {
    let ctx = use_profile();
    let profile = Memo::new(move |_| ctx.state.with(|s| s.profile.clone().unwrap_or_default()));
    let editing = Memo::new(move |_| ctx.state.with(|s| s.is_editing()));
    let saving = Memo::new(move |_| ctx.state.with(|s| s.saving));
    let menu_open = Memo::new(move |_| ctx.state.with(|s| s.menu_open));

    let avatar = move || {
        let p = profile.get();
        match p.profile_picture_url.clone() {
            Some(src) => view! { <img class="avatar large" src=src alt=p.display_name().to_string() /> }.into_any(),
            None => view! { <div class="avatar large placeholder">{initial(p.display_name())}</div> }.into_any(),
        }
    };
    let chips = move || {
        let p: Profile = profile.get();
        [p.location, p.education, p.occupation]
            .into_iter()
            .flatten()
            .filter(|v| !v.is_empty())
            .map(|v| view! { <span class="detail-chip">{v}</span> })
            .collect_view()
    };

    view! {
        <header class="profile-header card">
            <div class="avatar-wrap">
                {avatar}
                <button
                    class="avatar-change"
                    title="Change photo"
                    on:click=move |_| ctx.update(|s| s.open_avatar_dialog())
                >
                    "📷"
                </button>
            </div>

            <div class="profile-identity">
                <div class="profile-name-row">
                    <h1>{move || profile.get().display_name().to_string()}</h1>
                    <div class="menu-anchor">
                        <button class="icon-btn" title="More" on:click=move |_| ctx.update(|s| s.toggle_menu())>
                            "⋮"
                        </button>
                        <Show when=move || menu_open.get()>
                            <ul class="dropdown-menu">
                                <li><button on:click=move |_| ctx.update(|s| s.menu_edit())>"Edit Profile"</button></li>
                                <li><button on:click=move |_| ctx.update(|s| s.menu_change_photo())>"Change Photo"</button></li>
                            </ul>
                        </Show>
                    </div>
                </div>
                <p class="profile-bio">{move || profile.get().bio.unwrap_or_default()}</p>
                <div class="detail-chips">{chips}</div>
            </div>

            <div class="profile-actions">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <button class="primary-btn" on:click=move |_| ctx.update(|s| s.begin_edit())>
                            "Edit Profile"
                        </button>
                    }
                >
                    <button
                        class="primary-btn"
                        disabled=move || saving.get()
                        on:click=move |_| ctx.run(|ctl| async move { ctl.save().await })
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        class="secondary-btn"
                        disabled=move || saving.get()
                        on:click=move |_| ctx.update(|s| s.cancel_edit())
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </header>
    }
}
