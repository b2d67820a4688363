//! Profile Tab Sections
//!
//! About and Skills switch between read-only and edit form with the page's
//! edit mode. Activity and Settings are static.

use leptos::prelude::*;
use skillshare_core::view::{ProfileField, SocialPlatform};

use crate::context::use_profile;

const ABOUT_FIELDS: [(ProfileField, &str); 6] = [
    (ProfileField::Name, "Name"),
    (ProfileField::Email, "Email"),
    (ProfileField::Bio, "Bio"),
    (ProfileField::Location, "Location"),
    (ProfileField::Education, "Education"),
    (ProfileField::Occupation, "Occupation"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let ctx = use_profile();
    let editing = Memo::new(move |_| ctx.state.with(|s| s.is_editing()));

    view! {
        <Show when=move || editing.get() fallback=|| view! { <AboutView /> }>
            <AboutForm />
        </Show>
    }
}

#[component]
fn AboutView() -> impl IntoView {
    let ctx = use_profile();
    let profile = Memo::new(move |_| ctx.state.with(|s| s.profile.clone().unwrap_or_default()));
    let or_dash = |v: Option<String>| v.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".into());

    view! {
        <div class="tab-panel">
            <h3>"About"</h3>
            <p class="muted">
                {move || profile.get().bio.filter(|b| !b.is_empty()).unwrap_or_else(|| "No bio yet.".into())}
            </p>

            <h3>"Contact Information"</h3>
            <dl class="detail-list">
                <dt>"Email"</dt>
                <dd>{move || or_dash(profile.get().email)}</dd>
                <dt>"Location"</dt>
                <dd>{move || or_dash(profile.get().location)}</dd>
            </dl>

            <h3>"Education & Work"</h3>
            <dl class="detail-list">
                <dt>"Education"</dt>
                <dd>{move || or_dash(profile.get().education)}</dd>
                <dt>"Occupation"</dt>
                <dd>{move || or_dash(profile.get().occupation)}</dd>
            </dl>
        </div>
    }
}

#[component]
fn AboutForm() -> impl IntoView {
    let ctx = use_profile();

    view! {
        <div class="tab-panel profile-form">
            {ABOUT_FIELDS.iter().map(|&(field, label)| {
                let value = move || {
                    ctx.state.with(|s| s.form().map(|f| f.field(field).to_string()).unwrap_or_default())
                };
                let on_input = move |ev: web_sys::Event| {
                    let text = event_target_value(&ev);
                    ctx.update(|s| s.set_field(field, text));
                };
                let input = if field == ProfileField::Bio {
                    view! { <textarea rows="4" prop:value=value on:input=on_input></textarea> }.into_any()
                } else {
                    view! { <input type="text" prop:value=value on:input=on_input /> }.into_any()
                };
                view! { <label>{label} {input}</label> }
            }).collect_view()}

            <h3>"Social Links"</h3>
            {SocialPlatform::ALL.iter().map(|&platform| {
                let value = move || {
                    ctx.state.with(|s| {
                        s.form().map(|f| platform.get(&f.social_links).to_string()).unwrap_or_default()
                    })
                };
                view! {
                    <label>
                        {platform.label()}
                        <input
                            type="url"
                            prop:value=value
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                ctx.update(|s| s.set_social_link(platform, text));
                            }
                        />
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let ctx = use_profile();
    let editing = Memo::new(move |_| ctx.state.with(|s| s.is_editing()));
    let skills = Memo::new(move |_| {
        ctx.state.with(|s| s.profile.as_ref().map(|p| p.skills.clone()).unwrap_or_default())
    });

    view! {
        <div class="tab-panel">
            <h3>"Skills & Expertise"</h3>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="skill-chips">
                        {move || {
                            let list = skills.get();
                            if list.is_empty() {
                                view! { <p class="muted">"No skills listed yet."</p> }.into_any()
                            } else {
                                list.into_iter()
                                    .map(|skill| view! { <span class="skill-chip">{skill}</span> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                }
            >
                <SkillsInput />
            </Show>
        </div>
    }
}

/// Comma-separated skills. The raw text stays local so separators survive
/// while typing; the form only sees the parsed list.
#[component]
fn SkillsInput() -> impl IntoView {
    let ctx = use_profile();
    let initial = ctx.state.with_untracked(|s| s.form().map(|f| f.skills_text()).unwrap_or_default());
    let (text, set_text) = signal(initial);

    view! {
        <label>
            "Skills (comma separated)"
            <input
                type="text"
                prop:value=move || text.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    ctx.update(|s| s.set_skills_text(&raw));
                    set_text.set(raw);
                }
            />
        </label>
    }
}

#[component]
pub fn ActivitySection() -> impl IntoView {
    view! {
        <div class="tab-panel">
            <h3>"Recent Activity"</h3>
            <ul class="plain-list">
                <li>
                    <span class="primary">"Completed Course: Web Development Basics"</span>
                    <span class="secondary">"2 days ago"</span>
                </li>
                <li>
                    <span class="primary">"Shared a post in the community"</span>
                    <span class="secondary">"5 days ago"</span>
                </li>
            </ul>
        </div>
    }
}

#[component]
pub fn SettingsSection() -> impl IntoView {
    view! {
        <div class="tab-panel">
            <h3>"Account Settings"</h3>
            <ul class="plain-list">
                <li>
                    <span class="primary">"Email Notifications"</span>
                    <span class="secondary">"Manage your notification preferences"</span>
                </li>
                <li>
                    <span class="primary">"Privacy Settings"</span>
                    <span class="secondary">"Control who can see your profile"</span>
                </li>
                <li>
                    <span class="primary">"Change Password"</span>
                    <span class="secondary">"Update your account password"</span>
                </li>
            </ul>
        </div>
    }
}
