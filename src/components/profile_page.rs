//! Profile Page
//!
//! Header with avatar and menu, the tabbed main column, and a sidebar with
//! statistics and social links.

use leptos::prelude::*;
use skillshare_core::view::{ProfileTab, SocialPlatform};

use crate::components::{
    AboutSection, ActivitySection, AvatarDialog, NoticeBanner, PageStatus, ProfileHeader,
    SettingsSection, SkillsSection,
};
use crate::config;
use crate::context::{use_profile, ProfileContext};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = ProfileContext::new(config::api_config());
    provide_context(ctx);
    ctx.auto_dismiss_notices();

    ctx.run(|ctl| async move { ctl.load().await });

    let load = Memo::new(move |_| ctx.state.with(|s| s.load.clone()));
    let active_tab = Memo::new(move |_| ctx.state.with(|s| s.active_tab));

    view! {
        <section class="profile-page">
            <NoticeBanner notice=ctx.notice() on_dismiss=move |id: u64| ctx.dismiss(id) />

            <PageStatus load=load on_retry=move |_: ()| ctx.run(|ctl| async move { ctl.retry().await })>
                <ProfileHeader />

                <div class="profile-grid">
                    <div class="profile-main card">
                        <div class="tab-bar">
                            {ProfileTab::ALL.iter().map(|&tab| {
                                let tab_class = move || {
                                    if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                                };
                                view! {
                                    <button
                                        class=tab_class
                                        on:click=move |_| ctx.update(|s| s.select_tab(tab))
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        {move || match active_tab.get() {
                            ProfileTab::About => view! { <AboutSection /> }.into_any(),
                            ProfileTab::Activity => view! { <ActivitySection /> }.into_any(),
                            ProfileTab::Skills => view! { <SkillsSection /> }.into_any(),
                            ProfileTab::Settings => view! { <SettingsSection /> }.into_any(),
                        }}
                    </div>

                    <aside class="profile-sidebar">
                        <ProfileStats />
                        <SocialLinksCard />
                    </aside>
                </div>
            </PageStatus>

            <AvatarDialog />
        </section>
    }
}

#[component]
fn ProfileStats() -> impl IntoView {
    let ctx = use_profile();
    let counts = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.profile
                .as_ref()
                .map(|p| (p.courses_completed, p.posts_count, p.followers_count))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="card stats-card">
            <h3>"Statistics"</h3>
            <div class="stats-row">
                <div class="stat">
                    <span class="stat-value">{move || counts.get().0}</span>
                    <span class="stat-label">"Courses Completed"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{move || counts.get().1}</span>
                    <span class="stat-label">"Posts"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{move || counts.get().2}</span>
                    <span class="stat-label">"Followers"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SocialLinksCard() -> impl IntoView {
    let ctx = use_profile();
    let links = Memo::new(move |_| {
        ctx.state.with(|s| s.profile.as_ref().and_then(|p| p.social_links.clone()).unwrap_or_default())
    });

    view! {
        <div class="card social-card">
            <h3>"Social Links"</h3>
            {move || {
                let links = links.get();
                if links.is_empty() {
                    return view! { <p class="muted">"No social links yet."</p> }.into_any();
                }
                view! {
                    <ul class="social-list">
                        {SocialPlatform::ALL.iter().filter_map(|platform| {
                            let url = platform.get(&links);
                            (!url.is_empty()).then(|| view! {
                                <li>
                                    <span class="social-platform">{platform.label()}</span>
                                    <a href=url.to_string() target="_blank" rel="noopener">{url.to_string()}</a>
                                </li>
                            })
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
