//! Feed Page
//!
//! Category filter, the post list and the dialogs that act on it.

use leptos::prelude::*;

use crate::components::{
    CategoryBar, DeleteConfirmDialog, NoticeBanner, PageStatus, PostCard, PostDialog,
};
use crate::config;
use crate::context::FeedContext;

#[component]
pub fn FeedPage() -> impl IntoView {
    let ctx = FeedContext::new(config::api_config());
    provide_context(ctx);
    ctx.auto_dismiss_notices();

    // Load on mount
    ctx.run(|ctl| async move { ctl.load().await });

    let load = Memo::new(move |_| ctx.state.with(|s| s.load.clone()));
    let refreshing = Memo::new(move |_| ctx.state.with(|s| s.refreshing));
    // Cards only re-render when a fetch actually changed the list
    let posts = Memo::new(move |_| ctx.state.with(|s| s.posts.clone()));

    view! {
        <section class="feed-page">
            <header class="page-header">
                <h1>"Community Feed"</h1>
                <div class="page-actions">
                    <button
                        class="secondary-btn"
                        disabled=move || refreshing.get()
                        on:click=move |_| ctx.run(|ctl| async move { ctl.refresh().await })
                    >
                        {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                    <button class="primary-btn" on:click=move |_| ctx.update(|s| s.open_create())>
                        "Create Post"
                    </button>
                </div>
            </header>

            <NoticeBanner notice=ctx.notice() on_dismiss=move |id: u64| ctx.dismiss(id) />

            <CategoryBar />

            <PageStatus load=load on_retry=move |_: ()| ctx.run(|ctl| async move { ctl.retry().await })>
                {move || {
                    let list = posts.get();
                    if list.is_empty() {
                        view! {
                            <p class="empty-state">"No posts yet. Be the first to share something!"</p>
                        }.into_any()
                    } else {
                        view! {
                            <div class="post-list">
                                {list.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </PageStatus>

            <PostDialog />
            <DeleteConfirmDialog />
        </section>
    }
}
