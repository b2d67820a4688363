//! Post Card Component
//!
//! One post with its like/comment/edit/delete controls and, when expanded,
//! its comment thread.

use chrono::Utc;
use leptos::prelude::*;
use skillshare_core::domain::{parse_timestamp, relative_time, Post};

use crate::components::CommentList;
use crate::context::use_feed;

/// "3 hours ago" for a wire timestamp, if it parses
pub fn posted_ago(raw: Option<&str>) -> Option<String> {
    raw.and_then(parse_timestamp).map(|then| relative_time(then, Utc::now()))
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_feed();
    let id = post.id.clone();

    let expanded = {
        let id = id.clone();
        Memo::new(move |_| ctx.state.with(|s| s.is_expanded(&id)))
    };
    let comment_count = {
        let id = id.clone();
        Memo::new(move |_| {
            ctx.state.with(|s| s.post(&id).map(|p| s.comment_count(p)).unwrap_or(0))
        })
    };

    let (images, more) = post.gallery();
    let gallery: Vec<String> = images.iter().map(|img| img.url.clone()).collect();
    // Category artwork only stands in for posts without their own images
    let cover = gallery
        .is_empty()
        .then(|| post.category().map(|c| c.image_url().to_string()))
        .flatten();
    let posted = posted_ago(post.created_at.as_deref());
    let liked = post.is_liked;
    let like_class = if liked { "like-btn liked" } else { "like-btn" };

    let on_like = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            ctx.run(move |ctl| async move { ctl.toggle_like(&id).await });
        }
    };
    let on_comments = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            ctx.run(move |ctl| async move { ctl.toggle_comments(&id).await });
        }
    };
    let on_edit = {
        let id = id.clone();
        move |_| ctx.update(|s| {
            s.begin_edit(&id);
        })
    };
    let on_delete = {
        let id = id.clone();
        move |_| ctx.update(|s| s.request_delete(&id))
    };

    view! {
        <article class="post-card">
            {cover.map(|src| view! { <img class="post-cover" src=src alt="" /> })}

            <div class="post-body">
                <header class="post-header">
                    <div class="post-author">
                        {post.author.as_ref().and_then(|a| a.avatar.clone()).map(|src| view! {
                            <img class="avatar small" src=src alt="" />
                        })}
                        <span class="author-name">{post.author_name().to_string()}</span>
                        {posted.map(|ago| view! { <span class="post-time">{ago}</span> })}
                    </div>
                    {post.category.clone().map(|c| view! { <span class="category-tag">{c}</span> })}
                </header>

                <h2 class="post-title">{post.title.clone()}</h2>
                <p class="post-content">{post.content.clone()}</p>

                {(!gallery.is_empty()).then(|| {
                    let last = gallery.len() - 1;
                    view! {
                        <div class="post-gallery">
                            {gallery.into_iter().enumerate().map(|(i, src)| view! {
                                <div class="gallery-item">
                                    <img class="gallery-img" src=src alt=format!("Post image {}", i + 1) />
                                    {(i == last && more > 0).then(|| view! {
                                        <div class="gallery-more">"+" {more}</div>
                                    })}
                                </div>
                            }).collect_view()}
                        </div>
                    }
                })}

                <footer class="post-actions">
                    <button class=like_class on:click=on_like>
                        {if liked { "♥ " } else { "♡ " }}
                        {post.likes()}
                    </button>
                    <button class="comment-toggle" on:click=on_comments>
                        "💬 " {move || comment_count.get()}
                    </button>
                    <span class="spacer"></span>
                    <button class="icon-btn" title="Edit" on:click=on_edit>"✎"</button>
                    <button class="icon-btn danger" title="Delete" on:click=on_delete>"🗑"</button>
                </footer>

                <Show when=move || expanded.get()>
                    <CommentList post_id=id.clone() />
                </Show>
            </div>
        </article>
    }
}
