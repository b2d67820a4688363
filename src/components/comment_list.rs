//! Comment List Component
//!
//! Expanded comment thread of one post: the comments, inline editing and
//! the new-comment box.

use leptos::prelude::*;
use skillshare_core::domain::{Comment, CommentId, PostId};

use crate::components::post_card::posted_ago;
use crate::context::{use_feed, FeedContext};

#[component]
pub fn CommentList(post_id: PostId) -> impl IntoView {
    let ctx = use_feed();

    let loading = {
        let id = post_id.clone();
        Memo::new(move |_| ctx.state.with(|s| s.thread(&id).map_or(true, |t| t.loading)))
    };
    let comments = {
        let id = post_id.clone();
        Memo::new(move |_| {
            ctx.state.with(|s| s.thread(&id).map(|t| t.comments.clone()).unwrap_or_default())
        })
    };
    let editing = {
        let id = post_id.clone();
        Memo::new(move |_| {
            ctx.state.with(|s| {
                s.thread(&id).and_then(|t| t.editing.as_ref()).map(|e| e.comment_id.clone())
            })
        })
    };
    let draft = {
        let id = post_id.clone();
        move || ctx.state.with(|s| s.thread(&id).map(|t| t.draft.clone()).unwrap_or_default())
    };

    let on_input = {
        let id = post_id.clone();
        move |ev: web_sys::Event| {
            let text = event_target_value(&ev);
            ctx.update(|s| s.set_comment_draft(&id, text));
        }
    };
    let on_submit = {
        let id = post_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let id = id.clone();
            ctx.run(move |ctl| async move { ctl.add_comment(&id).await });
        }
    };

    view! {
        <div class="comment-section">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="comment-loading">"Loading comments..."</p> }
            >
                {
                    let post_id = post_id.clone();
                    move || {
                        let list = comments.get();
                        if list.is_empty() {
                            view! { <p class="comment-empty">"No comments yet."</p> }.into_any()
                        } else {
                            let post_id = post_id.clone();
                            view! {
                                <ul class="comment-list">
                                    {list.into_iter().map(|comment| {
                                        let is_editing = {
                                            let cid = comment.id.clone();
                                            move || editing.get().as_ref() == Some(&cid)
                                        };
                                        view! {
                                            <CommentItem
                                                ctx=ctx
                                                post_id=post_id.clone()
                                                comment=comment
                                                is_editing=Signal::derive(is_editing)
                                            />
                                        }
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }
                }
            </Show>

            <form class="comment-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Write a comment..."
                    prop:value=draft
                    on:input=on_input
                />
                <button type="submit" class="primary-btn small">"Post"</button>
            </form>
        </div>
    }
}

/// One comment, or its edit box while it is being edited
#[component]
fn CommentItem(
    ctx: FeedContext,
    post_id: PostId,
    comment: Comment,
    #[prop(into)] is_editing: Signal<bool>,
) -> impl IntoView {
    let comment_id: CommentId = comment.id.clone();
    let author = comment.author_name().to_string();
    let posted = posted_ago(comment.created_at.as_deref());
    let content = comment.content.clone();

    let edit_text = {
        let id = post_id.clone();
        move || {
            ctx.state.with(|s| {
                s.thread(&id)
                    .and_then(|t| t.editing.as_ref())
                    .map(|e| e.content.clone())
                    .unwrap_or_default()
            })
        }
    };
    let on_edit_input = {
        let id = post_id.clone();
        move |ev: web_sys::Event| {
            let text = event_target_value(&ev);
            ctx.update(|s| s.set_comment_edit_text(&id, text));
        }
    };
    let on_save = {
        let id = post_id.clone();
        move |_| {
            let id = id.clone();
            ctx.run(move |ctl| async move { ctl.save_comment_edit(&id).await });
        }
    };
    let on_cancel = {
        let id = post_id.clone();
        move |_| ctx.update(|s| s.cancel_comment_edit(&id))
    };
    let on_begin_edit = {
        let id = post_id.clone();
        let cid = comment_id.clone();
        move |_| ctx.update(|s| s.begin_comment_edit(&id, &cid))
    };
    let on_delete = {
        let id = post_id.clone();
        let cid = comment_id.clone();
        move |_| {
            let id = id.clone();
            let cid = cid.clone();
            ctx.run(move |ctl| async move { ctl.delete_comment(&id, &cid).await });
        }
    };

    view! {
        <li class="comment-item">
            <div class="comment-meta">
                <span class="author-name">{author}</span>
                {posted.map(|ago| view! { <span class="post-time">{ago}</span> })}
            </div>
            <Show
                when=move || is_editing.get()
                fallback=move || view! {
                    <p class="comment-content">{content.clone()}</p>
                    <div class="comment-actions">
                        <button class="link-btn" on:click=on_begin_edit.clone()>"Edit"</button>
                        <button class="link-btn danger" on:click=on_delete.clone()>"Delete"</button>
                    </div>
                }
            >
                <div class="comment-edit">
                    <input type="text" prop:value=edit_text.clone() on:input=on_edit_input.clone() />
                    <button class="primary-btn small" on:click=on_save.clone()>"Save"</button>
                    <button class="secondary-btn small" on:click=on_cancel.clone()>"Cancel"</button>
                </div>
            </Show>
        </li>
    }
}
