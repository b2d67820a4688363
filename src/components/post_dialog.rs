//! Post Dialog Component
//!
//! Modal form used for both creating and editing a post.

use leptos::prelude::*;
use skillshare_core::domain::Category;
use skillshare_core::view::PostDraft;

use crate::context::use_feed;

#[component]
pub fn PostDialog() -> impl IntoView {
    let ctx = use_feed();
    let open = Memo::new(move |_| ctx.state.with(|s| s.draft().is_some()));
    let editing = Memo::new(move |_| ctx.state.with(|s| s.is_editing()));

    let field = move |read: fn(&PostDraft) -> String| {
        move || ctx.state.with(|s| s.draft().map(read).unwrap_or_default())
    };
    let category_value = move || {
        ctx.state.with(|s| {
            s.draft()
                .and_then(|d| d.category)
                .map(|c| c.as_str().to_string())
                .unwrap_or_default()
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if editing.get_untracked() {
            ctx.run(|ctl| async move { ctl.save_edit().await });
        } else {
            ctx.run(|ctl| async move { ctl.create_post().await });
        }
    };
    let close = move |_| ctx.update(|s| s.close_dialog());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=close>
                <form
                    class="modal"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=on_submit
                >
                    <h2>{move || if editing.get() { "Edit Post" } else { "Create Post" }}</h2>

                    <label>
                        "Title"
                        <input
                            type="text"
                            prop:value=field(|d| d.title.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                ctx.update(|s| if let Some(d) = s.draft_mut() { d.title = text; });
                            }
                        />
                    </label>

                    <label>
                        "Content"
                        <textarea
                            rows="5"
                            prop:value=field(|d| d.content.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                ctx.update(|s| if let Some(d) = s.draft_mut() { d.content = text; });
                            }
                        ></textarea>
                    </label>

                    <label>
                        "Category"
                        <select
                            prop:value=category_value
                            on:change=move |ev| {
                                let category = Category::parse(&event_target_value(&ev));
                                ctx.update(|s| if let Some(d) = s.draft_mut() { d.category = category; });
                            }
                        >
                            <option value="">"No category"</option>
                            {Category::ALL.iter().map(|c| view! {
                                <option value=c.as_str()>{c.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=close>"Cancel"</button>
                        <button type="submit" class="primary-btn">
                            {move || if editing.get() { "Save" } else { "Post" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
